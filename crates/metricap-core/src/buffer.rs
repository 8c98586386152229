//! Append-only, lock-protected sample history shared by all handler kinds.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Serialize, Serializer};

/// One timestamped observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample<T> {
    #[serde(rename = "at_unix_nanos", serialize_with = "unix_nanos")]
    pub at: SystemTime,
    pub value: T,
}

fn unix_nanos<S: Serializer>(at: &SystemTime, s: S) -> std::result::Result<S::Ok, S::Error> {
    // Clocks set before the epoch serialize as 0.
    let nanos = at
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
        .unwrap_or(0);
    s.serialize_u64(nanos)
}

/// Ordered history of samples.
///
/// Every operation takes the internal lock for its whole duration, so an
/// append is never torn and a snapshot is a consistent point-in-time copy.
/// Entries appear in the order their appends acquired the lock.
#[derive(Debug)]
pub struct ObservationBuffer<T> {
    samples: Mutex<Vec<Sample<T>>>,
}

impl<T> Default for ObservationBuffer<T> {
    fn default() -> Self {
        Self {
            samples: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Copy> ObservationBuffer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, at: SystemTime, value: T) {
        self.lock().push(Sample { at, value });
    }

    /// Append `value` stamped with the current wall-clock time.
    pub fn append_now(&self, value: T) {
        // Stamp inside the lock so timestamps are monotone with buffer order
        // (modulo wall-clock adjustments).
        let mut samples = self.lock();
        samples.push(Sample {
            at: SystemTime::now(),
            value,
        });
    }

    pub fn reset(&self) {
        self.lock().clear();
    }

    /// Copy of the current samples, in append order.
    pub fn snapshot(&self) -> Vec<Sample<T>> {
        self.lock().clone()
    }

    /// Copy of the current values only, in append order.
    pub fn values(&self) -> Vec<T> {
        self.lock().iter().map(|s| s.value).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a half-pushed Vec behind,
    // so a poisoned guard is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<Sample<T>>> {
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
