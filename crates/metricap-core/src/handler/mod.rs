//! Handler kinds and the facade-facing traits they implement.
//!
//! The umbrella metrics facade talks to a backend only through
//! [`MetricsFactory`] and the three handler traits; the concrete handlers add
//! inspection methods on top for verification.

mod counter;
mod recorder;
mod timer;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub use counter::Counter;
pub use recorder::Recorder;
pub use timer::Timer;

use crate::kind::MetricKind;

static NEXT_HANDLER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique handler identity. Handler equality is id equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

impl HandlerId {
    fn next() -> Self {
        Self(NEXT_HANDLER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Immutable identity and configuration common to all handler kinds.
#[derive(Debug)]
struct HandlerMeta {
    id: HandlerId,
    kind: MetricKind,
    label: String,
    dimensions: Vec<(String, String)>,
}

impl HandlerMeta {
    fn new(kind: MetricKind, label: &str, dimensions: &[(&str, &str)]) -> Self {
        Self {
            id: HandlerId::next(),
            kind,
            label: label.to_owned(),
            dimensions: dimensions
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn qualified_label(&self) -> String {
        self.kind.qualify(&self.label)
    }
}

/// True when `stored` holds exactly the pairs in `requested`, in order.
pub(crate) fn same_dimensions(stored: &[(String, String)], requested: &[(&str, &str)]) -> bool {
    stored.len() == requested.len()
        && stored
            .iter()
            .zip(requested)
            .all(|((sk, sv), (rk, rv))| sk == rk && sv == rv)
}

pub trait CounterHandler: Send + Sync {
    fn increment(&self, value: i64);
    fn reset(&self);
}

pub trait RecorderHandler: Send + Sync {
    fn record_int(&self, value: i64);
    fn record_float(&self, value: f64);
}

pub trait TimerHandler: Send + Sync {
    fn record_nanoseconds(&self, duration: i64);
}

/// Backend seam for the metrics facade.
///
/// Creation calls return the already-registered handler when one exists for
/// the (kind, label); `release` takes a kind-qualified label
/// (`"counters.x"`, `"recorders.x"`, `"timers.x"`) and ignores anything else.
pub trait MetricsFactory: Send + Sync {
    fn make_counter(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<dyn CounterHandler>;
    fn make_recorder(
        &self,
        label: &str,
        dimensions: &[(&str, &str)],
        aggregate: bool,
    ) -> Arc<dyn RecorderHandler>;
    fn make_timer(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<dyn TimerHandler>;
    fn release(&self, label: &str);
}
