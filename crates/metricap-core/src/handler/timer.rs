use std::time::Duration;

use super::{HandlerId, HandlerMeta, TimerHandler};
use crate::buffer::{ObservationBuffer, Sample};
use crate::kind::MetricKind;
use crate::snapshot::{HandlerSnapshot, Samples};

/// Captures durations in nanoseconds, as given. Negative durations are kept.
#[derive(Debug)]
pub struct Timer {
    meta: HandlerMeta,
    buffer: ObservationBuffer<i64>,
}

impl Timer {
    pub fn new(label: &str, dimensions: &[(&str, &str)]) -> Self {
        Self {
            meta: HandlerMeta::new(MetricKind::Timer, label, dimensions),
            buffer: ObservationBuffer::new(),
        }
    }

    pub fn id(&self) -> HandlerId {
        self.meta.id
    }

    pub fn label(&self) -> &str {
        &self.meta.label
    }

    pub fn qualified_label(&self) -> String {
        self.meta.qualified_label()
    }

    pub fn dimensions(&self) -> &[(String, String)] {
        &self.meta.dimensions
    }

    pub fn record_nanoseconds(&self, duration: i64) {
        self.buffer.append_now(duration);
    }

    /// Durations longer than `i64::MAX` nanoseconds (~292 years) saturate.
    pub fn record_duration(&self, duration: Duration) {
        let nanos = i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX);
        self.record_nanoseconds(nanos);
    }

    pub fn values(&self) -> Vec<i64> {
        self.buffer.values()
    }

    pub fn samples(&self) -> Vec<Sample<i64>> {
        self.buffer.snapshot()
    }

    pub fn last_value(&self) -> Option<i64> {
        self.values().last().copied()
    }

    pub fn snapshot(&self) -> HandlerSnapshot {
        HandlerSnapshot {
            kind: MetricKind::Timer,
            label: self.meta.label.clone(),
            dimensions: self.meta.dimensions.clone(),
            aggregate: None,
            samples: Samples::Int(self.samples()),
        }
    }
}

impl PartialEq for Timer {
    fn eq(&self, other: &Self) -> bool {
        self.meta.id == other.meta.id
    }
}

impl Eq for Timer {}

impl TimerHandler for Timer {
    fn record_nanoseconds(&self, duration: i64) {
        Timer::record_nanoseconds(self, duration);
    }
}
