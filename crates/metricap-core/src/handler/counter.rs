use super::{CounterHandler, HandlerId, HandlerMeta};
use crate::buffer::{ObservationBuffer, Sample};
use crate::kind::MetricKind;
use crate::snapshot::{HandlerSnapshot, Samples};

/// Captures integer increments. Values are stored as given; negative and
/// zero increments are not rejected.
#[derive(Debug)]
pub struct Counter {
    meta: HandlerMeta,
    buffer: ObservationBuffer<i64>,
}

impl Counter {
    pub fn new(label: &str, dimensions: &[(&str, &str)]) -> Self {
        Self {
            meta: HandlerMeta::new(MetricKind::Counter, label, dimensions),
            buffer: ObservationBuffer::new(),
        }
    }

    pub fn id(&self) -> HandlerId {
        self.meta.id
    }

    pub fn label(&self) -> &str {
        &self.meta.label
    }

    /// Label with the `"counters."` prefix.
    pub fn qualified_label(&self) -> String {
        self.meta.qualified_label()
    }

    pub fn dimensions(&self) -> &[(String, String)] {
        &self.meta.dimensions
    }

    pub fn increment(&self, value: i64) {
        self.buffer.append_now(value);
    }

    /// Drop every captured increment.
    pub fn reset(&self) {
        self.buffer.reset();
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
            kind: MetricKind::Counter,
            label: self.meta.label.clone(),
            dimensions: self.meta.dimensions.clone(),
            aggregate: None,
            samples: Samples::Int(self.samples()),
        }
    }
}

impl PartialEq for Counter {
    fn eq(&self, other: &Self) -> bool {
        self.meta.id == other.meta.id
    }
}

impl Eq for Counter {}

impl CounterHandler for Counter {
    fn increment(&self, value: i64) {
        Counter::increment(self, value);
    }

    fn reset(&self) {
        Counter::reset(self);
    }
}
