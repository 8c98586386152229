use super::{HandlerId, HandlerMeta, RecorderHandler};
use crate::buffer::{ObservationBuffer, Sample};
use crate::kind::MetricKind;
use crate::snapshot::{HandlerSnapshot, Samples};

/// Captures gauge / distribution observations as `f64`.
///
/// There is no reset: recorded values are only ever observed.
#[derive(Debug)]
pub struct Recorder {
    meta: HandlerMeta,
    aggregate: bool,
    buffer: ObservationBuffer<f64>,
}

impl Recorder {
    pub fn new(label: &str, dimensions: &[(&str, &str)], aggregate: bool) -> Self {
        Self {
            meta: HandlerMeta::new(MetricKind::Recorder, label, dimensions),
            aggregate,
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

    /// Whether the consumer should treat values as aggregated statistics.
    /// Stored only; it does not change how values are captured.
    pub fn aggregate(&self) -> bool {
        self.aggregate
    }

    /// Integers beyond 2^53 round to the nearest representable `f64`.
    pub fn record_int(&self, value: i64) {
        self.buffer.append_now(value as f64);
    }

    pub fn record_float(&self, value: f64) {
        self.buffer.append_now(value);
    }

    pub fn values(&self) -> Vec<f64> {
        self.buffer.values()
    }

    pub fn samples(&self) -> Vec<Sample<f64>> {
        self.buffer.snapshot()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.values().last().copied()
    }

    pub fn snapshot(&self) -> HandlerSnapshot {
        HandlerSnapshot {
            kind: MetricKind::Recorder,
            label: self.meta.label.clone(),
            dimensions: self.meta.dimensions.clone(),
            aggregate: Some(self.aggregate),
            samples: Samples::Float(self.samples()),
        }
    }
}

impl PartialEq for Recorder {
    fn eq(&self, other: &Self) -> bool {
        self.meta.id == other.meta.id
    }
}

impl Eq for Recorder {}

impl RecorderHandler for Recorder {
    fn record_int(&self, value: i64) {
        Recorder::record_int(self, value);
    }

    fn record_float(&self, value: f64) {
        Recorder::record_float(self, value);
    }
}
