//! Serializable, point-in-time views of captured metrics.

use serde::Serialize;

use crate::buffer::Sample;
use crate::kind::MetricKind;

/// Captured samples of one handler; integer for counters and timers,
/// floating point for recorders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Samples {
    Int(Vec<Sample<i64>>),
    Float(Vec<Sample<f64>>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Int(v) => v.len(),
            Samples::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandlerSnapshot {
    pub kind: MetricKind,
    pub label: String,
    pub dimensions: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<bool>,
    pub samples: Samples,
}

/// Every live handler in a registry, sorted by (kind, label).
///
/// Each handler's samples are copied under that handler's own lock; the
/// registry as a whole is not frozen while the snapshot is taken.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistrySnapshot {
    pub handlers: Vec<HandlerSnapshot>,
}

impl RegistrySnapshot {
    pub(crate) fn from_unsorted(mut handlers: Vec<HandlerSnapshot>) -> Self {
        handlers.sort_by(|a, b| (a.kind, &a.label).cmp(&(b.kind, &b.label)));
        Self { handlers }
    }

    pub fn get(&self, kind: MetricKind, label: &str) -> Option<&HandlerSnapshot> {
        self.handlers
            .iter()
            .find(|h| h.kind == kind && h.label == label)
    }

    /// Total number of samples across all handlers.
    pub fn sample_count(&self) -> usize {
        self.handlers.iter().map(|h| h.samples.len()).sum()
    }
}
