//! Metric kinds and their label prefixes.

use serde::{Deserialize, Serialize};

/// The three handler kinds a registry hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Counter,
    Recorder,
    Timer,
}

impl MetricKind {
    /// All kinds, in release-prefix precedence order.
    pub const ALL: [MetricKind; 3] = [MetricKind::Counter, MetricKind::Recorder, MetricKind::Timer];

    /// Prefix carried by kind-qualified labels, e.g. `"counters."`.
    pub fn prefix(self) -> &'static str {
        match self {
            MetricKind::Counter => "counters.",
            MetricKind::Recorder => "recorders.",
            MetricKind::Timer => "timers.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Recorder => "recorder",
            MetricKind::Timer => "timer",
        }
    }

    /// `"latency"` -> `"timers.latency"` for `MetricKind::Timer`.
    pub fn qualify(self, label: &str) -> String {
        format!("{}{}", self.prefix(), label)
    }

    /// Split a kind-qualified label into its kind and bare label.
    /// Returns `None` when no known prefix matches.
    pub fn split_qualified(label: &str) -> Option<(MetricKind, &str)> {
        Self::ALL
            .into_iter()
            .find_map(|kind| label.strip_prefix(kind.prefix()).map(|bare| (kind, bare)))
    }
}
