use serde::Deserialize;

use metricap_core::error::{MetricapError, Result};
use metricap_core::MetricKind;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    pub version: u32,

    #[serde(default)]
    pub runner: RunnerSection,

    #[serde(default)]
    pub metrics: Vec<MetricSpec>,
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricapError::UnsupportedVersion(self.version));
        }
        if self.metrics.is_empty() {
            return Err(MetricapError::BadConfig("metrics must not be empty".into()));
        }

        self.runner.validate()?;
        for (i, m) in self.metrics.iter().enumerate() {
            m.validate().map_err(|e| match e {
                MetricapError::BadConfig(msg) => {
                    MetricapError::BadConfig(format!("metrics[{i}]: {msg}"))
                }
                other => other,
            })?;
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerSection {
    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default = "default_iterations")]
    pub iterations: u64,

    /// Release every configured metric once all workers are done.
    #[serde(default)]
    pub release_after: bool,
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            iterations: default_iterations(),
            release_after: false,
        }
    }
}

impl RunnerSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=256).contains(&self.workers) {
            return Err(MetricapError::BadConfig(
                "runner.workers must be between 1 and 256".into(),
            ));
        }
        if !(1..=1_000_000).contains(&self.iterations) {
            return Err(MetricapError::BadConfig(
                "runner.iterations must be between 1 and 1000000".into(),
            ));
        }
        Ok(())
    }
}

fn default_workers() -> usize {
    4
}
fn default_iterations() -> u64 {
    100
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricSpec {
    pub kind: MetricKind,
    pub label: String,

    #[serde(default)]
    pub dimensions: Vec<(String, String)>,

    /// Recorders only. Unset means `true`.
    #[serde(default)]
    pub aggregate: Option<bool>,

    #[serde(default = "default_value")]
    pub value: i64,
}

impl MetricSpec {
    pub fn validate(&self) -> Result<()> {
        if self.label.is_empty() {
            return Err(MetricapError::BadConfig("label must not be empty".into()));
        }
        if let Some((kind, _)) = MetricKind::split_qualified(&self.label) {
            return Err(MetricapError::BadConfig(format!(
                "label {:?} must not carry the {:?} prefix",
                self.label,
                kind.prefix()
            )));
        }
        if self.aggregate.is_some() && self.kind != MetricKind::Recorder {
            return Err(MetricapError::BadConfig(format!(
                "aggregate is only valid for recorders (label {:?} is a {})",
                self.label,
                self.kind.as_str()
            )));
        }
        Ok(())
    }

    pub fn aggregate(&self) -> bool {
        self.aggregate.unwrap_or(true)
    }

    pub fn qualified_label(&self) -> String {
        self.kind.qualify(&self.label)
    }

    pub fn dimension_refs(&self) -> Vec<(&str, &str)> {
        self.dimensions
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

fn default_value() -> i64 {
    1
}
