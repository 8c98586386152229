//! Harness config loader (strict parsing).

pub mod schema;

use std::fs;

use metricap_core::error::{MetricapError, Result};

pub use schema::{HarnessConfig, MetricSpec, RunnerSection};

pub fn load_from_file(path: &str) -> Result<HarnessConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MetricapError::Io(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<HarnessConfig> {
    let cfg: HarnessConfig = serde_yaml::from_str(s)
        .map_err(|e| MetricapError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
