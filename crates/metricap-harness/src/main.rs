//! metricap harness binary.
//!
//! Loads a scenario config (first argument, default `metricap.yaml`), runs it
//! against a fresh registry and prints the captured metrics as JSON.
//! Log verbosity comes from `RUST_LOG`.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use metricap_core::error::{MetricapError, Result};
use metricap_core::Registry;
use metricap_harness::{config, Scenario};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "metricap-harness failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "metricap.yaml".to_string());
    let cfg = config::load_from_file(&path)?;

    let registry = Arc::new(Registry::new());
    let report = Scenario::new(cfg, registry).run().await?;

    let out = serde_json::to_string_pretty(&report)
        .map_err(|e| MetricapError::Internal(format!("encode report failed: {e}")))?;
    println!("{out}");
    Ok(())
}
