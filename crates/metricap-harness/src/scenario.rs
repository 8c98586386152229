//! Scenario runner: drive a registry from concurrent tokio workers.
//!
//! Every worker resolves each configured metric through the registry on every
//! iteration, so the run exercises concurrent create-or-fetch as well as
//! concurrent ingestion into shared handlers.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use metricap_core::error::{MetricapError, Result};
use metricap_core::{MetricKind, Registry, RegistrySnapshot};

use crate::config::{HarnessConfig, MetricSpec};

/// Outcome of one scenario run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub workers: usize,
    pub iterations: u64,
    pub handlers_created: u64,
    /// Whether configured metrics were released after the snapshot was taken.
    pub released: bool,
    pub snapshot: RegistrySnapshot,
}

pub struct Scenario {
    cfg: Arc<HarnessConfig>,
    registry: Arc<Registry>,
}

impl Scenario {
    pub fn new(cfg: HarnessConfig, registry: Arc<Registry>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            registry,
        }
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    pub async fn run(&self) -> Result<RunReport> {
        let runner = &self.cfg.runner;
        tracing::info!(
            workers = runner.workers,
            iterations = runner.iterations,
            metrics = self.cfg.metrics.len(),
            "scenario starting"
        );
        let started = Instant::now();

        let mut handles = Vec::with_capacity(runner.workers);
        for worker in 0..runner.workers {
            let cfg = Arc::clone(&self.cfg);
            let registry = Arc::clone(&self.registry);
            handles.push(tokio::spawn(async move {
                for _ in 0..cfg.runner.iterations {
                    for m in &cfg.metrics {
                        feed(&registry, m);
                    }
                    tokio::task::yield_now().await;
                }
                tracing::trace!(worker, "worker finished");
            }));
        }

        for h in handles {
            h.await
                .map_err(|e| MetricapError::Internal(format!("worker task failed: {e}")))?;
        }

        let snapshot = self.registry.snapshot();
        if runner.release_after {
            for m in &self.cfg.metrics {
                self.registry.release(&m.qualified_label());
            }
        }

        let report = RunReport {
            workers: runner.workers,
            iterations: runner.iterations,
            handlers_created: self.registry.handlers_created(),
            released: runner.release_after,
            snapshot,
        };
        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            handlers_created = report.handlers_created,
            samples = report.snapshot.sample_count(),
            "scenario finished"
        );
        Ok(report)
    }
}

fn feed(registry: &Registry, m: &MetricSpec) {
    let dims = m.dimension_refs();
    match m.kind {
        MetricKind::Counter => registry.make_counter(&m.label, &dims).increment(m.value),
        MetricKind::Recorder => registry
            .make_recorder(&m.label, &dims, m.aggregate())
            .record_int(m.value),
        MetricKind::Timer => registry
            .make_timer(&m.label, &dims)
            .record_nanoseconds(m.value),
    }
}
