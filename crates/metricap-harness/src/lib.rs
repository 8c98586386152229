//! metricap harness library entry.
//!
//! Strict YAML config plus a scenario runner that drives a capture
//! [`Registry`](metricap_core::Registry) from concurrent tokio tasks. Consumed
//! by the binary (`main.rs`) and by integration tests.

pub mod config;
pub mod scenario;

pub use scenario::{RunReport, Scenario};
