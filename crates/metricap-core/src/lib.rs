//! metricap core: in-memory capture of counter, recorder and timer observations.
//!
//! A [`Registry`] lazily creates one handler per (kind, label) and hands out
//! shared references to it. Handlers buffer timestamped samples so a caller
//! (usually a test) can check afterwards that the metrics it claims to emit
//! were actually emitted. Nothing is aggregated, exported or persisted.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. The capture path is
//! infallible; poisoned locks are recovered instead of propagated.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod buffer;
pub mod error;
pub mod handler;
pub mod kind;
pub mod registry;
pub mod snapshot;

pub use buffer::{ObservationBuffer, Sample};
pub use error::{ErrorCode, MetricapError, Result};
pub use handler::{
    Counter, CounterHandler, HandlerId, MetricsFactory, Recorder, RecorderHandler, Timer,
    TimerHandler,
};
pub use kind::MetricKind;
pub use registry::Registry;
pub use snapshot::{HandlerSnapshot, RegistrySnapshot, Samples};
