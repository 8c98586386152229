//! Top-level facade crate for metricap.
//!
//! Re-exports the capture core and the scenario harness so users can depend on a single crate.

pub mod core {
    pub use metricap_core::*;
}

pub mod harness {
    pub use metricap_harness::*;
}
