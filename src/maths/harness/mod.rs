//! Empirical validation of the approximants.
//!
//! `validate_accuracy` sweeps `[1.0, 2.0]` on a short-lived set of scoped
//! threads and reports the worst-case error per degree; `validate_performance`
//! is a plain stopwatch loop.

mod accuracy;
mod config;
mod error;
mod partition;
mod performance;

pub use accuracy::{
    AccuracyReport, BASELINE_SLOT, MaxErrorSample, SLOTS, sweep, validate_accuracy,
};
pub use config::{AccuracyConfig, DEFAULT_SAMPLES, F32_BASELINE_ENV, SAMPLES_ENV, THREADS_ENV};
pub use error::HarnessError;
pub use partition::partition;
pub use performance::{PerformanceReport, validate_performance};
