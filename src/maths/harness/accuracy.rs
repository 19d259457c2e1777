//! Threaded worst-case error sweep.
//!
//! Samples `x = 1 + i / N` for `i` in `[0, N]`, compares every approximant to
//! the trusted log2 and keeps the largest absolute difference per degree. The
//! exponent path is exact, so stressing the mantissa range covers the whole
//! float range.

use core::fmt;
use core::ops::Range;
use core::time::Duration;
use std::format;
use std::thread;
use std::time::Instant;
use std::vec::Vec;

use log::{debug, info, trace};

use super::partition::partition;
use super::{AccuracyConfig, HarnessError};
use crate::maths::approx::{Degree, LogFloat};

/// Slots per sample: one per degree plus the `f32::log2` baseline.
pub const SLOTS: usize = 7;
pub const BASELINE_SLOT: usize = 6;

/// Worst-case absolute errors seen by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MaxErrorSample {
    errors: [f64; SLOTS],
}

impl MaxErrorSample {
    pub fn from_errors(errors: [f64; SLOTS]) -> Self {
        Self { errors }
    }

    #[inline(always)]
    fn record(&mut self, slot: usize, diff: f64) {
        if diff > self.errors[slot] {
            self.errors[slot] = diff;
        }
    }

    /// Element-wise maximum.
    pub fn merge(mut self, other: MaxErrorSample) -> Self {
        for (mine, theirs) in self.errors.iter_mut().zip(other.errors) {
            if theirs > *mine {
                *mine = theirs;
            }
        }
        self
    }

    pub fn errors(&self) -> &[f64; SLOTS] {
        &self.errors
    }

    pub fn degree(&self, degree: Degree) -> f64 {
        self.errors[degree.index()]
    }

    pub fn baseline(&self) -> f64 {
        self.errors[BASELINE_SLOT]
    }
}

/// Sweeps one partition. `samples` sets the step, `range` the indices.
pub fn sweep<T: LogFloat>(samples: u64, range: Range<u64>, f32_baseline: bool) -> MaxErrorSample {
    let step = T::ONE / T::from_u64(samples);
    let mut sample = MaxErrorSample::default();

    for i in range {
        let x = T::ONE + T::from_u64(i) * step;
        let precise = x.log2_reference();

        for degree in Degree::ALL {
            let diff = (precise - degree.eval(x)).fabs();
            sample.record(degree.index(), diff.to_f64());
        }

        if f32_baseline {
            let single = (x.to_f64() as f32).log2();
            let diff = (precise - T::from_f64(single as f64)).fabs();
            sample.record(BASELINE_SLOT, diff.to_f64());
        }
    }

    sample
}

/// Result of a full accuracy run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyReport {
    pub config: AccuracyConfig,
    pub errors: MaxErrorSample,
    pub elapsed: Duration,
}

impl AccuracyReport {
    pub fn max_error(&self, degree: Degree) -> f64 {
        self.errors.degree(degree)
    }

    /// `None` unless the run measured the `f32` baseline.
    pub fn baseline(&self) -> Option<f64> {
        self.config
            .f32_baseline
            .then(|| self.errors.baseline())
    }

    /// Degrees whose measured error exceeds the documented bound scaled by
    /// `tolerance`.
    pub fn exceeded(&self, tolerance: f64) -> Vec<Degree> {
        Degree::ALL
            .into_iter()
            .filter(|d| self.max_error(*d) > d.max_error() * tolerance)
            .collect()
    }
}

impl fmt::Display for AccuracyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Max errors: ")?;
        for err in self.errors.errors() {
            write!(f, "{err:.23e},")?;
        }
        Ok(())
    }
}

/// Runs `work` once per range on its own scoped thread and merges the
/// results. Every worker is joined before any result is looked at.
fn run_workers<F>(ranges: Vec<Range<u64>>, work: F) -> Result<MaxErrorSample, HarnessError>
where
    F: Fn(Range<u64>) -> MaxErrorSample + Sync,
{
    let work = &work;
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(ranges.len());
        for (worker, range) in ranges.into_iter().enumerate() {
            trace!("worker {worker}: indices {range:?}");
            let handle = thread::Builder::new()
                .name(format!("fastlog-accuracy-{worker}"))
                .spawn_scoped(scope, move || work(range))
                .map_err(|source| HarnessError::Spawn { worker, source })?;
            handles.push(handle);
        }

        let reports: Vec<_> = handles
            .into_iter()
            .enumerate()
            .map(|(worker, handle)| {
                handle
                    .join()
                    .map_err(|_| HarnessError::WorkerPanicked { worker })
            })
            .collect();

        let mut errors = MaxErrorSample::default();
        for report in reports {
            errors = errors.merge(report?);
        }
        Ok::<_, HarnessError>(errors)
    })
}

/// Measures the worst-case error of every approximant in `T` precision.
///
/// One scoped thread per partition; each hands back its
/// [`MaxErrorSample`] exactly once and every worker is joined before this
/// returns, including when one of them panicked.
pub fn validate_accuracy<T: LogFloat>(
    config: &AccuracyConfig,
) -> Result<AccuracyReport, HarnessError> {
    config.validate()?;

    let samples = config.samples;
    let f32_baseline = config.f32_baseline;
    let ranges = partition(samples, config.threads);
    debug!(
        "accuracy sweep: {} samples over {} workers ({})",
        samples,
        ranges.len(),
        core::any::type_name::<T>()
    );

    let started = Instant::now();
    let errors = run_workers(ranges, |range| sweep::<T>(samples, range, f32_baseline))?;
    let elapsed = started.elapsed();

    let report = AccuracyReport {
        config: *config,
        errors,
        elapsed,
    };
    info!("{report} ({} ms)", elapsed.as_millis());
    Ok(report)
}
