//! Stopwatch comparison of the approximants against the trusted log2.
//!
//! Not an accuracy tool: the sums only exist so the optimiser cannot drop
//! the loops. Use the criterion benches for stable numbers.

use core::fmt;
use core::hint::black_box;
use core::time::Duration;
use std::time::Instant;
use std::vec::Vec;

use log::info;

use crate::maths::approx::{
    LogFloat, fast_log2_p1, fast_log2_p2, fast_log2_p3, fast_log2_p4, fast_log2_p5, fast_log2_p6,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceReport {
    /// Trusted log2 in the requested precision.
    pub reference: Duration,
    /// Degrees 1 through 6, in order.
    pub approximants: [Duration; 6],
    /// `f32::log2` over the same values.
    pub f32_reference: Duration,
    pub sum: f64,
    pub sum_f32: f32,
}

impl PerformanceReport {
    /// Reference time over approximant time, per degree.
    pub fn speedups(&self) -> [f64; 6] {
        let reference = self.reference.as_secs_f64();
        self.approximants.map(|d| {
            let secs = d.as_secs_f64();
            if secs > 0.0 { reference / secs } else { f64::INFINITY }
        })
    }
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{},{}", self.sum, self.sum_f32)?;
        write!(f, "speed:{}", self.reference.as_micros())?;
        for d in &self.approximants {
            write!(f, ",{}", d.as_micros())?;
        }
        write!(f, ",{}", self.f32_reference.as_micros())
    }
}

#[inline(always)]
fn timed<T, F>(values: &[T], sum: &mut T, log2: F) -> Duration
where
    T: LogFloat,
    F: Fn(T) -> T,
{
    let start = Instant::now();
    let mut acc = *sum;
    for &v in values {
        acc = acc + log2(black_box(v));
    }
    *sum = black_box(acc);
    start.elapsed()
}

/// Times the trusted log2, each approximant and `f32::log2` over the values
/// `1..num_samples`.
pub fn validate_performance<T: LogFloat>(num_samples: usize) -> PerformanceReport {
    let values: Vec<T> = (1..num_samples).map(|i| T::from_u64(i as u64)).collect();

    let mut sum = T::ZERO;
    let reference = timed(&values, &mut sum, |v: T| v.log2_reference());
    let approximants = [
        timed(&values, &mut sum, fast_log2_p1::<T>),
        timed(&values, &mut sum, fast_log2_p2::<T>),
        timed(&values, &mut sum, fast_log2_p3::<T>),
        timed(&values, &mut sum, fast_log2_p4::<T>),
        timed(&values, &mut sum, fast_log2_p5::<T>),
        timed(&values, &mut sum, fast_log2_p6::<T>),
    ];
    drop(values);

    let singles: Vec<f32> = (1..num_samples).map(|i| i as f32).collect();
    let mut sum_f32 = 0.0f32;
    let f32_reference = timed(&singles, &mut sum_f32, f32::log2);

    let report = PerformanceReport {
        reference,
        approximants,
        f32_reference,
        sum: sum.to_f64(),
        sum_f32,
    };
    info!("{report}");
    report
}
