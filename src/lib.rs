#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod maths;

pub use maths::approx;
pub use maths::approx::{
    Approximant, Degree, Log2P1, Log2P2, Log2P3, Log2P4, Log2P5, Log2P6, LogFloat, fast_ln,
    fast_log2_p1, fast_log2_p2, fast_log2_p3, fast_log2_p4, fast_log2_p5, fast_log2_p6,
    fast_log10,
};
#[cfg(feature = "std")]
pub use maths::harness;
#[cfg(feature = "std")]
pub use maths::harness::{AccuracyConfig, validate_accuracy, validate_performance};
