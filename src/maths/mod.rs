pub mod approx;
#[cfg(feature = "std")]
pub mod harness;
