use core::f64::consts::{LN_2, LOG10_2};

use super::LogFloat;

/// Natural log through any log2 approximant: `ln(2) * log2(value)`.
///
/// ```
/// use fastlog::{fast_ln, fast_log2_p6};
///
/// let y = fast_ln(10.0f64, fast_log2_p6);
/// assert!((y - 10f64.ln()).abs() < 1e-14);
/// ```
#[inline]
pub fn fast_ln<T, F>(value: T, log2: F) -> T
where
    T: LogFloat,
    F: Fn(T) -> T,
{
    T::from_f64(LN_2) * log2(value)
}

/// Base-10 log through any log2 approximant: `log10(2) * log2(value)`.
#[inline]
pub fn fast_log10<T, F>(value: T, log2: F) -> T
where
    T: LogFloat,
    F: Fn(T) -> T,
{
    T::from_f64(LOG10_2) * log2(value)
}
