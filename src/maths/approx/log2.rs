//! Rational-polynomial log2 approximants.
//!
//! Every variant splits the input into mantissa and exponent with an exact
//! frexp, evaluates one fitted rational function of the mantissa on
//! `[0.5, 1.0)` and adds the exponent back. Higher degrees cost a few more
//! multiply-adds and buy roughly two to three extra decimal digits per step.

use super::LogFloat;
use super::coeffs::{P1, P2, P3, P4, P5, P6};
use super::rational::Rational;

/// Special values follow libm: `log2(+inf) = +inf`, `log2(±0) = -inf`,
/// NaN for NaN, `-inf` and negative inputs.
#[inline(always)]
fn log2_rational<T: LogFloat, const N: usize>(value: T, r: &Rational<N>) -> T {
    if !value.is_finite() {
        return if value == T::INFINITY { value } else { T::NAN };
    }
    if value > T::ZERO {
        let (m, e) = value.frexp();
        T::from_i32(e) + r.eval(m)
    } else if value == T::ZERO {
        T::NEG_INFINITY
    } else {
        T::NAN
    }
}

/// Degree 1: `(a*m + b) / (c*m + d)`.
///
/// Max error ~1.47e-3 (about 9 bits). Theoretical max from the extrema of
/// the fitted function: 1.464579127038346e-3.
#[inline]
pub fn fast_log2_p1<T: LogFloat>(value: T) -> T {
    log2_rational(value, &P1)
}

/// Degree 2. Max error ~3.46e-6 (18 bits).
#[inline]
pub fn fast_log2_p2<T: LogFloat>(value: T) -> T {
    log2_rational(value, &P2)
}

/// Degree 3. Max error ~7.79e-9 (almost 27 bits).
#[inline]
pub fn fast_log2_p3<T: LogFloat>(value: T) -> T {
    log2_rational(value, &P3)
}

/// Degree 4. Max error ~1.77e-11 (almost 36 bits).
#[inline]
pub fn fast_log2_p4<T: LogFloat>(value: T) -> T {
    log2_rational(value, &P4)
}

/// Degree 5. Max error ~1.92e-14 (45 bits).
#[inline]
pub fn fast_log2_p5<T: LogFloat>(value: T) -> T {
    log2_rational(value, &P5)
}

/// Degree 6. Max error ~6.9e-16 (50 bits), which is within a few ulps of
/// `f64::log2` on `[1, 2)`. For `f32` inputs every degree from 3 up is
/// limited by single precision rather than by the fit.
#[inline]
pub fn fast_log2_p6<T: LogFloat>(value: T) -> T {
    log2_rational(value, &P6)
}
