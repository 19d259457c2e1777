//! Float abstraction for the approximants.
//!
//! `LogFloat` covers the handful of operations the rational log2 kernels need
//! (constants, conversions, bit-level frexp/fabs) so the same coefficient
//! tables drive both `f32` and `f64` without pulling in libm.

use core::fmt::{Debug, Display, LowerExp};
use core::ops::{Add, Div, Mul, Sub};

const F64_SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;
const F64_EXP_MASK: u64 = 0x7ff << 52;
// exponent field of 0.5, the bottom of the [0.5, 1) mantissa range
const F64_HALF_EXP: u64 = 0x3fe << 52;
const F64_TWO_54: f64 = 18_014_398_509_481_984.0;

const F32_SIGN_MASK: u32 = 0x8000_0000u32;
const F32_EXP_MASK: u32 = 0xff << 23;
const F32_HALF_EXP: u32 = 0x7e << 23;
const F32_TWO_25: f32 = 33_554_432.0;

pub trait LogFloat:
    Copy
    + PartialOrd
    + Debug
    + Display
    + LowerExp
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const NAN: Self;

    fn from_f64(v: f64) -> Self;
    fn from_i32(v: i32) -> Self;
    fn from_u64(v: u64) -> Self;
    fn to_f64(self) -> f64;

    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;

    /// Absolute value by clearing the sign bit.
    fn fabs(self) -> Self;

    /// Splits a finite value into `(m, e)` with `self = m * 2^e` and
    /// `|m|` in `[0.5, 1.0)`. Zero, infinities and NaN come back unchanged
    /// with `e = 0`. Subnormals are normalised first, so the split is exact
    /// across the whole range.
    fn frexp(self) -> (Self, i32);

    /// Trusted log2 the harness measures against.
    #[cfg(feature = "std")]
    fn log2_reference(self) -> Self;
}

impl LogFloat for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const NAN: Self = f64::NAN;

    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v
    }
    #[inline(always)]
    fn from_i32(v: i32) -> Self {
        v as f64
    }
    #[inline(always)]
    fn from_u64(v: u64) -> Self {
        v as f64
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    #[inline(always)]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline(always)]
    fn fabs(self) -> Self {
        f64::from_bits(self.to_bits() & !F64_SIGN_MASK)
    }

    #[inline]
    fn frexp(self) -> (Self, i32) {
        let bits = self.to_bits();
        match ((bits & F64_EXP_MASK) >> 52) as i32 {
            0x7ff => (self, 0),
            0 if self == 0.0 => (self, 0),
            // subnormal: scale into the normal range, then undo the scale
            0 => {
                let (m, e) = LogFloat::frexp(self * F64_TWO_54);
                (m, e - 54)
            }
            biased => (
                f64::from_bits((bits & !F64_EXP_MASK) | F64_HALF_EXP),
                biased - 1022,
            ),
        }
    }

    #[cfg(feature = "std")]
    #[inline]
    fn log2_reference(self) -> Self {
        self.log2()
    }
}

impl LogFloat for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const NAN: Self = f32::NAN;

    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
    #[inline(always)]
    fn from_i32(v: i32) -> Self {
        v as f32
    }
    #[inline(always)]
    fn from_u64(v: u64) -> Self {
        v as f32
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    #[inline(always)]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline(always)]
    fn fabs(self) -> Self {
        f32::from_bits(self.to_bits() & !F32_SIGN_MASK)
    }

    #[inline]
    fn frexp(self) -> (Self, i32) {
        let bits = self.to_bits();
        match ((bits & F32_EXP_MASK) >> 23) as i32 {
            0xff => (self, 0),
            0 if self == 0.0 => (self, 0),
            0 => {
                let (m, e) = LogFloat::frexp(self * F32_TWO_25);
                (m, e - 25)
            }
            biased => (
                f32::from_bits((bits & !F32_EXP_MASK) | F32_HALF_EXP),
                biased - 126,
            ),
        }
    }

    #[cfg(feature = "std")]
    #[inline]
    fn log2_reference(self) -> Self {
        self.log2()
    }
}

#[cfg(test)]
mod tests {
    use super::LogFloat;

    fn recompose(m: f64, e: i32) -> f64 {
        // e stays within f64 range for every input below
        m * 2f64.powi(e)
    }

    #[test]
    fn frexp_f64_normal() {
        assert_eq!(LogFloat::frexp(1.0f64), (0.5, 1));
        assert_eq!(LogFloat::frexp(4.0f64), (0.5, 3));
        assert_eq!(LogFloat::frexp(0.75f64), (0.75, 0));
        assert_eq!(LogFloat::frexp(-3.0f64), (-0.75, 2));
        for &x in &[1e-300, 3.5e-10, 0.1, 1.5, 1234.5678, 6.02e23, 1e300] {
            let (m, e) = LogFloat::frexp(x);
            assert!((0.5..1.0).contains(&m), "mantissa {m} for {x}");
            assert_eq!(recompose(m, e), x);
        }
    }

    #[test]
    fn frexp_f64_subnormal() {
        let tiny = f64::from_bits(1);
        let (m, e) = LogFloat::frexp(tiny);
        assert_eq!(m, 0.5);
        assert_eq!(e, -1073);

        let x = f64::MIN_POSITIVE / 3.0;
        let (m, e) = LogFloat::frexp(x);
        assert!((0.5..1.0).contains(&m));
        assert_eq!(m * 2f64.powi(e + 600) * 2f64.powi(-600), x);
    }

    #[test]
    fn frexp_f64_passthrough() {
        assert_eq!(LogFloat::frexp(0.0f64), (0.0, 0));
        assert_eq!(LogFloat::frexp(f64::INFINITY), (f64::INFINITY, 0));
        let (m, e) = LogFloat::frexp(f64::NAN);
        assert!(m.is_nan());
        assert_eq!(e, 0);
    }

    #[test]
    fn frexp_f32() {
        assert_eq!(LogFloat::frexp(1.0f32), (0.5, 1));
        assert_eq!(LogFloat::frexp(10.0f32), (0.625, 4));
        let tiny = f32::from_bits(1);
        assert_eq!(LogFloat::frexp(tiny), (0.5, -148));
        let (m, e) = LogFloat::frexp(f32::MIN_POSITIVE / 5.0);
        assert!((0.5..1.0).contains(&m));
        assert_eq!(e, -128);
    }

    #[test]
    fn fabs_clears_sign() {
        assert_eq!(LogFloat::fabs(-2.5f64), 2.5);
        assert_eq!(LogFloat::fabs(-0.0f64).to_bits(), 0);
        assert_eq!(LogFloat::fabs(-7.25f32), 7.25);
        assert_eq!(LogFloat::fabs(f64::NEG_INFINITY), f64::INFINITY);
    }
}
