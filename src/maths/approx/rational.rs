use super::LogFloat;

/// `P(m) / Q(m)` with `P` and `Q` of the same degree, coefficients stored
/// highest power first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rational<const N: usize> {
    num: [f64; N],
    den: [f64; N],
}

impl<const N: usize> Rational<N> {
    pub const fn new(num: [f64; N], den: [f64; N]) -> Self {
        Self { num, den }
    }

    /// Polynomial degree of numerator and denominator.
    pub const fn degree(&self) -> usize {
        N - 1
    }

    pub const fn numerator(&self) -> &[f64; N] {
        &self.num
    }

    pub const fn denominator(&self) -> &[f64; N] {
        &self.den
    }

    #[inline(always)]
    pub fn eval<T: LogFloat>(&self, m: T) -> T {
        let mut p = T::from_f64(self.num[0]);
        let mut q = T::from_f64(self.den[0]);
        let mut i = 1;
        while i < N {
            p = p * m + T::from_f64(self.num[i]);
            q = q * m + T::from_f64(self.den[i]);
            i += 1;
        }
        let inv_q = T::ONE / q;
        inv_q * p
    }
}
