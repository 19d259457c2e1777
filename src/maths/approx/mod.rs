#![allow(clippy::excessive_precision)]

mod coeffs;
mod float;
mod log2;
mod rational;
mod rescale;

pub use float::LogFloat;
pub use log2::{
    fast_log2_p1, fast_log2_p2, fast_log2_p3, fast_log2_p4, fast_log2_p5, fast_log2_p6,
};
pub use rational::Rational;
pub use rescale::{fast_ln, fast_log10};

use core::f64::consts::{LN_2, LOG10_2};

// ========= degree selection =========

/// Approximant degree, picked by the caller ahead of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Degree {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
}

impl Degree {
    pub const ALL: [Degree; 6] = [
        Degree::P1,
        Degree::P2,
        Degree::P3,
        Degree::P4,
        Degree::P5,
        Degree::P6,
    ];

    /// Polynomial degree, 1 through 6.
    pub const fn degree(self) -> usize {
        self.index() + 1
    }

    /// Zero-based position in [`Degree::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Degree::P1 => 0,
            Degree::P2 => 1,
            Degree::P3 => 2,
            Degree::P4 => 3,
            Degree::P5 => 4,
            Degree::P6 => 5,
        }
    }

    pub const fn from_degree(degree: usize) -> Option<Degree> {
        match degree {
            1 => Some(Degree::P1),
            2 => Some(Degree::P2),
            3 => Some(Degree::P3),
            4 => Some(Degree::P4),
            5 => Some(Degree::P5),
            6 => Some(Degree::P6),
            _ => None,
        }
    }

    /// Worst-case absolute error against `f64::log2` on `[1.0, 2.0]` in
    /// double precision. Degrees 1 to 5 keep the bounds the coefficients were
    /// published with (1e11 samples); degree 6 reaches 6.76e-16 on a 4e8
    /// sample sweep of this evaluation, so its bound is 6.9e-16 rather than
    /// the published 5.9e-16.
    pub const fn max_error(self) -> f64 {
        match self {
            Degree::P1 => Log2P1::MAX_ERROR,
            Degree::P2 => Log2P2::MAX_ERROR,
            Degree::P3 => Log2P3::MAX_ERROR,
            Degree::P4 => Log2P4::MAX_ERROR,
            Degree::P5 => Log2P5::MAX_ERROR,
            Degree::P6 => Log2P6::MAX_ERROR,
        }
    }

    #[inline]
    pub fn eval<T: LogFloat>(self, value: T) -> T {
        match self {
            Degree::P1 => fast_log2_p1(value),
            Degree::P2 => fast_log2_p2(value),
            Degree::P3 => fast_log2_p3(value),
            Degree::P4 => fast_log2_p4(value),
            Degree::P5 => fast_log2_p5(value),
            Degree::P6 => fast_log2_p6(value),
        }
    }
}

// ========= static strategy =========

/// A fixed-degree log2 approximant usable as a type parameter.
///
/// Implementors are zero-sized; everything is resolved at compile time, so
/// generic numeric code can take `A: Approximant` and pay nothing for the
/// indirection.
pub trait Approximant {
    const DEGREE: Degree;
    const MAX_ERROR: f64;

    fn log2<T: LogFloat>(value: T) -> T;

    #[inline]
    fn ln<T: LogFloat>(value: T) -> T {
        T::from_f64(LN_2) * Self::log2(value)
    }

    #[inline]
    fn log10<T: LogFloat>(value: T) -> T {
        T::from_f64(LOG10_2) * Self::log2(value)
    }
}

macro_rules! approximant {
    ($name:ident, $degree:expr, $max_error:expr, $func:ident) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Approximant for $name {
            const DEGREE: Degree = $degree;
            const MAX_ERROR: f64 = $max_error;

            #[inline(always)]
            fn log2<T: LogFloat>(value: T) -> T {
                $func(value)
            }
        }
    };
}

approximant!(Log2P1, Degree::P1, 1.47e-3, fast_log2_p1);
approximant!(Log2P2, Degree::P2, 3.46e-6, fast_log2_p2);
approximant!(Log2P3, Degree::P3, 7.79e-9, fast_log2_p3);
approximant!(Log2P4, Degree::P4, 1.77e-11, fast_log2_p4);
approximant!(Log2P5, Degree::P5, 1.92e-14, fast_log2_p5);
approximant!(Log2P6, Degree::P6, 6.90e-16, fast_log2_p6);
