// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Double-precision complex numbers used as polynomial coefficients.

use crate::errors::ComplexError;
use crate::utils::{format_g, format_g_signed};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable complex value `real + imag·j`.
///
/// Equality is exact, component-wise comparison of the two `f64` parts. No
/// tolerance is applied anywhere, including in [`Zero::is_zero`], so values
/// produced by long chains of operations may miss an exact cancellation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    /// The additive identity `0`.
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    /// The multiplicative identity `1`.
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    /// The imaginary unit `j`.
    pub const I: Complex = Complex::new(0.0, 1.0);

    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Divides `self` by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::DivisionByZero`] if `divisor` is `(0, 0)`.
    pub fn checked_div(self, divisor: Self) -> Result<Self, ComplexError> {
        if divisor.is_zero() {
            debug!(dividend = %self, "rejecting complex division by zero");
            return Err(ComplexError::DivisionByZero);
        }

        // Scale by the larger divisor component so |divisor|^2 is never formed.
        if divisor.real.abs() >= divisor.imag.abs() {
            let ratio = divisor.imag / divisor.real;
            let denominator = divisor.real + divisor.imag * ratio;
            Ok(Self::new(
                (self.real + self.imag * ratio) / denominator,
                (self.imag - self.real * ratio) / denominator,
            ))
        } else {
            let ratio = divisor.real / divisor.imag;
            let denominator = divisor.imag + divisor.real * ratio;
            Ok(Self::new(
                (self.real * ratio + self.imag) / denominator,
                (self.imag * ratio - self.real) / denominator,
            ))
        }
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Self) -> Self::Output {
        Complex::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Self) -> Self::Output {
        Complex::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        Complex::new(-self.real, -self.imag)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Self) -> Self::Output {
        Complex::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imag == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Complex::new(real, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imag): (f64, f64)) -> Self {
        Complex::new(real, imag)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}j",
            format_g(self.real),
            format_g_signed(self.imag)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);

        assert_eq!(a + b, Complex::new(4.0, 6.0));
        assert_eq!(a - b, Complex::new(-2.0, -2.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
        // (1 + 2j)(3 + 4j) = 3 + 4j + 6j - 8
        assert_eq!(a * b, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_checked_div() {
        let a = Complex::new(-5.0, 10.0);
        let b = Complex::new(3.0, 4.0);
        assert_eq!(a.checked_div(b), Ok(Complex::new(1.0, 2.0)));
        assert_eq!(Complex::ONE.checked_div(Complex::I), Ok(Complex::new(0.0, -1.0)));
    }

    #[test]
    fn test_checked_div_extreme_magnitudes() {
        let huge = Complex::new(1e200, 0.0);
        assert_eq!(huge.checked_div(huge), Ok(Complex::ONE));

        let tiny = Complex::new(1e-200, 0.0);
        assert_eq!(
            Complex::ONE.checked_div(tiny),
            Ok(Complex::new(1.0 / 1e-200, 0.0))
        );

        // (1 + j) * 2^600 / (2^600 * j) = 1 - j
        let scale = 2f64.powi(600);
        let dividend = Complex::new(scale, scale);
        assert_eq!(
            dividend.checked_div(Complex::new(0.0, scale)),
            Ok(Complex::new(1.0, -1.0))
        );
        assert_eq!(
            Complex::new(3.0, 4.0).checked_div(Complex::new(0.0, 1e-300)),
            Ok(Complex::new(4.0 / 1e-300, -3.0 / 1e-300))
        );
    }

    #[test]
    fn test_division_by_zero() {
        let a = Complex::new(1.0, 1.0);
        assert_eq!(
            a.checked_div(Complex::ZERO),
            Err(ComplexError::DivisionByZero)
        );
        assert_eq!(
            a.checked_div(Complex::new(-0.0, 0.0)),
            Err(ComplexError::DivisionByZero)
        );
    }

    #[test]
    fn test_is_zero_is_exact() {
        assert!(Complex::ZERO.is_zero());
        assert!(Complex::new(-0.0, -0.0).is_zero());
        assert!(!Complex::new(1e-300, 0.0).is_zero());
        assert!(!Complex::new(0.0, f64::MIN_POSITIVE).is_zero());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Complex::from(2.5), Complex::new(2.5, 0.0));
        assert_eq!(Complex::from((1.0, 3.0)), Complex::new(1.0, 3.0));
        assert_eq!(Complex::one(), Complex::ONE);
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(1.0, 3.0).to_string(), "1+3j");
        assert_eq!(Complex::new(-1.0, -0.5).to_string(), "-1-0.5j");
        assert_eq!(Complex::ZERO.to_string(), "0+0j");
    }
}
