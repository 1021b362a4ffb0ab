// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Ring operations on polynomials.
//!
//! Every operation reads its inputs and allocates a fresh, normalized result.

use crate::complex::Complex;
use crate::polynomial::Polynomial;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::trace;

impl Polynomial {
    /// Adds two polynomials together.
    ///
    /// Coefficients are added term by term, treating missing terms as zero.
    /// Leading terms may cancel, so the result is normalized.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the sum of the two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts one polynomial from another.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to subtract from `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Negates all coefficients of the polynomial.
    ///
    /// The degree is unchanged.
    pub fn neg(&self) -> Self {
        Polynomial {
            coefficients: self.coefficients.iter().map(|c| -*c).collect(),
        }
    }

    /// Multiplies two polynomials using the naive convolution.
    ///
    /// The coefficient of `X^k` in the product is the sum of
    /// `a_j * b_(k-j)` over `j` in `0..=k`.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to multiply with `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the product.
    pub fn mul(&self, other: &Self) -> Self {
        let (Some(a_degree), Some(b_degree)) = (self.degree(), other.degree()) else {
            return Polynomial::zero();
        };

        let product = (0..=a_degree + b_degree)
            .map(|k| {
                let low = k.saturating_sub(b_degree);
                let high = k.min(a_degree);
                (low..=high).fold(Complex::ZERO, |acc, j| {
                    acc + self.coefficients[j] * other.coefficients[k - j]
                })
            })
            .collect();

        Polynomial::new(product)
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// `pow(0)` is the constant `1` for every polynomial, the zero polynomial
    /// included. Larger exponents use square-and-multiply.
    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Polynomial::one();
        let mut base = self.clone();
        let mut remaining = exponent;

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.mul(&base);
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.mul(&base);
            }
            trace!(remaining, degree = ?result.degree(), "pow step");
        }

        result
    }

    /// Returns the formal derivative of the polynomial.
    ///
    /// Constants and the zero polynomial differentiate to the zero polynomial.
    pub fn derivative(&self) -> Self {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| Complex::new(i as f64, 0.0) * *c)
            .collect()
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    ///
    /// # Arguments
    ///
    /// * `scalar` - A `Complex` scalar to multiply with each coefficient.
    ///
    /// # Returns
    ///
    /// A new polynomial with each coefficient multiplied by the scalar.
    pub fn scalar_mul(&self, scalar: Complex) -> Self {
        self.coefficients.iter().map(|c| *c * scalar).collect()
    }

    fn zip_with(&self, other: &Self, op: impl Fn(Complex, Complex) -> Complex) -> Self {
        let len = self.coefficients.len().max(other.coefficients.len());
        (0..len)
            .map(|i| op(self.coefficient(i), other.coefficient(i)))
            .collect()
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}
