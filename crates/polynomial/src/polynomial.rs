// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial representation, normalization and evaluation.

use crate::complex::Complex;
use crate::errors::{PolynomialError, PolynomialResult};
use num_traits::Zero;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A univariate polynomial with complex coefficients in ascending order of degree.
///
/// The polynomial is represented as:
/// `a_0 + a_1 * X + ... + a_n * X^n`
///
/// The coefficient sequence is always normalized: its last entry (the leading
/// coefficient) is never zero. The zero polynomial holds no coefficients at
/// all and has no degree.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Complex>", into = "Vec<Complex>")
)]
pub struct Polynomial {
    /// Coefficients in ascending order (constant term first).
    pub(crate) coefficients: Vec<Complex>,
}

impl Polynomial {
    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// Trailing zero coefficients are trimmed, so `[1, 2, 0]` yields the
    /// degree-1 polynomial `1 + 2 * X`.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients in ascending order of degree.
    pub fn new(coefficients: Vec<Complex>) -> Self {
        Self { coefficients }.normalize()
    }

    /// Returns the zero polynomial (the additive identity).
    pub fn zero() -> Self {
        Self {
            coefficients: Vec::new(),
        }
    }

    /// Returns the constant polynomial `1` (the multiplicative identity).
    pub fn one() -> Self {
        Self::constant(Complex::ONE)
    }

    /// Creates a constant polynomial.
    ///
    /// A zero constant yields the zero polynomial.
    pub fn constant(constant: Complex) -> Self {
        Self::new(vec![constant])
    }

    /// Returns the monomial `X`.
    pub fn x() -> Self {
        Self::monomial(1, Complex::ONE)
    }

    /// Returns `coefficient * X^degree`.
    ///
    /// # Panics
    ///
    /// Panics if `degree + 1` coefficients cannot be stored, which includes
    /// `degree == usize::MAX`. Use [`PolynomialBuilder::with_degree`] for a
    /// fallible alternative.
    pub fn monomial(degree: usize, coefficient: Complex) -> Self {
        let mut coefficients = vec![Complex::ZERO; degree + 1];
        coefficients[degree] = coefficient;
        Self::new(coefficients)
    }

    /// Returns the coefficients of the polynomial.
    pub fn coefficients(&self) -> &[Complex] {
        &self.coefficients
    }

    /// Returns the coefficient of the `X^index` term.
    ///
    /// Indices beyond the degree read as zero.
    pub fn coefficient(&self, index: usize) -> Complex {
        self.coefficients
            .get(index)
            .copied()
            .unwrap_or(Complex::ZERO)
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial has no degree and returns `None`, which orders
    /// below every `Some(_)`.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    pub fn leading_coefficient(&self) -> Option<Complex> {
        self.coefficients.last().copied()
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Removes trailing zero coefficients so the leading coefficient is non-zero.
    ///
    /// Normalizing an already normalized polynomial leaves it unchanged.
    pub fn normalize(mut self) -> Self {
        trim(&mut self.coefficients);
        self
    }

    /// Converts the polynomial into its ascending coefficient vector.
    pub fn into_coefficients(self) -> Vec<Complex> {
        self.coefficients
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    ///
    /// Runs in time linear in the degree. The zero polynomial evaluates to
    /// zero everywhere.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    ///
    /// # Returns
    ///
    /// The value of the polynomial at the given point.
    pub fn evaluate(&self, x: Complex) -> Complex {
        self.coefficients
            .iter()
            .rev()
            .fold(Complex::ZERO, |acc, coeff| acc * x + *coeff)
    }
}

/// Drops zero leading coefficients from an ascending coefficient vector.
pub(crate) fn trim(coefficients: &mut Vec<Complex>) {
    while coefficients.last().is_some_and(Complex::is_zero) {
        coefficients.pop();
    }
}

/// Allocates `len` zeroed coefficients, reporting allocation failure instead of aborting.
pub(crate) fn zeroed(len: usize) -> PolynomialResult<Vec<Complex>> {
    let mut coefficients = Vec::new();
    if coefficients.try_reserve_exact(len).is_err() {
        debug!(requested = len, "coefficient allocation refused");
        return Err(PolynomialError::Allocation { requested: len });
    }
    coefficients.resize(len, Complex::ZERO);
    Ok(coefficients)
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.coefficients == other.coefficients
    }
}

impl From<Vec<Complex>> for Polynomial {
    fn from(coefficients: Vec<Complex>) -> Self {
        Polynomial::new(coefficients)
    }
}

impl From<Polynomial> for Vec<Complex> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.coefficients
    }
}

impl From<Complex> for Polynomial {
    fn from(constant: Complex) -> Self {
        Polynomial::constant(constant)
    }
}

impl FromIterator<Complex> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Complex>>(iter: I) -> Self {
        Polynomial::new(iter.into_iter().collect())
    }
}

/// Checked, write-once construction of a [`Polynomial`] of bounded degree.
///
/// Storage for `degree + 1` coefficients is reserved up front; writes outside
/// that range are rejected. [`build`](Self::build) normalizes the result.
#[derive(Clone, Debug)]
pub struct PolynomialBuilder {
    coefficients: Vec<Complex>,
}

impl PolynomialBuilder {
    /// Reserves zeroed storage for a polynomial of at most the given degree.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::Allocation`] if the storage cannot be obtained.
    pub fn with_degree(degree: usize) -> PolynomialResult<Self> {
        let len = degree
            .checked_add(1)
            .ok_or(PolynomialError::Allocation {
                requested: usize::MAX,
            })?;
        Ok(Self {
            coefficients: zeroed(len)?,
        })
    }

    /// Returns the number of coefficient slots available.
    pub fn capacity(&self) -> usize {
        self.coefficients.len()
    }

    /// Sets the coefficient of the `X^index` term.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::IndexOutOfRange`] if `index` exceeds the reserved degree.
    pub fn set(&mut self, index: usize, value: Complex) -> PolynomialResult<&mut Self> {
        let capacity = self.capacity();
        let slot = self
            .coefficients
            .get_mut(index)
            .ok_or(PolynomialError::IndexOutOfRange { index, capacity })?;
        *slot = value;
        Ok(self)
    }

    /// Finalizes the builder into a normalized polynomial.
    pub fn build(self) -> Polynomial {
        Polynomial::new(self.coefficients)
    }
}
