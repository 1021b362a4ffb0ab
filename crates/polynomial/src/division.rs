// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Euclidean division of polynomials.

use crate::errors::{PolynomialError, PolynomialResult};
use crate::polynomial::{trim, zeroed, Polynomial};
use tracing::{debug, trace};

impl Polynomial {
    /// Divides one polynomial by another, returning the quotient and remainder.
    ///
    /// The result `(q, r)` satisfies `self = divisor * q + r` with
    /// `r.degree() < divisor.degree()`.
    ///
    /// # Arguments
    ///
    /// * `divisor` - A reference to the divisor polynomial.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is the zero polynomial.
    pub fn div_rem(&self, divisor: &Self) -> PolynomialResult<(Self, Self)> {
        let (quotient, remainder) = self.long_division(divisor, true)?;
        Ok((quotient.unwrap_or_default(), remainder))
    }

    /// Returns the quotient of the Euclidean division by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is the zero polynomial.
    pub fn quotient(&self, divisor: &Self) -> PolynomialResult<Self> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Returns the remainder of the Euclidean division by `divisor`.
    ///
    /// The quotient is never materialized.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is the zero polynomial.
    pub fn rem(&self, divisor: &Self) -> PolynomialResult<Self> {
        self.long_division(divisor, false)
            .map(|(_, remainder)| remainder)
    }

    fn long_division(
        &self,
        divisor: &Self,
        with_quotient: bool,
    ) -> PolynomialResult<(Option<Self>, Self)> {
        let Some(divisor_degree) = divisor.degree() else {
            debug!(dividend_degree = ?self.degree(), "rejecting division by zero polynomial");
            return Err(PolynomialError::DivisionByZero);
        };
        let divisor_lead = divisor.coefficients[divisor_degree];

        let mut remainder = self.coefficients.clone();
        let mut quotient = if with_quotient {
            Some(zeroed(remainder.len().saturating_sub(divisor_degree))?)
        } else {
            None
        };

        while let Some(remainder_degree) = remainder.len().checked_sub(1) {
            if remainder_degree < divisor_degree {
                break;
            }
            let shift = remainder_degree - divisor_degree;
            let term = remainder[remainder_degree].checked_div(divisor_lead)?;
            trace!(remainder_degree, shift, "reducing remainder");

            if let Some(quotient) = quotient.as_mut() {
                quotient[shift] = term;
            }

            // remainder -= term * X^shift * divisor
            for (j, coeff) in divisor.coefficients[..divisor_degree].iter().enumerate() {
                remainder[shift + j] = remainder[shift + j] - term * *coeff;
            }
            // The leading term cancels by construction; drop it rather than
            // trusting floating point to produce an exact zero.
            remainder.pop();
            trim(&mut remainder);
        }

        Ok((quotient.map(Polynomial::new), Polynomial::new(remainder)))
    }
}

/// Checks the division identity `dividend = divisor * quotient + remainder`.
///
/// Coefficients are compared exactly, so this only holds for divisions whose
/// intermediate values are representable without rounding.
pub fn verify_division(
    dividend: &Polynomial,
    divisor: &Polynomial,
    quotient: &Polynomial,
    remainder: &Polynomial,
) -> bool {
    remainder.degree() < divisor.degree()
        && divisor.mul(quotient).add(remainder) == *dividend
}
