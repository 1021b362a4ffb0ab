// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for complex and polynomial operations.

use thiserror::Error;

/// Errors raised by [`Complex`](crate::Complex) arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComplexError {
    /// Division by the complex value (0, 0)
    #[error("Complex division by zero")]
    DivisionByZero,
}

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// Division by the zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// Coefficient storage could not be reserved
    #[error("Unable to allocate storage for {requested} coefficients")]
    Allocation { requested: usize },

    /// Coefficient write outside the allocated range
    #[error("Coefficient index {index} is out of range (capacity {capacity})")]
    IndexOutOfRange { index: usize, capacity: usize },

    /// Coefficient arithmetic error
    #[error(transparent)]
    Complex(#[from] ComplexError),
}

/// Result type alias for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;
