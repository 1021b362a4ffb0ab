// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Dense univariate polynomials with double-precision complex coefficients.
//!
//! ## Features
//!
//! - Normalized representation: the leading coefficient of a non-zero polynomial is never zero.
//! - Ring arithmetic: addition, subtraction, negation, multiplication and integer powers.
//! - Formal derivative and Euclidean division (quotient and remainder).
//! - Horner evaluation at complex points.
//! - Canonical rendering such as `-1 + (1+3j) * X**2`.
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Precision
//!
//! Coefficients are compared exactly. Normalization, equality and the
//! division loop all rely on exact zero tests, so results of long chains of
//! floating point operations may keep a tiny leading coefficient where exact
//! arithmetic would cancel it.

pub mod complex;
pub mod division;
pub mod errors;
pub mod format;
pub mod ops;
pub mod polynomial;
pub mod utils;

pub use complex::Complex;
pub use division::verify_division;
pub use errors::{ComplexError, PolynomialError, PolynomialResult};
pub use format::RenderConfig;
pub use polynomial::{Polynomial, PolynomialBuilder};
