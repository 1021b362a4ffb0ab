// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Canonical textual rendering of polynomials.
//!
//! Terms are written from the constant term upwards, e.g.
//! `-1 + (1+3j) * X**2` or `-2 + X + 3 * X**2`. Numbers follow C's `%g`
//! conventions (see [`format_g`]).

use crate::polynomial::Polynomial;
use crate::utils::{format_g, format_g_signed};
use num_traits::Zero;
use std::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for polynomial rendering
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Symbol of the unknown
    pub unknown: String,
    /// Suffix marking an imaginary part
    pub imaginary_unit: String,
    /// Placed between a printed coefficient and the unknown
    pub multiplication: String,
    /// Placed between the unknown and its exponent
    pub power: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unknown: "X".to_string(),
            imaginary_unit: "j".to_string(),
            multiplication: " * ".to_string(),
            power: "**".to_string(),
        }
    }
}

impl Polynomial {
    /// Renders the polynomial using custom markers.
    pub fn render_with(&self, config: &RenderConfig) -> String {
        Rendered {
            polynomial: self,
            config,
        }
        .to_string()
    }

    fn write_terms<W: Write>(&self, out: &mut W, config: &RenderConfig) -> fmt::Result {
        if self.is_zero() {
            return out.write_str("0");
        }

        let mut first = true;
        for (degree, coeff) in self.coefficients.iter().enumerate() {
            if coeff.is_zero() {
                continue;
            }

            // Only later terms fold their sign into the separator; the first
            // term keeps its own signs.
            let mut sign = 1.0;
            if !first {
                if coeff.real <= 0.0 && coeff.imag <= 0.0 {
                    sign = -1.0;
                }
                out.write_str(if sign < 0.0 { " - " } else { " + " })?;
            }
            first = false;

            let re = sign * coeff.real;
            let im = sign * coeff.imag;
            let mut coefficient_printed = true;

            if coeff.real == 0.0 {
                if coeff.imag != 1.0 {
                    out.write_str(&format_g(im))?;
                }
                out.write_str(&config.imaginary_unit)?;
            } else if im == 0.0 {
                if re != 1.0 || degree == 0 {
                    out.write_str(&format_g(re))?;
                } else {
                    coefficient_printed = false;
                }
            } else if degree == 0 {
                write!(
                    out,
                    "{}{}{}",
                    format_g(re),
                    format_g_signed(im),
                    config.imaginary_unit
                )?;
            } else {
                write!(
                    out,
                    "({}{}{})",
                    format_g(re),
                    format_g_signed(im),
                    config.imaginary_unit
                )?;
            }

            if degree >= 1 {
                if coefficient_printed {
                    out.write_str(&config.multiplication)?;
                }
                out.write_str(&config.unknown)?;
                if degree > 1 {
                    write!(out, "{}{}", config.power, degree)?;
                }
            }
        }

        Ok(())
    }
}

struct Rendered<'a> {
    polynomial: &'a Polynomial,
    config: &'a RenderConfig,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.polynomial.write_terms(f, self.config)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_terms(f, &RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::Complex;

    fn poly(coefficients: &[(f64, f64)]) -> Polynomial {
        coefficients.iter().map(|c| Complex::from(*c)).collect()
    }

    #[test]
    fn test_zero_polynomial_display() {
        assert_eq!(Polynomial::zero().to_string(), "0");
    }

    #[test]
    fn test_polynomial_display() {
        let p = poly(&[(-1.0, 0.0), (0.0, 0.0), (1.0, 3.0)]);
        assert_eq!(p.to_string(), "-1 + (1+3j) * X**2");

        let q = poly(&[(-2.0, 0.0), (1.0, 0.0), (3.0, 0.0)]);
        assert_eq!(q.to_string(), "-2 + X + 3 * X**2");
    }

    #[test]
    fn test_constants() {
        assert_eq!(Polynomial::one().to_string(), "1");
        assert_eq!(poly(&[(-2.5, 0.0)]).to_string(), "-2.5");
        assert_eq!(poly(&[(1.0, -2.0)]).to_string(), "1-2j");
        assert_eq!(poly(&[(0.0, 1.0)]).to_string(), "j");
        assert_eq!(poly(&[(0.0, -3.0)]).to_string(), "-3j");
    }

    #[test]
    fn test_implicit_coefficient_one() {
        assert_eq!(Polynomial::x().to_string(), "X");
        assert_eq!(poly(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)]).to_string(), "X**2");
        assert_eq!(poly(&[(1.0, 0.0), (-1.0, 0.0)]).to_string(), "1 - X");
        // A leading -1 is printed in full
        assert_eq!(poly(&[(0.0, 0.0), (-1.0, 0.0)]).to_string(), "-1 * X");
    }

    #[test]
    fn test_negative_terms() {
        assert_eq!(
            poly(&[(1.0, 0.0), (-2.0, 0.0), (-0.5, 0.0)]).to_string(),
            "1 - 2 * X - 0.5 * X**2"
        );
        assert_eq!(
            poly(&[(1.0, 0.0), (-2.0, -3.0)]).to_string(),
            "1 - (2+3j) * X"
        );
        // Mixed signs keep the "+" separator
        assert_eq!(
            poly(&[(1.0, 0.0), (2.0, -3.0)]).to_string(),
            "1 + (2-3j) * X"
        );
        assert_eq!(
            poly(&[(1.0, 0.0), (-2.0, 3.0)]).to_string(),
            "1 + (-2+3j) * X"
        );
    }

    #[test]
    fn test_imaginary_terms() {
        assert_eq!(poly(&[(0.0, 0.0), (0.0, 1.0)]).to_string(), "j * X");
        assert_eq!(poly(&[(0.0, 0.0), (0.0, 2.0)]).to_string(), "2j * X");
        assert_eq!(poly(&[(2.0, 0.0), (0.0, 0.0), (0.0, 4.0)]).to_string(), "2 + 4j * X**2");
        // The unit magnitude is only omitted for +j
        assert_eq!(poly(&[(1.0, 0.0), (0.0, -1.0)]).to_string(), "1 - 1j * X");
    }

    #[test]
    fn test_inner_zero_terms_are_skipped() {
        let p = poly(&[(0.0, 0.0), (5.0, 0.0), (0.0, 0.0), (0.0, 0.0), (2.0, 0.0)]);
        assert_eq!(p.to_string(), "5 * X + 2 * X**4");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(poly(&[(0.0, 0.0), (0.0, 0.0), (1e6, 0.0)]).to_string(), "1e+06 * X**2");
        assert_eq!(poly(&[(1.0 / 3.0, 0.0)]).to_string(), "0.333333");
    }

    #[test]
    fn test_render_with_custom_markers() {
        let config = RenderConfig {
            unknown: "z".to_string(),
            imaginary_unit: "i".to_string(),
            multiplication: "·".to_string(),
            power: "^".to_string(),
        };
        let p = poly(&[(-1.0, 0.0), (1.0, 0.0), (1.0, 3.0)]);
        assert_eq!(p.render_with(&config), "-1 + z + (1+3i)·z^2");
        assert_eq!(p.render_with(&RenderConfig::default()), p.to_string());
        assert_eq!(Polynomial::zero().render_with(&config), "0");
    }
}
