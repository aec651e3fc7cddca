//! # Polynomials
//!
//! Polynomials stored by decreasing degree and evaluated with Horner's method.
//! [`horner`] is also used directly on constant coefficient tables (obliquity, sidereal time).

use std::fmt;

use crate::sky_errors::SkyError;

/// Evaluate the polynomial whose coefficients are given highest degree first.
///
/// ```text
/// c₀·xⁿ + c₁·xⁿ⁻¹ + … + cₙ = ((c₀·x + c₁)·x + …)·x + cₙ
/// ```
pub fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, c| acc * x + c)
}

/// A polynomial with a non-zero leading coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Build a polynomial from its coefficients, highest degree first.
    ///
    /// Errors
    /// ----------
    /// * [`SkyError::ZeroLeadingCoefficient`] if the list is empty or starts with `0`.
    pub fn of(coefficients: &[f64]) -> Result<Self, SkyError> {
        match coefficients.first() {
            Some(&c) if c != 0.0 => Ok(Polynomial {
                coefficients: coefficients.to_vec(),
            }),
            _ => Err(SkyError::ZeroLeadingCoefficient),
        }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn at(&self, x: f64) -> f64 {
        horner(&self.coefficients, x)
    }
}

fn write_monomial(f: &mut fmt::Formatter<'_>, c: f64, power: usize, first: bool) -> fmt::Result {
    if !first && c > 0.0 {
        write!(f, "+")?;
    }
    if power == 0 {
        return write!(f, "{c}");
    }
    if c == -1.0 {
        write!(f, "-")?;
    } else if c != 1.0 {
        write!(f, "{c}")?;
    }
    if power == 1 {
        write!(f, "x")
    } else {
        write!(f, "x^{power}")
    }
}

/// Renders e.g. `x^2-2x+1`: zero terms are omitted and unit coefficients written without digits.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        for (i, &c) in self.coefficients.iter().enumerate() {
            if i > 0 && c == 0.0 {
                continue;
            }
            write_monomial(f, c, degree - i, i == 0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod polynomial_test {
    use super::*;

    #[test]
    fn test_zero_leading_coefficient() {
        assert_eq!(Polynomial::of(&[0., 1.]), Err(SkyError::ZeroLeadingCoefficient));
        assert_eq!(Polynomial::of(&[]), Err(SkyError::ZeroLeadingCoefficient));
    }

    #[test]
    fn test_at() {
        let p = Polynomial::of(&[1., -2., 1.]).unwrap();
        assert_eq!(p.degree(), 2);
        assert_eq!(p.at(1.), 0.);
        assert_eq!(p.at(3.), 4.);

        let constant = Polynomial::of(&[4.5]).unwrap();
        assert_eq!(constant.at(100.), 4.5);

        assert_eq!(horner(&[2., 0., -1., 3.], 2.), 17.);
    }

    #[test]
    fn test_display() {
        assert_eq!(Polynomial::of(&[1., -2., 1.]).unwrap().to_string(), "x^2-2x+1");
        assert_eq!(Polynomial::of(&[-1., 0., 0.]).unwrap().to_string(), "-x^2");
        assert_eq!(Polynomial::of(&[3.5, 1., -1.]).unwrap().to_string(), "3.5x^2+x-1");
        assert_eq!(Polynomial::of(&[-2., 0.5]).unwrap().to_string(), "-2x+0.5");
        assert_eq!(Polynomial::of(&[7.]).unwrap().to_string(), "7");
    }
}
