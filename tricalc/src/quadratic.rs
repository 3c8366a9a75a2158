//! Closed-form solver for `ax² + bx + c = 0`

use std::fmt;

use crate::display::{format_significant, parse_number};
use crate::error::Result;

/// Significant digits used when rendering roots.
pub const ROOT_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticResult {
    /// `a == 0`: the equation is linear or degenerate and is not solved.
    NotQuadratic,
    /// Positive discriminant; `x1` takes `+√d`, `x2` takes `-√d`.
    TwoReal(f64, f64),
    /// Zero discriminant.
    OneReal(f64),
    /// Negative discriminant: the conjugate pair `re ± im·i`.
    Complex { re: f64, im: f64 },
}

impl QuadraticResult {
    /// Real roots, if any.
    pub fn real_roots(&self) -> Vec<f64> {
        match *self {
            QuadraticResult::TwoReal(x1, x2) => vec![x1, x2],
            QuadraticResult::OneReal(x) => vec![x],
            QuadraticResult::NotQuadratic | QuadraticResult::Complex { .. } => Vec::new(),
        }
    }
}

impl fmt::Display for QuadraticResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = |x: f64| format_significant(x, ROOT_DIGITS);
        match *self {
            QuadraticResult::NotQuadratic => write!(f, "not a quadratic equation"),
            QuadraticResult::TwoReal(x1, x2) => write!(f, "x₁ = {}, x₂ = {}", g(x1), g(x2)),
            QuadraticResult::OneReal(x) => write!(f, "x = {}", g(x)),
            QuadraticResult::Complex { re, im } => {
                let (re, im) = (g(re), g(im));
                write!(f, "x₁ = {re} + {im}i, x₂ = {re} - {im}i")
            }
        }
    }
}

pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticResult {
    if a == 0.0 {
        return QuadraticResult::NotQuadratic;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant > 0.0 {
        let root = discriminant.sqrt();
        QuadraticResult::TwoReal((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))
    } else if discriminant == 0.0 {
        QuadraticResult::OneReal(-b / (2.0 * a))
    } else {
        QuadraticResult::Complex {
            re: -b / (2.0 * a),
            im: (-discriminant).sqrt() / (2.0 * a),
        }
    }
}

/// Parse the three coefficient fields, then solve.
pub fn solve_quadratic_text(a: &str, b: &str, c: &str) -> Result<QuadraticResult> {
    Ok(solve_quadratic(parse_number(a)?, parse_number(b)?, parse_number(c)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn test_two_real_roots() {
        let roots = solve_quadratic(1.0, -3.0, 2.0);
        assert_eq!(roots, QuadraticResult::TwoReal(2.0, 1.0));
        assert_eq!(roots.real_roots(), vec![2.0, 1.0]);
        assert_eq!(roots.to_string(), "x₁ = 2, x₂ = 1");
    }

    #[test]
    fn test_one_real_root() {
        let roots = solve_quadratic(1.0, 2.0, 1.0);
        assert_eq!(roots, QuadraticResult::OneReal(-1.0));
        assert_eq!(roots.to_string(), "x = -1");
    }

    #[test]
    fn test_complex_pair() {
        let roots = solve_quadratic(1.0, 0.0, 1.0);
        match roots {
            QuadraticResult::Complex { re, im } => {
                assert_eq!(re, 0.0);
                assert_eq!(im, 1.0);
            }
            other => panic!("expected complex roots, got {:?}", other),
        }
        assert!(roots.real_roots().is_empty());
        assert_eq!(roots.to_string(), "x₁ = 0 + 1i, x₂ = 0 - 1i");
    }

    #[test]
    fn test_not_quadratic() {
        assert_eq!(solve_quadratic(0.0, 5.0, 3.0), QuadraticResult::NotQuadratic);
        assert_eq!(solve_quadratic(0.0, 0.0, 0.0).to_string(), "not a quadratic equation");
    }

    #[test]
    fn test_six_significant_digits() {
        // x² - 2 = 0
        let roots = solve_quadratic(1.0, 0.0, -2.0);
        assert_eq!(roots.to_string(), "x₁ = 1.41421, x₂ = -1.41421");
    }

    #[test]
    fn test_negative_leading_coefficient() {
        // -x² + 1 = 0: the + branch yields the smaller root
        assert_eq!(solve_quadratic(-1.0, 0.0, 1.0), QuadraticResult::TwoReal(-1.0, 1.0));
    }

    #[test]
    fn test_text_input() {
        assert_eq!(
            solve_quadratic_text("1", " -3", "2 "),
            Ok(QuadraticResult::TwoReal(2.0, 1.0))
        );
        assert_eq!(
            solve_quadratic_text("1", "b", "2"),
            Err(CalcError::InvalidNumericInput("b".to_string()))
        );
    }
}
