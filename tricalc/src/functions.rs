//! Scalar functions of the scientific keypad

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use crate::error::{CalcError, Result};

/// Unary functions applied to the displayed value. Trig works in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFunction {
    Sqrt,
    Pi,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// Cotangent, `1 / tan(x)`.
    Ctg,
    /// Arccotangent, `π/2 - atan(x)`.
    Actan,
}

impl UnaryFunction {
    pub const ALL: [UnaryFunction; 10] = [
        UnaryFunction::Sin,
        UnaryFunction::Cos,
        UnaryFunction::Tan,
        UnaryFunction::Ctg,
        UnaryFunction::Asin,
        UnaryFunction::Acos,
        UnaryFunction::Atan,
        UnaryFunction::Actan,
        UnaryFunction::Sqrt,
        UnaryFunction::Pi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnaryFunction::Sqrt => "sqrt",
            UnaryFunction::Pi => "pi",
            UnaryFunction::Sin => "sin",
            UnaryFunction::Cos => "cos",
            UnaryFunction::Tan => "tan",
            UnaryFunction::Asin => "asin",
            UnaryFunction::Acos => "acos",
            UnaryFunction::Atan => "atan",
            UnaryFunction::Ctg => "ctg",
            UnaryFunction::Actan => "actan",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            UnaryFunction::Sqrt => "√",
            UnaryFunction::Pi => "π",
            UnaryFunction::Tan => "tg",
            UnaryFunction::Asin => "arcsin",
            UnaryFunction::Acos => "arccos",
            UnaryFunction::Atan => "arctg",
            UnaryFunction::Actan => "arcctg",
            other => other.name(),
        }
    }

    /// Only the square root is domain checked; the inverse trig functions
    /// return NaN outside [-1, 1].
    pub fn apply(self, x: f64) -> Result<f64> {
        let value = match self {
            UnaryFunction::Sqrt => {
                if x < 0.0 {
                    return Err(CalcError::DomainError { function: "sqrt", operand: x });
                }
                x.sqrt()
            }
            UnaryFunction::Pi => PI,
            UnaryFunction::Sin => x.sin(),
            UnaryFunction::Cos => x.cos(),
            UnaryFunction::Tan => x.tan(),
            UnaryFunction::Asin => x.asin(),
            UnaryFunction::Acos => x.acos(),
            UnaryFunction::Atan => x.atan(),
            UnaryFunction::Ctg => 1.0 / x.tan(),
            UnaryFunction::Actan => FRAC_PI_2 - x.atan(),
        };
        Ok(value)
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnaryFunction {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        UnaryFunction::ALL
            .into_iter()
            .find(|func| func.name() == s || func.label() == s)
            .ok_or_else(|| CalcError::UnknownFunction(s.to_string()))
    }
}

/// Apply a function by name, e.g. `apply_unary_function("sqrt", 9.0)`.
pub fn apply_unary_function(name: &str, operand: f64) -> Result<f64> {
    name.parse::<UnaryFunction>()?.apply(operand)
}
