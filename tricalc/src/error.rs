//! Calculator errors
//!
//! Every error here is recoverable: the operation that raised it resets only
//! its own piece of state and the session keeps going.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("{function} is undefined for {operand}")]
    DomainError { function: &'static str, operand: f64 },
    #[error("not a quadratic equation")]
    NotQuadratic,
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    #[error("unknown unit category: {0}")]
    UnknownCategory(String),
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("invalid number: {0:?}")]
    InvalidNumericInput(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
