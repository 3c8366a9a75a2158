//! The calculator's working register
//!
//! Operators are applied strictly left to right as they are entered:
//! `5 + 3 × 2 =` evaluates to 16. One binary operator is held pending until
//! the next operator or `=` resolves it against the displayed operand.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::display::{format_number, ERROR_MARKER};
use crate::error::{CalcError, Result};
use crate::functions::UnaryFunction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "×",
            Operator::Div => "÷",
        }
    }

    /// Apply `lhs op rhs`. Only an exact `0.0` divisor is rejected.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Sub),
            "*" | "x" | "×" => Ok(Operator::Mul),
            "/" | ":" | "÷" => Ok(Operator::Div),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

/// An input event from the keypad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Digit(char),
    Point,
    Operator(Operator),
    Equals,
    Backspace,
    ClearEntry,
    ClearAll,
    Unary(UnaryFunction),
}

#[derive(Debug, Clone)]
pub struct Accumulator {
    display: String,
    result: f64,
    pending: Option<Operator>,
    awaiting_operand: bool,
    max_len: Option<usize>,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            result: 0.0,
            pending: None,
            awaiting_operand: true,
            max_len: None,
        }
    }

    /// Limit how many characters digit and point entry may produce.
    /// Computed results are never truncated.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len.max(1)),
            ..Self::new()
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    pub fn handle(&mut self, event: Event) -> &str {
        debug!(?event, display = %self.display, "accumulator event");
        match event {
            Event::Digit(d) => self.digit(d),
            Event::Point => self.point(),
            Event::Operator(op) => self.operator(op),
            Event::Equals => self.equals(),
            Event::Backspace => self.backspace(),
            Event::ClearEntry => self.clear_entry(),
            Event::ClearAll => self.clear_all(),
            Event::Unary(func) => self.unary(func),
        }
        &self.display
    }

    fn has_room(&self, extra: usize) -> bool {
        match self.max_len {
            Some(max) => self.display.chars().count() + extra <= max,
            None => true,
        }
    }

    pub fn digit(&mut self, d: char) {
        if !d.is_ascii_digit() {
            warn!(%d, "ignoring non-digit key");
            return;
        }
        if d == '0' && self.display == "0" {
            return;
        }
        if self.awaiting_operand {
            self.display.clear();
            self.awaiting_operand = false;
        } else if self.display == "0" {
            self.display.clear();
        } else if !self.has_room(1) {
            return;
        }
        self.display.push(d);
    }

    pub fn point(&mut self) {
        if self.awaiting_operand {
            self.display = "0".to_string();
        }
        if !self.display.contains('.') && self.has_room(1) {
            self.display.push('.');
        }
        self.awaiting_operand = false;
    }

    pub fn operator(&mut self, op: Operator) {
        let operand = self.operand();
        if let Some(pending) = self.pending {
            if self.resolve(pending, operand).is_err() {
                return;
            }
        } else {
            self.result = operand;
        }
        self.pending = Some(op);
        self.awaiting_operand = true;
    }

    pub fn equals(&mut self) {
        let Some(pending) = self.pending else {
            return;
        };
        let operand = self.operand();
        if self.resolve(pending, operand).is_ok() {
            self.pending = None;
            self.awaiting_operand = true;
        }
    }

    pub fn backspace(&mut self) {
        if self.awaiting_operand {
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
            self.awaiting_operand = true;
        }
    }

    pub fn clear_entry(&mut self) {
        if self.awaiting_operand {
            return;
        }
        self.display = "0".to_string();
        self.awaiting_operand = true;
    }

    pub fn clear_all(&mut self) {
        self.display = "0".to_string();
        self.awaiting_operand = true;
        self.result = 0.0;
        self.pending = None;
    }

    /// Replace the displayed value with `func(display)`. A domain error shows
    /// the error marker but keeps the pending operator and stored result.
    pub fn unary(&mut self, func: UnaryFunction) {
        let operand = self.operand();
        match func.apply(operand) {
            Ok(value) => self.display = format_number(value),
            Err(e) => {
                warn!(%func, operand, error = %e, "unary function failed");
                self.display = ERROR_MARKER.to_string();
            }
        }
        self.awaiting_operand = true;
    }

    /// The displayed value; the error marker reads as zero.
    fn operand(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    /// Fold the pending operator into `result` and display it. Division by
    /// zero aborts the whole chain.
    fn resolve(&mut self, op: Operator, operand: f64) -> Result<()> {
        match op.apply(self.result, operand) {
            Ok(value) => {
                self.result = value;
                self.display = format_number(value);
                Ok(())
            }
            Err(e) => {
                warn!(lhs = self.result, %op, operand, error = %e, "calculation aborted");
                self.display = ERROR_MARKER.to_string();
                self.result = 0.0;
                self.pending = None;
                self.awaiting_operand = true;
                Err(e)
            }
        }
    }
}
