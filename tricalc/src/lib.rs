//! tricalc — calculator engine
//!
//! A four-function accumulator with a scientific keypad, a unit converter and
//! a quadratic solver. Nothing here knows about the window; the `tricalc`
//! binary drives these types from egui.

pub mod accumulator;
pub mod display;
pub mod error;
pub mod functions;
pub mod quadratic;
pub mod session;
pub mod units;

pub use accumulator::{Accumulator, Event, Operator};
pub use display::{format_number, ERROR_MARKER};
pub use error::{CalcError, Result};
pub use functions::{apply_unary_function, UnaryFunction};
pub use quadratic::{solve_quadratic, QuadraticResult};
pub use session::Session;
pub use units::{convert_unit, UnitCategory};
