//! Calculator session: the object the window talks to

use crate::accumulator::{Accumulator, Event, Operator};
use crate::functions::UnaryFunction;

/// Owns the accumulator for the lifetime of a calculator window and exposes
/// one call per keypad button. Every call returns the new display text.
#[derive(Debug, Clone, Default)]
pub struct Session {
    accumulator: Accumulator,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_limit(max_len: usize) -> Self {
        Self {
            accumulator: Accumulator::with_max_len(max_len),
        }
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn display(&self) -> &str {
        self.accumulator.display()
    }

    pub fn handle(&mut self, event: Event) -> &str {
        self.accumulator.handle(event)
    }

    pub fn handle_digit(&mut self, d: char) -> &str {
        self.handle(Event::Digit(d))
    }

    pub fn handle_point(&mut self) -> &str {
        self.handle(Event::Point)
    }

    pub fn handle_operator(&mut self, op: Operator) -> &str {
        self.handle(Event::Operator(op))
    }

    pub fn handle_equals(&mut self) -> &str {
        self.handle(Event::Equals)
    }

    pub fn handle_backspace(&mut self) -> &str {
        self.handle(Event::Backspace)
    }

    pub fn handle_clear_entry(&mut self) -> &str {
        self.handle(Event::ClearEntry)
    }

    pub fn handle_clear_all(&mut self) -> &str {
        self.handle(Event::ClearAll)
    }

    pub fn handle_unary(&mut self, func: UnaryFunction) -> &str {
        self.handle(Event::Unary(func))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::ERROR_MARKER;

    #[test]
    fn test_session_surface() {
        let mut s = Session::new();
        assert_eq!(s.handle_digit('5'), "5");
        assert_eq!(s.handle_operator(Operator::Add), "5");
        assert_eq!(s.handle_digit('3'), "3");
        assert_eq!(s.handle_operator(Operator::Mul), "8");
        assert_eq!(s.handle_digit('2'), "2");
        assert_eq!(s.handle_equals(), "16");
        assert_eq!(s.handle_clear_all(), "0");
    }

    #[test]
    fn test_point_backspace_clear_entry() {
        let mut s = Session::new();
        assert_eq!(s.handle_point(), "0.");
        assert_eq!(s.handle_digit('7'), "0.7");
        assert_eq!(s.handle_backspace(), "0.");
        assert_eq!(s.handle_clear_entry(), "0");
        assert!(s.accumulator().is_awaiting_operand());
    }

    #[test]
    fn test_division_by_zero() {
        let mut s = Session::new();
        s.handle_digit('7');
        s.handle_operator(Operator::Div);
        s.handle_digit('0');
        assert_eq!(s.handle_equals(), ERROR_MARKER);
        assert_eq!(s.accumulator().result(), 0.0);
        assert_eq!(s.accumulator().pending(), None);
    }

    #[test]
    fn test_unary_and_limit() {
        let mut s = Session::with_display_limit(15);
        for _ in 0..20 {
            s.handle_digit('9');
        }
        assert_eq!(s.display().len(), 15);

        let mut s = Session::new();
        s.handle_digit('8');
        s.handle_digit('1');
        assert_eq!(s.handle_unary(UnaryFunction::Sqrt), "9");
    }
}
