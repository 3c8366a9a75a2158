//! Unit catalogue and conversions
//!
//! Length and mass are linear: every unit has a factor relative to the
//! category's base unit (meters, kilograms). Temperature needs explicit
//! formulas between each pair of scales.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::display::parse_number;
use crate::error::{CalcError, Result};

/// Factors relative to meters.
const LENGTH_UNITS: &[(&str, f64)] = &[
    ("Meters", 1.0),
    ("Kilometers", 1000.0),
    ("Decimeters", 0.1),
    ("Centimeters", 0.01),
    ("Millimeters", 0.001),
    ("Miles", 1609.34),
    ("Feet", 0.3048),
    ("Inches", 0.0254),
];

/// Factors relative to kilograms.
const MASS_UNITS: &[(&str, f64)] = &[
    ("Kilograms", 1.0),
    ("Grams", 0.001),
    ("Centners", 100.0),
    ("Tonnes", 1000.0),
    ("Pounds", 0.453592),
    ("Ounces", 0.0283495),
];

const TEMPERATURE_UNITS: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];

const ABSOLUTE_ZERO_C: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    Length,
    Mass,
    Temperature,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 3] =
        [UnitCategory::Length, UnitCategory::Mass, UnitCategory::Temperature];

    pub fn name(self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Mass => "Mass",
            UnitCategory::Temperature => "Temperature",
        }
    }

    /// Unit names in catalogue order.
    pub fn units(self) -> Vec<&'static str> {
        match self {
            UnitCategory::Length => LENGTH_UNITS.iter().map(|(name, _)| *name).collect(),
            UnitCategory::Mass => MASS_UNITS.iter().map(|(name, _)| *name).collect(),
            UnitCategory::Temperature => TEMPERATURE_UNITS.to_vec(),
        }
    }

    /// Factor of `unit` relative to the base unit. Temperature has none.
    fn factor(self, unit: &str) -> Result<f64> {
        let table = match self {
            UnitCategory::Length => LENGTH_UNITS,
            UnitCategory::Mass => MASS_UNITS,
            UnitCategory::Temperature => return Err(CalcError::UnknownUnit(unit.to_string())),
        };
        table
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| CalcError::UnknownUnit(unit.to_string()))
    }

    pub fn convert(self, from: &str, to: &str, value: f64) -> Result<f64> {
        match self {
            UnitCategory::Temperature => {
                let from: TemperatureScale = from.parse()?;
                let to: TemperatureScale = to.parse()?;
                Ok(from.convert(to, value))
            }
            linear => {
                let from_factor = linear.factor(from)?;
                let to_factor = linear.factor(to)?;
                Ok(value * from_factor / to_factor)
            }
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        UnitCategory::ALL
            .into_iter()
            .find(|cat| cat.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CalcError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub fn convert(self, to: TemperatureScale, value: f64) -> f64 {
        use TemperatureScale::*;
        match (self, to) {
            (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
            (Celsius, Kelvin) => value + ABSOLUTE_ZERO_C,
            (Kelvin, Celsius) => value - ABSOLUTE_ZERO_C,
            (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + ABSOLUTE_ZERO_C,
            (Kelvin, Fahrenheit) => (value - ABSOLUTE_ZERO_C) * 9.0 / 5.0 + 32.0,
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
        }
    }
}

impl FromStr for TemperatureScale {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Celsius" => Ok(TemperatureScale::Celsius),
            "Fahrenheit" => Ok(TemperatureScale::Fahrenheit),
            "Kelvin" => Ok(TemperatureScale::Kelvin),
            other => Err(CalcError::UnknownUnit(other.to_string())),
        }
    }
}

/// `convert_unit("Length", "Kilometers", "Meters", 2.0)` gives `2000.0`.
pub fn convert_unit(category: &str, from: &str, to: &str, value: f64) -> Result<f64> {
    let category: UnitCategory = category.parse()?;
    let converted = category.convert(from, to, value)?;
    debug!(%category, from, to, value, converted, "unit conversion");
    Ok(converted)
}

/// Same as [`convert_unit`] but takes the value as entered text.
pub fn convert_text(category: &str, from: &str, to: &str, text: &str) -> Result<f64> {
    convert_unit(category, from, to, parse_number(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_length() {
        assert_eq!(convert_unit("Length", "Kilometers", "Meters", 2.0), Ok(2000.0));
        assert!(approx(convert_unit("Length", "Inches", "Centimeters", 1.0).unwrap(), 2.54));
        assert!(approx(convert_unit("Length", "Miles", "Kilometers", 1.0).unwrap(), 1.60934));
        assert!(approx(convert_unit("Length", "Feet", "Feet", 7.5).unwrap(), 7.5));
    }

    #[test]
    fn test_mass() {
        assert!(approx(convert_unit("Mass", "Tonnes", "Centners", 1.0).unwrap(), 10.0));
        assert!(approx(convert_unit("Mass", "Pounds", "Grams", 1.0).unwrap(), 453.592));
    }

    #[test]
    fn test_temperature() {
        assert_eq!(convert_unit("Temperature", "Celsius", "Fahrenheit", 0.0), Ok(32.0));
        assert_eq!(convert_unit("Temperature", "Celsius", "Kelvin", 0.0), Ok(273.15));
        assert!(approx(convert_unit("Temperature", "Fahrenheit", "Celsius", 212.0).unwrap(), 100.0));
        assert!(approx(convert_unit("Temperature", "Kelvin", "Celsius", 0.0).unwrap(), -273.15));
        assert!(approx(convert_unit("Temperature", "Fahrenheit", "Kelvin", 32.0).unwrap(), 273.15));
        assert!(approx(convert_unit("Temperature", "Kelvin", "Fahrenheit", 273.15).unwrap(), 32.0));
        assert_eq!(convert_unit("Temperature", "Kelvin", "Kelvin", 12.5), Ok(12.5));
    }

    #[test]
    fn test_temperature_unknown_scale_is_an_error() {
        assert_eq!(
            convert_unit("Temperature", "Celsius", "Rankine", 10.0),
            Err(CalcError::UnknownUnit("Rankine".to_string()))
        );
    }

    #[test]
    fn test_unknown_unit_and_category() {
        assert_eq!(
            convert_unit("Length", "Parsecs", "Meters", 1.0),
            Err(CalcError::UnknownUnit("Parsecs".to_string()))
        );
        // units don't cross categories
        assert_eq!(
            convert_unit("Mass", "Meters", "Grams", 1.0),
            Err(CalcError::UnknownUnit("Meters".to_string()))
        );
        assert_eq!(
            convert_unit("Volume", "Liters", "Liters", 1.0),
            Err(CalcError::UnknownCategory("Volume".to_string()))
        );
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!("length".parse::<UnitCategory>(), Ok(UnitCategory::Length));
        assert_eq!(UnitCategory::Length.units().len(), 8);
        assert_eq!(UnitCategory::Mass.units()[0], "Kilograms");
        assert_eq!(UnitCategory::Temperature.units(), vec!["Celsius", "Fahrenheit", "Kelvin"]);
    }

    #[test]
    fn test_text_input() {
        assert_eq!(convert_text("Length", "Kilometers", "Meters", "1.5"), Ok(1500.0));
        assert!(matches!(
            convert_text("Length", "Kilometers", "Meters", "1,5"),
            Err(CalcError::InvalidNumericInput(_))
        ));
    }
}
