//! # Unit Conversion
//!
//! Converts a value between two units of the same measurement category.
//!
//! ## Categories
//!
//! - **Linear** (length, weight, area, volume, speed, energy): one
//!   [`ConversionTable`] per category, `value * factor[from] / factor[to]`
//! - **Temperature**: affine maps through Celsius, see [`temperature`]
//!
//! Converting a unit to itself always returns the input bit-for-bit.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{convert, Category};
//!
//! let km = convert(26.2, "mi", "km", Category::Length).unwrap();
//! assert!((km - 42.1648).abs() < 1e-3);
//!
//! let f = convert(100.0, "C", "F", Category::Temperature).unwrap();
//! assert_eq!(f, 212.0);
//! ```

pub mod tables;
pub mod temperature;

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcResult};
use crate::input::parse_number;
use crate::outcome::Outcome;

pub use tables::{ConversionTable, UnitDef};
pub use temperature::{convert_temperature, Celsius, Fahrenheit, Kelvin, TemperatureScale};

/// Measurement category. Units only convert within their own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Area,
    Volume,
    Speed,
    Energy,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Length,
        Category::Weight,
        Category::Area,
        Category::Volume,
        Category::Speed,
        Category::Energy,
        Category::Temperature,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Area => "Area",
            Category::Volume => "Volume",
            Category::Speed => "Speed",
            Category::Energy => "Energy",
            Category::Temperature => "Temperature",
        }
    }

    /// Scale-factor table, or `None` for temperature.
    pub fn table(&self) -> Option<&'static ConversionTable> {
        match self {
            Category::Length => Some(&*tables::LENGTH),
            Category::Weight => Some(&*tables::WEIGHT),
            Category::Area => Some(&*tables::AREA),
            Category::Volume => Some(&*tables::VOLUME),
            Category::Speed => Some(&*tables::SPEED),
            Category::Energy => Some(&*tables::ENERGY),
            Category::Temperature => None,
        }
    }

    /// Unit keys accepted by [`convert`] for this category.
    pub fn unit_keys(&self) -> Vec<&'static str> {
        match self.table() {
            Some(table) => table.keys().collect(),
            None => TemperatureScale::ALL.iter().map(|s| s.key()).collect(),
        }
    }
}

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// # Errors
///
/// - `UnknownUnit` if either key is not in the category
/// - `InvalidInput` if `value` is NaN or infinite
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: Category) -> CalcResult<f64> {
    require_finite("value", value)?;
    match category.table() {
        Some(table) => table.convert(value, from_unit, to_unit),
        None => {
            let from = TemperatureScale::from_key(from_unit)?;
            let to = TemperatureScale::from_key(to_unit)?;
            Ok(convert_temperature(value, from, to))
        }
    }
}

/// Convert a raw form field. Empty or non-numeric text is `Pending`.
pub fn convert_raw(raw: &str, from_unit: &str, to_unit: &str, category: Category) -> Outcome<f64> {
    Outcome::when_complete(parse_number(raw), |value| convert(value, from_unit, to_unit, category))
}

/// Input for a unit conversion.
///
/// ## JSON Example
///
/// ```json
/// { "category": "Length", "value": 5.0, "from_unit": "ft", "to_unit": "m" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionInput {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// Result of a unit conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionResult {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub converted: f64,
}

/// Run a [`ConversionInput`].
pub fn calculate(input: &ConversionInput) -> CalcResult<ConversionResult> {
    let converted = convert(input.value, &input.from_unit, &input.to_unit, input.category)?;
    Ok(ConversionResult {
        category: input.category,
        value: input.value,
        from_unit: input.from_unit.clone(),
        to_unit: input.to_unit.clone(),
        converted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_every_category() {
        for category in Category::ALL {
            for key in category.unit_keys() {
                assert_eq!(convert(7.3, key, key, category).unwrap(), 7.3);
            }
        }
    }

    #[test]
    fn test_round_trip_relative_error() {
        for category in Category::ALL {
            let keys = category.unit_keys();
            for a in &keys {
                for b in &keys {
                    let v = 42.42;
                    let back = convert(convert(v, a, b, category).unwrap(), b, a, category).unwrap();
                    assert!(((back - v) / v).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_temperature_reference_points() {
        assert_eq!(convert(0.0, "C", "F", Category::Temperature).unwrap(), 32.0);
        assert_eq!(convert(100.0, "C", "F", Category::Temperature).unwrap(), 212.0);
        assert_eq!(convert(0.0, "C", "K", Category::Temperature).unwrap(), 273.15);
    }

    #[test]
    fn test_cross_category_units_rejected() {
        assert!(convert(1.0, "kg", "m", Category::Length).is_err());
        assert!(convert(1.0, "m", "C", Category::Temperature).is_err());
    }

    #[test]
    fn test_raw_input_states() {
        assert!(convert_raw("  ", "m", "ft", Category::Length).is_pending());
        assert!(convert_raw("ten", "m", "ft", Category::Length).is_pending());
        assert_eq!(convert_raw("0", "m", "ft", Category::Length), Outcome::Ready(0.0));
    }

    #[test]
    fn test_calculate_serialization() {
        let input: ConversionInput =
            serde_json::from_str(r#"{"category":"Weight","value":2.0,"from_unit":"kg","to_unit":"g"}"#).unwrap();
        let result = calculate(&input).unwrap();
        assert!((result.converted - 2000.0).abs() < 1e-9);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"converted\""));
    }
}
