//! Temperature scales.
//!
//! Temperature is affine, not linear, so it cannot live in a scale-factor
//! table. Each scale is a newtype and every conversion goes through
//! [`Celsius`] as the pivot.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use crate::errors::{CalcError, CalcResult};

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

/// Temperature in kelvin
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(pub f64);

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Self {
        Celsius(k.0 - KELVIN_OFFSET)
    }
}

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Self {
        Kelvin(c.0 + KELVIN_OFFSET)
    }
}

// Differences on one scale stay on that scale.
macro_rules! impl_temperature {
    ($type:ty) => {
        impl Add<f64> for $type {
            type Output = Self;
            fn add(self, rhs: f64) -> Self::Output {
                Self(self.0 + rhs)
            }
        }

        impl Sub for $type {
            type Output = f64;
            fn sub(self, rhs: Self) -> Self::Output {
                self.0 - rhs.0
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_temperature!(Celsius);
impl_temperature!(Fahrenheit);
impl_temperature!(Kelvin);

/// The three supported temperature scales, keyed `C`, `F` and `K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureScale {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    /// Look up a scale by key (`C`, `F`, `K`, case-insensitive).
    pub fn from_key(key: &str) -> CalcResult<Self> {
        match key.trim().to_ascii_uppercase().as_str() {
            "C" | "CELSIUS" => Ok(TemperatureScale::Celsius),
            "F" | "FAHRENHEIT" => Ok(TemperatureScale::Fahrenheit),
            "K" | "KELVIN" => Ok(TemperatureScale::Kelvin),
            _ => Err(CalcError::unknown_unit("Temperature", key)),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "C",
            TemperatureScale::Fahrenheit => "F",
            TemperatureScale::Kelvin => "K",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
            TemperatureScale::Kelvin => "Kelvin",
        }
    }

    fn to_celsius(self, value: f64) -> Celsius {
        match self {
            TemperatureScale::Celsius => Celsius(value),
            TemperatureScale::Fahrenheit => Fahrenheit(value).into(),
            TemperatureScale::Kelvin => Kelvin(value).into(),
        }
    }

    fn from_celsius(self, c: Celsius) -> f64 {
        match self {
            TemperatureScale::Celsius => c.0,
            TemperatureScale::Fahrenheit => Fahrenheit::from(c).0,
            TemperatureScale::Kelvin => Kelvin::from(c).0,
        }
    }
}

/// Convert a temperature between scales.
///
/// Identical scales return the input untouched rather than taking a lossy
/// trip through Celsius.
pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    if from == to {
        return value;
    }
    to.from_celsius(from.to_celsius(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_points() {
        use TemperatureScale::*;
        assert_eq!(convert_temperature(0.0, Celsius, Fahrenheit), 32.0);
        assert_eq!(convert_temperature(100.0, Celsius, Fahrenheit), 212.0);
        assert_eq!(convert_temperature(0.0, Celsius, Kelvin), 273.15);
        assert!((convert_temperature(-40.0, Fahrenheit, Celsius) + 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity_is_exact() {
        for scale in TemperatureScale::ALL {
            assert_eq!(convert_temperature(98.6, scale, scale), 98.6);
        }
    }

    #[test]
    fn test_round_trip() {
        for from in TemperatureScale::ALL {
            for to in TemperatureScale::ALL {
                let back = convert_temperature(convert_temperature(37.2, from, to), to, from);
                assert!((back - 37.2).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_newtype_conversion() {
        let body: Fahrenheit = Celsius(37.0).into();
        assert!((body.0 - 98.6).abs() < 1e-9);
        let k: Kelvin = Celsius(25.0).into();
        assert!((k - Kelvin(273.15) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_keys() {
        assert_eq!(TemperatureScale::from_key("f").unwrap(), TemperatureScale::Fahrenheit);
        assert!(TemperatureScale::from_key("R").is_err());
        let json = serde_json::to_string(&TemperatureScale::Kelvin).unwrap();
        assert_eq!(json, "\"K\"");
    }
}
