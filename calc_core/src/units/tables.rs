//! Linear conversion tables.
//!
//! Each table lists `(key, label, factor)` where `factor` is the size of one
//! unit expressed in the category's base unit. The base has factor 1.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::Category;
use crate::errors::{CalcError, CalcResult};

/// One row of a conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDef {
    pub key: &'static str,
    pub label: &'static str,
    pub factor: f64,
}

/// Scale factors for one linear measurement category.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionTable {
    pub category: Category,
    pub base: &'static str,
    pub units: Vec<UnitDef>,
    #[serde(skip)]
    index: HashMap<&'static str, usize>,
}

impl ConversionTable {
    fn new(category: Category, base: &'static str, rows: &[(&'static str, &'static str, f64)]) -> Self {
        let units: Vec<UnitDef> = rows
            .iter()
            .map(|&(key, label, factor)| UnitDef { key, label, factor })
            .collect();
        let index = units.iter().enumerate().map(|(i, u)| (u.key, i)).collect();
        ConversionTable {
            category,
            base,
            units,
            index,
        }
    }

    /// Look up a unit by key.
    pub fn unit(&self, key: &str) -> CalcResult<&UnitDef> {
        self.index
            .get(key)
            .map(|&i| &self.units[i])
            .ok_or_else(|| CalcError::unknown_unit(self.category.label(), key))
    }

    /// Convert `value` from one unit to another within this table.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> CalcResult<f64> {
        let from_unit = self.unit(from)?;
        let to_unit = self.unit(to)?;
        if from_unit.key == to_unit.key {
            return Ok(value);
        }
        Ok(value * from_unit.factor / to_unit.factor)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(|u| u.key)
    }
}

pub static LENGTH: Lazy<ConversionTable> = Lazy::new(|| {
    ConversionTable::new(
        Category::Length,
        "m",
        &[
            ("mm", "Millimeters", 0.001),
            ("cm", "Centimeters", 0.01),
            ("m", "Meters", 1.0),
            ("km", "Kilometers", 1000.0),
            ("in", "Inches", 0.0254),
            ("ft", "Feet", 0.3048),
            ("yd", "Yards", 0.9144),
            ("mi", "Miles", 1609.344),
            ("nmi", "Nautical miles", 1852.0),
        ],
    )
});

pub static WEIGHT: Lazy<ConversionTable> = Lazy::new(|| {
    ConversionTable::new(
        Category::Weight,
        "kg",
        &[
            ("mg", "Milligrams", 1e-6),
            ("g", "Grams", 0.001),
            ("kg", "Kilograms", 1.0),
            ("t", "Metric tonnes", 1000.0),
            ("oz", "Ounces", 0.028349523125),
            ("lb", "Pounds", 0.45359237),
            ("st", "Stone", 6.35029318),
        ],
    )
});

pub static AREA: Lazy<ConversionTable> = Lazy::new(|| {
    ConversionTable::new(
        Category::Area,
        "m2",
        &[
            ("mm2", "Square millimeters", 1e-6),
            ("cm2", "Square centimeters", 1e-4),
            ("m2", "Square meters", 1.0),
            ("ha", "Hectares", 10_000.0),
            ("km2", "Square kilometers", 1e6),
            ("in2", "Square inches", 0.00064516),
            ("ft2", "Square feet", 0.09290304),
            ("yd2", "Square yards", 0.83612736),
            ("acre", "Acres", 4046.8564224),
            ("mi2", "Square miles", 2_589_988.110336),
        ],
    )
});

// US customary volumes
pub static VOLUME: Lazy<ConversionTable> = Lazy::new(|| {
    ConversionTable::new(
        Category::Volume,
        "l",
        &[
            ("ml", "Milliliters", 0.001),
            ("l", "Liters", 1.0),
            ("m3", "Cubic meters", 1000.0),
            ("tsp", "Teaspoons", 0.00492892159375),
            ("tbsp", "Tablespoons", 0.01478676478125),
            ("floz", "Fluid ounces", 0.0295735295625),
            ("cup", "Cups", 0.2365882365),
            ("pt", "Pints", 0.473176473),
            ("qt", "Quarts", 0.946352946),
            ("gal", "Gallons", 3.785411784),
        ],
    )
});

pub static SPEED: Lazy<ConversionTable> = Lazy::new(|| {
    ConversionTable::new(
        Category::Speed,
        "mps",
        &[
            ("mps", "Meters per second", 1.0),
            ("kph", "Kilometers per hour", 1000.0 / 3600.0),
            ("mph", "Miles per hour", 0.44704),
            ("fps", "Feet per second", 0.3048),
            ("knot", "Knots", 1852.0 / 3600.0),
        ],
    )
});

pub static ENERGY: Lazy<ConversionTable> = Lazy::new(|| {
    ConversionTable::new(
        Category::Energy,
        "j",
        &[
            ("j", "Joules", 1.0),
            ("kj", "Kilojoules", 1000.0),
            ("cal", "Calories", 4.184),
            ("kcal", "Kilocalories", 4184.0),
            ("wh", "Watt-hours", 3600.0),
            ("kwh", "Kilowatt-hours", 3.6e6),
            ("btu", "British thermal units", 1055.05585262),
            ("ev", "Electronvolts", 1.602176634e-19),
        ],
    )
});
