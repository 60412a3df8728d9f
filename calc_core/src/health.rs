//! # Health
//!
//! Body mass index with WHO adult weight categories.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};

/// Pounds-and-inches BMI constant: `703 * lb / in^2`
const IMPERIAL_FACTOR: f64 = 703.0;

/// Unit system for weight and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementSystem {
    /// Kilograms and centimetres
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

/// WHO adult BMI categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Band lower bounds: 18.5, 25, 30.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Body mass index.
///
/// ```rust
/// use calc_core::health::{bmi, BmiCategory, MeasurementSystem};
///
/// let r = bmi(70.0, 175.0, MeasurementSystem::Metric).unwrap();
/// assert!((r.bmi - 22.857).abs() < 1e-3);
/// assert_eq!(r.category, BmiCategory::Normal);
/// ```
pub fn bmi(weight: f64, height: f64, system: MeasurementSystem) -> CalcResult<BmiResult> {
    let weight = require_positive("weight", weight)?;
    let height = require_positive("height", height)?;
    let value = match system {
        MeasurementSystem::Metric => {
            let metres = height / 100.0;
            weight / (metres * metres)
        }
        MeasurementSystem::Imperial => IMPERIAL_FACTOR * weight / (height * height),
    };
    Ok(BmiResult {
        bmi: value,
        category: BmiCategory::from_bmi(value),
    })
}

/// Input for the BMI calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight: f64,
    pub height: f64,
    #[serde(default)]
    pub system: MeasurementSystem,
}

pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    bmi(input.weight, input.height, input.system)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_and_imperial_agree() {
        let metric = bmi(70.0, 175.0, MeasurementSystem::Metric).unwrap();
        // 70 kg = 154.324 lb, 175 cm = 68.898 in
        let imperial = bmi(154.324, 68.898, MeasurementSystem::Imperial).unwrap();
        assert!((metric.bmi - imperial.bmi).abs() < 0.05);
    }

    #[test]
    fn test_categories() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(bmi(0.0, 175.0, MeasurementSystem::Metric).is_err());
        assert!(bmi(70.0, -1.0, MeasurementSystem::Metric).is_err());
    }

    #[test]
    fn test_input_defaults_to_metric() {
        let input: BmiInput = serde_json::from_str(r#"{"weight":90.0,"height":180.0}"#).unwrap();
        let r = calculate(&input).unwrap();
        assert_eq!(r.category, BmiCategory::Overweight);
    }
}
