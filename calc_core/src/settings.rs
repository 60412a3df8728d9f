//! # Calculator Settings
//!
//! Tunable bounds and defaults shared by every calculator. Settings are plain
//! serde data so they can be read from a TOML file; every field has a default
//! and a partial file only overrides what it names.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::CalcSettings;
//!
//! let settings = CalcSettings::from_toml_str(r#"
//!     factorial_limit = 500
//!
//!     [[tax_brackets]]
//!     upper_bound = 10000.0
//!     rate_pct = 0.0
//!
//!     [[tax_brackets]]
//!     rate_pct = 20.0
//! "#).unwrap();
//!
//! assert_eq!(settings.factorial_limit, 500);
//! assert_eq!(settings.max_projection_months, 1200);
//! assert_eq!(settings.tax_brackets.len(), 2);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::finance::{validate_brackets, TaxBracket};
use crate::number_theory::DEFAULT_FACTORIAL_LIMIT;

/// Hard ceiling on `factorial_limit`; beyond this a single request can
/// take seconds and produce megabytes of digits.
pub const MAX_FACTORIAL_LIMIT: u32 = 100_000;

/// Settings applied to every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Largest `n` accepted by the factorial calculator
    pub factorial_limit: u32,

    /// Upper bound on simulated months for withdrawal plans (1200 = 100 years)
    pub max_projection_months: u32,

    /// Decimal places used when formatting results for display
    pub display_precision: usize,

    /// Default tax schedule for requests that do not carry their own brackets
    pub tax_brackets: Vec<TaxBracket>,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            factorial_limit: DEFAULT_FACTORIAL_LIMIT,
            max_projection_months: 1200,
            display_precision: 2,
            tax_brackets: Vec::new(),
        }
    }
}

impl CalcSettings {
    /// Parse settings from TOML text and validate them.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        Self::parse(text, "<inline>")
    }

    /// Read and validate a settings file.
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| CalcError::config(&origin, e.to_string()))?;
        let settings = Self::parse(&text, &origin)?;
        tracing::debug!(path = %origin, "loaded settings");
        Ok(settings)
    }

    fn parse(text: &str, origin: &str) -> CalcResult<Self> {
        let settings: CalcSettings = toml::from_str(text).map_err(|e| CalcError::config(origin, e.to_string()))?;
        settings
            .validate()
            .map_err(|e| CalcError::config(origin, e.to_string()))?;
        Ok(settings)
    }

    /// Check every bound is usable.
    pub fn validate(&self) -> CalcResult<()> {
        if self.factorial_limit > MAX_FACTORIAL_LIMIT {
            return Err(CalcError::limit_exceeded(
                "factorial_limit",
                self.factorial_limit,
                MAX_FACTORIAL_LIMIT,
            ));
        }
        if self.max_projection_months == 0 {
            return Err(CalcError::invalid_input(
                "max_projection_months",
                "0",
                "Must allow at least one month",
            ));
        }
        if self.display_precision > 12 {
            return Err(CalcError::invalid_input(
                "display_precision",
                self.display_precision.to_string(),
                "At most 12 decimal places",
            ));
        }
        if !self.tax_brackets.is_empty() {
            validate_brackets(&self.tax_brackets)?;
        }
        Ok(())
    }

    /// Format `value` with the configured number of decimals.
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.display_precision, value)
    }
}
