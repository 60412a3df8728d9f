//! # calc_core - Numeric Calculator Engine
//!
//! `calc_core` is the computational heart of Tally: unit conversion, date
//! arithmetic, finance, number theory, statistics, geometry and a few
//! everyday formulas. All inputs and outputs are JSON-serializable so any
//! presentation layer (the bundled CLI, a web form, an assistant) can drive
//! it without knowing the formulas.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Three States**: "not yet computed" is never confused with zero
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::units::{convert_raw, Category};
//! use calc_core::Outcome;
//!
//! // Incomplete input is pending, not zero
//! assert!(convert_raw("", "km", "m", Category::Length).is_pending());
//!
//! let meters = convert_raw("2.5", "km", "m", Category::Length).ready().unwrap();
//! assert!((meters - 2500.0).abs() < 1e-9);
//!
//! let rejected = convert_raw("1", "km", "kg", Category::Length);
//! assert!(matches!(rejected, Outcome::Rejected(_)));
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Length, weight, area, volume, speed, energy, temperature
//! - [`dates`] - Age, business days, durations, countdowns, time zones
//! - [`finance`] - Loans, interest, tax brackets, SIP/SWP plans
//! - [`number_theory`] - GCD/LCM, primes, factorials, divisors
//! - [`statistics`] - Descriptive statistics
//! - [`geometry`] - Areas, perimeters, volumes, surface areas
//! - [`algebra`] - Quadratic roots, ratios and proportions
//! - [`health`] - Body mass index
//! - [`calculations`] - Tagged JSON request/response for every calculator
//! - [`settings`] - Configurable bounds, TOML loading
//! - [`input`] - Raw field parsing
//! - [`outcome`] - Pending / Ready / Rejected
//! - [`errors`] - Structured error types

pub mod algebra;
pub mod calculations;
pub mod dates;
pub mod errors;
pub mod finance;
pub mod geometry;
pub mod health;
pub mod input;
pub mod number_theory;
pub mod outcome;
pub mod settings;
pub mod statistics;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationOutput, CalculationRequest};
pub use errors::{CalcError, CalcResult};
pub use outcome::Outcome;
pub use settings::CalcSettings;
