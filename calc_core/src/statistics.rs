//! # Descriptive Statistics
//!
//! Summary statistics over a list of numbers. Every figure is derived from
//! one cleaned, sorted copy of the input so median, min, max and mode always
//! agree with each other.
//!
//! Variance and standard deviation are reported both ways: population
//! (divide by `n`) and sample (divide by `n - 1`).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::statistics::describe;
//!
//! let s = describe(&[1.0, 2.0, 2.0, 3.0, 4.0]).unwrap();
//! assert!((s.mean - 2.4).abs() < 1e-12);
//! assert_eq!(s.median, 2.0);
//! assert_eq!(s.mode.to_string(), "2");
//! assert!((s.population_std_dev - 1.0198).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::input::parse_list;

/// Most frequent value(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Mode {
    /// Every value occurs equally often
    NoMode,
    /// All values sharing the highest frequency, ascending
    Values(Vec<f64>),
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::NoMode => write!(f, "no mode"),
            Mode::Values(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

/// Summary of a list of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub population_variance: f64,
    pub population_std_dev: f64,
    /// `None` for a single value
    pub sample_variance: Option<f64>,
    pub sample_std_dev: Option<f64>,
    /// The cleaned input, ascending
    pub sorted: Vec<f64>,
}

fn mode_of(sorted: &[f64]) -> Mode {
    // Runs of equal values in the sorted list
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &v in sorted {
        match runs.last_mut() {
            Some((value, count)) if *value == v => *count += 1,
            _ => runs.push((v, 1)),
        }
    }

    let highest = runs.iter().map(|&(_, c)| c).max().unwrap_or(0);
    if runs.iter().all(|&(_, c)| c == highest) {
        return Mode::NoMode;
    }
    Mode::Values(runs.into_iter().filter(|&(_, c)| c == highest).map(|(v, _)| v).collect())
}

/// Describe `values`. Non-finite entries are ignored.
///
/// # Errors
///
/// `DomainError` if no finite values remain.
pub fn describe(values: &[f64]) -> CalcResult<Summary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return Err(CalcError::domain("statistics", "at least one number is required"));
    }
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let n = count as f64;
    let sum: f64 = sorted.iter().sum();
    let mean = sum / n;

    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let min = sorted[0];
    let max = sorted[count - 1];

    let squared_deviations: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();
    let population_variance = squared_deviations / n;
    let sample_variance = (count > 1).then(|| squared_deviations / (n - 1.0));

    Ok(Summary {
        count,
        sum,
        mean,
        median,
        mode: mode_of(&sorted),
        min,
        max,
        range: max - min,
        population_variance,
        population_std_dev: population_variance.sqrt(),
        sample_variance,
        sample_std_dev: sample_variance.map(f64::sqrt),
        sorted,
    })
}

/// Describe already-split raw entries, skipping anything non-numeric.
pub fn describe_raw<S: AsRef<str>>(items: &[S]) -> CalcResult<Summary> {
    describe(&parse_list(items))
}

/// Input for descriptive statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsInput {
    pub values: Vec<f64>,
}

pub fn calculate(input: &StatisticsInput) -> CalcResult<Summary> {
    describe(&input.values)
}
