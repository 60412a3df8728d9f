//! # Progressive (Marginal) Tax
//!
//! Income is split into slices at each bracket's upper bound and every slice
//! is taxed at its own bracket's rate. A higher rate never touches income
//! below its threshold.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::finance::{progressive_tax, TaxBracket};
//!
//! let brackets = vec![
//!     TaxBracket::new(10_000.0, 0.0),
//!     TaxBracket::new(40_000.0, 20.0),
//!     TaxBracket::top(40.0),
//! ];
//! let tax = progressive_tax(50_000.0, &brackets).unwrap();
//! // 0 on the first 10k, 20% of 30k, 40% of 10k
//! assert!((tax.tax - 10_000.0).abs() < 1e-9);
//! assert_eq!(tax.marginal_rate_pct, 40.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, CalcError, CalcResult};

/// One bracket. `upper_bound = None` marks the open-ended top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    #[serde(default)]
    pub upper_bound: Option<f64>,
    pub rate_pct: f64,
}

impl TaxBracket {
    pub fn new(upper_bound: f64, rate_pct: f64) -> Self {
        TaxBracket {
            upper_bound: Some(upper_bound),
            rate_pct,
        }
    }

    /// Open-ended top bracket
    pub fn top(rate_pct: f64) -> Self {
        TaxBracket {
            upper_bound: None,
            rate_pct,
        }
    }
}

/// Tax charged on one slice of income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxSlice {
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
    pub rate_pct: f64,
    pub taxable: f64,
    pub tax: f64,
}

/// Result of a bracket-based tax calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    pub income: f64,
    pub tax: f64,
    pub net_income: f64,
    /// `tax / income` as a percentage (0 for zero income)
    pub effective_rate_pct: f64,
    /// Rate of the bracket the last dollar falls in
    pub marginal_rate_pct: f64,
    pub slices: Vec<TaxSlice>,
}

/// Check brackets are strictly ascending with sane rates and at most one
/// open-ended bracket, placed last.
pub fn validate_brackets(brackets: &[TaxBracket]) -> CalcResult<()> {
    if brackets.is_empty() {
        return Err(CalcError::missing_field("brackets"));
    }
    let mut previous = 0.0;
    for (i, bracket) in brackets.iter().enumerate() {
        if !(0.0..=100.0).contains(&bracket.rate_pct) {
            return Err(CalcError::invalid_input(
                format!("brackets[{}].rate_pct", i),
                bracket.rate_pct.to_string(),
                "Rate must be between 0 and 100",
            ));
        }
        match bracket.upper_bound {
            Some(bound) => {
                if !bound.is_finite() || bound <= previous {
                    return Err(CalcError::invalid_input(
                        format!("brackets[{}].upper_bound", i),
                        bound.to_string(),
                        "Bounds must be finite and strictly ascending",
                    ));
                }
                previous = bound;
            }
            None if i + 1 != brackets.len() => {
                return Err(CalcError::invalid_input(
                    format!("brackets[{}].upper_bound", i),
                    "none",
                    "Only the last bracket may be open-ended",
                ));
            }
            None => {}
        }
    }
    Ok(())
}

/// Compute tax on `income` across ascending `brackets`.
///
/// Income above the last bound of a fully bounded schedule is untaxed
/// beyond that bound; add a [`TaxBracket::top`] to tax it.
pub fn progressive_tax(income: f64, brackets: &[TaxBracket]) -> CalcResult<TaxResult> {
    require_non_negative("income", income)?;
    validate_brackets(brackets)?;

    let mut slices = Vec::new();
    let mut tax = 0.0;
    let mut previous_bound = 0.0;
    let mut marginal_rate_pct = 0.0;

    for bracket in brackets {
        if previous_bound >= income {
            break;
        }
        let ceiling = bracket.upper_bound.map_or(income, |b| b.min(income));
        let taxable = ceiling - previous_bound;
        let slice_tax = taxable * bracket.rate_pct / 100.0;
        tax += slice_tax;
        marginal_rate_pct = bracket.rate_pct;
        slices.push(TaxSlice {
            lower_bound: previous_bound,
            upper_bound: bracket.upper_bound,
            rate_pct: bracket.rate_pct,
            taxable,
            tax: slice_tax,
        });
        match bracket.upper_bound {
            Some(bound) => previous_bound = bound,
            None => break,
        }
    }

    Ok(TaxResult {
        income,
        tax,
        net_income: income - tax,
        effective_rate_pct: if income > 0.0 { tax / income * 100.0 } else { 0.0 },
        marginal_rate_pct,
        slices,
    })
}

/// Input for a tax calculation. Empty `brackets` fall back to the configured
/// schedule when run through [`crate::calculations::CalculationRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxInput {
    pub income: f64,
    #[serde(default)]
    pub brackets: Vec<TaxBracket>,
}

pub fn calculate(input: &TaxInput) -> CalcResult<TaxResult> {
    progressive_tax(input.income, &input.brackets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> Vec<TaxBracket> {
        vec![
            TaxBracket::new(11_000.0, 10.0),
            TaxBracket::new(44_725.0, 12.0),
            TaxBracket::new(95_375.0, 22.0),
            TaxBracket::top(24.0),
        ]
    }

    #[test]
    fn test_income_in_first_bracket() {
        let r = progressive_tax(8_000.0, &schedule()).unwrap();
        assert!((r.tax - 800.0).abs() < 1e-9);
        assert_eq!(r.slices.len(), 1);
        assert_eq!(r.marginal_rate_pct, 10.0);
    }

    #[test]
    fn test_marginal_not_flat() {
        let r = progressive_tax(50_000.0, &schedule()).unwrap();
        let expected = 1_100.0 + (44_725.0 - 11_000.0) * 0.12 + (50_000.0 - 44_725.0) * 0.22;
        assert!((r.tax - expected).abs() < 1e-6);
        assert!(r.tax < 50_000.0 * 0.22);
        assert_eq!(r.marginal_rate_pct, 22.0);
        assert!(r.effective_rate_pct < r.marginal_rate_pct);
    }

    #[test]
    fn test_top_bracket() {
        let r = progressive_tax(200_000.0, &schedule()).unwrap();
        assert_eq!(r.slices.len(), 4);
        let top = r.slices.last().unwrap();
        assert!((top.taxable - (200_000.0 - 95_375.0)).abs() < 1e-9);
    }

    #[test]
    fn test_exact_boundary_stops() {
        let r = progressive_tax(11_000.0, &schedule()).unwrap();
        assert_eq!(r.slices.len(), 1);
        assert!((r.tax - 1_100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_income() {
        let r = progressive_tax(0.0, &schedule()).unwrap();
        assert_eq!(r.tax, 0.0);
        assert_eq!(r.effective_rate_pct, 0.0);
        assert!(r.slices.is_empty());
    }

    #[test]
    fn test_invalid_brackets() {
        assert!(progressive_tax(1.0, &[]).is_err());
        assert!(validate_brackets(&[TaxBracket::new(100.0, 10.0), TaxBracket::new(50.0, 20.0)]).is_err());
        assert!(validate_brackets(&[TaxBracket::top(10.0), TaxBracket::new(50.0, 20.0)]).is_err());
        assert!(validate_brackets(&[TaxBracket::new(100.0, 150.0)]).is_err());
    }
}
