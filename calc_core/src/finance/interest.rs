//! Compound and simple interest.

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::finance::amortization::MAX_TERM_YEARS;

/// Balance at the end of a whole year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearBalance {
    pub year: u32,
    pub balance: f64,
    pub interest_earned: f64,
}

/// Result of a compound interest projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterest {
    /// Final amount `A = P(1 + r/n)^(n t)`
    pub amount: f64,
    pub interest: f64,
    /// Balance at each whole year up to `years`
    pub yearly: Vec<YearBalance>,
}

/// Result of a simple interest calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterest {
    /// `I = P r t`
    pub interest: f64,
    pub amount: f64,
}

/// Compound `principal` at `rate_pct` per year, `compounds_per_year` times a year.
///
/// `years` is capped at [`MAX_TERM_YEARS`]; a final amount too large for an
/// `f64` is an `Overflow`.
///
/// ```rust
/// use calc_core::finance::compound_interest;
///
/// let result = compound_interest(1000.0, 5.0, 10.0, 12).unwrap();
/// assert!((result.amount - 1647.01).abs() < 0.01);
/// ```
pub fn compound_interest(
    principal: f64,
    rate_pct: f64,
    years: f64,
    compounds_per_year: u32,
) -> CalcResult<CompoundInterest> {
    require_positive("principal", principal)?;
    require_non_negative("rate_pct", rate_pct)?;
    require_positive("years", years)?;
    if years > MAX_TERM_YEARS {
        return Err(CalcError::limit_exceeded("years", years, MAX_TERM_YEARS));
    }
    if compounds_per_year == 0 {
        return Err(CalcError::invalid_input(
            "compounds_per_year",
            "0",
            "Must compound at least once per year",
        ));
    }

    let n = f64::from(compounds_per_year);
    let per_period = rate_pct / 100.0 / n;
    let amount_at = |t: f64| principal * (1.0 + per_period).powf(n * t);

    // Balances only grow, so the final amount bounds every yearly row
    let amount = amount_at(years);
    if !amount.is_finite() {
        return Err(CalcError::overflow("compound_interest"));
    }

    let mut yearly = Vec::new();
    let mut previous = principal;
    for year in 1..=(years.floor() as u32) {
        let balance = amount_at(f64::from(year));
        yearly.push(YearBalance {
            year,
            balance,
            interest_earned: balance - previous,
        });
        previous = balance;
    }

    Ok(CompoundInterest {
        amount,
        interest: amount - principal,
        yearly,
    })
}

/// Simple interest on `principal` at `rate_pct` per year for `years`.
pub fn simple_interest(principal: f64, rate_pct: f64, years: f64) -> CalcResult<SimpleInterest> {
    require_positive("principal", principal)?;
    require_non_negative("rate_pct", rate_pct)?;
    require_positive("years", years)?;

    let interest = principal * rate_pct / 100.0 * years;
    Ok(SimpleInterest {
        interest,
        amount: principal + interest,
    })
}

/// Input for a compound interest projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: f64,
    pub rate_pct: f64,
    pub years: f64,
    #[serde(default = "default_compounds")]
    pub compounds_per_year: u32,
}

fn default_compounds() -> u32 {
    12
}

/// Input for a simple interest calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    pub principal: f64,
    pub rate_pct: f64,
    pub years: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_compounding() {
        let r = compound_interest(1000.0, 10.0, 2.0, 1).unwrap();
        assert!((r.amount - 1210.0).abs() < 1e-9);
        assert!((r.interest - 210.0).abs() < 1e-9);
        assert_eq!(r.yearly.len(), 2);
        assert!((r.yearly[0].balance - 1100.0).abs() < 1e-9);
        assert!((r.yearly[1].interest_earned - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_years() {
        let r = compound_interest(1000.0, 12.0, 0.5, 12).unwrap();
        assert!(r.yearly.is_empty());
        assert!((r.amount - 1000.0 * 1.01f64.powi(6)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_rate() {
        let r = compound_interest(500.0, 0.0, 3.0, 4).unwrap();
        assert_eq!(r.amount, 500.0);
    }

    #[test]
    fn test_term_limit() {
        let err = compound_interest(1000.0, 5.0, 5_000_000.0, 12).unwrap_err();
        assert!(matches!(err, CalcError::LimitExceeded { .. }));
        assert_eq!(compound_interest(1000.0, 5.0, MAX_TERM_YEARS, 1).unwrap().yearly.len(), 100);
    }

    #[test]
    fn test_infinite_amount_rejected() {
        let err = compound_interest(1000.0, 1_000_000.0, 100.0, 12).unwrap_err();
        assert_eq!(err, CalcError::overflow("compound_interest"));
    }

    #[test]
    fn test_simple_interest() {
        let r = simple_interest(2000.0, 5.0, 3.0).unwrap();
        assert!((r.interest - 300.0).abs() < 1e-9);
        assert!((r.amount - 2300.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_principal_and_time() {
        assert!(compound_interest(0.0, 5.0, 1.0, 12).is_err());
        assert!(compound_interest(100.0, 5.0, 0.0, 12).is_err());
        assert!(compound_interest(100.0, 5.0, 1.0, 0).is_err());
        assert!(simple_interest(-5.0, 5.0, 1.0).is_err());
        assert!(simple_interest(100.0, 5.0, -1.0).is_err());
    }
}
