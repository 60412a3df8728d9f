//! # Loan Amortization
//!
//! Fixed-rate, fixed-term loan with monthly payments.
//!
//! ## Formula
//!
//! ```text
//! r = annual_rate_pct / 100 / 12
//! n = term_years * 12
//! payment = P * r / (1 - (1 + r)^-n)                 (r > 0)
//! payment = P / n                                     (r = 0)
//! ```
//!
//! Each schedule row charges `balance * r` interest; the rest of the payment
//! reduces principal. The final row pays off whatever balance is left so the
//! schedule always ends at exactly zero.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::finance::amortize;
//!
//! let loan = amortize(200_000.0, 6.0, 30.0).unwrap();
//! assert!((loan.monthly_payment - 1199.10).abs() < 0.01);
//! assert_eq!(loan.schedule.len(), 360);
//! assert_eq!(loan.schedule.last().unwrap().balance, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};

/// Longest supported loan term in years
pub const MAX_TERM_YEARS: f64 = 100.0;

/// One month of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month number
    pub period: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Balance after this payment
    pub balance: f64,
}

/// Payment and full schedule for a loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amortization {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub schedule: Vec<AmortizationRow>,
}

/// Monthly payment for `principal` at `monthly_rate` over `months`.
///
/// Uses the discount form so a very high rate tends to `P * r` instead of
/// dividing two infinities.
pub fn monthly_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate == 0.0 {
        return principal / f64::from(months);
    }
    let discount = (1.0 + monthly_rate).powi(-(months as i32));
    principal * monthly_rate / (1.0 - discount)
}

/// Build the payment and month-by-month schedule for a loan.
///
/// # Errors
///
/// - `InvalidInput` for a non-positive principal or term, negative rate,
///   or a term under one month or over [`MAX_TERM_YEARS`]
/// - `Overflow` when the payment or totals are not finite
pub fn amortize(principal: f64, annual_rate_pct: f64, term_years: f64) -> CalcResult<Amortization> {
    require_positive("principal", principal)?;
    require_non_negative("annual_rate_pct", annual_rate_pct)?;
    require_positive("term_years", term_years)?;
    if term_years > MAX_TERM_YEARS {
        return Err(CalcError::invalid_input(
            "term_years",
            term_years.to_string(),
            format!("Term cannot exceed {} years", MAX_TERM_YEARS),
        ));
    }

    let months = (term_years * 12.0).round() as u32;
    if months == 0 {
        return Err(CalcError::invalid_input(
            "term_years",
            term_years.to_string(),
            "Term must be at least one month",
        ));
    }

    let rate = annual_rate_pct / 100.0 / 12.0;
    let payment = monthly_payment(principal, rate, months);
    if !payment.is_finite() {
        return Err(CalcError::overflow("amortization"));
    }

    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = principal;
    for period in 1..=months {
        let interest = balance * rate;
        let row = if period == months {
            // Absorb accumulated rounding drift
            let principal_part = balance;
            balance = 0.0;
            AmortizationRow {
                period,
                payment: principal_part + interest,
                principal: principal_part,
                interest,
                balance,
            }
        } else {
            let principal_part = (payment - interest).min(balance);
            balance = (balance - principal_part).max(0.0);
            AmortizationRow {
                period,
                payment: principal_part + interest,
                principal: principal_part,
                interest,
                balance,
            }
        };
        schedule.push(row);
    }

    let total_paid: f64 = schedule.iter().map(|r| r.payment).sum();
    if !total_paid.is_finite() {
        return Err(CalcError::overflow("amortization"));
    }
    Ok(Amortization {
        monthly_payment: payment,
        total_paid,
        total_interest: total_paid - principal,
        schedule,
    })
}

/// Input for a loan amortization.
///
/// ## JSON Example
///
/// ```json
/// { "principal": 250000.0, "annual_rate_pct": 6.5, "term_years": 30.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationInput {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub term_years: f64,
}

pub fn calculate(input: &AmortizationInput) -> CalcResult<Amortization> {
    amortize(input.principal, input.annual_rate_pct, input.term_years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_payment_is_exact() {
        let loan = amortize(200_000.0, 0.0, 1.0).unwrap();
        assert_eq!(loan.monthly_payment, 200_000.0 / 12.0);
        assert_eq!(loan.schedule.len(), 12);
        assert!(loan.total_interest.abs() < 1e-6);
    }

    #[test]
    fn test_principal_portions_sum_to_principal() {
        for (p, rate, years) in [(200_000.0, 0.0, 1.0), (350_000.0, 7.25, 30.0), (12_500.0, 3.9, 5.0)] {
            let loan = amortize(p, rate, years).unwrap();
            let repaid: f64 = loan.schedule.iter().map(|r| r.principal).sum();
            assert!((repaid - p).abs() < 0.01, "principal {} repaid {}", p, repaid);
        }
    }

    #[test]
    fn test_row_invariants() {
        let loan = amortize(100_000.0, 5.0, 15.0).unwrap();
        let mut previous = 100_000.0;
        for row in &loan.schedule {
            assert!((row.payment - (row.principal + row.interest)).abs() < 1e-9);
            assert!(row.balance <= previous);
            previous = row.balance;
        }
        assert_eq!(loan.schedule.last().unwrap().balance, 0.0);
    }

    #[test]
    fn test_payment_matches_annuity_formula() {
        // 6% over 30 years on 200k is the textbook 1199.10
        let loan = amortize(200_000.0, 6.0, 30.0).unwrap();
        assert!((loan.monthly_payment - 1199.10).abs() < 0.01);
        assert!((loan.total_interest - 231_676.38).abs() < 1.0);
    }

    #[test]
    fn test_extreme_rate_stays_finite() {
        // (1 + r)^n is infinite here; the payment is just the monthly interest
        let loan = amortize(1000.0, 10_000.0, 30.0).unwrap();
        let rate = 10_000.0 / 100.0 / 12.0;
        assert!(loan.monthly_payment.is_finite());
        assert!((loan.monthly_payment - 1000.0 * rate).abs() < 1e-6);
        assert!((loan.schedule[0].principal).abs() < 1e-6);
        assert_eq!(loan.schedule.last().unwrap().balance, 0.0);
        let repaid: f64 = loan.schedule.iter().map(|r| r.principal).sum();
        assert!((repaid - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_totals_rejected() {
        let err = amortize(1e308, 1200.0, 30.0).unwrap_err();
        assert_eq!(err, CalcError::overflow("amortization"));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(amortize(0.0, 5.0, 30.0).is_err());
        assert!(amortize(-1000.0, 5.0, 30.0).is_err());
        assert!(amortize(1000.0, -1.0, 30.0).is_err());
        assert!(amortize(1000.0, 5.0, 0.0).is_err());
        assert!(amortize(1000.0, 5.0, 0.01).is_err());
        assert!(amortize(1000.0, 5.0, 150.0).is_err());
    }

    #[test]
    fn test_serialization() {
        let loan = amortize(1000.0, 12.0, 1.0).unwrap();
        let json = serde_json::to_string(&loan).unwrap();
        assert!(json.contains("monthly_payment"));
        let roundtrip: Amortization = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.schedule.len(), 12);
    }
}
