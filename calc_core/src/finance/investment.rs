//! # Systematic Investment and Withdrawal Plans
//!
//! - **SIP**: fixed monthly contribution; future value has a closed form.
//! - **SWP**: fixed monthly withdrawal from a corpus. Running out of money is
//!   path dependent, so the plan is simulated month by month and stops the
//!   first month the balance cannot cover the withdrawal.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::finance::{simulate_swp, SwpTermination};
//!
//! let plan = simulate_swp(100_000.0, 2_000.0, 6.0, 10.0, 1200).unwrap();
//! assert!(matches!(plan.termination, SwpTermination::Depleted { .. }));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::finance::amortization::MAX_TERM_YEARS;

/// When each SIP contribution is made within its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContributionTiming {
    /// Ordinary annuity: contribution at month end
    End,
    /// Annuity due: contribution at month start (earns one extra month)
    #[default]
    Start,
}

/// Result of a SIP projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipProjection {
    pub months: u32,
    pub total_invested: f64,
    pub future_value: f64,
    pub estimated_gains: f64,
}

fn months_for(field: &str, years: f64, max_months: u32) -> CalcResult<u32> {
    require_positive(field, years)?;
    let months = (years * 12.0).round();
    if months < 1.0 {
        return Err(CalcError::invalid_input(field, years.to_string(), "Duration must be at least one month"));
    }
    if months > f64::from(max_months) {
        return Err(CalcError::limit_exceeded(field, years, f64::from(max_months) / 12.0));
    }
    Ok(months as u32)
}

/// Future value of `monthly_investment` contributed for `years` at
/// `annual_return_pct`, compounded monthly.
///
/// ```text
/// i = annual_return_pct / 100 / 12
/// FV = P * ((1 + i)^n - 1) / i            (End)
/// FV = P * ((1 + i)^n - 1) / i * (1 + i)  (Start)
/// FV = P * n                              (i = 0)
/// ```
///
/// The plan may run at most [`MAX_TERM_YEARS`]; a future value too large for
/// an `f64` is an `Overflow`.
pub fn sip_future_value(
    monthly_investment: f64,
    annual_return_pct: f64,
    years: f64,
    timing: ContributionTiming,
) -> CalcResult<SipProjection> {
    require_positive("monthly_investment", monthly_investment)?;
    require_non_negative("annual_return_pct", annual_return_pct)?;
    let months = months_for("years", years, (MAX_TERM_YEARS * 12.0) as u32)?;

    let n = f64::from(months);
    let i = annual_return_pct / 100.0 / 12.0;
    let future_value = if i == 0.0 {
        monthly_investment * n
    } else {
        let ordinary = monthly_investment * ((1.0 + i).powf(n) - 1.0) / i;
        match timing {
            ContributionTiming::End => ordinary,
            ContributionTiming::Start => ordinary * (1.0 + i),
        }
    };

    let total_invested = monthly_investment * n;
    if !future_value.is_finite() || !total_invested.is_finite() {
        return Err(CalcError::overflow("sip"));
    }
    Ok(SipProjection {
        months,
        total_invested,
        future_value,
        estimated_gains: future_value - total_invested,
    })
}

/// How a withdrawal plan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SwpTermination {
    /// Every planned withdrawal was paid in full
    Completed,
    /// The balance could not cover the withdrawal in `month` (1-based)
    Depleted { month: u32 },
}

/// Balance after one simulated month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwpMonth {
    pub month: u32,
    pub growth: f64,
    pub withdrawn: f64,
    pub balance: f64,
}

/// Result of a withdrawal simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwpSimulation {
    pub termination: SwpTermination,
    pub planned_months: u32,
    pub total_withdrawn: f64,
    pub final_balance: f64,
    pub months: Vec<SwpMonth>,
}

/// Simulate monthly withdrawals from `corpus`.
///
/// Each month applies growth first, then subtracts the withdrawal. The loop
/// is bounded by the plan length and `max_months`. When the balance would go
/// negative the remaining balance is paid out, the plan is marked
/// [`SwpTermination::Depleted`] and the simulation stops.
pub fn simulate_swp(
    corpus: f64,
    monthly_withdrawal: f64,
    annual_return_pct: f64,
    years: f64,
    max_months: u32,
) -> CalcResult<SwpSimulation> {
    require_positive("corpus", corpus)?;
    require_positive("monthly_withdrawal", monthly_withdrawal)?;
    require_non_negative("annual_return_pct", annual_return_pct)?;
    let planned_months = months_for("years", years, max_months)?;

    let rate = annual_return_pct / 100.0 / 12.0;
    let mut balance = corpus;
    let mut total_withdrawn = 0.0;
    let mut months = Vec::with_capacity(planned_months as usize);
    let mut termination = SwpTermination::Completed;

    for month in 1..=planned_months {
        let growth = balance * rate;
        balance += growth;
        let after = balance - monthly_withdrawal;
        if after < 0.0 {
            total_withdrawn += balance;
            months.push(SwpMonth {
                month,
                growth,
                withdrawn: balance,
                balance: 0.0,
            });
            balance = 0.0;
            termination = SwpTermination::Depleted { month };
            tracing::debug!(month, corpus, monthly_withdrawal, "withdrawal plan depleted");
            break;
        }
        balance = after;
        total_withdrawn += monthly_withdrawal;
        months.push(SwpMonth {
            month,
            growth,
            withdrawn: monthly_withdrawal,
            balance,
        });
    }

    Ok(SwpSimulation {
        termination,
        planned_months,
        total_withdrawn,
        final_balance: balance,
        months,
    })
}

/// Input for a SIP projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_investment: f64,
    pub annual_return_pct: f64,
    pub years: f64,
    #[serde(default)]
    pub timing: ContributionTiming,
}

/// Input for a SWP simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwpInput {
    pub corpus: f64,
    pub monthly_withdrawal: f64,
    pub annual_return_pct: f64,
    pub years: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sip_zero_return() {
        let p = sip_future_value(1000.0, 0.0, 2.0, ContributionTiming::Start).unwrap();
        assert_eq!(p.months, 24);
        assert_eq!(p.future_value, 24_000.0);
        assert_eq!(p.estimated_gains, 0.0);
    }

    #[test]
    fn test_sip_annuity_due_exceeds_ordinary() {
        let due = sip_future_value(5000.0, 12.0, 10.0, ContributionTiming::Start).unwrap();
        let ordinary = sip_future_value(5000.0, 12.0, 10.0, ContributionTiming::End).unwrap();
        assert!((due.future_value - ordinary.future_value * 1.01).abs() < 1e-6);
        // 5000/month for 10y at 12% (annuity due) is about 11.6 lakh
        assert!((due.future_value - 1_161_695.38).abs() < 1.0);
    }

    #[test]
    fn test_sip_bounds() {
        let err = sip_future_value(100.0, 10_000.0, 100.0, ContributionTiming::End).unwrap_err();
        assert_eq!(err, CalcError::overflow("sip"));

        let err = sip_future_value(100.0, 8.0, 500.0, ContributionTiming::End).unwrap_err();
        assert!(matches!(err, CalcError::LimitExceeded { .. }));
    }

    #[test]
    fn test_swp_completes_when_growth_covers_withdrawals() {
        let sim = simulate_swp(1_000_000.0, 1_000.0, 6.0, 5.0, 1200).unwrap();
        assert_eq!(sim.termination, SwpTermination::Completed);
        assert_eq!(sim.months.len(), 60);
        assert!((sim.total_withdrawn - 60_000.0).abs() < 1e-6);
        assert!(sim.final_balance > 1_000_000.0);
    }

    #[test]
    fn test_swp_depletes_early() {
        // Zero growth: 10_000 / 3_000 covers three months, fails in the fourth
        let sim = simulate_swp(10_000.0, 3_000.0, 0.0, 1.0, 1200).unwrap();
        assert_eq!(sim.termination, SwpTermination::Depleted { month: 4 });
        assert_eq!(sim.months.len(), 4);
        assert_eq!(sim.final_balance, 0.0);
        assert!((sim.total_withdrawn - 10_000.0).abs() < 1e-9);
        assert!((sim.months[3].withdrawn - 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_swp_exact_depletion_is_not_negative() {
        let sim = simulate_swp(6_000.0, 3_000.0, 0.0, 0.25, 1200).unwrap();
        // Months 1 and 2 drain to zero exactly; month 3 finds nothing left
        assert_eq!(sim.termination, SwpTermination::Depleted { month: 3 });
    }

    #[test]
    fn test_swp_respects_month_limit() {
        assert!(simulate_swp(1000.0, 10.0, 5.0, 200.0, 1200).is_err());
    }

    #[test]
    fn test_termination_serialization() {
        let json = serde_json::to_string(&SwpTermination::Depleted { month: 7 }).unwrap();
        assert_eq!(json, r#"{"kind":"depleted","month":7}"#);
    }
}
