//! # Financial Formulas
//!
//! Loan, interest, tax and investment-plan calculators.
//!
//! ## Edge-case convention
//!
//! Every calculator here treats a zero or negative amount, term or duration
//! as invalid input (`CalcError::InvalidInput`). Rates may be zero. None of
//! them returns an all-zero result for a degenerate loan or plan; a caller
//! with empty fields reports `Outcome::Pending` instead.
//!
//! - [`amortization`] - monthly payment and schedule
//! - [`interest`] - compound and simple interest
//! - [`tax`] - marginal bracket taxation
//! - [`investment`] - SIP projection and SWP simulation

pub mod amortization;
pub mod interest;
pub mod investment;
pub mod tax;

pub use amortization::{amortize, monthly_payment, Amortization, AmortizationInput, AmortizationRow};
pub use interest::{
    compound_interest, simple_interest, CompoundInterest, CompoundInterestInput, SimpleInterest,
    SimpleInterestInput, YearBalance,
};
pub use investment::{
    simulate_swp, sip_future_value, ContributionTiming, SipInput, SipProjection, SwpInput, SwpMonth,
    SwpSimulation, SwpTermination,
};
pub use tax::{progressive_tax, validate_brackets, TaxBracket, TaxInput, TaxResult, TaxSlice};
