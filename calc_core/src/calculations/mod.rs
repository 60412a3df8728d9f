//! # Calculation Requests
//!
//! One tagged enum covering every calculator so a caller can drive the whole
//! library through JSON. Each calculator module follows the pattern:
//!
//! - `*Input` - input parameters (JSON-serializable)
//! - a result struct (JSON-serializable)
//! - a pure function from the input to `CalcResult<result>`
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{CalculationOutput, CalculationRequest};
//! use calc_core::settings::CalcSettings;
//!
//! let request: CalculationRequest =
//!     serde_json::from_str(r#"{ "type": "Gcd", "numbers": [48, 18] }"#).unwrap();
//! assert_eq!(request.calc_type(), "Gcd");
//!
//! match request.run(&CalcSettings::default()).unwrap() {
//!     CalculationOutput::Gcd(r) => assert_eq!((r.gcd, r.lcm), (6, 144)),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::algebra::{self, QuadraticInput, QuadraticSolution, RatioInput, RatioResult};
use crate::dates::{
    self, AgeBreakdown, AgeInput, BusinessDays, BusinessDaysInput, Countdown, CountdownInput,
    DateOffsetInput, DurationInput, DurationParts, OffsetDate, TimeZoneInput, ZoneProjection,
};
use crate::errors::CalcResult;
use crate::finance::{
    self, Amortization, AmortizationInput, CompoundInterest, CompoundInterestInput, SimpleInterest,
    SimpleInterestInput, SipInput, SipProjection, SwpInput, SwpSimulation, TaxInput, TaxResult,
};
use crate::geometry::{self, GeometryInput, GeometryResult};
use crate::health::{self, BmiInput, BmiResult};
use crate::number_theory::{
    self, FactorInput, FactorialInput, FactorialResult, FactorizationResult, GcdInput, GcdListResult,
};
use crate::outcome::Outcome;
use crate::settings::CalcSettings;
use crate::statistics::{self, StatisticsInput, Summary};
use crate::units::{self, ConversionInput, ConversionResult};

/// Every calculation the library can run.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Amortization", "principal": 250000.0, "annual_rate_pct": 6.5, "term_years": 30 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    Convert(ConversionInput),
    Age(AgeInput),
    BusinessDays(BusinessDaysInput),
    Duration(DurationInput),
    Countdown(CountdownInput),
    TimeZone(TimeZoneInput),
    DateOffset(DateOffsetInput),
    Amortization(AmortizationInput),
    CompoundInterest(CompoundInterestInput),
    SimpleInterest(SimpleInterestInput),
    Tax(TaxInput),
    Sip(SipInput),
    Swp(SwpInput),
    Gcd(GcdInput),
    /// Prime factors, divisors and perfect/abundant/deficient classification
    Factorize(FactorInput),
    Factorial(FactorialInput),
    Statistics(StatisticsInput),
    Geometry(GeometryInput),
    Quadratic(QuadraticInput),
    Ratio(RatioInput),
    Bmi(BmiInput),
}

/// Result of a [`CalculationRequest`], tagged with the same `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "result")]
pub enum CalculationOutput {
    Convert(ConversionResult),
    Age(AgeBreakdown),
    BusinessDays(BusinessDays),
    Duration(DurationParts),
    Countdown(Countdown),
    TimeZone(ZoneProjection),
    DateOffset(OffsetDate),
    Amortization(Amortization),
    CompoundInterest(CompoundInterest),
    SimpleInterest(SimpleInterest),
    Tax(TaxResult),
    Sip(SipProjection),
    Swp(SwpSimulation),
    Gcd(GcdListResult),
    Factorize(FactorizationResult),
    Factorial(FactorialResult),
    Statistics(Summary),
    Geometry(GeometryResult),
    Quadratic(QuadraticSolution),
    Ratio(RatioResult),
    Bmi(BmiResult),
}

impl CalculationRequest {
    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationRequest::Convert(_) => "Convert",
            CalculationRequest::Age(_) => "Age",
            CalculationRequest::BusinessDays(_) => "BusinessDays",
            CalculationRequest::Duration(_) => "Duration",
            CalculationRequest::Countdown(_) => "Countdown",
            CalculationRequest::TimeZone(_) => "TimeZone",
            CalculationRequest::DateOffset(_) => "DateOffset",
            CalculationRequest::Amortization(_) => "Amortization",
            CalculationRequest::CompoundInterest(_) => "CompoundInterest",
            CalculationRequest::SimpleInterest(_) => "SimpleInterest",
            CalculationRequest::Tax(_) => "Tax",
            CalculationRequest::Sip(_) => "Sip",
            CalculationRequest::Swp(_) => "Swp",
            CalculationRequest::Gcd(_) => "Gcd",
            CalculationRequest::Factorize(_) => "Factorize",
            CalculationRequest::Factorial(_) => "Factorial",
            CalculationRequest::Statistics(_) => "Statistics",
            CalculationRequest::Geometry(_) => "Geometry",
            CalculationRequest::Quadratic(_) => "Quadratic",
            CalculationRequest::Ratio(_) => "Ratio",
            CalculationRequest::Bmi(_) => "Bmi",
        }
    }

    /// Run the calculation under `settings`.
    pub fn run(&self, settings: &CalcSettings) -> CalcResult<CalculationOutput> {
        tracing::debug!(calc_type = self.calc_type(), "running calculation");
        let output = match self {
            CalculationRequest::Convert(i) => CalculationOutput::Convert(units::calculate(i)?),
            CalculationRequest::Age(i) => CalculationOutput::Age(dates::age::calculate(i)?),
            CalculationRequest::BusinessDays(i) => {
                CalculationOutput::BusinessDays(dates::business_days::calculate(i)?)
            }
            CalculationRequest::Duration(i) => CalculationOutput::Duration(dates::duration::calculate(i)?),
            CalculationRequest::Countdown(i) => CalculationOutput::Countdown(i.evaluate()),
            CalculationRequest::TimeZone(i) => CalculationOutput::TimeZone(dates::timezone::calculate(i)?),
            CalculationRequest::DateOffset(i) => CalculationOutput::DateOffset(dates::offset::calculate(i)?),
            CalculationRequest::Amortization(i) => {
                CalculationOutput::Amortization(finance::amortization::calculate(i)?)
            }
            CalculationRequest::CompoundInterest(i) => CalculationOutput::CompoundInterest(
                finance::compound_interest(i.principal, i.rate_pct, i.years, i.compounds_per_year)?,
            ),
            CalculationRequest::SimpleInterest(i) => {
                CalculationOutput::SimpleInterest(finance::simple_interest(i.principal, i.rate_pct, i.years)?)
            }
            CalculationRequest::Tax(i) => {
                let brackets = if i.brackets.is_empty() { &settings.tax_brackets } else { &i.brackets };
                CalculationOutput::Tax(finance::progressive_tax(i.income, brackets)?)
            }
            CalculationRequest::Sip(i) => CalculationOutput::Sip(finance::sip_future_value(
                i.monthly_investment,
                i.annual_return_pct,
                i.years,
                i.timing,
            )?),
            CalculationRequest::Swp(i) => CalculationOutput::Swp(finance::simulate_swp(
                i.corpus,
                i.monthly_withdrawal,
                i.annual_return_pct,
                i.years,
                settings.max_projection_months,
            )?),
            CalculationRequest::Gcd(i) => CalculationOutput::Gcd(number_theory::gcd::calculate(i)?),
            CalculationRequest::Factorize(i) => {
                CalculationOutput::Factorize(number_theory::classify_factors(i.n)?)
            }
            CalculationRequest::Factorial(i) => {
                CalculationOutput::Factorial(number_theory::factorial_summary(i.n, settings.factorial_limit)?)
            }
            CalculationRequest::Statistics(i) => CalculationOutput::Statistics(statistics::calculate(i)?),
            CalculationRequest::Geometry(i) => CalculationOutput::Geometry(geometry::calculate(i)?),
            CalculationRequest::Quadratic(i) => {
                CalculationOutput::Quadratic(algebra::solve_quadratic(i.a, i.b, i.c)?)
            }
            CalculationRequest::Ratio(i) => CalculationOutput::Ratio(algebra::calculate_ratio(i)?),
            CalculationRequest::Bmi(i) => CalculationOutput::Bmi(health::calculate(i)?),
        };
        Ok(output)
    }

    /// Run and fold the result into an [`Outcome`].
    pub fn outcome(&self, settings: &CalcSettings) -> Outcome<CalculationOutput> {
        self.run(settings).into()
    }
}

/// Parse and run a JSON request. A body that is not a valid request is
/// rejected with `SerializationError`.
pub fn run_json(json: &str, settings: &CalcSettings) -> Outcome<CalculationOutput> {
    match CalculationRequest::from_json(json) {
        Ok(request) => request.outcome(settings),
        Err(e) => Outcome::Rejected(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(json: &str) -> CalcResult<CalculationOutput> {
        CalculationRequest::from_json(json)?.run(&CalcSettings::default())
    }

    #[test]
    fn test_convert_request() {
        let out = run(r#"{"type":"Convert","category":"Length","value":1.0,"from_unit":"km","to_unit":"m"}"#)
            .unwrap();
        match out {
            CalculationOutput::Convert(r) => assert!((r.converted - 1000.0).abs() < 1e-9),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_factorial_uses_configured_limit() {
        let request = CalculationRequest::Factorial(FactorialInput { n: 50 });
        let strict = CalcSettings { factorial_limit: 20, ..CalcSettings::default() };
        assert_eq!(request.run(&strict).unwrap_err().error_code(), "LIMIT_EXCEEDED");
        assert!(request.run(&CalcSettings::default()).is_ok());
    }

    #[test]
    fn test_tax_falls_back_to_configured_brackets() {
        let settings = CalcSettings {
            tax_brackets: vec![finance::TaxBracket::new(10_000.0, 0.0), finance::TaxBracket::top(10.0)],
            ..CalcSettings::default()
        };
        let request = CalculationRequest::from_json(r#"{"type":"Tax","income":20000.0}"#).unwrap();
        match request.run(&settings).unwrap() {
            CalculationOutput::Tax(t) => assert!((t.tax - 1000.0).abs() < 1e-9),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(request.run(&CalcSettings::default()).unwrap_err().error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_geometry_request() {
        let out = run(r#"{"type":"Geometry","solid":"cube","side":3.0}"#).unwrap();
        assert!(matches!(out, CalculationOutput::Geometry(GeometryResult::Solid { volume, .. }) if volume == 27.0));
    }

    #[test]
    fn test_rejected_domain_error() {
        let outcome = run_json(r#"{"type":"Quadratic","a":0.0,"b":1.0,"c":1.0}"#, &CalcSettings::default());
        assert_eq!(outcome.error().map(|e| e.error_code()), Some("DOMAIN_ERROR"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let outcome = run_json(r#"{"type":"NoSuchThing"}"#, &CalcSettings::default());
        assert_eq!(outcome.error().map(|e| e.error_code()), Some("SERIALIZATION_ERROR"));
    }

    #[test]
    fn test_output_is_tagged() {
        let out = run(r#"{"type":"Bmi","weight":70.0,"height":175.0}"#).unwrap();
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["type"], "Bmi");
        assert_eq!(value["result"]["category"], "normal");
    }
}
