//! Arbitrary-precision factorial.
//!
//! `n!` outgrows `u64` at 21 and `f64` precision long before that, so the
//! product is accumulated in a [`BigUint`]. Inputs above a configurable limit
//! are refused before any work is done.

use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default largest `n` accepted by [`factorial`]
pub const DEFAULT_FACTORIAL_LIMIT: u32 = 1000;

/// Compute `n!` exactly.
///
/// # Errors
///
/// - `DomainError` for negative `n`
/// - `LimitExceeded` for `n > limit`
///
/// ```rust
/// use calc_core::number_theory::factorial;
///
/// assert_eq!(factorial(5, 1000).unwrap().to_string(), "120");
/// assert_eq!(factorial(0, 1000).unwrap().to_string(), "1");
/// assert!(factorial(-1, 1000).is_err());
/// ```
pub fn factorial(n: i64, limit: u32) -> CalcResult<BigUint> {
    if n < 0 {
        return Err(CalcError::domain("factorial", "factorial is undefined for negative numbers"));
    }
    if n > i64::from(limit) {
        tracing::debug!(n, limit, "factorial input above limit");
        return Err(CalcError::limit_exceeded("n", n, limit));
    }
    Ok((2..=n as u32).fold(BigUint::one(), |acc, k| acc * k))
}

/// Number of trailing zeros in `n!` (Legendre's formula for the prime 5).
pub fn factorial_trailing_zeros(n: u32) -> u32 {
    let mut zeros = 0;
    let mut power = 5u64;
    while power <= u64::from(n) {
        zeros += (u64::from(n) / power) as u32;
        power *= 5;
    }
    zeros
}

/// Exact factorial with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorialResult {
    pub n: u32,
    /// Decimal digits of `n!`
    pub value: String,
    pub digits: usize,
    pub trailing_zeros: u32,
}

pub fn factorial_summary(n: i64, limit: u32) -> CalcResult<FactorialResult> {
    let value = factorial(n, limit)?.to_string();
    let n = n as u32;
    Ok(FactorialResult {
        n,
        digits: value.len(),
        trailing_zeros: factorial_trailing_zeros(n),
        value,
    })
}

/// Input for a factorial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorialInput {
    pub n: i64,
}
