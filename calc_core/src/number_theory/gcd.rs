//! # GCD and LCM
//!
//! Euclidean algorithm, its extended form (Bezout coefficients) and a step
//! trace for showing the working.
//!
//! Signs are ignored: `gcd(-12, 18) == 6`. `gcd(a, 0) == |a|` and
//! `lcm(a, 0) == 0`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::number_theory::{gcd, lcm, extended_gcd};
//!
//! assert_eq!(gcd(48, 18), 6);
//! assert_eq!(lcm(48, 18).unwrap(), 144);
//!
//! let b = extended_gcd(240, 46).unwrap();
//! assert_eq!(240 * b.s + 46 * b.t, b.gcd);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

fn euclid(mut x: u64, mut y: u64) -> u64 {
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

/// Greatest common divisor of `|a|` and `|b|`.
pub fn gcd(a: i64, b: i64) -> u64 {
    euclid(a.unsigned_abs(), b.unsigned_abs())
}

/// Least common multiple `|a * b| / gcd(a, b)`.
///
/// # Errors
///
/// `Overflow` if the result does not fit in a `u64`.
pub fn lcm(a: i64, b: i64) -> CalcResult<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let g = gcd(a, b);
    (a.unsigned_abs() / g)
        .checked_mul(b.unsigned_abs())
        .ok_or_else(|| CalcError::overflow("lcm"))
}

/// One division step `dividend = divisor * quotient + remainder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EuclidStep {
    pub dividend: u64,
    pub divisor: u64,
    pub quotient: u64,
    pub remainder: u64,
}

/// The steps of the Euclidean algorithm and the resulting GCD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdTrace {
    pub gcd: u64,
    pub steps: Vec<EuclidStep>,
}

/// Run the Euclidean algorithm on `|a|`, `|b|` (larger first), recording
/// every step. The last non-zero remainder, i.e. the final divisor, is the GCD.
pub fn gcd_steps(a: i64, b: i64) -> GcdTrace {
    let (x, y) = (a.unsigned_abs(), b.unsigned_abs());
    let (mut dividend, mut divisor) = if x >= y { (x, y) } else { (y, x) };
    let mut steps = Vec::new();
    while divisor != 0 {
        let quotient = dividend / divisor;
        let remainder = dividend % divisor;
        steps.push(EuclidStep {
            dividend,
            divisor,
            quotient,
            remainder,
        });
        dividend = divisor;
        divisor = remainder;
    }
    GcdTrace { gcd: dividend, steps }
}

/// Bezout coefficients: `a * s + b * t == gcd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bezout {
    pub gcd: i64,
    pub s: i64,
    pub t: i64,
}

/// Extended Euclidean algorithm.
///
/// The returned `gcd` is non-negative.
///
/// # Errors
///
/// `InvalidInput` for `i64::MIN`, whose magnitude has no `i64` representation.
pub fn extended_gcd(a: i64, b: i64) -> CalcResult<Bezout> {
    for (field, v) in [("a", a), ("b", b)] {
        if v == i64::MIN {
            return Err(CalcError::invalid_input(field, v.to_string(), "Magnitude is too large"));
        }
    }

    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    if old_r < 0 {
        old_r = -old_r;
        old_s = -old_s;
        old_t = -old_t;
    }
    Ok(Bezout {
        gcd: old_r,
        s: old_s,
        t: old_t,
    })
}

/// GCD of every number in `values`.
pub fn gcd_of(values: &[i64]) -> CalcResult<u64> {
    if values.is_empty() {
        return Err(CalcError::missing_field("numbers"));
    }
    Ok(values.iter().fold(0u64, |acc, &v| euclid(acc, v.unsigned_abs())))
}

/// LCM of every number in `values`.
pub fn lcm_of(values: &[i64]) -> CalcResult<u64> {
    if values.is_empty() {
        return Err(CalcError::missing_field("numbers"));
    }
    let mut acc: u64 = 1;
    for &v in values {
        let m = v.unsigned_abs();
        if m == 0 {
            return Ok(0);
        }
        acc = (acc / euclid(acc, m)).checked_mul(m).ok_or_else(|| CalcError::overflow("lcm"))?;
    }
    Ok(acc)
}

/// GCD, LCM and working for a pair of integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdLcmResult {
    pub a: i64,
    pub b: i64,
    pub gcd: u64,
    pub lcm: u64,
    pub steps: Vec<EuclidStep>,
    pub bezout: Bezout,
    /// `gcd * lcm == |a * b|`
    pub identity_holds: bool,
}

pub fn gcd_lcm(a: i64, b: i64) -> CalcResult<GcdLcmResult> {
    let trace = gcd_steps(a, b);
    let lcm = lcm(a, b)?;
    let bezout = extended_gcd(a, b)?;
    let product = u128::from(a.unsigned_abs()) * u128::from(b.unsigned_abs());
    Ok(GcdLcmResult {
        a,
        b,
        gcd: trace.gcd,
        lcm,
        identity_holds: u128::from(trace.gcd) * u128::from(lcm) == product,
        steps: trace.steps,
        bezout,
    })
}

/// Input for GCD/LCM over a list of integers.
///
/// With exactly two numbers the result includes the step trace and
/// Bezout coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GcdInput {
    pub numbers: Vec<i64>,
}

/// Result for a list of integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdListResult {
    pub numbers: Vec<i64>,
    pub gcd: u64,
    pub lcm: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<GcdLcmResult>,
}

pub fn calculate(input: &GcdInput) -> CalcResult<GcdListResult> {
    let pair = match input.numbers.as_slice() {
        [a, b] => Some(gcd_lcm(*a, *b)?),
        _ => None,
    };
    Ok(GcdListResult {
        numbers: input.numbers.clone(),
        gcd: gcd_of(&input.numbers)?,
        lcm: lcm_of(&input.numbers)?,
        pair,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_lcm_identity() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(lcm(48, 18).unwrap(), 144);
        assert_eq!(gcd(48, 18) * lcm(48, 18).unwrap(), 48 * 18);
    }

    #[test]
    fn test_gcd_with_zero() {
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(lcm(0, 5).unwrap(), 0);
    }

    #[test]
    fn test_negative_inputs() {
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(lcm(-4, 6).unwrap(), 12);
    }

    #[test]
    fn test_steps_trace() {
        let trace = gcd_steps(18, 48);
        assert_eq!(trace.gcd, 6);
        assert_eq!(
            trace.steps,
            vec![
                EuclidStep { dividend: 48, divisor: 18, quotient: 2, remainder: 12 },
                EuclidStep { dividend: 18, divisor: 12, quotient: 1, remainder: 6 },
                EuclidStep { dividend: 12, divisor: 6, quotient: 2, remainder: 0 },
            ]
        );
        assert!(gcd_steps(5, 0).steps.is_empty());
    }

    #[test]
    fn test_extended_gcd() {
        for (a, b) in [(240, 46), (48, 18), (-35, 15), (17, 0), (0, -9), (1, 1)] {
            let bz = extended_gcd(a, b).unwrap();
            assert_eq!(bz.gcd as u64, gcd(a, b), "gcd for ({}, {})", a, b);
            assert_eq!(a * bz.s + b * bz.t, bz.gcd, "bezout for ({}, {})", a, b);
        }
        assert!(extended_gcd(i64::MIN, 2).is_err());
    }

    #[test]
    fn test_lists() {
        assert_eq!(gcd_of(&[12, 18, 30]).unwrap(), 6);
        assert_eq!(lcm_of(&[4, 6, 10]).unwrap(), 60);
        assert!(gcd_of(&[]).is_err());
        assert!(lcm_of(&[i64::MAX, i64::MAX - 1]).is_err());
    }

    #[test]
    fn test_calculate_pair() {
        let result = calculate(&GcdInput { numbers: vec![48, 18] }).unwrap();
        let pair = result.pair.unwrap();
        assert!(pair.identity_holds);
        assert_eq!(pair.steps.len(), 3);
    }
}
