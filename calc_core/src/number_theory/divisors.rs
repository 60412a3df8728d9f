//! Divisor enumeration and number classification.

use serde::{Deserialize, Serialize};

use super::primes::{checked_positive, prime_factorize, prime_powers, PrimePower};
use crate::errors::CalcResult;

/// Prime / composite classification. 1 is neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primality {
    Prime,
    Composite,
    Unit,
}

/// Comparison of the proper-divisor sum against the number itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Abundance {
    /// Proper divisors sum to exactly `n` (6, 28, 496, ...)
    Perfect,
    /// Proper divisors sum to more than `n`
    Abundant,
    /// Proper divisors sum to less than `n`
    Deficient,
}

impl Abundance {
    pub fn label(&self) -> &'static str {
        match self {
            Abundance::Perfect => "perfect",
            Abundance::Abundant => "abundant",
            Abundance::Deficient => "deficient",
        }
    }
}

/// All positive divisors of `n`, ascending.
///
/// Trial division up to `sqrt(n)`; each hit `i` contributes both `i` and
/// `n / i` (once when they coincide).
pub fn divisors(n: i64) -> CalcResult<Vec<u64>> {
    let n = checked_positive("divisors", n)?;
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut i = 1u64;
    while i <= n / i {
        if n % i == 0 {
            small.push(i);
            if i != n / i {
                large.push(n / i);
            }
        }
        i += 1;
    }
    small.extend(large.into_iter().rev());
    Ok(small)
}

/// Everything the factor calculators show for one integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorizationResult {
    pub n: u64,
    pub divisors: Vec<u64>,
    pub prime_factors: Vec<u64>,
    pub prime_powers: Vec<PrimePower>,
    pub primality: Primality,
    /// Sum of divisors excluding `n` itself
    pub proper_divisor_sum: u64,
    pub abundance: Abundance,
}

/// Enumerate divisors and classify `n`.
///
/// ```rust
/// use calc_core::number_theory::{classify_factors, Abundance};
///
/// let r = classify_factors(28).unwrap();
/// assert_eq!(r.divisors, vec![1, 2, 4, 7, 14, 28]);
/// assert_eq!(r.abundance, Abundance::Perfect);
/// ```
pub fn classify_factors(n: i64) -> CalcResult<FactorizationResult> {
    let divisors = divisors(n)?;
    let prime_factors = prime_factorize(n)?;
    let n = n as u64;

    let proper_divisor_sum = divisors.iter().sum::<u64>() - n;
    let abundance = match proper_divisor_sum.cmp(&n) {
        std::cmp::Ordering::Equal => Abundance::Perfect,
        std::cmp::Ordering::Greater => Abundance::Abundant,
        std::cmp::Ordering::Less => Abundance::Deficient,
    };
    let primality = match divisors.len() {
        1 => Primality::Unit,
        2 => Primality::Prime,
        _ => Primality::Composite,
    };

    Ok(FactorizationResult {
        n,
        prime_powers: prime_powers(&prime_factors),
        divisors,
        prime_factors,
        primality,
        proper_divisor_sum,
        abundance,
    })
}

/// Input for factorization, classification and primality calculators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorInput {
    pub n: i64,
}
