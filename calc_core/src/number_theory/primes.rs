//! Prime factorization by trial division.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Largest input accepted by trial-division routines. Keeps the worst case
/// (a large prime) to about 3 * 10^7 candidate divisors.
pub const MAX_TRIAL_DIVISION: u64 = 1_000_000_000_000_000;

/// Validate an integer for trial division and return it as `u64`.
pub(crate) fn checked_positive(calculation: &str, n: i64) -> CalcResult<u64> {
    if n <= 0 {
        return Err(CalcError::domain(calculation, format!("{} is not a positive integer", n)));
    }
    let n = n as u64;
    if n > MAX_TRIAL_DIVISION {
        return Err(CalcError::limit_exceeded("n", n, MAX_TRIAL_DIVISION));
    }
    Ok(n)
}

/// Prime factors of `n` with multiplicity, in non-decreasing order.
///
/// Divides out each candidate while it divides the remainder and stops once
/// `candidate^2 > remaining`; anything left above 1 is itself prime.
/// `prime_factorize(1)` is empty (the empty product).
///
/// ```rust
/// use calc_core::number_theory::prime_factorize;
///
/// assert_eq!(prime_factorize(60).unwrap(), vec![2, 2, 3, 5]);
/// ```
pub fn prime_factorize(n: i64) -> CalcResult<Vec<u64>> {
    let mut remaining = checked_positive("prime factorization", n)?;
    let mut factors = Vec::new();
    let mut divisor = 2u64;
    while divisor <= remaining / divisor {
        while remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += if divisor == 2 { 1 } else { 2 };
    }
    if remaining > 1 {
        factors.push(remaining);
    }
    Ok(factors)
}

/// Primality by trial division. 0 and 1 are not prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// A prime raised to its multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimePower {
    pub prime: u64,
    pub exponent: u32,
}

/// Group sorted prime factors into powers: `[2, 2, 3]` -> `2^2, 3^1`.
pub fn prime_powers(factors: &[u64]) -> Vec<PrimePower> {
    let mut powers: Vec<PrimePower> = Vec::new();
    for &p in factors {
        match powers.last_mut() {
            Some(last) if last.prime == p => last.exponent += 1,
            _ => powers.push(PrimePower { prime: p, exponent: 1 }),
        }
    }
    powers
}

/// Format as `2^2 x 3 x 5`.
pub fn format_factorization(powers: &[PrimePower]) -> String {
    if powers.is_empty() {
        return "1".to_string();
    }
    powers
        .iter()
        .map(|pp| match pp.exponent {
            1 => pp.prime.to_string(),
            e => format!("{}^{}", pp.prime, e),
        })
        .collect::<Vec<_>>()
        .join(" x ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorize_60() {
        let factors = prime_factorize(60).unwrap();
        assert_eq!(factors, vec![2, 2, 3, 5]);
        assert_eq!(factors.iter().product::<u64>(), 60);
    }

    #[test]
    fn test_product_reconstructs_and_sorted() {
        for n in [1i64, 2, 97, 360, 1001, 65_536, 999_983 * 2, 600_851_475_143] {
            let factors = prime_factorize(n).unwrap();
            assert_eq!(factors.iter().product::<u64>(), n as u64);
            assert!(factors.windows(2).all(|w| w[0] <= w[1]));
            assert!(factors.iter().all(|&f| is_prime(f)));
        }
    }

    #[test]
    fn test_factorize_rejects_non_positive() {
        assert!(prime_factorize(0).is_err());
        assert!(prime_factorize(-12).is_err());
        assert_eq!(
            prime_factorize(i64::MAX).unwrap_err().error_code(),
            "LIMIT_EXCEEDED"
        );
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(999_983));
    }

    #[test]
    fn test_powers_and_format() {
        let powers = prime_powers(&[2, 2, 3, 5]);
        assert_eq!(powers[0], PrimePower { prime: 2, exponent: 2 });
        assert_eq!(format_factorization(&powers), "2^2 x 3 x 5");
        assert_eq!(format_factorization(&[]), "1");
    }
}
