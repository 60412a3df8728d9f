//! # Number Theory
//!
//! Integer algorithms behind the GCD/LCM, prime factor, factorial and
//! divisor calculators.
//!
//! - [`gcd`] - Euclidean and extended Euclidean algorithms, LCM
//! - [`primes`] - trial-division factorization and primality
//! - [`factorial`] - exact `n!` with an input bound
//! - [`divisors`] - divisor enumeration, perfect/abundant/deficient

pub mod divisors;
pub mod factorial;
pub mod gcd;
pub mod primes;

pub use divisors::{classify_factors, divisors, Abundance, FactorInput, FactorizationResult, Primality};
pub use factorial::{
    factorial, factorial_summary, factorial_trailing_zeros, FactorialInput, FactorialResult,
    DEFAULT_FACTORIAL_LIMIT,
};
pub use gcd::{
    extended_gcd, gcd, gcd_lcm, gcd_of, gcd_steps, lcm, lcm_of, Bezout, EuclidStep, GcdInput,
    GcdLcmResult, GcdListResult, GcdTrace,
};
pub use primes::{
    format_factorization, is_prime, prime_factorize, prime_powers, PrimePower, MAX_TRIAL_DIVISION,
};
