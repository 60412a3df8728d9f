//! # Algebra
//!
//! Quadratic roots and ratio/proportion helpers.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::algebra::{solve_quadratic, QuadraticRoots};
//!
//! // x^2 - 3x + 2 = 0
//! let s = solve_quadratic(1.0, -3.0, 2.0).unwrap();
//! assert_eq!(s.roots, QuadraticRoots::TwoReal { x1: 2.0, x2: 1.0 });
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};
use crate::number_theory::gcd;

/// Roots of `ax^2 + bx + c = 0`, classified by the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuadraticRoots {
    /// Discriminant > 0, `x1 >= x2`
    TwoReal { x1: f64, x2: f64 },
    /// Discriminant == 0
    OneReal { x: f64 },
    /// Discriminant < 0: `real ± imaginary·i`
    Complex { real: f64, imaginary: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticSolution {
    pub discriminant: f64,
    pub roots: QuadraticRoots,
    /// Turning point `(-b/2a, f(-b/2a))`
    pub vertex: (f64, f64),
}

/// Solve `ax^2 + bx + c = 0`.
///
/// Real roots use the numerically stable form `q = -(b + sign(b)·sqrt(d)) / 2`,
/// `x1 = q / a`, `x2 = c / q` to avoid cancellation when `b^2 >> 4ac`.
///
/// # Errors
///
/// `DomainError` when `a == 0` (the equation is not quadratic).
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> CalcResult<QuadraticSolution> {
    require_finite("a", a)?;
    require_finite("b", b)?;
    require_finite("c", c)?;
    if a == 0.0 {
        return Err(CalcError::domain("quadratic", "coefficient a must be non-zero"));
    }

    let discriminant = b * b - 4.0 * a * c;
    let roots = if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        // signum(0.0) is 1.0, so q != 0 whenever the discriminant is positive
        let q = -0.5 * (b + b.signum() * sqrt_d);
        let (r1, r2) = (q / a, c / q);
        QuadraticRoots::TwoReal { x1: r1.max(r2), x2: r1.min(r2) }
    } else if discriminant == 0.0 {
        QuadraticRoots::OneReal { x: -b / (2.0 * a) }
    } else {
        QuadraticRoots::Complex {
            real: -b / (2.0 * a),
            imaginary: (-discriminant).sqrt() / (2.0 * a).abs(),
        }
    };

    let vx = -b / (2.0 * a);
    Ok(QuadraticSolution {
        discriminant,
        roots,
        vertex: (vx, a * vx * vx + b * vx + c),
    })
}

/// A ratio reduced to lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub antecedent: i64,
    pub consequent: i64,
    /// Common factor removed
    pub divisor: u64,
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.antecedent, self.consequent)
    }
}

/// Reduce `a:b` by their greatest common divisor. A negative sign is carried
/// on the antecedent.
///
/// ```rust
/// use calc_core::algebra::simplify_ratio;
///
/// assert_eq!(simplify_ratio(12, 18).unwrap().to_string(), "2:3");
/// ```
pub fn simplify_ratio(a: i64, b: i64) -> CalcResult<Ratio> {
    if b == 0 {
        return Err(CalcError::domain("ratio", "second term must be non-zero"));
    }
    let divisor = gcd(a, b);
    // Only i64::MIN pairs produce a gcd of 2^63
    let d = i64::try_from(divisor).map_err(|_| CalcError::overflow("ratio"))?;
    let (mut antecedent, mut consequent) = (a / d, b / d);
    if consequent < 0 {
        antecedent = antecedent.checked_neg().ok_or_else(|| CalcError::overflow("ratio"))?;
        consequent = consequent.checked_neg().ok_or_else(|| CalcError::overflow("ratio"))?;
    }
    Ok(Ratio { antecedent, consequent, divisor })
}

/// Solve `a : b = c : x` for `x`.
///
/// ```rust
/// use calc_core::algebra::solve_proportion;
///
/// assert_eq!(solve_proportion(2.0, 3.0, 8.0).unwrap(), 12.0);
/// ```
pub fn solve_proportion(a: f64, b: f64, c: f64) -> CalcResult<f64> {
    require_finite("a", a)?;
    require_finite("b", b)?;
    require_finite("c", c)?;
    if a == 0.0 {
        return Err(CalcError::domain("proportion", "first term must be non-zero"));
    }
    Ok(b * c / a)
}

/// Input for the quadratic solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadraticInput {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Input for the ratio calculator. With `c` set, solves the proportion
/// `a : b = c : x` as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioInput {
    pub a: i64,
    pub b: i64,
    #[serde(default)]
    pub c: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioResult {
    pub simplified: Ratio,
    /// `a / b`
    pub quotient: f64,
    pub proportion: Option<f64>,
}

pub fn calculate_ratio(input: &RatioInput) -> CalcResult<RatioResult> {
    let simplified = simplify_ratio(input.a, input.b)?;
    let proportion = input
        .c
        .map(|c| solve_proportion(input.a as f64, input.b as f64, c))
        .transpose()?;
    Ok(RatioResult {
        simplified,
        quotient: input.a as f64 / input.b as f64,
        proportion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_real_roots() {
        let s = solve_quadratic(1.0, -3.0, 2.0).unwrap();
        assert_eq!(s.discriminant, 1.0);
        assert_eq!(s.roots, QuadraticRoots::TwoReal { x1: 2.0, x2: 1.0 });
    }

    #[test]
    fn test_b_zero() {
        let s = solve_quadratic(1.0, 0.0, -4.0).unwrap();
        assert_eq!(s.roots, QuadraticRoots::TwoReal { x1: 2.0, x2: -2.0 });
    }

    #[test]
    fn test_one_real_root() {
        let s = solve_quadratic(1.0, 2.0, 1.0).unwrap();
        assert_eq!(s.roots, QuadraticRoots::OneReal { x: -1.0 });
        assert_eq!(s.vertex, (-1.0, 0.0));
    }

    #[test]
    fn test_complex_roots() {
        let s = solve_quadratic(1.0, 2.0, 5.0).unwrap();
        assert_eq!(s.discriminant, -16.0);
        assert_eq!(s.roots, QuadraticRoots::Complex { real: -1.0, imaginary: 2.0 });
    }

    #[test]
    fn test_stable_small_root() {
        // Roots 1e8 and 1e-8; naive formula loses the small one
        let s = solve_quadratic(1.0, -1e8, 1.0).unwrap();
        match s.roots {
            QuadraticRoots::TwoReal { x1, x2 } => {
                assert!((x1 - 1e8).abs() / 1e8 < 1e-12);
                assert!((x2 - 1e-8).abs() / 1e-8 < 1e-9);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_not_quadratic() {
        assert_eq!(solve_quadratic(0.0, 1.0, 1.0).unwrap_err().error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_ratio() {
        assert_eq!(simplify_ratio(12, 18).unwrap().to_string(), "2:3");
        assert_eq!(simplify_ratio(5, -10).unwrap().to_string(), "-1:2");
        assert_eq!(simplify_ratio(0, 7).unwrap().to_string(), "0:1");
        assert!(simplify_ratio(3, 0).is_err());
    }

    #[test]
    fn test_proportion() {
        assert_eq!(solve_proportion(2.0, 3.0, 8.0).unwrap(), 12.0);
        assert!(solve_proportion(0.0, 3.0, 8.0).is_err());

        let r = calculate_ratio(&RatioInput { a: 4, b: 6, c: Some(10.0) }).unwrap();
        assert_eq!(r.simplified.to_string(), "2:3");
        assert_eq!(r.proportion, Some(15.0));
    }
}
