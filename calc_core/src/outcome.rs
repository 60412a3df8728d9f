//! # Outcome
//!
//! Three-state result for form-driven callers. A view holds an `Outcome`
//! per calculator and renders each state differently:
//!
//! - `Pending` - a required field is empty or not a number yet
//! - `Ready(T)` - the calculation ran
//! - `Rejected(CalcError)` - the inputs are complete but invalid
//!
//! ## Example
//!
//! ```rust
//! use calc_core::outcome::Outcome;
//! use calc_core::units::{convert_raw, Category};
//!
//! assert!(convert_raw("", "m", "ft", Category::Length).is_pending());
//! assert!(convert_raw("1", "m", "furlong", Category::Length).is_rejected());
//!
//! let ready = convert_raw("0", "C", "F", Category::Temperature);
//! assert_eq!(ready, Outcome::Ready(32.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Result of one calculator invocation from raw form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// Inputs incomplete; nothing was computed
    Pending,
    /// Calculation succeeded
    Ready(T),
    /// Inputs complete but invalid
    Rejected(CalcError),
}

impl<T> Outcome<T> {
    /// Run `f` once every required input is present.
    ///
    /// `inputs` is `Some` only when all fields parsed; otherwise the outcome
    /// is `Pending` and `f` is never called.
    pub fn when_complete<I>(inputs: Option<I>, f: impl FnOnce(I) -> CalcResult<T>) -> Self {
        match inputs {
            None => Outcome::Pending,
            Some(values) => f(values).into(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// The computed value, if any.
    pub fn ready(self) -> Option<T> {
        match self {
            Outcome::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The rejection reason, if any.
    pub fn error(&self) -> Option<&CalcError> {
        match self {
            Outcome::Rejected(e) => Some(e),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Pending => Outcome::Pending,
            Outcome::Ready(value) => Outcome::Ready(f(value)),
            Outcome::Rejected(e) => Outcome::Rejected(e),
        }
    }
}

impl<T> From<CalcResult<T>> for Outcome<T> {
    fn from(result: CalcResult<T>) -> Self {
        match result {
            Ok(value) => Outcome::Ready(value),
            Err(e) => Outcome::Rejected(e),
        }
    }
}
