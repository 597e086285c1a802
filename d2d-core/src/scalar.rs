//! Numbers read from JSON configuration files.
//!
//! The optimizer reads the canonical text positionally, and the configuration
//! files mix integers (`"M_t (kg)": 1500`) with fractions (`15.557`). A
//! [`Scalar`] keeps that distinction so each value prints the way it was
//! written: integers without a fractional part, floats in their shortest
//! round-trip form.
//!
//! # Examples
//! ```
//! use d2d_core::Scalar;
//!
//! assert_eq!(Scalar::Integer(1500).to_string(), "1500");
//! assert_eq!(Scalar::Float(1500.0).to_string(), "1500.0");
//! assert_eq!(Scalar::from(0.7).to_string(), "0.7");
//! ```

use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::canonical::CanonicalFloat;

/// A configuration number that remembers whether it was written as an
/// integer.
///
/// Integers outside the `i64` range are read as floats.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Scalar {
    /// Written without a fraction or exponent.
    Integer(i64),
    /// Written with a fraction or exponent.
    Float(f64),
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{}", CanonicalFloat(*value)),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
