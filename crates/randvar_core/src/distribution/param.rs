//! Loosely typed parameter values for the construction boundary.

use std::fmt;
use std::str::FromStr;

use crate::error::RandVarError;

/// A single distribution parameter as supplied by a caller.
///
/// Integer and real values are kept apart so that integer-typed parameters
/// (Binomial's `n`, Chi-Squared's `k`, …) can reject fractional input
/// instead of truncating it.
///
/// # Examples
/// ```
/// use randvar_core::distribution::ParamValue;
///
/// assert_eq!("7".parse::<ParamValue>().unwrap(), ParamValue::Integer(7));
/// assert_eq!("7.0".parse::<ParamValue>().unwrap(), ParamValue::Real(7.0));
/// assert_eq!(ParamValue::from(0.5), ParamValue::Real(0.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    /// Exact integer.
    Integer(i64),
    /// Real number (may be NaN or infinite; validation rejects those).
    Real(f64),
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Integer(n)
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Real(x)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(n) => write!(f, "{}", n),
            ParamValue::Real(x) => write!(f, "{:?}", x),
        }
    }
}

impl FromStr for ParamValue {
    type Err = RandVarError;

    /// Text without `.`, `e` or `E` parses as an integer, anything else as
    /// a real. `nan` and `inf` are accepted as reals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.contains(['.', 'e', 'E']) {
            if let Ok(n) = s.parse::<i64>() {
                return Ok(ParamValue::Integer(n));
            }
        }
        s.parse::<f64>()
            .map(ParamValue::Real)
            .map_err(|_| RandVarError::InvalidArgument(format!("not a number: {:?}", s)))
    }
}
