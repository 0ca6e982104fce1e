//! Parameter validation rules.
//!
//! Each rule is a pure check that either passes silently or fails with a
//! [`ValidationError`] naming the offending parameter and the constraint it
//! violated. Distribution constructors chain these rules with `?` before any
//! value is built, so construction is all-or-nothing.
//!
//! Rules check finiteness before range: a NaN probability reports
//! [`ConstraintKind::NotFinite`], never
//! [`ConstraintKind::OutOfProbabilityRange`].

use thiserror::Error;

use crate::distribution::ParamValue;

/// Constraint class violated by a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConstraintKind {
    /// NaN or infinite.
    NotFinite,
    /// Zero or negative where a strictly positive value is required.
    NonPositive,
    /// Negative where zero is allowed.
    Negative,
    /// Outside `[0, 1]`.
    OutOfProbabilityRange,
    /// A real value supplied for an integer parameter.
    NotInteger,
    /// Lower bound not strictly less than the upper bound.
    LowerNotLessThanUpper,
    /// Outside the closed interval formed by two other parameters.
    NotWithinBounds,
    /// Above the largest supported value.
    TooLarge,
}

impl ConstraintKind {
    fn describe(&self, parameter: &str) -> String {
        match self {
            Self::NotFinite => format!("{parameter} parameter is not finite"),
            Self::NonPositive => format!("non-positive {parameter} parameter"),
            Self::Negative => format!("negative {parameter} parameter"),
            Self::OutOfProbabilityRange => format!("{parameter} parameter is not a probability"),
            Self::NotInteger => format!("{parameter} parameter not integer"),
            Self::LowerNotLessThanUpper => {
                format!("{parameter} parameter not lower than its upper bound")
            }
            Self::NotWithinBounds => format!("{parameter} parameter not within its bounds"),
            Self::TooLarge => format!("{parameter} parameter too large"),
        }
    }
}

/// A parameter failed its domain check.
///
/// # Examples
/// ```
/// use randvar_core::validation::{ConstraintKind, ValidationError};
///
/// let err = ValidationError::new("sigma", ConstraintKind::NonPositive);
/// assert_eq!(err.parameter, "sigma");
/// assert_eq!(err.to_string(), "non-positive sigma parameter");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{}", .kind.describe(.parameter))]
pub struct ValidationError {
    /// Name of the offending parameter.
    pub parameter: &'static str,
    /// Constraint class that was violated.
    pub kind: ConstraintKind,
}

impl ValidationError {
    /// Creates a validation error for `parameter`.
    #[inline]
    pub fn new(parameter: &'static str, kind: ConstraintKind) -> Self {
        Self { parameter, kind }
    }
}

type Check<T> = Result<T, ValidationError>;

/// Rejects NaN and infinities.
#[inline]
pub fn finite(name: &'static str, x: f64) -> Check<f64> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(ValidationError::new(name, ConstraintKind::NotFinite))
    }
}

/// Requires a finite value strictly greater than zero.
#[inline]
pub fn positive(name: &'static str, x: f64) -> Check<f64> {
    finite(name, x)?;
    if x <= 0.0 {
        return Err(ValidationError::new(name, ConstraintKind::NonPositive));
    }
    Ok(x)
}

/// Requires an integer strictly greater than zero.
#[inline]
pub fn positive_integer(name: &'static str, n: i64) -> Check<i64> {
    if n <= 0 {
        return Err(ValidationError::new(name, ConstraintKind::NonPositive));
    }
    Ok(n)
}

/// Requires an integer greater than or equal to zero.
#[inline]
pub fn non_negative_integer(name: &'static str, n: i64) -> Check<i64> {
    if n < 0 {
        return Err(ValidationError::new(name, ConstraintKind::Negative));
    }
    Ok(n)
}

/// Requires a finite value in the closed interval `[0, 1]`.
#[inline]
pub fn probability(name: &'static str, p: f64) -> Check<f64> {
    finite(name, p)?;
    if !(0.0..=1.0).contains(&p) {
        return Err(ValidationError::new(
            name,
            ConstraintKind::OutOfProbabilityRange,
        ));
    }
    Ok(p)
}

/// Requires `lower < upper`; the error names the lower parameter.
#[inline]
pub fn less_than<T: PartialOrd>(name: &'static str, lower: T, upper: T) -> Check<()> {
    if lower < upper {
        Ok(())
    } else {
        Err(ValidationError::new(
            name,
            ConstraintKind::LowerNotLessThanUpper,
        ))
    }
}

/// Requires `lo <= x <= hi`.
#[inline]
pub fn within(name: &'static str, x: f64, lo: f64, hi: f64) -> Check<f64> {
    if lo <= x && x <= hi {
        Ok(x)
    } else {
        Err(ValidationError::new(name, ConstraintKind::NotWithinBounds))
    }
}

/// Requires `x <= max`.
#[inline]
pub fn at_most<T: PartialOrd>(name: &'static str, x: T, max: T) -> Check<T> {
    if x > max {
        return Err(ValidationError::new(name, ConstraintKind::TooLarge));
    }
    Ok(x)
}

/// Extracts an exact integer; real values are rejected even when whole.
#[inline]
pub fn integer(name: &'static str, value: ParamValue) -> Check<i64> {
    match value {
        ParamValue::Integer(n) => Ok(n),
        ParamValue::Real(_) => Err(ValidationError::new(name, ConstraintKind::NotInteger)),
    }
}

/// Extracts a real value; integers widen to `f64`.
#[inline]
pub fn real(value: ParamValue) -> f64 {
    match value {
        ParamValue::Integer(n) => n as f64,
        ParamValue::Real(x) => x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_rejects_nan_and_infinities() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = finite("p", x).unwrap_err();
            assert_eq!(err.kind, ConstraintKind::NotFinite);
        }
        assert_eq!(finite("p", -3.5), Ok(-3.5));
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive("sigma", 0.1), Ok(0.1));
        assert_eq!(
            positive("sigma", 0.0).unwrap_err().kind,
            ConstraintKind::NonPositive
        );
        assert_eq!(
            positive("sigma", -0.0).unwrap_err().kind,
            ConstraintKind::NonPositive
        );
        assert_eq!(
            positive("sigma", f64::NAN).unwrap_err().kind,
            ConstraintKind::NotFinite
        );
    }

    #[test]
    fn test_integer_rules() {
        assert!(positive_integer("k", 1).is_ok());
        assert_eq!(
            positive_integer("k", 0).unwrap_err().kind,
            ConstraintKind::NonPositive
        );
        assert!(non_negative_integer("n", 0).is_ok());
        assert_eq!(
            non_negative_integer("n", -1).unwrap_err().kind,
            ConstraintKind::Negative
        );
    }

    #[test]
    fn test_probability_is_closed_interval() {
        assert!(probability("p", 0.0).is_ok());
        assert!(probability("p", 1.0).is_ok());
        assert_eq!(
            probability("p", 1.001).unwrap_err().kind,
            ConstraintKind::OutOfProbabilityRange
        );
        assert_eq!(
            probability("p", -0.0001).unwrap_err().kind,
            ConstraintKind::OutOfProbabilityRange
        );
        assert_eq!(
            probability("p", f64::NAN).unwrap_err().kind,
            ConstraintKind::NotFinite
        );
    }

    #[test]
    fn test_less_than_names_lower_parameter() {
        assert!(less_than("a", 1.0, 2.0).is_ok());
        let err = less_than("a", 2, 2).unwrap_err();
        assert_eq!(err.parameter, "a");
        assert_eq!(err.kind, ConstraintKind::LowerNotLessThanUpper);
    }

    #[test]
    fn test_within_and_at_most() {
        assert!(within("c", 0.0, 0.0, 1.0).is_ok());
        assert!(within("c", 1.0, 0.0, 1.0).is_ok());
        assert_eq!(
            within("c", 1.5, 0.0, 1.0).unwrap_err().kind,
            ConstraintKind::NotWithinBounds
        );
        assert!(at_most("lambda", 10.0, 10.0).is_ok());
        assert_eq!(
            at_most("lambda", 10.5, 10.0).unwrap_err().kind,
            ConstraintKind::TooLarge
        );
        assert_eq!(at_most("n", 16_i64, 16), Ok(16));
        assert_eq!(
            at_most("n", 17_i64, 16).unwrap_err(),
            ValidationError::new("n", ConstraintKind::TooLarge)
        );
    }

    #[test]
    fn test_integer_extraction() {
        assert_eq!(integer("n", ParamValue::Integer(7)), Ok(7));
        assert_eq!(
            integer("n", ParamValue::Real(7.0)).unwrap_err().kind,
            ConstraintKind::NotInteger
        );
        assert_eq!(real(ParamValue::Integer(3)), 3.0);
        assert_eq!(real(ParamValue::Real(0.25)), 0.25);
    }

    #[test]
    fn test_display_messages() {
        let err = ValidationError::new("p", ConstraintKind::OutOfProbabilityRange);
        assert_eq!(err.to_string(), "p parameter is not a probability");
        let err = ValidationError::new("n", ConstraintKind::NotInteger);
        assert_eq!(err.to_string(), "n parameter not integer");
    }
}
