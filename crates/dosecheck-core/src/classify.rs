//! Pure classification of measurements against constraints.
//!
//! [`classify`] is the whole evaluation engine: given a measured value, a
//! constraint and a tolerance policy it returns a [`Status`] and the signed
//! margin. No I/O, no state, fully deterministic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::error::{DoseCheckError, Result};

/// Outcome category for one measured value against one constraint.
///
/// `Missing` is a first-class status, not an error: an absent or
/// non-numeric entry classifies like any other input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Comfortably under the limit.
    Pass,
    /// Under the limit but inside the tolerance band.
    Caution,
    /// Over the limit.
    Fail,
    /// No measurement entered.
    Missing,
}

impl Status {
    /// Lowercase token (`pass`, `caution`, `fail`, `missing`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Caution => "caution",
            Status::Fail => "fail",
            Status::Missing => "missing",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform tolerance applied to every constraint at evaluation time.
///
/// The caution band is `|limit| * caution_fraction` wide, directly below
/// the limit. Values inside it technically pass but are flagged for review.
///
/// # Example
///
/// ```
/// use dosecheck_core::TolerancePolicy;
///
/// let policy = TolerancePolicy::new(0.05).unwrap();
/// assert_eq!(policy.band(45.0), 2.25);
///
/// // Negative fractions are rejected; wide bands (>= 1) are not.
/// assert!(TolerancePolicy::new(-0.1).is_err());
/// assert!(TolerancePolicy::new(1.5).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TolerancePolicy {
    caution_fraction: f64,
}

impl TolerancePolicy {
    /// Zero-width band: only the exact limit separates pass from fail.
    pub const ZERO: TolerancePolicy = TolerancePolicy {
        caution_fraction: 0.0,
    };

    /// Creates a policy from a caution fraction.
    ///
    /// # Errors
    ///
    /// Returns an error when the fraction is negative or not finite.
    /// Fractions >= 1 are accepted without clamping.
    pub fn new(caution_fraction: f64) -> Result<Self> {
        if !caution_fraction.is_finite() || caution_fraction < 0.0 {
            return Err(DoseCheckError::InvalidTolerance(caution_fraction));
        }
        Ok(Self { caution_fraction })
    }

    /// Returns the configured fraction.
    pub const fn caution_fraction(&self) -> f64 {
        self.caution_fraction
    }

    /// Width of the caution band for a given limit.
    pub fn band(&self, limit: f64) -> f64 {
        limit.abs() * self.caution_fraction
    }
}

impl Default for TolerancePolicy {
    /// 5% of the limit, the usual review margin.
    fn default() -> Self {
        TolerancePolicy {
            caution_fraction: 0.05,
        }
    }
}

/// Result of classifying one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Outcome category.
    pub status: Status,
    /// Signed `limit - measured`; positive means room to spare. `None`
    /// when the measurement is missing.
    pub margin: Option<f64>,
}

/// Classifies a measured value against a constraint.
///
/// Rules, in precedence order:
/// 1. Absent or non-finite `measured` is `Missing`, with no margin.
/// 2. `measured > limit` is `Fail`, regardless of the band.
/// 3. Otherwise, `measured >= limit - band` is `Caution`, else `Pass`.
///
/// A value exactly at the limit lands in `Caution` (margin 0 is inside any
/// non-empty band). With a zero caution fraction there is no band and the
/// exact limit passes outright. This boundary is intentional; keep it.
///
/// # Example
///
/// ```
/// use dosecheck_core::{classify, Constraint, ConstraintId, MetricType, Status, TolerancePolicy};
///
/// let cord = Constraint {
///     id: ConstraintId::new("c1"),
///     site: "Thorax".into(),
///     organ: "Spinal cord".into(),
///     metric: MetricType::Dmax,
///     param: None,
///     limit: 45.0,
///     unit: "Gy".into(),
///     note: None,
/// };
/// let policy = TolerancePolicy::new(0.05).unwrap();
///
/// let eval = classify(Some(44.5), &cord, policy);
/// assert_eq!(eval.status, Status::Caution);
/// assert_eq!(eval.margin, Some(0.5));
/// ```
pub fn classify(measured: Option<f64>, constraint: &Constraint, policy: TolerancePolicy) -> Evaluation {
    let Some(measured) = measured.filter(|m| m.is_finite()) else {
        return Evaluation {
            status: Status::Missing,
            margin: None,
        };
    };
    let margin = constraint.limit - measured;
    let status = if margin < 0.0 {
        Status::Fail
    } else if policy.caution_fraction() > 0.0 && margin <= policy.band(constraint.limit) {
        Status::Caution
    } else {
        Status::Pass
    };
    Evaluation {
        status,
        margin: Some(margin),
    }
}
