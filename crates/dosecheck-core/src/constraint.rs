//! Constraint records for organ-at-risk dose limits.
//!
//! A [`Constraint`] is one rule: a dose metric on one organ with a numeric
//! limit. Records are immutable once created; replacing one means deleting
//! it and adding a new draft.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel site value meaning "no site filter".
pub const ALL_SITES: &str = "All";

/// Opaque identifier for a constraint.
///
/// Assigned once by an injected [`IdGenerator`](crate::IdGenerator) and
/// stable for the constraint's lifetime. Unique within a store.
///
/// # Example
///
/// ```
/// use dosecheck_core::ConstraintId;
///
/// let id = ConstraintId::new("c7");
/// assert_eq!(id.as_str(), "c7");
/// assert_eq!(id.to_string(), "c7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintId(String);

impl ConstraintId {
    /// Creates an id from an existing value (e.g. parsed from an export).
    pub fn new(id: impl Into<String>) -> Self {
        ConstraintId(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dose metric a constraint is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricType {
    /// Maximum dose to the structure.
    Dmax,
    /// Mean dose to the structure.
    Dmean,
    /// Volume receiving at least `param` dose.
    Vx,
}

/// One dose-limit rule for an organ-at-risk.
///
/// `site` and `organ` are free-text labels; `site` is used only for
/// filtering and grouping. `unit` is carried through to output and never
/// enters the comparison math.
///
/// # Example
///
/// ```
/// use dosecheck_core::{Constraint, ConstraintId, MetricType};
///
/// let c = Constraint {
///     id: ConstraintId::new("c1"),
///     site: "Thorax".into(),
///     organ: "Lung (total)".into(),
///     metric: MetricType::Vx,
///     param: Some(20.0),
///     limit: 30.0,
///     unit: "%".into(),
///     note: None,
/// };
/// assert_eq!(c.metric_label(), "V20%");
/// assert_eq!(c.limit_label(), "30 %");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Unique identifier, generated at insertion.
    pub id: ConstraintId,
    /// Anatomical region label (e.g. "Thorax").
    pub site: String,
    /// Organ-at-risk label (e.g. "Spinal cord").
    pub organ: String,
    /// Metric the limit applies to.
    #[serde(rename = "metricType")]
    pub metric: MetricType,
    /// The "x" in Vx. Present and finite iff `metric` is [`MetricType::Vx`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<f64>,
    /// Threshold the measurement is compared against. Always finite.
    pub limit: f64,
    /// Display unit (`Gy`, `%`, `cc`, ...).
    pub unit: String,
    /// Optional free-text annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Constraint {
    /// Human metric label: `Dmax`, `Dmean`, or `V{param}{unit}` (e.g. `V20%`).
    pub fn metric_label(&self) -> String {
        match self.metric {
            MetricType::Dmax => "Dmax".to_string(),
            MetricType::Dmean => "Dmean".to_string(),
            MetricType::Vx => {
                format!("V{}{}", self.param.unwrap_or_default(), self.unit)
            }
        }
    }

    /// Formatted limit with unit, e.g. `45 Gy`.
    pub fn limit_label(&self) -> String {
        format!("{} {}", self.limit, self.unit)
    }
}
