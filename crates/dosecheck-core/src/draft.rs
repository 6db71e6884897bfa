//! Draft builder for composing a constraint over multiple edits.

use crate::constraint::{Constraint, ConstraintId, MetricType};
use crate::error::{DoseCheckError, Result};

/// Partially filled constraint, validated only at [`ConstraintDraft::build`].
///
/// Every field is optional while editing; [`build`](ConstraintDraft::build)
/// checks the whole draft at once and reports the first problem found.
///
/// # Example
///
/// ```
/// use dosecheck_core::{ConstraintDraft, ConstraintId, MetricType};
///
/// let constraint = ConstraintDraft::new()
///     .site("Thorax")
///     .organ("Spinal cord")
///     .metric(MetricType::Dmax)
///     .limit(45.0)
///     .unit("Gy")
///     .build(ConstraintId::new("c1"))
///     .unwrap();
/// assert_eq!(constraint.limit, 45.0);
///
/// // An incomplete draft is rejected, not panicked on.
/// assert!(ConstraintDraft::new().build(ConstraintId::new("c2")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstraintDraft {
    site: Option<String>,
    organ: Option<String>,
    metric: Option<MetricType>,
    param: Option<f64>,
    limit: Option<f64>,
    unit: Option<String>,
    note: Option<String>,
}

impl ConstraintDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the anatomical site label.
    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Sets the organ-at-risk label.
    pub fn organ(mut self, organ: impl Into<String>) -> Self {
        self.organ = Some(organ.into());
        self
    }

    /// Sets the metric type.
    pub fn metric(mut self, metric: MetricType) -> Self {
        self.metric = Some(metric);
        self
    }

    /// Sets the Vx dose parameter. Ignored unless the metric is `Vx`.
    pub fn param(mut self, param: f64) -> Self {
        self.param = Some(param);
        self
    }

    /// Sets the dose limit.
    pub fn limit(mut self, limit: f64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the display unit.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Sets the optional annotation.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Validates the draft and produces a constraint with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error when a required field is absent or blank, the limit
    /// is not finite, or a `Vx` draft lacks a finite dose parameter.
    pub fn build(self, id: ConstraintId) -> Result<Constraint> {
        let site = require_text(self.site, "site")?;
        let organ = require_text(self.organ, "organ")?;
        let metric = self.metric.ok_or(DoseCheckError::MissingField("metricType"))?;
        let unit = require_text(self.unit, "unit")?;
        let limit = self.limit.ok_or(DoseCheckError::MissingField("limit"))?;
        if !limit.is_finite() {
            return Err(DoseCheckError::NonFiniteLimit(limit));
        }
        let param = match metric {
            MetricType::Vx => match self.param {
                Some(p) if p.is_finite() => Some(p),
                _ => return Err(DoseCheckError::MissingVxParam),
            },
            // Absent/ignored for Dmax and Dmean even if set on the draft.
            _ => None,
        };
        Ok(Constraint {
            id,
            site,
            organ,
            metric,
            param,
            limit,
            unit,
            note: self.note,
        })
    }
}

fn require_text(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(DoseCheckError::MissingField(field)),
    }
}
