//! Filtered views and status summaries.

use serde::Serialize;

use dosecheck_core::{classify, Constraint, Status, TolerancePolicy, ALL_SITES};
use dosecheck_store::MeasurementStore;

/// Returns the constraints whose site matches `site`, in original order.
///
/// The [`ALL_SITES`] sentinel disables filtering and returns everything.
pub fn filter_by_site<'a>(constraints: &'a [Constraint], site: &str) -> Vec<&'a Constraint> {
    constraints
        .iter()
        .filter(|c| site == ALL_SITES || c.site == site)
        .collect()
}

/// Counts per status over one filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Constraints comfortably under their limit.
    pub pass: usize,
    /// Constraints inside the tolerance band.
    pub caution: usize,
    /// Constraints over their limit.
    pub fail: usize,
    /// Constraints with no measurement entered.
    pub missing: usize,
}

impl Summary {
    /// Total rows counted; always equals the filtered list's length.
    pub fn total(&self) -> usize {
        self.pass + self.caution + self.fail + self.missing
    }

    fn record(&mut self, status: Status) {
        match status {
            Status::Pass => self.pass += 1,
            Status::Caution => self.caution += 1,
            Status::Fail => self.fail += 1,
            Status::Missing => self.missing += 1,
        }
    }
}

/// Classifies every constraint in the filtered view and tallies statuses.
///
/// Derived fresh each call; callers re-run it after any store change.
pub fn summarize(
    filtered: &[&Constraint],
    measurements: &MeasurementStore,
    policy: TolerancePolicy,
) -> Summary {
    let mut summary = Summary::default();
    for constraint in filtered {
        let eval = classify(measurements.get(&constraint.id), constraint, policy);
        summary.record(eval.status);
    }
    summary
}
