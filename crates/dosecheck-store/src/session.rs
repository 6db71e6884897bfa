//! One reviewer's working state: constraints plus their measurements.

use dosecheck_core::{ConstraintDraft, ConstraintId, IdGenerator, Result, SequentialIds};

use crate::constraint_store::ConstraintStore;
use crate::measurement_store::MeasurementStore;

/// Pairs a [`ConstraintStore`] with its [`MeasurementStore`].
///
/// The session is the only place allowed to mutate both, which is what
/// keeps the no-orphan invariant: removing a constraint always drops its
/// measurement, and measurements are only accepted for constraints that
/// exist. Sessions carry no shared state; a concurrent host creates one per
/// user.
///
/// # Example
///
/// ```
/// use dosecheck_core::{ConstraintDraft, MetricType};
/// use dosecheck_store::ReviewSession;
///
/// let mut session = ReviewSession::new();
/// let id = session
///     .add_constraint(
///         ConstraintDraft::new()
///             .site("Thorax")
///             .organ("Spinal cord")
///             .metric(MetricType::Dmax)
///             .limit(45.0)
///             .unit("Gy"),
///     )
///     .unwrap();
/// session.enter_measurement(&id, Some(44.5));
///
/// session.remove_constraint(&id);
/// assert_eq!(session.measurements().get(&id), None);
/// ```
#[derive(Debug)]
pub struct ReviewSession<G: IdGenerator = SequentialIds> {
    constraints: ConstraintStore<G>,
    measurements: MeasurementStore,
}

impl ReviewSession<SequentialIds> {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::with_generator(SequentialIds::new())
    }

    /// Creates a session pre-populated with the seed template.
    pub fn with_defaults() -> Self {
        let mut session = Self::new();
        session.reset_to_defaults();
        session
    }
}

impl Default for ReviewSession<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> ReviewSession<G> {
    /// Creates an empty session drawing ids from `ids`.
    pub fn with_generator(ids: G) -> Self {
        Self {
            constraints: ConstraintStore::with_generator(ids),
            measurements: MeasurementStore::new(),
        }
    }

    /// Adds a validated draft. See [`ConstraintStore::add`].
    pub fn add_constraint(&mut self, draft: ConstraintDraft) -> Result<ConstraintId> {
        self.constraints.add(draft)
    }

    /// Removes a constraint and cascades to its measurement.
    pub fn remove_constraint(&mut self, id: &ConstraintId) -> bool {
        let removed = self.constraints.remove(id);
        if removed {
            self.measurements.cascade_delete(id);
        }
        removed
    }

    /// Stores or clears a measurement.
    ///
    /// Values for unknown constraint ids are dropped silently so the
    /// measurement map can never hold an orphan; clears always go through.
    pub fn enter_measurement(&mut self, id: &ConstraintId, value: Option<f64>) {
        if value.is_none() || self.constraints.get(id).is_some() {
            self.measurements.set(id, value);
        }
    }

    /// Replaces the constraint set with the seed template and discards all
    /// measurements.
    pub fn reset_to_defaults(&mut self) {
        self.constraints.reset_to_defaults();
        self.measurements.clear();
    }

    /// Read access to the constraint store.
    pub fn constraints(&self) -> &ConstraintStore<G> {
        &self.constraints
    }

    /// Read access to the measurement store.
    pub fn measurements(&self) -> &MeasurementStore {
        &self.measurements
    }
}
