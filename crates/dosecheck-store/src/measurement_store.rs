//! Measured values keyed by constraint id.

use std::collections::HashMap;

use tracing::debug;

use dosecheck_core::ConstraintId;

/// Sparse map of entered measurements.
///
/// Absent and non-finite inputs both mean "nothing entered", which is
/// distinct from a measurement of zero. The map therefore never holds a
/// value the classifier would call missing.
#[derive(Debug, Default)]
pub struct MeasurementStore {
    values: HashMap<ConstraintId, f64>,
}

impl MeasurementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or clears the measurement for `id`.
    ///
    /// `None` and non-finite values clear any stored entry. Unknown ids are
    /// accepted silently; orphan prevention is the session's job.
    pub fn set(&mut self, id: &ConstraintId, value: Option<f64>) {
        match value.filter(|v| v.is_finite()) {
            Some(v) => {
                debug!(event = "measurement_set", id = %id, value = v);
                self.values.insert(id.clone(), v);
            }
            None => {
                if self.values.remove(id).is_some() {
                    debug!(event = "measurement_cleared", id = %id);
                }
            }
        }
    }

    /// Returns the stored measurement, if any.
    pub fn get(&self, id: &ConstraintId) -> Option<f64> {
        self.values.get(id).copied()
    }

    /// Drops the measurement for a removed constraint.
    ///
    /// Must be invoked whenever a constraint is removed so no measurement
    /// outlives its constraint.
    pub fn cascade_delete(&mut self, id: &ConstraintId) {
        if self.values.remove(id).is_some() {
            debug!(event = "measurement_cascade_deleted", id = %id);
        }
    }

    /// Clears every measurement.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of stored measurements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no measurements are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ConstraintId {
        ConstraintId::new(s)
    }

    #[test]
    fn test_set_and_get() {
        let mut store = MeasurementStore::new();
        store.set(&id("c1"), Some(44.5));
        assert_eq!(store.get(&id("c1")), Some(44.5));
    }

    #[test]
    fn test_zero_is_a_real_measurement() {
        let mut store = MeasurementStore::new();
        store.set(&id("c1"), Some(0.0));
        assert_eq!(store.get(&id("c1")), Some(0.0));
    }

    #[test]
    fn test_none_clears() {
        let mut store = MeasurementStore::new();
        store.set(&id("c1"), Some(44.5));
        store.set(&id("c1"), None);
        assert_eq!(store.get(&id("c1")), None);
    }

    #[test]
    fn test_non_finite_coerces_to_clear() {
        let mut store = MeasurementStore::new();
        store.set(&id("c1"), Some(44.5));
        store.set(&id("c1"), Some(f64::NAN));
        assert_eq!(store.get(&id("c1")), None);
    }

    #[test]
    fn test_overwrite() {
        let mut store = MeasurementStore::new();
        store.set(&id("c1"), Some(44.5));
        store.set(&id("c1"), Some(46.0));
        assert_eq!(store.get(&id("c1")), Some(46.0));
    }

    #[test]
    fn test_cascade_delete_unknown_id_is_noop() {
        let mut store = MeasurementStore::new();
        store.cascade_delete(&id("missing"));
        assert!(store.is_empty());
    }
}
