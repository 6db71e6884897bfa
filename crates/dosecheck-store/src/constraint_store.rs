//! Ordered collection of dose constraints.

use tracing::debug;

use dosecheck_core::{
    Constraint, ConstraintDraft, ConstraintId, IdGenerator, Result, SequentialIds, ALL_SITES,
};

use crate::defaults;

/// Ordered, id-unique collection of constraints.
///
/// Insertion order is the default display order. Ids come from the injected
/// [`IdGenerator`]; the store never fabricates them, so tests can pin exact
/// id sequences.
///
/// # Example
///
/// ```
/// use dosecheck_core::{ConstraintDraft, MetricType};
/// use dosecheck_store::ConstraintStore;
///
/// let mut store = ConstraintStore::new();
/// let id = store
///     .add(
///         ConstraintDraft::new()
///             .site("Thorax")
///             .organ("Heart")
///             .metric(MetricType::Dmean)
///             .limit(26.0)
///             .unit("Gy"),
///     )
///     .unwrap();
/// assert!(store.get(&id).is_some());
///
/// // An invalid draft is rejected without touching the store.
/// assert!(store.add(ConstraintDraft::new()).is_err());
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug)]
pub struct ConstraintStore<G: IdGenerator = SequentialIds> {
    constraints: Vec<Constraint>,
    ids: G,
}

impl ConstraintStore<SequentialIds> {
    /// Creates an empty store with sequential id generation.
    pub fn new() -> Self {
        Self::with_generator(SequentialIds::new())
    }

    /// Creates a store pre-populated with the seed template.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store.reset_to_defaults();
        store
    }
}

impl Default for ConstraintStore<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> ConstraintStore<G> {
    /// Creates an empty store drawing ids from `ids`.
    pub fn with_generator(ids: G) -> Self {
        Self {
            constraints: Vec::new(),
            ids,
        }
    }

    /// Validates the draft and appends it with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns the draft's validation error; the store is left unchanged.
    /// Not fatal: the caller may fix the draft and retry.
    pub fn add(&mut self, draft: ConstraintDraft) -> Result<ConstraintId> {
        let id = self.ids.next_id();
        let constraint = draft.build(id.clone())?;
        debug!(
            event = "constraint_added",
            id = %id,
            site = %constraint.site,
            organ = %constraint.organ,
        );
        self.constraints.push(constraint);
        Ok(id)
    }

    /// Removes the constraint with `id`. Returns whether anything was
    /// removed; an unknown id is a no-op, not an error.
    pub fn remove(&mut self, id: &ConstraintId) -> bool {
        let before = self.constraints.len();
        self.constraints.retain(|c| &c.id != id);
        let removed = self.constraints.len() != before;
        if removed {
            debug!(event = "constraint_removed", id = %id);
        }
        removed
    }

    /// Replaces the whole collection with the seed template, with fresh ids.
    pub fn reset_to_defaults(&mut self) {
        self.constraints = defaults::seed_constraints(&mut self.ids);
        debug!(event = "constraints_reset", count = self.constraints.len());
    }

    /// Distinct site labels in first-seen order, prefixed with the
    /// [`ALL_SITES`] sentinel.
    pub fn sites(&self) -> Vec<String> {
        let mut sites = vec![ALL_SITES.to_string()];
        for c in &self.constraints {
            if !sites[1..].contains(&c.site) {
                sites.push(c.site.clone());
            }
        }
        sites
    }

    /// Looks up a constraint by id.
    pub fn get(&self, id: &ConstraintId) -> Option<&Constraint> {
        self.constraints.iter().find(|c| &c.id == id)
    }

    /// All constraints in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dosecheck_core::MetricType;
    use dosecheck_test::drafts;

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = ConstraintStore::new();
        store.add(drafts::spinal_cord_dmax()).unwrap();
        store.add(drafts::lung_v20()).unwrap();
        let organs: Vec<_> = store.constraints().iter().map(|c| c.organ.as_str()).collect();
        assert_eq!(organs, ["Spinal cord", "Lung (total)"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = ConstraintStore::new();
        let a = store.add(drafts::spinal_cord_dmax()).unwrap();
        let b = store.add(drafts::spinal_cord_dmax()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejected_add_leaves_store_unchanged() {
        let mut store = ConstraintStore::new();
        store.add(drafts::spinal_cord_dmax()).unwrap();
        assert!(store.add(ConstraintDraft::new().site("Thorax")).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = ConstraintStore::new();
        store.add(drafts::spinal_cord_dmax()).unwrap();
        assert!(!store.remove(&ConstraintId::new("nope")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sites_sentinel_first_then_first_seen_order() {
        let mut store = ConstraintStore::new();
        store.add(drafts::spinal_cord_dmax()).unwrap(); // Thorax
        store.add(drafts::parotid_dmean()).unwrap(); // Head & Neck
        store.add(drafts::lung_v20()).unwrap(); // Thorax again
        assert_eq!(store.sites(), ["All", "Thorax", "Head & Neck"]);
    }

    #[test]
    fn test_sites_on_empty_store_is_just_sentinel() {
        let store = ConstraintStore::new();
        assert_eq!(store.sites(), ["All"]);
    }

    #[test]
    fn test_defaults_cover_metrics_and_sites() {
        let store = ConstraintStore::with_defaults();
        let metrics: Vec<_> = store.constraints().iter().map(|c| c.metric).collect();
        assert!(metrics.contains(&MetricType::Dmax));
        assert!(metrics.contains(&MetricType::Dmean));
        assert!(metrics.contains(&MetricType::Vx));
        // Sentinel plus at least two real sites.
        assert!(store.sites().len() >= 3);
    }

    #[test]
    fn test_reset_generates_fresh_ids() {
        let mut store = ConstraintStore::with_defaults();
        let old_ids: Vec<_> = store.constraints().iter().map(|c| c.id.clone()).collect();
        store.reset_to_defaults();
        for c in store.constraints() {
            assert!(!old_ids.contains(&c.id));
        }
    }

    #[test]
    fn test_injected_generator_is_used() {
        let mut store = ConstraintStore::with_generator(dosecheck_test::LabeledIds::new("fixed-"));
        let id = store.add(drafts::spinal_cord_dmax()).unwrap();
        assert_eq!(id.as_str(), "fixed-1");
    }
}
