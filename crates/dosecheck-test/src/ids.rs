//! Deterministic id sources.

use dosecheck_core::{ConstraintId, IdGenerator};

/// Generator yielding `{prefix}1`, `{prefix}2`, ...
///
/// Lets a test pin the exact ids a store will hand out.
#[derive(Debug)]
pub struct LabeledIds {
    prefix: &'static str,
    next: u64,
}

impl LabeledIds {
    /// Creates a generator with the given prefix.
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 0 }
    }
}

impl IdGenerator for LabeledIds {
    fn next_id(&mut self) -> ConstraintId {
        self.next += 1;
        ConstraintId::new(format!("{}{}", self.prefix, self.next))
    }
}
