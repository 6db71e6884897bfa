//! Identifier generation seam.
//!
//! Stores never invent ids themselves; they ask an injected [`IdGenerator`]
//! so tests can supply deterministic sequences.

use crate::constraint::ConstraintId;

/// Source of fresh constraint ids.
pub trait IdGenerator {
    /// Returns the next id. Each call must yield a value not returned
    /// before by this generator.
    fn next_id(&mut self) -> ConstraintId;
}

/// Closures work as generators directly.
impl<F> IdGenerator for F
where
    F: FnMut() -> ConstraintId,
{
    fn next_id(&mut self) -> ConstraintId {
        self()
    }
}

/// Production generator: `c1`, `c2`, ...
///
/// # Example
///
/// ```
/// use dosecheck_core::{IdGenerator, SequentialIds};
///
/// let mut ids = SequentialIds::new();
/// assert_eq!(ids.next_id().as_str(), "c1");
/// assert_eq!(ids.next_id().as_str(), "c2");
/// ```
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Creates a generator starting at `c1`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ConstraintId {
        self.next += 1;
        ConstraintId::new(format!("c{}", self.next))
    }
}
