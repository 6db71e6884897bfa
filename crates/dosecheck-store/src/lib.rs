//! DoseCheck Store - In-memory state for one review session
//!
//! Two independent stores plus the session that pairs them:
//! - [`ConstraintStore`]: ordered, id-unique collection of dose constraints
//! - [`MeasurementStore`]: sparse map of entered measurements
//! - [`ReviewSession`]: owns both and enforces the cascade-delete invariant
//!
//! Everything here is synchronous and owned; a concurrent host isolates one
//! session per user rather than sharing these types.

pub mod constraint_store;
pub mod defaults;
pub mod measurement_store;
pub mod session;

pub use constraint_store::ConstraintStore;
pub use measurement_store::MeasurementStore;
pub use session::ReviewSession;
