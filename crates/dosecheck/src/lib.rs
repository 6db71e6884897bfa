//! DoseCheck - organ-at-risk dose-constraint review
//!
//! Maintain a list of dose-limit constraints, enter measured values, and
//! see each one classified as pass/caution/fail/missing with summary
//! counts and exportable reports.
//!
//! # Example
//!
//! ```rust
//! use dosecheck::prelude::*;
//!
//! let mut session = ReviewSession::new();
//! let id = session
//!     .add_constraint(
//!         ConstraintDraft::new()
//!             .site("Thorax")
//!             .organ("Spinal cord")
//!             .metric(MetricType::Dmax)
//!             .limit(45.0)
//!             .unit("Gy"),
//!     )
//!     .unwrap();
//! session.enter_measurement(&id, Some(44.5));
//!
//! let filtered = filter_by_site(session.constraints().constraints(), ALL_SITES);
//! let summary = summarize(&filtered, session.measurements(), TolerancePolicy::default());
//! assert_eq!(summary.caution, 1);
//! ```

// Core types and the classifier
pub use dosecheck_core::{
    classify, Constraint, ConstraintDraft, ConstraintId, DoseCheckError, Evaluation, IdGenerator,
    MetricType, Result, SequentialIds, Status, TolerancePolicy, ALL_SITES,
};

// Session state
pub use dosecheck_store::{ConstraintStore, MeasurementStore, ReviewSession};

// Derived views and exports
pub use dosecheck_report::{filter_by_site, from_json, summarize, to_json, to_markdown, Summary, DISCLAIMER};

// Configuration
pub use dosecheck_config::{ConfigError, ReviewConfig};

pub mod prelude {
    //! Everything a review surface needs in one import.
    pub use super::{
        classify, filter_by_site, summarize, to_json, to_markdown, Constraint, ConstraintDraft,
        ConstraintId, MetricType, ReviewConfig, ReviewSession, Status, Summary, TolerancePolicy,
        ALL_SITES,
    };
}
