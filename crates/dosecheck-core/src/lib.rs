//! DoseCheck Core - Core types and classification for OAR constraint review
//!
//! This crate provides the fundamental abstractions for DoseCheck:
//! - The constraint record for organ-at-risk dose limits
//! - The draft builder used while composing a new constraint
//! - The pure classifier mapping a measurement to pass/caution/fail/missing
//! - The identifier-generation seam injected into stores

pub mod classify;
pub mod constraint;
pub mod draft;
pub mod error;
pub mod id;

#[cfg(test)]
mod classify_tests;

pub use classify::{classify, Evaluation, Status, TolerancePolicy};
pub use constraint::{Constraint, ConstraintId, MetricType, ALL_SITES};
pub use draft::ConstraintDraft;
pub use error::{DoseCheckError, Result};
pub use id::{IdGenerator, SequentialIds};
