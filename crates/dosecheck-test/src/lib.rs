//! Shared test fixtures for DoseCheck crates.
//!
//! This crate provides canned drafts, built constraints, and a
//! deterministic id source. It depends only on `dosecheck-core` so the
//! store and report crates can use it as a dev-dependency without cycles.
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! dosecheck-test = { workspace = true }
//! ```

pub mod drafts;
pub mod ids;
pub mod oars;

pub use ids::LabeledIds;
