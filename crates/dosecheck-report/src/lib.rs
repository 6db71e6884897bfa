//! DoseCheck Report - Derived views and exports
//!
//! Everything here is computed fresh from the stores on every call: the
//! site filter, the status summary, and both export formats. Nothing is
//! cached, so a view can never show stale classifications after a
//! measurement or filter change.

pub mod aggregate;
pub mod export;


pub use aggregate::{filter_by_site, summarize, Summary};
pub use export::{from_json, to_json, to_markdown, DISCLAIMER};
