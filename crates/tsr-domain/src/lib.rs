//! Time-Scoped Relations Domain Layer
//!
//! This crate contains the value objects shared by every other layer of the
//! connector. It holds no I/O and no transport concerns; those live in
//! `tsr-sdk` and `tsr-connector`.
//!
//! ## Key Concepts
//!
//! - **ParameterKey**: identifies a monitored parameter, optionally a table cell
//! - **ElementKey**: identifies the monitored element hosting a parameter
//! - **Relation**: a reported association between two parameters with a confidence
//! - **RelationQuery**: a validated "source parameter + time window" request
//!
//! ## Architecture
//!
//! - Only fundamental primitives as dependencies (`chrono` for instants)
//! - Pure value objects, parsed once and immutable afterwards
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod parameter;
pub mod query;
pub mod relation;

// Re-exports for convenience
pub use parameter::{ElementKey, KeyParseError, ParameterKey};
pub use query::RelationQuery;
pub use relation::Relation;
