// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod catalog;
pub mod lenient;
pub mod source;

pub use catalog::Catalog;
pub use source::{Constraint, Field, McpInfo, Relationship, SourceRecord, INTERNAL_PREFIX};
