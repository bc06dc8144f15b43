// file: src/schema/mod.rs
// description: schema loading and record validation exports
// reference: internal module structure

pub mod definition;
pub mod validator;

pub use definition::{Schema, ValueDomain};
pub use validator::{IssueKind, ValidationIssue, Validator};
