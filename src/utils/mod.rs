// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod logging;
pub mod text;

pub use text::{escape_quotes, humanize};
