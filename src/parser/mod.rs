// file: src/parser/mod.rs
// description: frontmatter parsing module exports
// reference: internal module structure

pub mod frontmatter;

pub use frontmatter::{Frontmatter, FrontmatterError, FrontmatterParser, parse_yaml};
