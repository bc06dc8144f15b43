// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod repository;
pub mod schema;
pub mod utils;

pub use config::{Config, PathsConfig, SiteConfig};
pub use error::{InventoryError, Result};
pub use exporter::{
    DbmlRenderer, FieldDictionaryRenderer, InventoryExport, JsonRenderer, LandingPageRenderer,
    RenderContext, Renderer,
};
pub use models::{Catalog, Constraint, Field, McpInfo, Relationship, SourceRecord};
pub use parser::{Frontmatter, FrontmatterParser};
pub use pipeline::{PipelineOrchestrator, RunMode, RunSummary};
pub use repository::{FileScanner, LoadReport, ScannedFile, SourceLoader};
pub use schema::{Schema, ValidationIssue, Validator, ValueDomain};
