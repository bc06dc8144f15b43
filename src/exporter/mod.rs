// file: src/exporter/mod.rs
// description: output renderers for the data source catalog
// reference: internal module structure

pub mod dbml;
pub mod field_dictionary;
pub mod json;
pub mod landing;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::models::Catalog;
use chrono::{Local, NaiveDateTime};

pub use dbml::DbmlRenderer;
pub use field_dictionary::FieldDictionaryRenderer;
pub use json::{InventoryExport, JsonRenderer};
pub use landing::LandingPageRenderer;

/// Inputs shared by every renderer besides the catalog itself.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub site: SiteConfig,
    pub generated_at: NaiveDateTime,
}

impl RenderContext {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site,
            generated_at: Local::now().naive_local(),
        }
    }
}

/// Projects the catalog into one output document.
pub trait Renderer {
    /// File name of the artifact inside the output directory.
    fn file_name(&self) -> &'static str;

    fn render(&self, catalog: &Catalog, context: &RenderContext) -> Result<String>;
}

/// Every renderer, in the order their artifacts are written.
pub fn all_renderers() -> Vec<Box<dyn Renderer>> {
    vec![
        Box::new(LandingPageRenderer),
        Box::new(FieldDictionaryRenderer),
        Box::new(DbmlRenderer),
        Box::new(JsonRenderer),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_renderers_have_distinct_files() {
        let names: Vec<&str> = all_renderers().iter().map(|r| r.file_name()).collect();
        assert_eq!(
            names,
            vec![
                "index.md",
                "field-dictionary.md",
                "inventory.dbml",
                "inventory.json"
            ]
        );
    }
}
