// file: src/exporter/json.rs
// description: machine-readable json export of the catalog with grouping indices
// reference: https://docs.rs/serde_json

use crate::error::{InventoryError, Result};
use crate::exporter::{RenderContext, Renderer};
use crate::models::{Catalog, SourceRecord};
use serde::Serialize;
use serde_json::{Map, Value};

const UNKNOWN_GROUP: &str = "Unknown";

pub struct JsonRenderer;

#[derive(Debug, Serialize)]
pub struct InventoryExport {
    pub generated: String,
    pub source_count: usize,
    pub sources: Vec<Map<String, Value>>,
    pub by_track: Map<String, Value>,
    pub by_category: Map<String, Value>,
    pub by_access_level: Map<String, Value>,
}

impl InventoryExport {
    pub fn build(catalog: &Catalog, context: &RenderContext) -> Self {
        let records = catalog.records();

        Self {
            generated: context
                .generated_at
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            source_count: records.len(),
            sources: records
                .iter()
                .map(SourceRecord::exported_attributes)
                .collect(),
            by_track: group(records, |source| source.track.as_deref()),
            by_category: group(records, |source| source.category.as_deref()),
            by_access_level: group(records, |source| source.access_level.as_deref()),
        }
    }
}

/// Buckets record ids by `key`, preserving first-seen label order and
/// processing order within each bucket.
fn group<F>(records: &[SourceRecord], key: F) -> Map<String, Value>
where
    F: Fn(&SourceRecord) -> Option<&str>,
{
    let mut groups = Map::new();

    for source in records {
        let label = key(source).unwrap_or(UNKNOWN_GROUP).to_string();
        let id = source
            .attributes
            .get("id")
            .cloned()
            .unwrap_or(Value::Null);

        if let Value::Array(ids) = groups
            .entry(label)
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            ids.push(id);
        }
    }

    groups
}

impl Renderer for JsonRenderer {
    fn file_name(&self) -> &'static str {
        "inventory.json"
    }

    fn render(&self, catalog: &Catalog, context: &RenderContext) -> Result<String> {
        let export = InventoryExport::build(catalog, context);
        serde_json::to_string_pretty(&export)
            .map_err(|e| InventoryError::Serialization(e.to_string()))
    }
}
