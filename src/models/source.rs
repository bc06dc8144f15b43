// file: src/models/source.rs
// description: data source record model parsed from frontmatter
// reference: internal data structures

use crate::error::{InventoryError, Result};
use crate::models::lenient;
use crate::parser::Frontmatter;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Keys with this prefix are internal and never exported.
pub const INTERNAL_PREFIX: char = '_';

/// One catalogued data source.
///
/// Typed properties cover what validation and rendering look at; the full
/// frontmatter mapping is kept in `attributes` so exports see every key the
/// author wrote, in the order it was written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub track: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub responsible_team: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub access_level: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_canonical: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub canonical_source: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub provides_data_for: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub use_cases: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub constraints: Vec<Constraint>,
    pub mcp: Option<McpInfo>,
    #[serde(deserialize_with = "lenient::string")]
    pub api_endpoint: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub fields: Vec<Field>,
    #[serde(deserialize_with = "lenient::list")]
    pub relationships: Vec<Relationship>,

    #[serde(skip)]
    pub attributes: Map<String, Value>,
    #[serde(skip)]
    pub body: String,
    #[serde(skip)]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Constraint {
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub constraint_type: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct McpInfo {
    #[serde(deserialize_with = "lenient::boolean")]
    pub available: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub package: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Field {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub field_type: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub access: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub semantic_type: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub mcp_name: Option<String>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub primary_key: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub required: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub computed: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Relationship {
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub relationship_type: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub target: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub field: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
}

impl SourceRecord {
    pub fn from_frontmatter(frontmatter: Frontmatter, path: &Path) -> Result<Self> {
        let Frontmatter { fields, body } = frontmatter;

        let mut record: SourceRecord = serde_json::from_value(Value::Object(fields.clone()))
            .map_err(|e| InventoryError::malformed(path, e.to_string()))?;

        record.attributes = fields;
        record.body = body;
        record.path = path.to_path_buf();
        Ok(record)
    }

    /// Identifier used in diagnostics; `unknown` when the record has none.
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("unknown")
    }

    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn description_str(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn mcp_available(&self) -> bool {
        self.mcp.as_ref().is_some_and(|mcp| mcp.available)
    }

    pub fn mcp_package(&self) -> Option<&str> {
        self.mcp
            .as_ref()
            .and_then(|mcp| mcp.package.as_deref())
            .filter(|package| !package.is_empty())
    }

    pub fn api_endpoint(&self) -> Option<&str> {
        self.api_endpoint.as_deref().filter(|url| !url.is_empty())
    }

    /// The canonical reference for a derived record, with `-` normalized to `_`.
    pub fn derived_from(&self) -> Option<String> {
        if self.is_canonical {
            return None;
        }
        self.canonical_source
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| id.replace('-', "_"))
    }

    /// The attributes with internal keys removed.
    pub fn exported_attributes(&self) -> Map<String, Value> {
        self.attributes
            .iter()
            .filter(|(key, _)| !key.starts_with(INTERNAL_PREFIX))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn primary_key(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.primary_key)
            .and_then(|field| field.name.as_deref())
    }
}

impl Field {
    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl Relationship {
    pub fn is_belongs_to(&self) -> bool {
        self.relationship_type.as_deref() == Some("belongs_to")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::FrontmatterParser;

    fn record(content: &str) -> Result<SourceRecord> {
        let frontmatter = FrontmatterParser::new().extract(content).unwrap();
        SourceRecord::from_frontmatter(frontmatter, Path::new("sources/test.md"))
    }

    #[test]
    fn test_record_from_frontmatter() {
        let record = record(
            "---\nid: allocations\nname: Allocations\nis_canonical: true\nprovides_data_for:\n  - usage\nmcp:\n  available: true\n  package: \"@access-mcp/allocations\"\nfields:\n  - name: project_id\n    type: string\n    primary_key: true\n---\nBody text\n",
        )
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("allocations"));
        assert!(record.is_canonical);
        assert_eq!(record.provides_data_for, vec!["usage"]);
        assert!(record.mcp_available());
        assert_eq!(record.mcp_package(), Some("@access-mcp/allocations"));
        assert_eq!(record.primary_key(), Some("project_id"));
        assert_eq!(record.body, "Body text");
        assert_eq!(record.path, PathBuf::from("sources/test.md"));
        assert!(record.has_attribute("fields"));
    }

    #[test]
    fn test_sparse_record_defaults() {
        let record = record("---\ndescription: only this\n---\n").unwrap();

        assert_eq!(record.label(), "unknown");
        assert_eq!(record.id_str(), "");
        assert!(!record.is_canonical);
        assert!(record.fields.is_empty());
        assert!(record.mcp.is_none());
        assert!(record.primary_key().is_none());
    }

    #[test]
    fn test_scalars_are_lenient() {
        let record = record(
            "---\nid: 42\nuse_cases: ~\nconstraints: ~\nis_canonical: ~\nfields:\n  - name: n\n    required: 1\n---\n",
        )
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("42"));
        assert!(record.use_cases.is_empty());
        assert!(record.constraints.is_empty());
        assert!(!record.is_canonical);
        assert!(record.fields[0].required);
    }

    #[test]
    fn test_non_mapping_field_is_malformed() {
        let result = record("---\nid: a\nfields:\n  - just_a_name\n---\n");

        assert!(matches!(
            result,
            Err(InventoryError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn test_derived_from_normalizes_hyphens() {
        let record = record("---\nid: a\ncanonical_source: xdmod-usage\n---\n").unwrap();
        assert_eq!(record.derived_from().as_deref(), Some("xdmod_usage"));

        let canonical =
            self::record("---\nid: b\nis_canonical: true\ncanonical_source: c\n---\n").unwrap();
        assert!(canonical.derived_from().is_none());
    }

    #[test]
    fn test_exported_attributes_strip_internal_keys() {
        let record = record("---\nid: a\n_draft: true\nname: A\n---\n").unwrap();
        let exported = record.exported_attributes();

        let keys: Vec<&str> = exported.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name"]);
    }
}
