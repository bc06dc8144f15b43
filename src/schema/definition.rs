// file: src/schema/definition.rs
// description: catalog schema with required keys and enumerated value domains
// reference: https://docs.rs/yaml-rust

use crate::error::{InventoryError, Result};
use crate::parser::parse_yaml;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Named sets of legal values declared under `allowed_values`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDomain {
    Category,
    Track,
    AccessLevel,
    Priority,
    ConstraintType,
    FieldAccess,
    FieldType,
    SemanticType,
}

impl ValueDomain {
    pub fn key(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Track => "track",
            Self::AccessLevel => "access_level",
            Self::Priority => "priority",
            Self::ConstraintType => "constraint_type",
            Self::FieldAccess => "field_access",
            Self::FieldType => "field_type",
            Self::SemanticType => "semantic_type",
        }
    }
}

impl fmt::Display for ValueDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Schema {
    pub required_fields: Vec<String>,
    pub allowed_values: BTreeMap<String, BTreeSet<String>>,
}

impl Schema {
    /// Loads the schema at `path`. A missing file yields the empty schema,
    /// under which every record is valid.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No schema at {}, validation disabled", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| InventoryError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let schema = Self::parse(&content).map_err(|message| InventoryError::Schema {
            path: path.to_path_buf(),
            message,
        })?;

        debug!(
            "Schema loaded: {} required fields, {} value domains",
            schema.required_fields.len(),
            schema.allowed_values.len()
        );
        Ok(schema)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let value = parse_yaml(content).map_err(|e| e.to_string())?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => serde_json::from_value(value).map_err(|e| e.to_string()),
            _ => Err("schema must be a key-value mapping".to_string()),
        }
    }

    /// The allowed set for `domain`, if one is declared and non-empty.
    pub fn allowed(&self, domain: ValueDomain) -> Option<&BTreeSet<String>> {
        self.allowed_values
            .get(domain.key())
            .filter(|values| !values.is_empty())
    }

    /// Whether `value` is legal in `domain`; undeclared or empty domains
    /// accept everything.
    pub fn permits(&self, domain: ValueDomain, value: &str) -> bool {
        self.allowed(domain)
            .is_none_or(|values| values.contains(value))
    }
}
