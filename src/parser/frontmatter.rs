// file: src/parser/frontmatter.rs
// description: YAML frontmatter extraction from markdown
// reference: https://docs.rs/yaml-rust

use serde_json::{Map, Number, Value};
use thiserror::Error;
use yaml_rust::{Yaml, YamlLoader};

const DELIMITER: &str = "---";

/// Frontmatter mapping in document order plus the trimmed body text.
#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
    pub fields: Map<String, Value>,
    pub body: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterError {
    #[error("Missing YAML frontmatter")]
    MissingOpening,

    #[error("Unterminated YAML frontmatter")]
    MissingClosing,

    #[error("YAML parse error: {0}")]
    Yaml(String),

    #[error("Frontmatter is not a key-value mapping")]
    NotAMapping,
}

pub struct FrontmatterParser;

impl FrontmatterParser {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, content: &str) -> Result<Frontmatter, FrontmatterError> {
        let rest = content
            .strip_prefix(DELIMITER)
            .ok_or(FrontmatterError::MissingOpening)?;

        let end = rest.find(DELIMITER).ok_or(FrontmatterError::MissingClosing)?;
        let yaml_content = rest[..end].trim();
        let body = rest[end + DELIMITER.len()..].trim();

        let fields = match parse_yaml(yaml_content)? {
            Value::Object(map) => map,
            _ => return Err(FrontmatterError::NotAMapping),
        };

        Ok(Frontmatter {
            fields,
            body: body.to_string(),
        })
    }
}

impl Default for FrontmatterParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the first YAML document in `source`; an empty source yields `Null`.
pub fn parse_yaml(source: &str) -> Result<Value, FrontmatterError> {
    let docs =
        YamlLoader::load_from_str(source).map_err(|e| FrontmatterError::Yaml(e.to_string()))?;

    Ok(docs.first().map(yaml_to_json).unwrap_or(Value::Null))
}

pub fn yaml_to_json(yaml: &Yaml) -> Value {
    match yaml {
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Integer(i) => Value::from(*i),
        Yaml::Real(raw) => yaml
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(raw.clone())),
        Yaml::Boolean(b) => Value::Bool(*b),
        Yaml::Array(items) => Value::Array(items.iter().map(yaml_to_json).collect()),
        Yaml::Hash(hash) => {
            let mut map = Map::with_capacity(hash.len());
            for (key, value) in hash {
                map.insert(key_to_string(key), yaml_to_json(value));
            }
            Value::Object(map)
        }
        Yaml::Null | Yaml::Alias(_) | Yaml::BadValue => Value::Null,
    }
}

fn key_to_string(key: &Yaml) -> String {
    match key {
        Yaml::String(s) | Yaml::Real(s) => s.clone(),
        Yaml::Integer(i) => i.to_string(),
        Yaml::Boolean(b) => b.to_string(),
        Yaml::Null => "null".to_string(),
        other => format!("{:?}", other),
    }
}
