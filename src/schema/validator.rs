// file: src/schema/validator.rs
// description: schema validation of source records into readable issues
// reference: input validation patterns

use crate::models::SourceRecord;
use crate::models::lenient::scalar_to_string;
use crate::schema::{Schema, ValueDomain};
use serde_json::{Map, Value};
use std::fmt;

/// A single schema violation located by record id and, for field-level
/// problems, the field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub record: String,
    pub field: Option<String>,
    pub kind: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    MissingField(String),
    InvalidValue { property: String, value: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}.{}: ", self.record, field)?,
            None => write!(f, "{}: ", self.record)?,
        }

        match &self.kind {
            IssueKind::MissingField(name) => write!(f, "Missing required field '{}'", name),
            IssueKind::InvalidValue { property, value } => {
                write!(f, "Invalid {} '{}'", property, value)
            }
        }
    }
}

const CLASSIFICATIONS: [ValueDomain; 4] = [
    ValueDomain::Category,
    ValueDomain::Track,
    ValueDomain::AccessLevel,
    ValueDomain::Priority,
];

const FIELD_CHECKS: [(ValueDomain, &str); 3] = [
    (ValueDomain::FieldAccess, "access"),
    (ValueDomain::FieldType, "type"),
    (ValueDomain::SemanticType, "semantic_type"),
];

pub struct Validator;

impl Validator {
    /// Checks `record` against every schema rule and returns all violations.
    ///
    /// Domain checks read the raw frontmatter, so any present value that is
    /// not a permitted string is reported, including `null`, lists and
    /// mappings.
    pub fn validate(record: &SourceRecord, schema: &Schema) -> Vec<ValidationIssue> {
        let mut check = Check {
            schema,
            record: record.label(),
            issues: Vec::new(),
        };

        for required in &schema.required_fields {
            if !record.has_attribute(required) {
                check.issues.push(ValidationIssue {
                    record: check.record.to_string(),
                    field: None,
                    kind: IssueKind::MissingField(required.clone()),
                });
            }
        }

        for domain in CLASSIFICATIONS {
            if let Some(value) = record.attributes.get(domain.key()) {
                check.value(domain, domain.key(), value, None);
            }
        }

        let empty = Value::String(String::new());
        for constraint in entries(&record.attributes, "constraints") {
            let value = constraint.get("type").unwrap_or(&empty);
            check.value(ValueDomain::ConstraintType, "constraint type", value, None);
        }

        for field in entries(&record.attributes, "fields") {
            let name = field
                .get("name")
                .and_then(scalar_to_string)
                .unwrap_or_else(|| "unknown".to_string());

            for (domain, property) in FIELD_CHECKS {
                if let Some(value) = field.get(property) {
                    check.value(domain, property, value, Some(&name));
                }
            }
        }

        check.issues
    }

    /// Validates every record, concatenating issues in record order.
    pub fn validate_all<'a>(
        records: impl IntoIterator<Item = &'a SourceRecord>,
        schema: &Schema,
    ) -> Vec<ValidationIssue> {
        records
            .into_iter()
            .flat_map(|record| Self::validate(record, schema))
            .collect()
    }
}

/// Mapping entries of the list stored under `key`; anything else is skipped.
fn entries<'a>(
    attributes: &'a Map<String, Value>,
    key: &str,
) -> impl Iterator<Item = &'a Map<String, Value>> {
    attributes
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

struct Check<'a> {
    schema: &'a Schema,
    record: &'a str,
    issues: Vec<ValidationIssue>,
}

impl Check<'_> {
    fn value(&mut self, domain: ValueDomain, property: &str, value: &Value, field: Option<&str>) {
        if self.schema.allowed(domain).is_none() {
            return;
        }
        if let Value::String(s) = value
            && self.schema.permits(domain, s)
        {
            return;
        }

        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        self.issues.push(ValidationIssue {
            record: self.record.to_string(),
            field: field.map(str::to_string),
            kind: IssueKind::InvalidValue {
                property: property.to_string(),
                value: rendered,
            },
        });
    }
}
