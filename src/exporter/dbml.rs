// file: src/exporter/dbml.rs
// description: DBML diagram definition for dbdiagram.io
// reference: https://dbml.dbdiagram.io/docs

use crate::error::Result;
use crate::exporter::{RenderContext, Renderer};
use crate::models::{Catalog, Field, SourceRecord};
use crate::utils::text::escape_quotes;

const RULE: &str =
    "// =============================================================================";
const DEFAULT_FIELD_TYPE: &str = "varchar";
const DEFAULT_FIELD_ACCESS: &str = "Public";
const DEFAULT_PRIMARY_KEY: &str = "id";
const NULL: &str = "null";

pub struct DbmlRenderer;

impl Renderer for DbmlRenderer {
    fn file_name(&self) -> &'static str {
        "inventory.dbml"
    }

    fn render(&self, catalog: &Catalog, context: &RenderContext) -> Result<String> {
        let mut lines = vec![
            format!("// {}", context.site.title),
            format!(
                "// Generated: {}",
                context.generated_at.format("%Y-%m-%d %H:%M")
            ),
            "// Source: data-sources/*.md".to_string(),
            String::new(),
        ];

        banner(&mut lines, "DATA SOURCES");
        lines.push("Enum data_source {".to_string());
        for source in catalog.records() {
            enum_value(&mut lines, source);
        }
        lines.push("}".to_string());
        lines.push(String::new());

        banner(&mut lines, "ENTITIES");
        for source in catalog.records() {
            if !source.fields.is_empty() {
                table(&mut lines, source);
            }
        }

        banner(&mut lines, "RELATIONSHIPS");
        lines.extend(references(catalog));
        lines.push(String::new());

        Ok(lines.join("\n"))
    }
}

fn banner(lines: &mut Vec<String>, heading: &str) {
    lines.push(RULE.to_string());
    lines.push(format!("// {}", heading));
    lines.push(RULE.to_string());
    lines.push(String::new());
}

fn text(value: &Option<String>) -> String {
    escape_quotes(value.as_deref().unwrap_or_default())
}

fn reference(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(escape_quotes)
        .unwrap_or_else(|| NULL.to_string())
}

fn enum_value(lines: &mut Vec<String>, source: &SourceRecord) {
    let note = [
        format!("name: {}", text(&source.name)),
        format!("description: {}", text(&source.description)),
        format!("category: {}", text(&source.category)),
        format!("track: {}", text(&source.track)),
        format!("responsible_team: {}", text(&source.responsible_team)),
        format!("access_level: {}", text(&source.access_level)),
        format!("is_canonical: {}", source.is_canonical),
        format!(
            "canonical_source: {}",
            reference(source.canonical_source.as_deref())
        ),
        format!("mcp_available: {}", source.mcp_available()),
        format!("mcp_package: {}", reference(source.mcp_package())),
        format!("api_endpoint: {}", reference(source.api_endpoint())),
        format!("priority: {}", text(&source.priority)),
    ];

    lines.push(format!("  {} [note: '''", source.id_str()));
    lines.extend(note.iter().map(|line| format!("    {}", line)));
    lines.push("  ''']".to_string());
    lines.push(String::new());
}

fn table(lines: &mut Vec<String>, source: &SourceRecord) {
    lines.push(format!("Table {} {{", source.id.as_deref().unwrap_or("unknown")));
    lines.extend(source.fields.iter().map(column));

    lines.push(String::new());
    lines.push("  Note: '''".to_string());
    lines.push(format!("    source: {}", source.id_str()));
    lines.push(format!("    description: {}", text(&source.description)));
    lines.push(format!("    access_level: {}", text(&source.access_level)));

    if !source.use_cases.is_empty() {
        lines.push("    use_cases:".to_string());
        for use_case in &source.use_cases {
            lines.push(format!("      - {}", escape_quotes(use_case)));
        }
    }

    if !source.constraints.is_empty() {
        lines.push("    constraints:".to_string());
        for constraint in &source.constraints {
            lines.push(format!(
                "      - {}: {}",
                text(&constraint.constraint_type),
                text(&constraint.description)
            ));
        }
    }

    lines.push("  '''".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
}

fn column(field: &Field) -> String {
    let mut attrs = Vec::new();
    if field.primary_key {
        attrs.push("pk".to_string());
    }
    if field.required {
        attrs.push("not null".to_string());
    }

    let mut note = vec![format!(
        "access: {}",
        field.access.as_deref().unwrap_or(DEFAULT_FIELD_ACCESS)
    )];
    if let Some(mcp_name) = field.mcp_name.as_deref().filter(|s| !s.is_empty()) {
        note.push(format!("mcp: {}", mcp_name));
    }
    if field.computed {
        note.push("computed: true".to_string());
    }
    if let Some(semantic) = field.semantic_type.as_deref().filter(|s| !s.is_empty()) {
        note.push(format!("semantic: {}", semantic));
    }
    if let Some(description) = field.description.as_deref().filter(|s| !s.is_empty()) {
        note.push(escape_quotes(description));
    }
    attrs.push(format!("note: '{}'", note.join(" | ")));

    format!(
        "  {} {} [{}]",
        field.name_str(),
        field.field_type.as_deref().unwrap_or(DEFAULT_FIELD_TYPE),
        attrs.join(", ")
    )
}

/// `Ref` lines for `belongs_to` relationships naming a local field, skipping
/// targets that are not in the catalog.
fn references(catalog: &Catalog) -> Vec<String> {
    let mut refs = Vec::new();
    for source in catalog.records() {
        for relationship in &source.relationships {
            if !relationship.is_belongs_to() {
                continue;
            }
            let Some(field) = relationship.field.as_deref().filter(|f| !f.is_empty()) else {
                continue;
            };
            let target = relationship.target.as_deref().unwrap_or_default();
            let Some(target_source) = catalog.get(target) else {
                continue;
            };

            let target_pk = target_source.primary_key().unwrap_or(DEFAULT_PRIMARY_KEY);
            refs.push(format!(
                "Ref: {}.{} > {}.{}",
                source.id_str(),
                field,
                target,
                target_pk
            ));
        }
    }

    refs
}
