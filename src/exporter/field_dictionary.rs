// file: src/exporter/field_dictionary.rs
// description: field-level reference page with one section per data source
// reference: markdown table generation for the documentation site

use crate::error::Result;
use crate::exporter::{RenderContext, Renderer};
use crate::models::{Catalog, Field, SourceRecord};
use crate::utils::text::humanize;

pub struct FieldDictionaryRenderer;

impl Renderer for FieldDictionaryRenderer {
    fn file_name(&self) -> &'static str {
        "field-dictionary.md"
    }

    fn render(&self, catalog: &Catalog, _context: &RenderContext) -> Result<String> {
        let sources = catalog.sorted_by_name();

        let mut lines = vec![
            "---".to_string(),
            "layout: default".to_string(),
            "title: Fields".to_string(),
            "---".to_string(),
            String::new(),
            "# Fields".to_string(),
            String::new(),
            "Field-level documentation for all data sources.".to_string(),
            String::new(),
            "## Table of Contents".to_string(),
            String::new(),
        ];

        for source in &sources {
            lines.push(format!("- [{}](#{})", display_name(source), source.id_str()));
        }
        lines.push(String::new());

        for source in &sources {
            render_section(&mut lines, source, catalog);
        }

        Ok(lines.join("\n"))
    }
}

fn display_name(source: &SourceRecord) -> &str {
    source.name.as_deref().unwrap_or("Unknown")
}

fn render_section(lines: &mut Vec<String>, source: &SourceRecord, catalog: &Catalog) {
    lines.push(format!(
        "<h2 id=\"{}\">{}</h2>",
        source.id_str(),
        display_name(source)
    ));
    lines.push(String::new());
    lines.push(format!("*{}*", source.description_str()));
    lines.push(String::new());

    if let Some(canon_id) = source.derived_from() {
        lines.push(format!(
            "> **Canonical source:** [{}](#{}) — this data is derived from the authoritative source above.",
            catalog.display_name(&canon_id),
            canon_id
        ));
        lines.push(String::new());
    } else if source.is_canonical && !source.provides_data_for.is_empty() {
        let derived: Vec<String> = source
            .provides_data_for
            .iter()
            .map(|id| format!("[{}](#{})", catalog.display_name(id), id))
            .collect();
        lines.push(format!("> **Authoritative source** for: {}", derived.join(", ")));
        lines.push(String::new());
    }

    if !source.use_cases.is_empty() {
        lines.push("**Example questions this data can answer:**".to_string());
        lines.push(String::new());
        lines.extend(source.use_cases.iter().map(|uc| format!("- {}", uc)));
        lines.push(String::new());
    }

    if !source.constraints.is_empty() {
        lines.push("**Constraints:**".to_string());
        lines.push(String::new());
        for constraint in &source.constraints {
            lines.push(format!(
                "- **{}:** {}",
                humanize(constraint.constraint_type.as_deref().unwrap_or_default()),
                constraint.description.as_deref().unwrap_or_default()
            ));
        }
        lines.push(String::new());
    }

    if source.fields.is_empty() {
        lines.push("*No fields documented.*".to_string());
        lines.push(String::new());
        return;
    }

    lines.push("| Field | Type | Access | MCP Name | Description |".to_string());
    lines.push("|-------|------|--------|----------|-------------|".to_string());
    lines.extend(source.fields.iter().map(field_row));
    lines.push(String::new());
    lines.push("*PK = Primary Key, * = Required, [type] = Semantic Type*".to_string());
    lines.push(String::new());

    // Relationships only appear under a field table.
    if !source.relationships.is_empty() {
        lines.push("### Relationships".to_string());
        lines.push(String::new());
        for relationship in &source.relationships {
            lines.push(format!(
                "- **{}** `{}`: {}",
                humanize(relationship.relationship_type.as_deref().unwrap_or_default()),
                relationship.target.as_deref().unwrap_or_default(),
                relationship.description.as_deref().unwrap_or_default()
            ));
        }
        lines.push(String::new());
    }
}

fn field_row(field: &Field) -> String {
    let pk = if field.primary_key { " (PK)" } else { "" };
    let required = if field.required { " *" } else { "" };
    let computed = if field.computed { " (computed)" } else { "" };
    let semantic = field
        .semantic_type
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| format!(" [{}]", s))
        .unwrap_or_default();

    format!(
        "| `{}`{}{} | {} | {} | {} | {}{}{} |",
        field.name_str(),
        pk,
        required,
        field.field_type.as_deref().unwrap_or_default(),
        field.access.as_deref().unwrap_or_default(),
        field.mcp_name.as_deref().unwrap_or_default(),
        field.description.as_deref().unwrap_or_default(),
        computed,
        semantic
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::fixtures::{catalog, context};
    use pretty_assertions::assert_eq;

    fn render(frontmatters: &[&str]) -> String {
        FieldDictionaryRenderer
            .render(&catalog(frontmatters), &context())
            .unwrap()
    }

    #[test]
    fn test_field_row_annotations() {
        let field = Field {
            name: Some("started_on".to_string()),
            field_type: Some("date".to_string()),
            access: Some("Public".to_string()),
            semantic_type: Some("date".to_string()),
            mcp_name: Some("start".to_string()),
            primary_key: true,
            required: true,
            computed: true,
            description: Some("Start date".to_string()),
        };

        assert_eq!(
            field_row(&field),
            "| `started_on` (PK) * | date | Public | start | Start date (computed) [date] |"
        );
    }

    #[test]
    fn test_plain_field_row() {
        let field = Field {
            name: Some("count".to_string()),
            field_type: Some("integer".to_string()),
            ..Default::default()
        };

        assert_eq!(field_row(&field), "| `count` | integer |  |  |  |");
    }

    #[test]
    fn test_table_of_contents_sorted() {
        let page = render(&["id: z\nname: Zulu", "id: a\nname: Alpha"]);

        assert!(page.contains("## Table of Contents\n\n- [Alpha](#a)\n- [Zulu](#z)\n"));
        assert!(page.find("<h2 id=\"a\">Alpha</h2>") < page.find("<h2 id=\"z\">Zulu</h2>"));
    }

    #[test]
    fn test_full_section() {
        let page = render(&[
            "id: usage\nname: Usage\ndescription: Job usage\nuse_cases:\n  - Who ran jobs?\nconstraints:\n  - type: rate_limit\n    description: 100/min\nfields:\n  - name: job_id\n    type: string\n    access: Public\n    primary_key: true\n    required: true\nrelationships:\n  - type: belongs_to\n    target: allocations\n    field: project_id\n    description: Owning project",
        ]);

        let section = &page[page.find("<h2 id=\"usage\">").unwrap()..];
        assert_eq!(
            section,
            "<h2 id=\"usage\">Usage</h2>\n\
             \n\
             *Job usage*\n\
             \n\
             **Example questions this data can answer:**\n\
             \n\
             - Who ran jobs?\n\
             \n\
             **Constraints:**\n\
             \n\
             - **Rate Limit:** 100/min\n\
             \n\
             | Field | Type | Access | MCP Name | Description |\n\
             |-------|------|--------|----------|-------------|\n\
             | `job_id` (PK) * | string | Public |  |  |\n\
             \n\
             *PK = Primary Key, * = Required, [type] = Semantic Type*\n\
             \n\
             ### Relationships\n\
             \n\
             - **Belongs To** `allocations`: Owning project\n"
        );
    }

    #[test]
    fn test_no_fields_placeholder() {
        let page = render(&["id: empty\nname: Empty"]);

        assert!(page.contains("*No fields documented.*"));
        assert!(!page.contains("| Field |"));
    }

    #[test]
    fn test_relationships_omitted_without_fields() {
        let page = render(&[
            "id: a\nname: A\nrelationships:\n  - type: has_many\n    target: b\n    description: Bs",
        ]);

        assert!(page.ends_with("*No fields documented.*\n"));
        assert!(!page.contains("### Relationships"));
        assert!(!page.contains("**Has Many**"));
    }

    #[test]
    fn test_canonical_cross_links() {
        let page = render(&[
            "id: canon\nname: Canon\nis_canonical: true\nprovides_data_for:\n  - copy\n  - ghost",
            "id: copy\nname: Copy\ncanonical_source: canon",
        ]);

        assert!(page.contains("> **Authoritative source** for: [Copy](#copy), [ghost](#ghost)"));
        assert!(page.contains(
            "> **Canonical source:** [Canon](#canon) — this data is derived from the authoritative source above."
        ));
    }

    #[test]
    fn test_missing_name_and_id() {
        let page = render(&["description: anonymous"]);

        assert!(page.contains("- [Unknown](#)"));
        assert!(page.contains("<h2 id=\"\">Unknown</h2>"));
    }
}
