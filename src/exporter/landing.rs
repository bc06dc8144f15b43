// file: src/exporter/landing.rs
// description: landing page listing data sources grouped by track
// reference: markdown table generation for the documentation site

use crate::error::Result;
use crate::exporter::{RenderContext, Renderer};
use crate::models::{Catalog, SourceRecord};
use std::collections::BTreeMap;

const UNKNOWN_TRACK: &str = "Unknown";
const LINK_SEPARATOR: &str = " · ";

pub struct LandingPageRenderer;

impl Renderer for LandingPageRenderer {
    fn file_name(&self) -> &'static str {
        "index.md"
    }

    fn render(&self, catalog: &Catalog, context: &RenderContext) -> Result<String> {
        let title = &context.site.title;
        let mut lines = vec![
            "---".to_string(),
            "layout: default".to_string(),
            format!("title: {}", title),
            "---".to_string(),
            String::new(),
            format!("# {}", title),
            String::new(),
            "{: .intro}".to_string(),
            "Unified documentation for data sources, APIs, and MCP tools.".to_string(),
            String::new(),
            "## Goals".to_string(),
            String::new(),
            "Data is spread across many sources, teams, and tracks. This inventory brings clarity and structure to that landscape so teams can work with data more effectively.".to_string(),
            String::new(),
            "- **Catalog every data source** in a single, version-controlled inventory".to_string(),
            "- **Document fields, relationships, and access levels** so consumers know what's available and how to use it".to_string(),
            "- **Enable discovery across tracks** by generating browsable docs and interactive diagrams".to_string(),
            "- **Power AI tools and automation** by providing machine-readable metadata for MCP servers, agents, and other workflows".to_string(),
            String::new(),
            "## Data Sources".to_string(),
            String::new(),
        ];

        for (track, sources) in group_by_track(catalog) {
            lines.push(format!("### {}", track));
            lines.push(String::new());
            lines.push("| Source | Description | Access | |".to_string());
            lines.push("|--------|-------------|--------|---|".to_string());

            for source in sources {
                lines.push(source_row(source, catalog, context));
            }

            lines.push(String::new());
        }

        lines.extend([
            "## Resources".to_string(),
            String::new(),
            "- [Fields](field-dictionary) — Field-level documentation".to_string(),
            "- [Connections](heb-visualization) — Interactive relationship visualization"
                .to_string(),
            "- [Schema](erd) — Entity-relationship diagram".to_string(),
            "- [DBML](inventory.dbml) — Raw schema for dbdiagram.io".to_string(),
            "- [JSON](inventory.json) — Machine-readable export".to_string(),
            format!(
                "- [Repository]({}) — Source files and contribution guide",
                context.site.repository_url
            ),
            String::new(),
        ]);

        Ok(lines.join("\n"))
    }
}

/// Tracks in alphabetical order, each with its records sorted by name.
fn group_by_track(catalog: &Catalog) -> BTreeMap<&str, Vec<&SourceRecord>> {
    let mut by_track: BTreeMap<&str, Vec<&SourceRecord>> = BTreeMap::new();

    for source in catalog.records() {
        let track = source.track.as_deref().unwrap_or(UNKNOWN_TRACK);
        by_track.entry(track).or_default().push(source);
    }

    for sources in by_track.values_mut() {
        sources.sort_by(|a, b| a.name_str().cmp(b.name_str()));
    }

    by_track
}

fn source_row(source: &SourceRecord, catalog: &Catalog, context: &RenderContext) -> String {
    let id = source.id_str();

    let canonical_note = match source.derived_from() {
        Some(canon_id) => format!(
            " *(sourced from [{}](field-dictionary#{}))*",
            catalog.display_name(&canon_id),
            canon_id
        ),
        None => String::new(),
    };

    format!(
        "| [{}](field-dictionary#{}) | {}{} | {} | {} |",
        source.name_str(),
        id,
        source.description_str(),
        canonical_note,
        source.access_level.as_deref().unwrap_or_default(),
        links(source, context)
    )
}

fn links(source: &SourceRecord, context: &RenderContext) -> String {
    let mut links = Vec::new();

    if source.mcp_available() {
        let package = source.mcp_package().unwrap_or_default();
        let package_name = package.replace(&context.site.mcp_package_prefix, "");
        links.push(format!(
            "[MCP]({}{})",
            context.site.mcp_docs_url, package_name
        ));
    }

    if let Some(endpoint) = source.api_endpoint() {
        links.push(format!("[API]({})", endpoint));
    }

    links.join(LINK_SEPARATOR)
}
