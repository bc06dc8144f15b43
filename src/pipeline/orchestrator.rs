// file: src/pipeline/orchestrator.rs
// description: coordinates loading, validation, and artifact generation
// reference: synchronous load -> validate -> render workflow

use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::exporter::{all_renderers, RenderContext};
use crate::models::Catalog;
use crate::repository::SourceLoader;
use crate::schema::{Schema, ValidationIssue, Validator};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Report validation issues and stop; nothing is written.
    ValidateOnly,
    /// Report validation issues as warnings and write every artifact.
    Generate,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub records_loaded: usize,
    pub load_failures: Vec<InventoryError>,
    pub issues: Vec<ValidationIssue>,
    pub written: Vec<PathBuf>,
}

impl RunSummary {
    /// Validate-only runs fail on any issue; generate runs always succeed
    /// once records are loaded.
    pub fn is_success(&self, mode: RunMode) -> bool {
        match mode {
            RunMode::ValidateOnly => self.issues.is_empty(),
            RunMode::Generate => true,
        }
    }
}

pub struct PipelineOrchestrator {
    config: Config,
    loader: SourceLoader,
}

impl PipelineOrchestrator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            loader: SourceLoader::new(),
        }
    }

    pub fn run(&self, mode: RunMode) -> Result<RunSummary> {
        let paths = &self.config.paths;

        let schema = Schema::load(&paths.schema_file)?;
        let report = self.loader.load_dir(&paths.sources_dir)?;

        if report.records.is_empty() {
            return Err(InventoryError::NoRecords {
                path: paths.sources_dir.clone(),
            });
        }

        let catalog = Catalog::new(report.records);
        info!("Loaded {} data source(s)", catalog.len());

        let issues = Validator::validate_all(catalog.records(), &schema);
        if issues.is_empty() {
            info!("Validation passed");
        } else {
            warn!("Validation found {} issue(s)", issues.len());
        }

        let mut summary = RunSummary {
            records_loaded: catalog.len(),
            load_failures: report.failures,
            issues,
            written: Vec::new(),
        };

        if mode == RunMode::ValidateOnly {
            return Ok(summary);
        }

        summary.written = self.generate(&catalog)?;
        Ok(summary)
    }

    fn generate(&self, catalog: &Catalog) -> Result<Vec<PathBuf>> {
        let output_dir = &self.config.paths.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| InventoryError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;

        let context = RenderContext::new(self.config.site.clone());
        let mut written = Vec::new();

        for renderer in all_renderers() {
            let content = renderer.render(catalog, &context)?;
            let path = output_dir.join(renderer.file_name());

            fs::write(&path, content).map_err(|source| InventoryError::FileOperation {
                path: path.clone(),
                source,
            })?;

            info!("Generated: {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    const SCHEMA: &str = "required_fields:\n  - id\n  - name\nallowed_values:\n  category:\n    - api\n";

    fn workspace(sources: &[(&str, &str)]) -> (TempDir, Config) {
        let temp = TempDir::new().unwrap();
        let sources_dir = temp.path().join("data-sources");
        fs::create_dir(&sources_dir).unwrap();
        for (name, content) in sources {
            fs::write(sources_dir.join(name), content).unwrap();
        }
        fs::write(temp.path().join("schema.yaml"), SCHEMA).unwrap();

        let mut config = Config::default_config();
        config.paths.sources_dir = sources_dir;
        config.paths.output_dir = temp.path().join("docs");
        config.paths.schema_file = temp.path().join("schema.yaml");
        (temp, config)
    }

    fn output_files(dir: &Path) -> usize {
        fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
    }

    #[test]
    fn test_validate_only_clean_writes_nothing() {
        let (_temp, config) = workspace(&[("a.md", "---\nid: a\nname: A\ncategory: api\n---\n")]);

        let summary = PipelineOrchestrator::new(config.clone())
            .run(RunMode::ValidateOnly)
            .unwrap();

        assert!(summary.is_success(RunMode::ValidateOnly));
        assert!(summary.written.is_empty());
        assert!(!config.paths.output_dir.exists());
    }

    #[test]
    fn test_validate_only_with_issues_fails_and_writes_nothing() {
        let (_temp, config) = workspace(&[("a.md", "---\nid: a\ncategory: web\n---\n")]);

        let summary = PipelineOrchestrator::new(config.clone())
            .run(RunMode::ValidateOnly)
            .unwrap();

        assert!(!summary.is_success(RunMode::ValidateOnly));
        assert_eq!(summary.issues.len(), 2);
        assert_eq!(output_files(&config.paths.output_dir), 0);
    }

    #[test]
    fn test_generate_despite_issues() {
        let (_temp, config) = workspace(&[
            ("a.md", "---\nid: a\ncategory: web\n---\n"),
            ("b.md", "no frontmatter"),
        ]);

        let summary = PipelineOrchestrator::new(config.clone())
            .run(RunMode::Generate)
            .unwrap();

        assert!(summary.is_success(RunMode::Generate));
        assert_eq!(summary.records_loaded, 1);
        assert_eq!(summary.load_failures.len(), 1);
        assert_eq!(summary.written.len(), 4);
        for name in ["index.md", "field-dictionary.md", "inventory.dbml", "inventory.json"] {
            assert!(config.paths.output_dir.join(name).is_file(), "{} missing", name);
        }
    }

    #[test]
    fn test_no_records_is_fatal() {
        let (_temp, config) = workspace(&[("broken.md", "# nothing")]);

        let result = PipelineOrchestrator::new(config).run(RunMode::Generate);
        assert!(matches!(result, Err(InventoryError::NoRecords { .. })));
    }

    #[test]
    fn test_missing_source_directory_is_fatal() {
        let (temp, mut config) = workspace(&[]);
        config.paths.sources_dir = temp.path().join("elsewhere");

        let result = PipelineOrchestrator::new(config).run(RunMode::ValidateOnly);
        assert!(matches!(result, Err(InventoryError::SourceDirectory { .. })));
    }

    #[test]
    fn test_missing_schema_disables_validation() {
        let (temp, mut config) = workspace(&[("a.md", "---\ncategory: anything\n---\n")]);
        config.paths.schema_file = temp.path().join("absent.yaml");

        let summary = PipelineOrchestrator::new(config)
            .run(RunMode::ValidateOnly)
            .unwrap();
        assert!(summary.issues.is_empty());
    }
}
