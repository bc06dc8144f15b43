// file: src/repository/loader.rs
// description: loads data source documents into records, tolerating per-file failures
// reference: parses frontmatter and builds source records

use crate::error::{InventoryError, Result};
use crate::models::SourceRecord;
use crate::parser::FrontmatterParser;
use crate::repository::{FileScanner, ScannedFile};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

/// Outcome of loading a source directory: the records that parsed and the
/// documents that did not.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<SourceRecord>,
    pub failures: Vec<InventoryError>,
}

pub struct SourceLoader {
    scanner: FileScanner,
    parser: FrontmatterParser,
}

impl SourceLoader {
    pub fn new() -> Self {
        Self {
            scanner: FileScanner::new(),
            parser: FrontmatterParser::new(),
        }
    }

    /// Loads every document in `dir`. Only a missing directory is an error;
    /// broken documents are logged and reported in [`LoadReport::failures`].
    pub fn load_dir(&self, dir: &Path) -> Result<LoadReport> {
        let files = self.scanner.scan_directory(dir)?;
        let mut report = LoadReport::default();

        for file in files {
            match self.load_file(&file) {
                Ok(record) => {
                    debug!("Loaded {} from {}", record.label(), file.relative_path);
                    report.records.push(record);
                }
                Err(e) => {
                    error!("Error loading {}: {}", file.path.display(), e);
                    report.failures.push(e);
                }
            }
        }

        info!(
            "Loaded {} data source(s), {} failed",
            report.records.len(),
            report.failures.len()
        );
        Ok(report)
    }

    pub fn load_file(&self, file: &ScannedFile) -> Result<SourceRecord> {
        let content =
            fs::read_to_string(&file.path).map_err(|source| InventoryError::FileOperation {
                path: file.path.clone(),
                source,
            })?;

        let frontmatter = self
            .parser
            .extract(&content)
            .map_err(|e| InventoryError::malformed(&file.path, e.to_string()))?;

        SourceRecord::from_frontmatter(frontmatter, &file.path)
    }
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_malformed_document_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a_broken.md"), "# No frontmatter here").unwrap();
        fs::write(
            temp.path().join("b_valid.md"),
            "---\nid: valid\nname: Valid\n---\nBody\n",
        )
        .unwrap();

        let report = SourceLoader::new().load_dir(temp.path()).unwrap();

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].label(), "valid");
        assert!(report.records[0].path.ends_with("b_valid.md"));
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            &report.failures[0],
            InventoryError::MalformedDocument { path, .. } if path.ends_with("a_broken.md")
        ));
    }

    #[test]
    fn test_records_in_file_name_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("zeta.md"), "---\nid: zeta\n---\n").unwrap();
        fs::write(temp.path().join("alpha.md"), "---\nid: alpha\n---\n").unwrap();

        let report = SourceLoader::new().load_dir(temp.path()).unwrap();
        let ids: Vec<&str> = report.records.iter().map(|r| r.label()).collect();

        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        assert!(SourceLoader::new().load_dir(&temp.path().join("nope")).is_err());
    }
}
