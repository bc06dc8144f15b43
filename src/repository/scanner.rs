// file: src/repository/scanner.rs
// description: Directory listing of data source documents in name order
// reference: https://docs.rs/walkdir

use crate::error::{InventoryError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const DOCUMENT_EXTENSION: &str = "md";

pub struct FileScanner;

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub relative_path: String,
}

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Lists `*.md` files directly inside `root`, sorted by file name.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        if !root.is_dir() {
            return Err(InventoryError::SourceDirectory {
                path: root.to_path_buf(),
            });
        }

        info!("Scanning directory: {}", root.display());
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if path.extension().is_none_or(|ext| ext != DOCUMENT_EXTENSION) {
                debug!("Skipping non-document file: {}", path.display());
                continue;
            }

            let relative_path = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();

            files.push(ScannedFile {
                path: path.to_path_buf(),
                relative_path,
            });
        }

        info!("Found {} markdown files", files.len());
        Ok(files)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_directory_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.md"), "# B").unwrap();
        fs::write(temp.path().join("a.md"), "# A").unwrap();
        fs::write(temp.path().join("notes.txt"), "skip").unwrap();

        let files = FileScanner::new().scan_directory(temp.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();

        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_nested_directories_ignored() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("drafts")).unwrap();
        fs::write(temp.path().join("drafts/c.md"), "# C").unwrap();
        fs::write(temp.path().join("a.md"), "# A").unwrap();

        let files = FileScanner::new().scan_directory(temp.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_directory() {
        let temp = TempDir::new().unwrap();
        let result = FileScanner::new().scan_directory(&temp.path().join("absent"));

        assert!(matches!(
            result,
            Err(InventoryError::SourceDirectory { .. })
        ));
    }
}
