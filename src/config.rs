// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{InventoryError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "inventory.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    pub sources_dir: PathBuf,
    pub output_dir: PathBuf,
    pub schema_file: PathBuf,
}

/// Values baked into the generated pages.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub mcp_docs_url: String,
    pub mcp_package_prefix: String,
    pub repository_url: String,
}

impl Config {
    /// Layers built-in defaults, the TOML file at `path` (when it exists) and
    /// `DATA_INVENTORY__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| InventoryError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        builder = builder.add_source(config::File::from(file).required(path.is_some()));

        builder = builder.add_source(
            config::Environment::with_prefix("DATA_INVENTORY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| InventoryError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| InventoryError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            paths: PathsConfig {
                sources_dir: PathBuf::from("data-sources"),
                output_dir: PathBuf::from("docs"),
                schema_file: PathBuf::from("schema.yaml"),
            },
            site: SiteConfig {
                title: "Data Inventory".to_string(),
                mcp_docs_url: "https://access-mcp.netlify.app/servers/".to_string(),
                mcp_package_prefix: "@access-mcp/".to_string(),
                repository_url: "https://github.com/Sweet-and-Fizzy/access-data-inventory"
                    .to_string(),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("sources_dir", &self.paths.sources_dir),
            ("output_dir", &self.paths.output_dir),
            ("schema_file", &self.paths.schema_file),
        ];

        for (key, value) in paths {
            if value.as_os_str().is_empty() {
                return Err(InventoryError::Config(format!("{} must not be empty", key)));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
