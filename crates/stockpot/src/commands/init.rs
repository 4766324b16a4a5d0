//! Implementation of the `init` command.
//!
//! This module handles initialization of a new stockpot workspace, creating
//! the `.stockpot/` directory with configuration and an empty catalog file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the stockpot directory
pub const STOCKPOT_DIR_NAME: &str = ".stockpot";

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the catalog data file
pub const CATALOG_FILE_NAME: &str = "catalog.jsonl";

/// Maximum directory depth to traverse when searching for the stockpot root
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Configuration file structure for stockpot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockpotConfig {
    /// Storage configuration
    pub storage: StorageConfig,

    /// Restock sizing multiplier applied to an ingredient's par level.
    /// 1.0 refills exactly to par.
    #[serde(default = "default_restock_multiplier")]
    pub restock_multiplier: f64,

    /// Rush simulation intensity. 1.0 burns one full day of usage.
    #[serde(default = "default_rush_intensity")]
    pub rush_intensity: f64,
}

/// Storage configuration section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Storage backend type ("jsonl" for in-memory with JSONL persistence,
    /// "memory" for purely ephemeral)
    pub backend: String,

    /// Path to the data file, relative to the workspace root
    pub data_file: String,
}

fn default_restock_multiplier() -> f64 {
    crate::engine::DEFAULT_RESTOCK_MULTIPLIER
}

fn default_rush_intensity() -> f64 {
    crate::engine::DEFAULT_RUSH_INTENSITY
}

impl StockpotConfig {
    /// Create a new configuration with the default JSONL backend.
    pub fn new() -> Self {
        Self {
            storage: StorageConfig {
                backend: "jsonl".to_string(),
                data_file: format!("{STOCKPOT_DIR_NAME}/{CATALOG_FILE_NAME}"),
            },
            restock_multiplier: default_restock_multiplier(),
            rush_intensity: default_rush_intensity(),
        }
    }

    /// Load configuration from a file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Resolve the configured backend against the workspace root.
    pub fn to_backend(&self, root_dir: &Path) -> Result<crate::catalog::CatalogBackend> {
        match self.storage.backend.as_str() {
            "jsonl" => Ok(crate::catalog::CatalogBackend::Jsonl(
                root_dir.join(&self.storage.data_file),
            )),
            "memory" => Ok(crate::catalog::CatalogBackend::InMemory),
            other => Err(Error::Config(format!(
                "Unknown storage backend '{other}'. Valid backends: jsonl, memory"
            ))),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.restock_multiplier <= 0.0 || !self.restock_multiplier.is_finite() {
            return Err(Error::Config(format!(
                "restock_multiplier must be a positive number, got {}",
                self.restock_multiplier
            )));
        }
        if self.rush_intensity <= 0.0 || !self.rush_intensity.is_finite() {
            return Err(Error::Config(format!(
                "rush_intensity must be a positive number, got {}",
                self.rush_intensity
            )));
        }
        Ok(())
    }
}

impl Default for StockpotConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of the init command
#[derive(Debug)]
pub struct InitResult {
    /// Path to the created stockpot directory
    pub stockpot_dir: PathBuf,
    /// Path to the created config file
    pub config_file: PathBuf,
    /// Path to the created catalog file
    pub catalog_file: PathBuf,
}

/// Initialize a new stockpot workspace in the given directory.
///
/// Creates `.stockpot/` with a default `config.yaml` and an empty
/// `catalog.jsonl`.
///
/// # Errors
///
/// Returns an error if:
/// - The `.stockpot/` directory already exists
/// - File system operations fail
pub async fn init(base_dir: &Path) -> Result<InitResult> {
    let stockpot_dir = base_dir.join(STOCKPOT_DIR_NAME);

    if stockpot_dir.exists() {
        return Err(Error::Config(format!(
            "Stockpot is already initialized in this directory. Found existing '{STOCKPOT_DIR_NAME}'"
        )));
    }

    fs::create_dir_all(&stockpot_dir).await?;

    let config_file = stockpot_dir.join(CONFIG_FILE_NAME);
    let config = StockpotConfig::new();
    config.save(&config_file).await?;

    let catalog_file = stockpot_dir.join(CATALOG_FILE_NAME);
    fs::write(&catalog_file, "").await?;

    Ok(InitResult {
        stockpot_dir,
        config_file,
        catalog_file,
    })
}

/// Check if a directory has been initialized with stockpot.
///
/// Returns `true` if the `.stockpot/` directory exists.
pub fn is_initialized(base_dir: &Path) -> bool {
    base_dir.join(STOCKPOT_DIR_NAME).exists()
}

/// Find the stockpot root directory by searching up the directory tree.
///
/// Starts from the given directory and traverses parent directories until a
/// `.stockpot/` directory is found, the filesystem root is reached, or the
/// maximum traversal depth is exceeded.
///
/// # Returns
///
/// Returns `Some(path)` with the directory containing `.stockpot/`, or
/// `None` if no stockpot workspace is found within the depth limit.
pub fn find_stockpot_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    let mut depth = 0;

    loop {
        if current.join(STOCKPOT_DIR_NAME).exists() {
            return Some(current);
        }

        depth += 1;
        if depth > MAX_TRAVERSAL_DEPTH || !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ========== StockpotConfig Tests ==========

    #[test]
    fn test_config_new() {
        let config = StockpotConfig::new();
        assert_eq!(config.storage.backend, "jsonl");
        assert_eq!(config.storage.data_file, ".stockpot/catalog.jsonl");
        assert!((config.restock_multiplier - 1.0).abs() < f64::EPSILON);
        assert!((config.rush_intensity - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let original = StockpotConfig::new();
        original.save(&config_path).await.unwrap();

        let loaded = StockpotConfig::load(&config_path).await.unwrap();
        assert_eq!(original, loaded);
    }

    #[tokio::test]
    async fn test_config_defaults_missing_tunables() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Older config file without the tunable fields
        let content = "storage:\n  backend: jsonl\n  data_file: .stockpot/catalog.jsonl\n";
        tokio::fs::write(&config_path, content).await.unwrap();

        let loaded = StockpotConfig::load(&config_path).await.unwrap();
        assert!((loaded.restock_multiplier - 1.0).abs() < f64::EPSILON);
        assert!((loaded.rush_intensity - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_config_rejects_nonpositive_multiplier() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let content = "storage:\n  backend: jsonl\n  data_file: .stockpot/catalog.jsonl\nrestock_multiplier: -2.0\n";
        tokio::fs::write(&config_path, content).await.unwrap();

        let result = StockpotConfig::load(&config_path).await;
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("restock_multiplier"));
    }

    #[test]
    fn test_config_unknown_backend() {
        let mut config = StockpotConfig::new();
        config.storage.backend = "postgres".to_string();

        let result = config.to_backend(Path::new("/tmp"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("postgres"));
    }

    #[test]
    fn test_config_memory_backend() {
        let mut config = StockpotConfig::new();
        config.storage.backend = "memory".to_string();

        let backend = config.to_backend(Path::new("/tmp")).unwrap();
        assert!(backend.data_path().is_none());
    }

    #[tokio::test]
    async fn test_config_yaml_format() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = StockpotConfig::new();
        config.save(&config_path).await.unwrap();

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("backend: jsonl"));
        assert!(content.contains("data_file: .stockpot/catalog.jsonl"));
        assert!(content.contains("restock_multiplier: 1.0"));
        assert!(content.contains("rush_intensity: 1.0"));
    }

    // ========== Init Command Tests ==========

    #[tokio::test]
    async fn test_init_creates_directory_structure() {
        let temp_dir = TempDir::new().unwrap();

        let result = init(temp_dir.path()).await.unwrap();

        assert!(result.stockpot_dir.exists());
        assert!(result.config_file.exists());
        assert!(result.catalog_file.exists());
    }

    #[tokio::test]
    async fn test_init_fails_if_already_initialized() {
        let temp_dir = TempDir::new().unwrap();

        init(temp_dir.path()).await.unwrap();

        let result = init(temp_dir.path()).await;
        assert!(result.is_err());

        let err_msg = result.unwrap_err().to_string().to_lowercase();
        assert!(err_msg.contains("already initialized"));
    }

    #[tokio::test]
    async fn test_init_creates_empty_catalog_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = init(temp_dir.path()).await.unwrap();

        let content = tokio::fs::read_to_string(&result.catalog_file)
            .await
            .unwrap();
        assert!(content.is_empty());
    }

    // ========== Utility Function Tests ==========

    #[test]
    fn test_is_initialized_true() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join(STOCKPOT_DIR_NAME)).unwrap();

        assert!(is_initialized(temp_dir.path()));
    }

    #[test]
    fn test_is_initialized_false() {
        let temp_dir = TempDir::new().unwrap();

        assert!(!is_initialized(temp_dir.path()));
    }

    #[test]
    fn test_find_stockpot_root_in_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join(STOCKPOT_DIR_NAME)).unwrap();

        let found = find_stockpot_root(temp_dir.path());
        assert_eq!(found, Some(temp_dir.path().to_path_buf()));
    }

    #[test]
    fn test_find_stockpot_root_in_parent_dir() {
        let temp_dir = TempDir::new().unwrap();

        std::fs::create_dir(temp_dir.path().join(STOCKPOT_DIR_NAME)).unwrap();

        let sub_dir = temp_dir.path().join("kitchen").join("prep");
        std::fs::create_dir_all(&sub_dir).unwrap();

        let found = find_stockpot_root(&sub_dir);
        assert_eq!(found, Some(temp_dir.path().to_path_buf()));
    }

    #[test]
    fn test_find_stockpot_root_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let found = find_stockpot_root(temp_dir.path());
        assert!(found.is_none());
    }
}
