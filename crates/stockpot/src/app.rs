//! Application context for CLI command execution.
//!
//! This module provides the `App` struct that manages catalog store
//! lifecycle and provides a context for executing CLI commands.
//!
//! # Example
//!
//! ```no_run
//! use stockpot::app::App;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::from_directory(Path::new(".")).await?;
//!     // Execute commands using app...
//!     Ok(())
//! }
//! ```

use crate::catalog::{create_catalog, CatalogStore};
use crate::commands::init::{
    find_stockpot_root, StockpotConfig, CONFIG_FILE_NAME, STOCKPOT_DIR_NAME,
};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
///
/// Manages catalog store initialization and lifecycle. The store is loaded
/// from the stockpot workspace on creation.
pub struct App {
    /// The catalog store backend (trait object for polymorphism)
    store: Box<dyn CatalogStore>,

    /// Path to the stockpot directory (.stockpot)
    stockpot_dir: PathBuf,

    /// Loaded configuration
    config: StockpotConfig,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("stockpot_dir", &self.stockpot_dir)
            .field("config", &self.config)
            .field("store", &"<dyn CatalogStore>")
            .finish()
    }
}

impl App {
    /// Create an App instance from the given working directory.
    ///
    /// Searches up the directory tree to find a `.stockpot/` directory,
    /// loads configuration, and initializes the catalog store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No stockpot workspace is found in the directory tree
    /// - Configuration cannot be loaded
    /// - Catalog store initialization fails
    pub async fn from_directory(working_dir: &Path) -> Result<Self> {
        let root_dir = find_stockpot_root(working_dir).ok_or_else(|| {
            Error::Config(
                "Not a stockpot workspace (or any parent directory). Run 'stockpot init' first."
                    .to_string(),
            )
        })?;

        let stockpot_dir = root_dir.join(STOCKPOT_DIR_NAME);
        let config_path = stockpot_dir.join(CONFIG_FILE_NAME);

        let config = StockpotConfig::load(&config_path).await?;

        let backend = config.to_backend(&root_dir)?;
        let store = create_catalog(backend).await?;

        Ok(Self {
            store,
            stockpot_dir,
            config,
        })
    }

    /// Get a mutable reference to the catalog store.
    pub fn store_mut(&mut self) -> &mut dyn CatalogStore {
        self.store.as_mut()
    }

    /// Get an immutable reference to the catalog store.
    pub fn store(&self) -> &dyn CatalogStore {
        self.store.as_ref()
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &StockpotConfig {
        &self.config
    }

    /// Get the path to the stockpot directory.
    pub fn stockpot_dir(&self) -> &Path {
        &self.stockpot_dir
    }

    /// Save catalog state to persistent storage.
    ///
    /// This should be called after any mutating operations.
    pub async fn save(&self) -> Result<()> {
        self.store.save().await
    }
}
