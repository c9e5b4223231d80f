//! Session: entry point binding an application name, configuration, and the
//! warehouse catalog. Acquired once, released exactly once; `stop` is
//! idempotent and a `Drop` backstop releases the session if the caller never
//! stopped it explicitly.

use crate::catalog::{Catalog, TableIdent};
use crate::dataframe::DataFrame;
use crate::error::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Configuration key for the warehouse root directory.
pub const WAREHOUSE_DIR_KEY: &str = "warehouse.dir";

const DEFAULT_WAREHOUSE_DIR: &str = "./warehouse";

/// Builder for creating a Session with configuration options.
#[derive(Clone, Default)]
pub struct SessionBuilder {
    app_name: Option<String>,
    config: HashMap<String, String>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        SessionBuilder {
            app_name: None,
            config: HashMap::new(),
        }
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// Set the warehouse root directory for the session catalog.
    pub fn warehouse_dir(self, dir: impl Into<PathBuf>) -> Self {
        let dir: PathBuf = dir.into();
        self.config(WAREHOUSE_DIR_KEY, dir.to_string_lossy().to_string())
    }

    pub fn get_or_create(self) -> Session {
        let warehouse = self
            .config
            .get(WAREHOUSE_DIR_KEY)
            .cloned()
            .unwrap_or_else(|| DEFAULT_WAREHOUSE_DIR.to_string());
        let app_name = self.app_name.unwrap_or_else(|| "lakelet".to_string());
        tracing::debug!(app_name = %app_name, warehouse = %warehouse, "session created");
        Session {
            state: Arc::new(SessionState {
                app_name,
                config: self.config,
                catalog: Catalog::new(warehouse),
                stopped: AtomicBool::new(false),
            }),
        }
    }
}

struct SessionState {
    app_name: String,
    config: HashMap<String, String>,
    catalog: Catalog,
    stopped: AtomicBool,
}

impl Drop for SessionState {
    fn drop(&mut self) {
        // Backstop: release even when the owner never called stop().
        if !self.stopped.swap(true, Ordering::SeqCst) {
            tracing::debug!(app_name = %self.app_name, "session released on drop");
        }
    }
}

/// Entry point for building, reading, and persisting DataFrames.
///
/// Cloning is cheap and shares the underlying state; the session is released
/// once, no matter how many handles exist.
#[derive(Clone)]
pub struct Session {
    state: Arc<SessionState>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn app_name(&self) -> &str {
        &self.state.app_name
    }

    pub fn conf(&self, key: &str) -> Option<&str> {
        self.state.config.get(key).map(|s| s.as_str())
    }

    /// Install the global log subscriber at the given maximum level,
    /// suppressing anything below it. `RUST_LOG` takes precedence when set.
    /// Calling this more than once leaves the first subscriber in place.
    pub fn set_log_level(&self, level: &str) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_ascii_lowercase()));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.state.catalog
    }

    /// Create a namespace in the catalog if it is not already present.
    pub fn create_database_if_not_exists(&self, name: &str) -> Result<()> {
        self.state.catalog.create_namespace(name)
    }

    /// Wrap an existing Polars DataFrame.
    pub fn create_dataframe_from_polars(&self, df: polars::prelude::DataFrame) -> DataFrame {
        DataFrame::from_polars(df)
    }

    /// Read a table by its qualified `namespace.table` name.
    pub fn table(&self, name: &str) -> Result<DataFrame> {
        let ident: TableIdent = name.parse()?;
        self.state.catalog.read_table(&ident)
    }

    /// Release the session. Idempotent: only the first call logs.
    pub fn stop(&self) {
        if !self.state.stopped.swap(true, Ordering::SeqCst) {
            tracing::info!(app_name = %self.state.app_name, "session stopped");
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.state.stopped.load(Ordering::SeqCst)
    }
}
