//! Store configuration.

use crate::error::{CoreError, CoreResult};
use crate::table::DEFAULT_BUCKETS;
use std::path::{Path, PathBuf};

/// Name of the password file inside the home directory.
pub const DEFAULT_FILE_NAME: &str = ".ppm";

/// Configuration for opening a store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit password file path. `None` means `$HOME/.ppm`.
    pub path: Option<PathBuf>,

    /// Number of table buckets allocated at open.
    pub initial_buckets: usize,

    /// Whether to create missing parent directories when saving.
    pub create_dirs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            initial_buckets: DEFAULT_BUCKETS,
            create_dirs: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit password file path.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the initial bucket count.
    #[must_use]
    pub const fn initial_buckets(mut self, buckets: usize) -> Self {
        self.initial_buckets = buckets;
        self
    }

    /// Sets whether to create missing parent directories when saving.
    #[must_use]
    pub const fn create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }

    /// Resolves the password file path.
    ///
    /// Uses the explicit path if one is set, otherwise `.ppm` in the home
    /// directory. `HOME` is consulted first; when it is unset or empty the
    /// platform's notion of the home directory is used instead.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::HomeNotFound`] if no home directory can be found.
    pub fn resolve_path(&self) -> CoreResult<PathBuf> {
        let home = std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir);
        self.resolve_path_with(home.as_deref())
    }

    fn resolve_path_with(&self, home: Option<&Path>) -> CoreResult<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        home.map(|home| home.join(DEFAULT_FILE_NAME))
            .ok_or(CoreError::HomeNotFound)
    }
}
