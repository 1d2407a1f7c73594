use crate::index::strategy::{DEFAULT_EXCLUDED_GLOBS, DEFAULT_SUFFIX_TREE_MAX_CHARS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "fts";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Files with more characters than this get a naive index instead of a
    /// suffix tree. `null` builds a suffix tree for every file.
    #[serde(default = "default_suffix_tree_max_chars")]
    pub suffix_tree_max_chars: Option<usize>,

    /// Glob patterns (matched against relative paths) of files to skip
    #[serde(default = "default_excluded_globs")]
    pub excluded_globs: Vec<String>,

    /// Index files concurrently
    #[serde(default = "default_parallel_indexing")]
    pub parallel_indexing: bool,

    /// Worker threads for parallel indexing; 0 means one per CPU
    #[serde(default)]
    pub indexing_threads: usize,
}

fn default_suffix_tree_max_chars() -> Option<usize> {
    Some(DEFAULT_SUFFIX_TREE_MAX_CHARS)
}

fn default_excluded_globs() -> Vec<String> {
    DEFAULT_EXCLUDED_GLOBS.iter().map(|g| g.to_string()).collect()
}

fn default_parallel_indexing() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            suffix_tree_max_chars: default_suffix_tree_max_chars(),
            excluded_globs: default_excluded_globs(),
            parallel_indexing: default_parallel_indexing(),
            indexing_threads: 0,
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit file, or return default if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the path to the config file, if a data directory can be determined
pub fn get_config_path() -> Option<PathBuf> {
    get_app_data_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Get the application data directory (not created)
pub fn get_app_data_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };
    base.map(|b| b.join(APP_NAME))
}
