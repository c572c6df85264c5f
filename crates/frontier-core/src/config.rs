use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "frontier.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontierConfig {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub bench: BenchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Largest vertex count accepted from the user.
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
    /// Fixed RNG seed. The wall clock is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_vertices: default_max_vertices(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default = "default_repeat")]
    pub repeat: usize,
    #[serde(default)]
    pub measure_list: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repeat: default_repeat(),
            measure_list: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `pretty`, `text` or `json`.
    #[serde(default)]
    pub format: Option<String>,
}

impl GraphConfig {
    /// Check a requested vertex count against `1..=max_vertices`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidVertexCount`] when out of bounds.
    pub fn check_vertex_count(&self, requested: usize) -> crate::Result<usize> {
        if requested == 0 || requested > self.max_vertices {
            return Err(crate::GraphError::InvalidVertexCount {
                requested,
                max: self.max_vertices,
            });
        }
        Ok(requested)
    }
}

/// Parse a config file. Missing files yield `None`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<Option<FrontierConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<FrontierConfig>(&content)
        .map(Some)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Per-user config path, `<config_dir>/frontier/config.toml`.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("frontier/config.toml"))
}

/// Resolve configuration: `<dir>/frontier.toml`, then the user config,
/// then defaults. The first file found wins as a whole.
///
/// # Errors
///
/// Returns an error if a config file exists but is unreadable or malformed.
pub fn load_config(dir: &Path) -> Result<FrontierConfig> {
    if let Some(config) = load_config_file(&dir.join(LOCAL_CONFIG_FILE))? {
        tracing::debug!(path = %dir.join(LOCAL_CONFIG_FILE).display(), "loaded local config");
        return Ok(config);
    }

    if let Some(path) = user_config_path() {
        if let Some(config) = load_config_file(&path)? {
            tracing::debug!(path = %path.display(), "loaded user config");
            return Ok(config);
        }
    }

    Ok(FrontierConfig::default())
}

const fn default_max_vertices() -> usize {
    5000
}

const fn default_repeat() -> usize {
    1
}
