//! Configuration loading from graphwalk.toml.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{GraphError, GraphResult, IoResultExt};

/// File name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "graphwalk.toml";

/// Main configuration structure for graphwalk.toml.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct GraphwalkConfig {
    /// Delimiter between the two vertices of an edge line.
    pub delimiter: Option<String>,
    /// Fail when the declared edge count differs from the edges read.
    pub strict_edge_count: Option<bool>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

impl GraphwalkConfig {
    /// True when the config asks for JSON output.
    pub fn wants_json(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

/// Loads configuration from `graphwalk.toml` in `root` if it exists.
pub fn load_config(root: &Path) -> GraphResult<Option<GraphwalkConfig>> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }
    load_config_file(&path).map(Some)
}

/// Loads configuration from an explicit file path.
pub fn load_config_file(path: &Path) -> GraphResult<GraphwalkConfig> {
    let content = fs::read_to_string(path).with_path(path)?;
    let cfg = toml::from_str(&content)
        .map_err(|e| GraphError::config(path, format!("Invalid {}: {}", CONFIG_FILE_NAME, e)))?;
    Ok(cfg)
}
