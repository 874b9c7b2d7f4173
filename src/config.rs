/// Configuration file support.
///
/// Settings are read from a TOML file, looked up in this order:
///
///   1. an explicit path (`--config`);
///   2. `phpdocs-md.toml` in the working directory;
///   3. `phpdocs-md/config.toml` in the user configuration directory.
///
/// Every key is optional.  Command-line flags override whatever the file
/// says; see the binary.
///
/// ```toml
/// visibility = ["public", "protected"]
/// method_pattern = "^get"
/// format = "markdown"
/// include_see = true
/// append_examples = true
/// declare_abstraction = true
/// ```
use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::entity::DEFAULT_TITLE_FORMAT;
use crate::error::ConfigError;
use crate::reflector::{DocumentOptions, VisibilityFilter};
use crate::render::RenderOptions;

/// Name of the configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "phpdocs-md.toml";

/// Output format of the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub visibility: Vec<VisibilityFilter>,
    pub method_pattern: Option<String>,
    pub format: OutputFormat,
    pub include_see: bool,
    pub append_examples: bool,
    pub declare_abstraction: bool,
    pub title_format: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visibility: Vec::new(),
            method_pattern: None,
            format: OutputFormat::default(),
            include_see: false,
            append_examples: true,
            declare_abstraction: true,
            title_format: None,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the configuration file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist.  Otherwise the first file found in the
    /// lookup order is used, or the defaults when there is none.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        for candidate in Self::search_paths() {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "using configuration file");
                return Self::from_path(&candidate);
            }
        }
        Ok(Self::default())
    }

    /// Implicit configuration locations, most specific first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Ok(strategy) = etcetera::choose_base_strategy() {
            paths.push(strategy.config_dir().join("phpdocs-md").join("config.toml"));
        }
        paths
    }

    /// Member filters for the [`Documenter`](crate::reflector::Documenter).
    pub fn document_options(&self) -> Result<DocumentOptions, ConfigError> {
        let method_pattern = match self.method_pattern.as_deref() {
            Some(pattern) if !pattern.is_empty() => Some(Regex::new(pattern)?),
            _ => None,
        };
        Ok(DocumentOptions {
            visibility: self.visibility.clone(),
            method_pattern,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            include_see: self.include_see,
            append_examples: self.append_examples,
            declare_abstraction: self.declare_abstraction,
            title_format: self
                .title_format
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE_FORMAT.to_string()),
        }
    }
}
