//! Configuration module for the jscant CLI.
//!
//! Settings live in `jscant.toml`. Every field has a default, so an empty
//! file (or no file at all) is a valid configuration.

use dirs::{config_dir, home_dir};
use jscan_lex::LexerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{JscantError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "jscant.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Lexer limits.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Trace output settings.
    #[serde(default)]
    pub trace: TraceConfig,
}

/// `[lexer]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerSection {
    /// Maximum nesting depth before the lexer reports an overflow.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// `[trace]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceConfig {
    /// Spaces per nesting level in text output.
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Whether comment tokens are printed.
    #[serde(default = "default_true")]
    pub show_comments: bool,

    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub format: TraceFormat,
}

/// Output format of the `trace` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TraceFormat {
    /// Aligned, indented text lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

fn default_max_depth() -> usize {
    LexerConfig::default().max_depth
}

fn default_indent() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            show_comments: true,
            format: TraceFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/jscant/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JscantError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| JscantError::Config(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the lexer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.lexer.max_depth == 0 {
            return Err(JscantError::Config(
                "lexer.max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The lexer configuration these settings describe.
    pub fn lexer_config(&self) -> LexerConfig {
        LexerConfig::default().with_max_depth(self.lexer.max_depth)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("jscant").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("jscant").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
