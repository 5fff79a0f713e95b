//! Server configuration, loaded from a TOML file.
//!
//! ```toml
//! [server]
//! name = "knit-mcp"
//!
//! [logging]
//! filter = "knit=debug"
//!
//! [export]
//! default_title = "Knitting Pattern"
//! ```
//!
//! Every section and key is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{KnitError, Result};
use crate::stitch::DEFAULT_TITLE;

pub const DEFAULT_SERVER_NAME: &str = "knit-mcp";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnitConfig {
    pub server: ServerSection,
    pub logging: LoggingSection,
    pub export: ExportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Name reported in `serverInfo`.
    pub name: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Title used by `export_markdown` when the caller gives none.
    pub default_title: String,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl KnitConfig {
    /// Load config from `path`, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Load config from `path`, reporting read and parse errors.
    pub fn try_load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| KnitError::Config(e.to_string()))
    }
}
