//! Settings shared by the session and command-line front ends.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Largest document accepted by default (2 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 2 * 1024 * 1024;

/// Tunable behaviour for comparisons and their presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    /// Documents larger than this many bytes are rejected before diffing.
    pub max_input_bytes: u64,
    /// Start every comparison with collapsible unchanged hunks collapsed.
    pub collapse_unchanged: bool,
    /// Identifier of the renderer used for output.
    pub format: String,
    /// Total output width for column-based renderers.
    pub width: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            collapse_unchanged: false,
            format: checkdiff_renderers::DEFAULT_RENDERER.to_owned(),
            width: checkdiff_render_api::RenderOptions::DEFAULT_WIDTH,
        }
    }
}

impl DiffConfig {
    /// Read a configuration file; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Config`] when it is not valid configuration TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: display.clone(),
            source,
        })?;
        let config = Self::from_toml(&raw).map_err(|source| Error::Config {
            path: display,
            source,
        })?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns the decoder error for malformed TOML, unknown keys, or
    /// mistyped values.
    pub fn from_toml(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
