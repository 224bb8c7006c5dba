use serde::{Deserialize, Serialize};

/// Capabilities advertised by a renderer so callers can pick a sensible default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RenderCapabilities {
    /// Whether collapsed hunks are drawn as summary rows.
    pub supports_collapse: bool,
    /// Whether inline character spans are shown for modified rows.
    pub supports_inline_highlights: bool,
    /// Whether the output is meant for programs rather than people.
    pub machine_readable: bool,
}

impl RenderCapabilities {
    /// Construct a new capabilities struct with explicit flags.
    #[must_use]
    pub const fn new(
        supports_collapse: bool,
        supports_inline_highlights: bool,
        machine_readable: bool,
    ) -> Self {
        Self {
            supports_collapse,
            supports_inline_highlights,
            machine_readable,
        }
    }
}

/// Summary information about a registered renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererSummary {
    /// Stable identifier for the renderer.
    pub id: String,
    /// Human-friendly label for display.
    pub label: String,
    /// Capability flags.
    pub capabilities: RenderCapabilities,
}

/// Layout hints passed to every render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Total output width in characters, for renderers that lay out columns.
    pub width: usize,
}

impl RenderOptions {
    /// Default total width.
    pub const DEFAULT_WIDTH: usize = 160;

    /// Construct options with an explicit width.
    #[must_use]
    pub const fn with_width(width: usize) -> Self {
        Self { width }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::with_width(Self::DEFAULT_WIDTH)
    }
}

/// Errors surfaced by renderers.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The requested layout cannot be produced.
    #[error("output width {width} is too narrow (need at least {minimum})")]
    TooNarrow {
        /// Width that was requested.
        width: usize,
        /// Smallest width the renderer supports.
        minimum: usize,
    },
    /// Generic failure surfaced by the renderer.
    #[error("{message}")]
    Failure {
        /// Human-readable error message.
        message: String,
    },
}

impl RenderError {
    /// Helper to construct a failure from any displayable message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }
}

/// Convenience result alias for render operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_default_width() {
        assert_eq!(RenderOptions::default().width, RenderOptions::DEFAULT_WIDTH);
    }

    #[test]
    fn failure_displays_message() {
        let error = RenderError::message("boom");
        assert_eq!(error.to_string(), "boom");
        let error = RenderError::TooNarrow {
            width: 10,
            minimum: 20,
        };
        assert_eq!(
            error.to_string(),
            "output width 10 is too narrow (need at least 20)"
        );
    }
}
