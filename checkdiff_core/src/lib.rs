//! Core library for comparing two text documents.
//!
//! Data flows one way through the crate:
//! - [`tokenize`] splits each document into numbered lines
//! - [`line_diff`] computes a minimal line-level edit script
//! - [`hunks`] groups the script into hunks, refining paired lines with [`char_diff`]
//! - [`diff`] assembles the renderer-agnostic [`ViewModel`]
//!
//! Collapse state stays outside of the view model and is threaded through
//! [`toggle_hunk_collapse`] by the caller.

#![warn(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    missing_docs
)]
#![cfg_attr(
    not(test),
    deny(
        clippy::dbg_macro,
        clippy::expect_used,
        clippy::panic,
        clippy::print_stderr,
        clippy::print_stdout,
        clippy::todo,
        clippy::unwrap_used
    )
)]

/// Character-level refinement of paired lines.
pub mod char_diff;
/// Configuration loaded from TOML.
pub mod config;
/// Public entry points producing view models and toggling collapse state.
pub mod diff;
/// Foreign-function surface for native front ends.
pub mod ffi;
/// Grouping of line edits into hunks.
pub mod hunks;
/// Line-level edit scripts.
pub mod line_diff;
/// Generic minimal edit script routine.
pub mod myers;
/// Renderer lookup and invocation.
pub mod renderers;
/// Line tokenizer.
pub mod tokenize;

pub use checkdiff_api::{
    CollapseState, DiffStats, Hunk, HunkKind, HunkRange, LineKind, RenderedLine, Row, Span,
    SpanKind, ViewModel,
};
pub use config::DiffConfig;
pub use diff::{compute_diff, toggle_hunk_collapse, DiffEngine, Side};
pub use ffi::{open_session, CoreError, DiffSession};
#[doc(hidden)]
pub use ffi::UniFfiTag;

/// Common result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the core library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Collapse toggle referenced a hunk the view model does not have.
    #[error("hunk index {index} is out of range for a view with {hunk_count} hunks")]
    HunkOutOfRange {
        /// Requested hunk index.
        index: usize,
        /// Number of hunks in the view model.
        hunk_count: usize,
    },
    /// Input document exceeds the configured size ceiling.
    #[error("{side} document is {bytes} bytes, over the {limit} byte limit")]
    InputTooLarge {
        /// Which document was rejected.
        side: Side,
        /// Size of the rejected document.
        bytes: u64,
        /// Configured ceiling.
        limit: u64,
    },
    /// Filesystem interaction failed.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Filesystem path involved in the failed operation.
        path: String,
        /// Source I/O error returned by the standard library.
        #[source]
        source: std::io::Error,
    },
    /// Configuration file could not be parsed.
    #[error("invalid configuration in {path}: {source}")]
    Config {
        /// Path of the configuration file.
        path: String,
        /// Parse error reported by the TOML decoder.
        #[source]
        source: toml::de::Error,
    },
    /// Requested renderer is not registered.
    #[error("renderer '{renderer}' is not registered")]
    RendererNotRegistered {
        /// Identifier that failed lookup.
        renderer: String,
    },
    /// Renderer failed to produce output.
    #[error("renderer '{renderer}' failed: {source}")]
    Render {
        /// Identifier of the failing renderer.
        renderer: String,
        /// Error reported by the renderer.
        #[source]
        source: checkdiff_render_api::RenderError,
    },
}
