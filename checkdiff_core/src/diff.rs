//! View model generation and collapse toggling.

use std::fmt;

use checkdiff_api::{CollapseState, ViewModel};
use serde::{Deserialize, Serialize};

use crate::hunks::{to_u32, HunkAssembler};
use crate::line_diff::line_diff;
use crate::tokenize::tokenize;
use crate::{Error, Result};

/// Identifies one of the two compared documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The old document, shown on the left.
    Left,
    /// The new document, shown on the right.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Compares two documents.
///
/// The result depends only on the two texts. Line endings are normalized
/// and a missing final newline is not reported as a change.
#[must_use]
pub fn compute_diff(left: &str, right: &str) -> ViewModel {
    let old = tokenize(left);
    let new = tokenize(right);
    let edits = line_diff(&old, &new);
    let assembled = HunkAssembler::assemble(&edits);

    log::debug!(
        "compared {} left lines with {} right lines: {} hunks, +{} -{}",
        old.len(),
        new.len(),
        assembled.hunks.len(),
        assembled.stats.additions,
        assembled.stats.deletions
    );

    ViewModel {
        hunks: assembled.hunks,
        gutter: assembled.gutter,
        left_line_count: to_u32(old.len()),
        right_line_count: to_u32(new.len()),
        stats: assembled.stats,
    }
}

/// Flips the collapsed flag of one hunk, returning the new state.
///
/// # Errors
///
/// Returns [`Error::HunkOutOfRange`] when `hunk_index` does not address a
/// hunk of `view`.
pub fn toggle_hunk_collapse(
    view: &ViewModel,
    state: &CollapseState,
    hunk_index: usize,
) -> Result<CollapseState> {
    let hunk_count = view.hunks.len();
    if hunk_index >= hunk_count {
        return Err(Error::HunkOutOfRange {
            index: hunk_index,
            hunk_count,
        });
    }
    Ok(state.toggled(hunk_index))
}

/// Entry point for diff generation with an input size ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffEngine {
    max_input_bytes: u64,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::with_limit(crate::config::DEFAULT_MAX_INPUT_BYTES)
    }
}

impl DiffEngine {
    /// Construct an engine with the default size ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an engine rejecting documents larger than `max_input_bytes`.
    #[must_use]
    pub const fn with_limit(max_input_bytes: u64) -> Self {
        Self { max_input_bytes }
    }

    /// Configured size ceiling in bytes.
    #[must_use]
    pub const fn max_input_bytes(&self) -> u64 {
        self.max_input_bytes
    }

    /// Checks `text` against the size ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputTooLarge`] when the document exceeds the ceiling.
    pub fn check(&self, side: Side, text: &str) -> Result<()> {
        let bytes = u64::try_from(text.len()).unwrap_or(u64::MAX);
        if bytes > self.max_input_bytes {
            log::warn!(
                "rejecting {side} document of {bytes} bytes (limit {})",
                self.max_input_bytes
            );
            return Err(Error::InputTooLarge {
                side,
                bytes,
                limit: self.max_input_bytes,
            });
        }
        Ok(())
    }

    /// Compare two documents after checking both against the size ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputTooLarge`] when either document exceeds the ceiling.
    pub fn diff(&self, left: &str, right: &str) -> Result<ViewModel> {
        self.check(Side::Left, left)?;
        self.check(Side::Right, right)?;
        Ok(compute_diff(left, right))
    }
}

#[cfg(test)]
mod tests {
    use checkdiff_api::HunkKind;

    use super::*;

    #[test]
    fn identical_documents_are_one_unchanged_hunk() {
        let view = compute_diff("a\nb\nc\n", "a\nb\nc\n");
        assert_eq!(view.hunks.len(), 1);
        assert_eq!(view.gutter, vec![HunkKind::Unchanged]);
        assert_eq!(view.hunks[0].lines.len(), 3);
        assert!(view.is_identical());
    }

    #[test]
    fn empty_documents_have_no_hunks() {
        let view = compute_diff("", "");
        assert!(view.hunks.is_empty());
        assert!(view.gutter.is_empty());
        assert_eq!(view.left_line_count, 0);
    }

    #[test]
    fn toggle_rejects_unknown_hunk() {
        let view = compute_diff("a\n", "b\n");
        let result = toggle_hunk_collapse(&view, &CollapseState::new(), 1);
        assert!(matches!(
            result,
            Err(Error::HunkOutOfRange {
                index: 1,
                hunk_count: 1
            })
        ));
    }

    #[test]
    fn toggle_round_trips() {
        let view = compute_diff("a\nb\n", "a\nc\n");
        let state = CollapseState::new();
        let once = toggle_hunk_collapse(&view, &state, 0).expect("toggle once");
        assert!(once.is_collapsed(0));
        let twice = toggle_hunk_collapse(&view, &once, 0).expect("toggle twice");
        assert_eq!(twice, state);
    }

    #[test]
    fn engine_enforces_limit() {
        let engine = DiffEngine::with_limit(4);
        assert!(engine.diff("abcd", "").is_ok());
        let error = engine.diff("abc", "abcde").expect_err("right side too large");
        assert!(matches!(
            error,
            Error::InputTooLarge {
                side: Side::Right,
                bytes: 5,
                limit: 4
            }
        ));
        assert_eq!(
            error.to_string(),
            "right document is 5 bytes, over the 4 byte limit"
        );
    }

    #[test]
    fn default_engine_uses_default_limit() {
        assert_eq!(
            DiffEngine::new().max_input_bytes(),
            crate::config::DEFAULT_MAX_INPUT_BYTES
        );
    }
}
