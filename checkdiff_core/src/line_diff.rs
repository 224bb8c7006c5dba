//! Line-granularity edit scripts.

use std::collections::HashMap;

use crate::myers::{diff_slices, DiffOp};
use crate::tokenize::Line;

/// A run of lines in a line-level edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEdit<'a> {
    /// Lines with identical text on both sides.
    Equal {
        /// The run as it appears in the old document.
        old: &'a [Line],
        /// The run as it appears in the new document.
        new: &'a [Line],
    },
    /// Lines only in the old document.
    Delete(&'a [Line]),
    /// Lines only in the new document.
    Insert(&'a [Line]),
}

impl<'a> LineEdit<'a> {
    /// Lines this edit contributes to the old document.
    #[must_use]
    pub const fn old_lines(&self) -> &'a [Line] {
        match *self {
            Self::Equal { old, .. } | Self::Delete(old) => old,
            Self::Insert(_) => &[],
        }
    }

    /// Lines this edit contributes to the new document.
    #[must_use]
    pub const fn new_lines(&self) -> &'a [Line] {
        match *self {
            Self::Equal { new, .. } | Self::Insert(new) => new,
            Self::Delete(_) => &[],
        }
    }
}

/// Computes a minimal line-level edit script, comparing lines by exact text.
#[must_use]
pub fn line_diff<'a>(old: &'a [Line], new: &'a [Line]) -> Vec<LineEdit<'a>> {
    let mut ids: HashMap<&str, u32> = HashMap::new();
    let old_ids = intern(&mut ids, old);
    let new_ids = intern(&mut ids, new);
    log::trace!("interned {} distinct lines", ids.len());

    diff_slices(&old_ids, &new_ids)
        .into_iter()
        .map(|op| match op {
            DiffOp::Equal { .. } => LineEdit::Equal {
                old: &old[op.old_range()],
                new: &new[op.new_range()],
            },
            DiffOp::Delete { .. } => LineEdit::Delete(&old[op.old_range()]),
            DiffOp::Insert { .. } => LineEdit::Insert(&new[op.new_range()]),
        })
        .collect()
}

fn intern<'a>(ids: &mut HashMap<&'a str, u32>, lines: &'a [Line]) -> Vec<u32> {
    lines
        .iter()
        .map(|line| {
            let next = u32::try_from(ids.len()).unwrap_or(u32::MAX);
            *ids.entry(line.text.as_str()).or_insert(next)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn identical_documents_are_one_equal_run() {
        let old = tokenize("a\nb\nc\n");
        let new = tokenize("a\nb\nc");
        let edits = line_diff(&old, &new);
        assert_eq!(edits.len(), 1);
        assert!(matches!(edits[0], LineEdit::Equal { old, .. } if old.len() == 3));
    }

    #[test]
    fn changed_line_is_delete_then_insert() {
        let old = tokenize("line1\nline2\nline3\n");
        let new = tokenize("line1\nlineTWO\nline3\n");
        let edits = line_diff(&old, &new);

        assert_eq!(edits.len(), 4);
        assert_eq!(texts(edits[1].old_lines()), vec!["line2"]);
        assert!(matches!(edits[1], LineEdit::Delete(_)));
        assert_eq!(texts(edits[2].new_lines()), vec!["lineTWO"]);
        assert!(matches!(edits[2], LineEdit::Insert(_)));
    }

    #[test]
    fn comparison_is_exact() {
        let old = tokenize("Hello\n  indented\n");
        let new = tokenize("hello\nindented\n");
        let edits = line_diff(&old, &new);
        assert_eq!(
            edits,
            vec![LineEdit::Delete(&old[..]), LineEdit::Insert(&new[..])]
        );
    }

    #[test]
    fn equal_runs_keep_both_numberings() {
        let old = tokenize("new header\nshared\n");
        let new = tokenize("shared\n");
        let edits = line_diff(&old, &new);
        let LineEdit::Equal { old: left, new: right } = edits[1] else {
            panic!("expected an equal run, got {edits:?}");
        };
        assert_eq!(left[0].number, 2);
        assert_eq!(right[0].number, 1);
    }

    #[test]
    fn duplicate_lines_share_ids() {
        let mut ids = HashMap::new();
        let lines = tokenize("x\ny\nx\n");
        assert_eq!(intern(&mut ids, &lines), vec![0, 1, 0]);
    }
}
