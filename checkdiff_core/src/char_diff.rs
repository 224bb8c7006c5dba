//! Character-level refinement of paired lines.
//!
//! Characters are Unicode scalar values. A combining sequence may therefore
//! be split across two runs when only its mark differs.

use checkdiff_api::{Span, SpanKind};

use crate::myers::{diff_slices, DiffOp};

/// A run of characters in a character-level edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharEdit {
    /// Characters shared by both strings.
    Equal(String),
    /// Characters only in the old string.
    Delete(String),
    /// Characters only in the new string.
    Insert(String),
}

impl CharEdit {
    /// Converts the edit into an inline highlight span.
    #[must_use]
    pub fn into_span(self) -> Span {
        match self {
            Self::Equal(text) => Span::new(SpanKind::Unchanged, text),
            Self::Delete(text) => Span::new(SpanKind::Removed, text),
            Self::Insert(text) => Span::new(SpanKind::Added, text),
        }
    }
}

/// Computes a minimal character-level edit script turning `old` into `new`.
#[must_use]
pub fn char_diff(old: &str, new: &str) -> Vec<CharEdit> {
    match (old.is_empty(), new.is_empty()) {
        (true, true) => return Vec::new(),
        (true, false) => return vec![CharEdit::Insert(new.to_owned())],
        (false, true) => return vec![CharEdit::Delete(old.to_owned())],
        (false, false) => {}
    }

    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();

    diff_slices(&old_chars, &new_chars)
        .into_iter()
        .map(|op| match op {
            DiffOp::Equal { .. } => CharEdit::Equal(old_chars[op.old_range()].iter().collect()),
            DiffOp::Delete { .. } => CharEdit::Delete(old_chars[op.old_range()].iter().collect()),
            DiffOp::Insert { .. } => CharEdit::Insert(new_chars[op.new_range()].iter().collect()),
        })
        .collect()
}

/// Replays `edits` against `old`.
///
/// Returns `None` when an equal or deleted run does not match `old` at the
/// current position, or when the script leaves part of `old` unconsumed.
#[must_use]
pub fn apply_char_edits(old: &str, edits: &[CharEdit]) -> Option<String> {
    let mut rest = old;
    let mut out = String::with_capacity(old.len());

    for edit in edits {
        match edit {
            CharEdit::Equal(text) => {
                rest = rest.strip_prefix(text.as_str())?;
                out.push_str(text);
            }
            CharEdit::Delete(text) => {
                rest = rest.strip_prefix(text.as_str())?;
            }
            CharEdit::Insert(text) => out.push_str(text),
        }
    }

    rest.is_empty().then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_prefix_then_replacement() {
        assert_eq!(
            char_diff("line2", "lineTWO"),
            vec![
                CharEdit::Equal("line".into()),
                CharEdit::Delete("2".into()),
                CharEdit::Insert("TWO".into()),
            ]
        );
    }

    #[test]
    fn empty_side_is_single_run() {
        assert_eq!(char_diff("", "abc"), vec![CharEdit::Insert("abc".into())]);
        assert_eq!(char_diff("abc", ""), vec![CharEdit::Delete("abc".into())]);
        assert!(char_diff("", "").is_empty());
    }

    #[test]
    fn multibyte_characters_are_single_units() {
        let edits = char_diff("naïve café", "naive cafe");
        assert_eq!(
            edits,
            vec![
                CharEdit::Equal("na".into()),
                CharEdit::Delete("ï".into()),
                CharEdit::Insert("i".into()),
                CharEdit::Equal("ve caf".into()),
                CharEdit::Delete("é".into()),
                CharEdit::Insert("e".into()),
            ]
        );
    }

    #[test]
    fn replay_rebuilds_the_new_string() {
        let cases = [
            ("", ""),
            ("abc", "abc"),
            ("kitten", "sitting"),
            ("let x = 1;", "let mut x = 10;"),
            ("αβγ", "γβα"),
            ("tabs\tand spaces", "tabs and\tspaces"),
        ];
        for (old, new) in cases {
            let edits = char_diff(old, new);
            assert_eq!(apply_char_edits(old, &edits).as_deref(), Some(new));
        }
    }

    #[test]
    fn replay_rejects_foreign_script() {
        let edits = char_diff("abc", "abd");
        assert_eq!(apply_char_edits("xyz", &edits), None);
        assert_eq!(apply_char_edits("abcdef", &edits), None);
    }

    #[test]
    fn edits_map_to_spans() {
        let spans: Vec<Span> = char_diff("ab", "ac")
            .into_iter()
            .map(CharEdit::into_span)
            .collect();
        assert_eq!(
            spans,
            vec![
                Span::new(SpanKind::Unchanged, "a"),
                Span::new(SpanKind::Removed, "b"),
                Span::new(SpanKind::Added, "c"),
            ]
        );
    }
}
