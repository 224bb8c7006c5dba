//! Splitting raw documents into numbered lines.

use std::borrow::Cow;

/// One line of a tokenized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position of the line in its document.
    pub number: u32,
    /// Line content without its terminator.
    pub text: String,
}

/// Normalizes line endings so that `\r\n` and lone `\r` become `\n`.
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Splits `text` into lines.
///
/// Empty input yields no lines. Any other input is treated as if it ended
/// with a line terminator, so `"a\nb"` and `"a\nb\n"` tokenize identically
/// and `"\n"` is a single empty line.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Line> {
    if text.is_empty() {
        return Vec::new();
    }

    let normalized = normalize_line_endings(text);
    let body = normalized.strip_suffix('\n').unwrap_or(&*normalized);

    body.split('\n')
        .zip(1u32..)
        .map(|(text, number)| Line {
            number,
            text: text.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn lone_newline_is_one_empty_line() {
        assert_eq!(texts(&tokenize("\n")), vec![""]);
        assert_eq!(texts(&tokenize("\n\n")), vec!["", ""]);
    }

    #[test]
    fn trailing_newline_is_optional() {
        assert_eq!(tokenize("a\nb"), tokenize("a\nb\n"));
        assert_eq!(texts(&tokenize("a\nb")), vec!["a", "b"]);
    }

    #[test]
    fn windows_and_classic_mac_endings_collapse() {
        assert_eq!(texts(&tokenize("one\r\ntwo\rthree\n")), vec!["one", "two", "three"]);
        assert_eq!(texts(&tokenize("\r\n")), vec![""]);
        assert_eq!(texts(&tokenize("a\r\r\nb")), vec!["a", "", "b"]);
    }

    #[test]
    fn lines_are_numbered_from_one() {
        let lines = tokenize("x\ny\nz");
        let numbers: Vec<u32> = lines.iter().map(|line| line.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn normalization_borrows_when_clean() {
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
        assert_eq!(normalize_line_endings("a\r\nb\r"), "a\nb\n");
    }
}
