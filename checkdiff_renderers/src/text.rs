//! Helpers shared by the plain-text renderers.

use checkdiff_api::{LineKind, RenderedLine, SpanKind, ViewModel};

const TAB: &str = "    ";

/// Digits needed for the largest line number on either side.
pub(crate) fn number_width(view: &ViewModel) -> usize {
    let largest = view.left_line_count.max(view.right_line_count).max(1);
    largest.to_string().len()
}

pub(crate) fn number(value: Option<u32>, width: usize) -> String {
    value.map_or_else(|| " ".repeat(width), |n| format!("{n:>width$}"))
}

pub(crate) const fn marker(kind: LineKind) -> char {
    match kind {
        LineKind::Unchanged => ' ',
        LineKind::Added => '+',
        LineKind::Removed => '-',
        LineKind::Modified => '~',
    }
}

/// Word-diff style markup: `[-removed-]` and `{+added+}` around changed runs.
pub(crate) fn inline_markup(line: &RenderedLine) -> String {
    let mut out = String::new();
    for span in &line.spans {
        match span.kind {
            SpanKind::Unchanged => out.push_str(&span.text),
            SpanKind::Removed => {
                out.push_str("[-");
                out.push_str(&span.text);
                out.push_str("-]");
            }
            SpanKind::Added => {
                out.push_str("{+");
                out.push_str(&span.text);
                out.push_str("+}");
            }
        }
    }
    out
}

/// Pads or truncates `text` to exactly `width` characters.
pub(crate) fn fit(text: &str, width: usize) -> String {
    let expanded = text.replace('\t', TAB);
    let count = expanded.chars().count();
    if count <= width {
        let mut out = expanded;
        out.extend(std::iter::repeat(' ').take(width - count));
        return out;
    }

    let mut out: String = expanded.chars().take(width.saturating_sub(1)).collect();
    if width > 0 {
        out.push('…');
    }
    out
}
