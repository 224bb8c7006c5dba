use serde::{Deserialize, Serialize};

use crate::collapse::CollapseState;

/// Renderer-agnostic result of comparing two documents.
///
/// A view model is a pure function of its two input texts. Anything that
/// changes while the user looks at it (collapsed hunks, scroll position)
/// lives outside of this structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViewModel {
    /// Hunks in document order; together they cover both documents.
    #[serde(default)]
    pub hunks: Vec<Hunk>,
    /// One entry per hunk, in hunk order.
    #[serde(default)]
    pub gutter: Vec<HunkKind>,
    /// Number of lines in the left (old) document.
    pub left_line_count: u32,
    /// Number of lines in the right (new) document.
    pub right_line_count: u32,
    /// Line-level insertion and deletion totals.
    #[serde(default)]
    pub stats: DiffStats,
}

impl ViewModel {
    /// Returns `true` when neither side contains a changed line.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.hunks.iter().all(|hunk| hunk.kind == HunkKind::Unchanged)
    }

    /// Total number of inserted plus deleted lines.
    #[must_use]
    pub const fn changed_line_count(&self) -> u32 {
        self.stats.additions.saturating_add(self.stats.deletions)
    }

    /// Rebuilds the normalized left document from the hunks.
    #[must_use]
    pub fn left_text(&self) -> String {
        self.side_text(|line| line.left_line.is_some(), RenderedLine::old_text)
    }

    /// Rebuilds the normalized right document from the hunks.
    #[must_use]
    pub fn right_text(&self) -> String {
        self.side_text(|line| line.right_line.is_some(), RenderedLine::new_text)
    }

    /// Index of the first changed hunk strictly after `after`, or from the
    /// start when `after` is `None`.
    #[must_use]
    pub fn next_change(&self, after: Option<usize>) -> Option<usize> {
        let start = after.map_or(0, |index| index.saturating_add(1));
        self.hunks
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, hunk)| hunk.kind.is_change())
            .map(|(index, _)| index)
    }

    /// Index of the last changed hunk strictly before `before`, or from the
    /// end when `before` is `None`.
    #[must_use]
    pub fn previous_change(&self, before: Option<usize>) -> Option<usize> {
        let end = before.map_or(self.hunks.len(), |index| index.min(self.hunks.len()));
        self.hunks[..end]
            .iter()
            .rposition(|hunk| hunk.kind.is_change())
    }

    /// Flattens the hunks into visual rows, replacing every collapsed hunk
    /// with a single summary row.
    #[must_use]
    pub fn rows<'a>(&'a self, collapse: &CollapseState) -> Vec<Row<'a>> {
        let mut rows = Vec::new();
        for (hunk_index, hunk) in self.hunks.iter().enumerate() {
            if collapse.is_collapsed(hunk_index) && !hunk.lines.is_empty() {
                rows.push(Row::Collapsed {
                    hunk_index,
                    kind: hunk.kind,
                    line_count: hunk.row_count(),
                });
                continue;
            }

            rows.extend(
                hunk.lines
                    .iter()
                    .map(|line| Row::Line { hunk_index, line }),
            );
        }
        rows
    }

    fn side_text<P, T>(&self, present: P, text: T) -> String
    where
        P: Fn(&RenderedLine) -> bool,
        T: Fn(&RenderedLine) -> String,
    {
        let mut out = String::new();
        for line in self.hunks.iter().flat_map(|hunk| &hunk.lines) {
            if present(line) {
                out.push_str(&text(line));
                out.push('\n');
            }
        }
        out
    }
}

/// Line-level insertion and deletion totals for a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DiffStats {
    /// Number of lines present only on the right side.
    pub additions: u32,
    /// Number of lines present only on the left side.
    pub deletions: u32,
}

impl DiffStats {
    /// A stats instance with zero additions and deletions.
    pub const ZERO: Self = Self {
        additions: 0,
        deletions: 0,
    };

    /// Convenience constructor for explicit values.
    #[must_use]
    pub const fn new(additions: u32, deletions: u32) -> Self {
        Self {
            additions,
            deletions,
        }
    }

    /// Combine two stats structs.
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self {
            additions: self.additions.saturating_add(other.additions),
            deletions: self.deletions.saturating_add(other.deletions),
        }
    }
}

/// Visual classification of a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HunkKind {
    /// Lines identical on both sides.
    Unchanged,
    /// Lines that exist only on the right side.
    Added,
    /// Lines that exist only on the left side.
    Removed,
    /// Removed lines immediately followed by added lines, paired row by row.
    Modified,
}

impl HunkKind {
    /// Returns `true` for every classification except [`HunkKind::Unchanged`].
    #[must_use]
    pub const fn is_change(self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Lowercase adjective used in summary rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
        }
    }
}

/// The line number ranges a hunk occupies on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HunkRange {
    /// First left line number covered, or the next one when the hunk has no left lines.
    pub left_start: u32,
    /// Number of left lines covered.
    pub left_lines: u32,
    /// First right line number covered, or the next one when the hunk has no right lines.
    pub right_start: u32,
    /// Number of right lines covered.
    pub right_lines: u32,
}

/// A maximal run of rows sharing one visual classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    /// Classification of the hunk.
    pub kind: HunkKind,
    /// Line numbers covered on both sides.
    pub range: HunkRange,
    /// Rows owned by this hunk.
    #[serde(default)]
    pub lines: Vec<RenderedLine>,
}

impl Hunk {
    /// Whether the hunk is a candidate for collapsing by default.
    #[must_use]
    pub fn is_collapsible(&self) -> bool {
        self.kind == HunkKind::Unchanged && self.lines.len() > 1
    }

    /// Number of visual rows in the expanded hunk.
    #[must_use]
    pub fn row_count(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }
}

/// Role a single row plays in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Identical on both sides.
    Unchanged,
    /// Present only on the right side.
    Added,
    /// Present only on the left side.
    Removed,
    /// A left line paired with the right line that replaced it.
    Modified,
}

/// One visual row of the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    /// Role of the row.
    pub kind: LineKind,
    /// 1-based line number in the left document, absent for added rows.
    #[serde(default)]
    pub left_line: Option<u32>,
    /// 1-based line number in the right document, absent for removed rows.
    #[serde(default)]
    pub right_line: Option<u32>,
    /// Character spans making up the row. Spans never carry empty text.
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl RenderedLine {
    /// A row present on both sides with identical text.
    #[must_use]
    pub fn unchanged(left_line: u32, right_line: u32, text: &str) -> Self {
        Self {
            kind: LineKind::Unchanged,
            left_line: Some(left_line),
            right_line: Some(right_line),
            spans: Span::single(SpanKind::Unchanged, text),
        }
    }

    /// A row present only on the right side.
    #[must_use]
    pub fn added(right_line: u32, text: &str) -> Self {
        Self {
            kind: LineKind::Added,
            left_line: None,
            right_line: Some(right_line),
            spans: Span::single(SpanKind::Added, text),
        }
    }

    /// A row present only on the left side.
    #[must_use]
    pub fn removed(left_line: u32, text: &str) -> Self {
        Self {
            kind: LineKind::Removed,
            left_line: Some(left_line),
            right_line: None,
            spans: Span::single(SpanKind::Removed, text),
        }
    }

    /// A paired row carrying inline highlights.
    #[must_use]
    pub fn modified(left_line: u32, right_line: u32, spans: Vec<Span>) -> Self {
        Self {
            kind: LineKind::Modified,
            left_line: Some(left_line),
            right_line: Some(right_line),
            spans,
        }
    }

    /// Text of the row as it appears in the left document.
    #[must_use]
    pub fn old_text(&self) -> String {
        self.collect_text(SpanKind::Added)
    }

    /// Text of the row as it appears in the right document.
    #[must_use]
    pub fn new_text(&self) -> String {
        self.collect_text(SpanKind::Removed)
    }

    fn collect_text(&self, skip: SpanKind) -> String {
        self.spans
            .iter()
            .filter(|span| span.kind != skip)
            .map(|span| span.text.as_str())
            .collect()
    }
}

/// Inline highlight classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// Shared by both sides.
    Unchanged,
    /// Only on the right side.
    Added,
    /// Only on the left side.
    Removed,
}

/// A run of characters sharing one highlight classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Highlight classification.
    pub kind: SpanKind,
    /// The characters in the run.
    pub text: String,
}

impl Span {
    /// Construct a span.
    #[must_use]
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn single(kind: SpanKind, text: &str) -> Vec<Self> {
        if text.is_empty() {
            Vec::new()
        } else {
            vec![Self::new(kind, text)]
        }
    }
}

/// A visual row after collapse state has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    /// An expanded row.
    Line {
        /// Hunk that owns the row.
        hunk_index: usize,
        /// The row itself.
        line: &'a RenderedLine,
    },
    /// Summary standing in for every row of a collapsed hunk.
    Collapsed {
        /// The collapsed hunk.
        hunk_index: usize,
        /// Classification of the collapsed hunk.
        kind: HunkKind,
        /// Number of rows hidden.
        line_count: u32,
    },
}

impl Row<'_> {
    /// Index of the hunk the row belongs to.
    #[must_use]
    pub const fn hunk_index(&self) -> usize {
        match self {
            Self::Line { hunk_index, .. } | Self::Collapsed { hunk_index, .. } => *hunk_index,
        }
    }

    /// Summary text for collapsed rows, e.g. `"12 unchanged lines"`.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        match self {
            Self::Line { .. } => None,
            Self::Collapsed {
                kind, line_count, ..
            } => {
                let noun = if *line_count == 1 { "line" } else { "lines" };
                Some(format!("{line_count} {} {noun}", kind.label()))
            }
        }
    }
}
