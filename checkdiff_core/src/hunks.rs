//! Turning a flat line edit script into numbered, classified hunks.

use checkdiff_api::{DiffStats, Hunk, HunkKind, HunkRange, RenderedLine};

use crate::char_diff::{char_diff, CharEdit};
use crate::line_diff::LineEdit;
use crate::tokenize::Line;

/// Output of [`HunkAssembler::assemble`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assembled {
    /// Hunks in document order.
    pub hunks: Vec<Hunk>,
    /// One classification per hunk.
    pub gutter: Vec<HunkKind>,
    /// Inserted and deleted line totals.
    pub stats: DiffStats,
}

/// Walks a line edit script while tracking the next line number on each side.
#[derive(Debug)]
pub struct HunkAssembler {
    next_left: u32,
    next_right: u32,
    out: Assembled,
}

impl Default for HunkAssembler {
    fn default() -> Self {
        Self {
            next_left: 1,
            next_right: 1,
            out: Assembled::default(),
        }
    }
}

impl HunkAssembler {
    /// Groups `edits` into hunks.
    ///
    /// A deletion directly followed by an insertion becomes one
    /// [`HunkKind::Modified`] hunk whose lines are paired positionally; any
    /// lines left over on the longer side stay pure removals or additions.
    #[must_use]
    pub fn assemble(edits: &[LineEdit<'_>]) -> Assembled {
        let mut assembler = Self::default();
        let mut edits = edits.iter().copied().peekable();

        while let Some(edit) = edits.next() {
            match edit {
                LineEdit::Equal { old, new } => assembler.push_unchanged(old, new),
                LineEdit::Delete(deleted) => {
                    let inserted = edits
                        .next_if(|next| matches!(next, LineEdit::Insert(_)))
                        .map_or(&[][..], |next| next.new_lines());
                    assembler.push_change(deleted, inserted);
                }
                LineEdit::Insert(inserted) => assembler.push_change(&[], inserted),
            }
        }

        assembler.out
    }

    fn take_left(&mut self) -> u32 {
        let number = self.next_left;
        self.next_left += 1;
        number
    }

    fn take_right(&mut self) -> u32 {
        let number = self.next_right;
        self.next_right += 1;
        number
    }

    fn push_unchanged(&mut self, old: &[Line], new: &[Line]) {
        if old.is_empty() {
            return;
        }

        let range = self.range(old.len(), new.len());
        let lines = old
            .iter()
            .zip(new)
            .map(|(left, right)| {
                debug_assert_eq!(left.text, right.text);
                let left_number = self.take_left();
                let right_number = self.take_right();
                RenderedLine::unchanged(left_number, right_number, &left.text)
            })
            .collect();

        self.push(HunkKind::Unchanged, range, lines);
    }

    fn push_change(&mut self, deleted: &[Line], inserted: &[Line]) {
        let kind = match (deleted.is_empty(), inserted.is_empty()) {
            (true, true) => return,
            (false, true) => HunkKind::Removed,
            (true, false) => HunkKind::Added,
            (false, false) => HunkKind::Modified,
        };

        let range = self.range(deleted.len(), inserted.len());
        let mut lines = Vec::with_capacity(deleted.len().max(inserted.len()));

        for (old, new) in deleted.iter().zip(inserted) {
            let spans = char_diff(&old.text, &new.text)
                .into_iter()
                .map(CharEdit::into_span)
                .collect();
            let left_number = self.take_left();
            let right_number = self.take_right();
            lines.push(RenderedLine::modified(left_number, right_number, spans));
        }
        for old in deleted.iter().skip(inserted.len()) {
            let left_number = self.take_left();
            lines.push(RenderedLine::removed(left_number, &old.text));
        }
        for new in inserted.iter().skip(deleted.len()) {
            let right_number = self.take_right();
            lines.push(RenderedLine::added(right_number, &new.text));
        }

        self.out.stats = self
            .out
            .stats
            .add(DiffStats::new(to_u32(inserted.len()), to_u32(deleted.len())));
        self.push(kind, range, lines);
    }

    fn range(&self, left_lines: usize, right_lines: usize) -> HunkRange {
        HunkRange {
            left_start: self.next_left,
            left_lines: to_u32(left_lines),
            right_start: self.next_right,
            right_lines: to_u32(right_lines),
        }
    }

    fn push(&mut self, kind: HunkKind, range: HunkRange, lines: Vec<RenderedLine>) {
        self.out.gutter.push(kind);
        self.out.hunks.push(Hunk { kind, range, lines });
    }
}

pub(crate) fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
