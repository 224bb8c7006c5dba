//! Minimal edit scripts over arbitrary comparable sequences.
//!
//! This is the linear-space variant of Myers' O((N+M)·D) algorithm: each
//! step finds the middle snake of an optimal path and recurses on both
//! halves, so memory stays proportional to N+M regardless of the edit
//! distance. Line and character diffs both run through [`diff_slices`].

#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use std::ops::{Index, IndexMut, Range};

/// One run of an index-based edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp {
    /// `len` items shared by both sides.
    Equal {
        /// Start of the run in the old sequence.
        old_index: usize,
        /// Start of the run in the new sequence.
        new_index: usize,
        /// Number of items in the run.
        len: usize,
    },
    /// `len` items present only in the old sequence.
    Delete {
        /// Start of the run in the old sequence.
        old_index: usize,
        /// Number of items in the run.
        len: usize,
    },
    /// `len` items present only in the new sequence.
    Insert {
        /// Start of the run in the new sequence.
        new_index: usize,
        /// Number of items in the run.
        len: usize,
    },
}

impl DiffOp {
    /// Range of old items the op covers (empty for inserts).
    #[must_use]
    pub const fn old_range(&self) -> Range<usize> {
        match *self {
            Self::Equal { old_index, len, .. } | Self::Delete { old_index, len } => {
                old_index..old_index + len
            }
            Self::Insert { .. } => 0..0,
        }
    }

    /// Range of new items the op covers (empty for deletes).
    #[must_use]
    pub const fn new_range(&self) -> Range<usize> {
        match *self {
            Self::Equal { new_index, len, .. } | Self::Insert { new_index, len } => {
                new_index..new_index + len
            }
            Self::Delete { .. } => 0..0,
        }
    }
}

/// Computes a minimal edit script turning `old` into `new`.
///
/// Within every region between two equal runs the script lists the whole
/// deletion before the whole insertion, and adjacent runs of the same kind
/// are merged.
#[must_use]
pub fn diff_slices<T: PartialEq>(old: &[T], new: &[T]) -> Vec<DiffOp> {
    let max_d = max_d(old.len(), new.len());
    let mut vf = V::new(max_d);
    let mut vb = V::new(max_d);
    let mut raw = Vec::new();

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut raw,
    );

    normalize(raw)
}

const fn max_d(len1: usize, len2: usize) -> usize {
    (len1 + len2 + 1) / 2 + 1
}

/// Furthest-reaching x per diagonal k, addressable by negative k.
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            v: vec![0; 2 * max_d],
        }
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.v[(k + self.offset) as usize]
    }
}

fn common_prefix_len<T: PartialEq>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
) -> usize {
    old[old_range]
        .iter()
        .zip(&new[new_range])
        .take_while(|(a, b)| a == b)
        .count()
}

fn common_suffix_len<T: PartialEq>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
) -> usize {
    old[old_range]
        .iter()
        .rev()
        .zip(new[new_range].iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

fn find_middle_snake<T: PartialEq>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)> {
    let n = old_range.len();
    let m = new_range.len();

    // The parity of the optimal script length follows the parity of delta.
    let delta = n as isize - m as isize;
    let odd = delta & 1 == 1;

    vf[1] = 0;
    vb[1] = 0;

    let d_max = max_d(n, m) as isize;
    for d in 0..d_max {
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = (x as isize - k) as usize;

            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix_len(
                    old,
                    old_range.start + x..old_range.end,
                    new,
                    new_range.start + y..new_range.end,
                );
            }
            vf[k] = x;

            if odd && (k - delta).abs() <= (d - 1) && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + old_range.start, y0 + new_range.start));
            }
        }

        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = (x as isize - k) as usize;

            if x < n && y < m {
                let advance = common_suffix_len(
                    old,
                    old_range.start..old_range.start + n - x,
                    new,
                    new_range.start..new_range.start + m - y,
                );
                x += advance;
                y += advance;
            }
            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + old_range.start, m - y + new_range.start));
            }
        }
    }

    None
}

fn conquer<T: PartialEq>(
    old: &[T],
    mut old_range: Range<usize>,
    new: &[T],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    out: &mut Vec<DiffOp>,
) {
    let prefix = common_prefix_len(old, old_range.clone(), new, new_range.clone());
    if prefix > 0 {
        out.push(DiffOp::Equal {
            old_index: old_range.start,
            new_index: new_range.start,
            len: prefix,
        });
    }
    old_range.start += prefix;
    new_range.start += prefix;

    let suffix = common_suffix_len(old, old_range.clone(), new, new_range.clone());
    old_range.end -= suffix;
    new_range.end -= suffix;
    let suffix_start = (old_range.end, new_range.end);

    if old_range.is_empty() && new_range.is_empty() {
        // nothing left between prefix and suffix
    } else if new_range.is_empty() {
        out.push(DiffOp::Delete {
            old_index: old_range.start,
            len: old_range.len(),
        });
    } else if old_range.is_empty() {
        out.push(DiffOp::Insert {
            new_index: new_range.start,
            len: new_range.len(),
        });
    } else if let Some((x, y)) =
        find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb)
    {
        log::trace!("middle snake split at old {x}, new {y}");
        conquer(old, old_range.start..x, new, new_range.start..y, vf, vb, out);
        conquer(old, x..old_range.end, new, y..new_range.end, vf, vb, out);
    } else {
        out.push(DiffOp::Delete {
            old_index: old_range.start,
            len: old_range.len(),
        });
        out.push(DiffOp::Insert {
            new_index: new_range.start,
            len: new_range.len(),
        });
    }

    if suffix > 0 {
        out.push(DiffOp::Equal {
            old_index: suffix_start.0,
            new_index: suffix_start.1,
            len: suffix,
        });
    }
}

/// Pending deletions and insertions between two equal runs.
#[derive(Debug, Default)]
struct ChangeRegion {
    delete: Option<(usize, usize)>,
    insert: Option<(usize, usize)>,
}

impl ChangeRegion {
    fn flush(&mut self, out: &mut Vec<DiffOp>) {
        if let Some((old_index, len)) = self.delete.take() {
            out.push(DiffOp::Delete { old_index, len });
        }
        if let Some((new_index, len)) = self.insert.take() {
            out.push(DiffOp::Insert { new_index, len });
        }
    }
}

/// Regroups every change region as deletion-then-insertion and merges
/// adjacent runs of the same kind.
///
/// Inside a region the deleted items are contiguous in the old sequence and
/// the inserted items contiguous in the new one, so the reordering keeps
/// the script valid and minimal.
fn normalize(raw: Vec<DiffOp>) -> Vec<DiffOp> {
    let mut out: Vec<DiffOp> = Vec::with_capacity(raw.len());
    let mut region = ChangeRegion::default();

    for op in raw {
        match op {
            DiffOp::Equal { len: 0, .. }
            | DiffOp::Delete { len: 0, .. }
            | DiffOp::Insert { len: 0, .. } => {}
            DiffOp::Delete { old_index, len } => {
                let entry = region.delete.get_or_insert((old_index, 0));
                entry.1 += len;
            }
            DiffOp::Insert { new_index, len } => {
                let entry = region.insert.get_or_insert((new_index, 0));
                entry.1 += len;
            }
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                region.flush(&mut out);
                if let Some(DiffOp::Equal { len: previous, .. }) = out.last_mut() {
                    *previous += len;
                } else {
                    out.push(DiffOp::Equal {
                        old_index,
                        new_index,
                        len,
                    });
                }
            }
        }
    }

    region.flush(&mut out);
    out
}
