use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::view::ViewModel;

/// Set of hunk indices the user has collapsed.
///
/// Indices address hunks of exactly one [`ViewModel`]; they are meaningless
/// once either input document changes. The state never mutates in place:
/// every toggle returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollapseState {
    collapsed: BTreeSet<usize>,
}

impl CollapseState {
    /// An empty state with every hunk expanded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A state collapsing every hunk that [`crate::Hunk::is_collapsible`] reports.
    #[must_use]
    pub fn collapse_eligible(view: &ViewModel) -> Self {
        view.hunks
            .iter()
            .enumerate()
            .filter(|(_, hunk)| hunk.is_collapsible())
            .map(|(index, _)| index)
            .collect()
    }

    /// Whether the hunk at `index` is collapsed.
    #[must_use]
    pub fn is_collapsed(&self, index: usize) -> bool {
        self.collapsed.contains(&index)
    }

    /// Collapsed hunk indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.collapsed.iter().copied()
    }

    /// Number of collapsed hunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    /// Returns `true` when every hunk is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }

    /// Returns a copy with the hunk at `index` flipped.
    ///
    /// No bounds check is performed here; callers holding a view model
    /// should go through the engine's checked toggle.
    #[must_use]
    pub fn toggled(&self, index: usize) -> Self {
        let mut collapsed = self.collapsed.clone();
        if !collapsed.remove(&index) {
            collapsed.insert(index);
        }
        Self { collapsed }
    }
}

impl FromIterator<usize> for CollapseState {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            collapsed: iter.into_iter().collect(),
        }
    }
}
