use std::sync::{Arc, Mutex};

use crate::{
    compute_diff,
    diff::{toggle_hunk_collapse, DiffEngine, Side},
    hunks::to_u32,
    renderers::{RenderOptions, RenderService},
    CollapseState, ViewModel,
};

use super::CoreError;

type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug)]
struct SessionState {
    left: String,
    right: String,
    view: ViewModel,
    collapse: CollapseState,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            view: compute_diff("", ""),
            collapse: CollapseState::new(),
        }
    }
}

impl SessionState {
    /// Recomputes the view and drops every collapsed index, since hunk
    /// boundaries of the previous comparison no longer apply.
    fn recompute(&mut self) {
        self.view = compute_diff(&self.left, &self.right);
        self.collapse = CollapseState::new();
    }
}

/// One comparison as seen by a front end: both documents, their view model
/// and the hunks the user collapsed.
#[derive(Debug)]
pub struct DiffSession {
    engine: DiffEngine,
    renderers: RenderService,
    state: Mutex<SessionState>,
}

impl DiffSession {
    /// Construct a session comparing two empty documents.
    #[must_use]
    pub fn new(engine: DiffEngine) -> Self {
        Self {
            engine,
            renderers: RenderService::default(),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Replace the left document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document exceeds the size ceiling or the
    /// session lock is poisoned.
    pub fn set_left(&self, text: String) -> Result<ViewModel> {
        self.engine.check(Side::Left, &text)?;
        let mut state = self.state.lock()?;
        if state.left != text {
            state.left = text;
            state.recompute();
        }
        Ok(state.view.clone())
    }

    /// Replace the right document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document exceeds the size ceiling or the
    /// session lock is poisoned.
    pub fn set_right(&self, text: String) -> Result<ViewModel> {
        self.engine.check(Side::Right, &text)?;
        let mut state = self.state.lock()?;
        if state.right != text {
            state.right = text;
            state.recompute();
        }
        Ok(state.view.clone())
    }

    /// Replace both documents with a single recomputation.
    ///
    /// # Errors
    ///
    /// Returns an error when either document exceeds the size ceiling or the
    /// session lock is poisoned.
    pub fn set_texts(&self, left: String, right: String) -> Result<ViewModel> {
        self.engine.check(Side::Left, &left)?;
        self.engine.check(Side::Right, &right)?;
        let mut state = self.state.lock()?;
        if state.left != left || state.right != right {
            state.left = left;
            state.right = right;
            state.recompute();
        }
        Ok(state.view.clone())
    }

    /// The current view model.
    ///
    /// # Errors
    ///
    /// Returns an error when the session lock is poisoned.
    pub fn view(&self) -> Result<ViewModel> {
        Ok(self.state.lock()?.view.clone())
    }

    /// Flip the collapsed flag of one hunk and return the collapsed indices.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::HunkOutOfRange`] when the index does not address
    /// a hunk of the current view.
    pub fn toggle_hunk(&self, hunk_index: u32) -> Result<Vec<u32>> {
        let index = usize::try_from(hunk_index).unwrap_or(usize::MAX);
        let mut state = self.state.lock()?;
        let next = toggle_hunk_collapse(&state.view, &state.collapse, index)?;
        state.collapse = next;
        Ok(collapsed(&state.collapse))
    }

    /// Collapsed hunk indices in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error when the session lock is poisoned.
    pub fn collapsed_hunks(&self) -> Result<Vec<u32>> {
        Ok(collapsed(&self.state.lock()?.collapse))
    }

    /// Render the current comparison with a registered renderer.
    ///
    /// # Errors
    ///
    /// Returns an error when the renderer is unknown or fails.
    pub fn render(&self, renderer_id: &str, width: u32) -> Result<String> {
        let options = RenderOptions::with_width(usize::try_from(width).unwrap_or(usize::MAX));
        let state = self.state.lock()?;
        self.renderers
            .render(renderer_id, &state.view, &state.collapse, &options)
            .map_err(CoreError::from)
    }
}

fn collapsed(state: &CollapseState) -> Vec<u32> {
    state.indices().map(to_u32).collect()
}

/// Open a session via the `UniFFI` namespace function.
#[must_use]
pub fn open_session(max_input_bytes: u64) -> Arc<DiffSession> {
    Arc::new(DiffSession::new(DiffEngine::with_limit(max_input_bytes)))
}
