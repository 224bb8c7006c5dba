mod error;
mod session;

pub use error::CoreError;
pub use session::{open_session, DiffSession};

#[allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
    clippy::empty_line_after_doc_comments,
    clippy::missing_safety_doc,
    missing_docs
)]
mod scaffolding {
    use super::{open_session, CoreError, DiffSession};
    use crate::{
        compute_diff, DiffStats, Hunk, HunkKind, HunkRange, LineKind, RenderedLine, Span,
        SpanKind, ViewModel,
    };

    uniffi::include_scaffolding!("checkdiff_core");
}

pub use scaffolding::*;
