mod registry;
mod types;

pub use registry::RendererRegistry;
pub use types::{RenderCapabilities, RenderError, RenderOptions, RenderResult, RendererSummary};

use checkdiff_api::{CollapseState, ViewModel};

/// Trait implemented by presentation backends that turn a view model into text.
pub trait Renderer: Send + Sync {
    /// Stable identifier used for lookup and logging.
    fn id(&self) -> &'static str;

    /// Human-friendly label for UI surfaces.
    fn label(&self) -> &'static str;

    /// Capabilities advertised by the renderer.
    fn capabilities(&self) -> RenderCapabilities;

    /// Render `view`, replacing collapsed hunks with summary rows where supported.
    ///
    /// # Errors
    ///
    /// Implementors should surface serialization or formatting failures.
    fn render(
        &self,
        view: &ViewModel,
        collapse: &CollapseState,
        options: &RenderOptions,
    ) -> RenderResult<String>;
}
