mod json;
mod split;
mod text;
mod unified;

pub use json::JsonRenderer;
pub use split::SplitRenderer;
pub use unified::UnifiedRenderer;

use checkdiff_render_api::RendererRegistry;

/// Identifier of the renderer used when none is requested.
pub const DEFAULT_RENDERER: &str = "unified";

/// Build a renderer registry populated with the built-in renderers.
#[must_use]
pub fn default_registry() -> RendererRegistry {
    let mut registry = RendererRegistry::new();
    registry.register(UnifiedRenderer);
    registry.register(SplitRenderer);
    registry.register(JsonRenderer::default());
    registry
}
