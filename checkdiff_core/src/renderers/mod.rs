//! Renderer system entry points.

mod service;

pub use checkdiff_render_api::{
    RenderCapabilities, RenderError, RenderOptions, RenderResult, Renderer, RendererRegistry,
    RendererSummary,
};
pub use checkdiff_renderers::{
    default_registry, JsonRenderer, SplitRenderer, UnifiedRenderer, DEFAULT_RENDERER,
};

pub use service::RenderService;
