use std::sync::Arc;

use super::{RenderOptions, RenderResult, Renderer, RendererRegistry, RendererSummary};
use crate::{CollapseState, Error, Result, ViewModel};

/// High-level façade for looking up and invoking renderers.
#[derive(Clone)]
pub struct RenderService {
    registry: Arc<RendererRegistry>,
}

impl Default for RenderService {
    fn default() -> Self {
        Self::new(super::default_registry())
    }
}

impl RenderService {
    /// Create a render service backed by the provided registry.
    #[must_use]
    pub fn new(registry: RendererRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// List summaries for all registered renderers.
    #[must_use]
    pub fn summaries(&self) -> Vec<RendererSummary> {
        self.registry.summaries()
    }

    /// Render `view` with the renderer registered as `renderer_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RendererNotRegistered`] when the id is unknown or
    /// [`Error::Render`] when the renderer fails.
    pub fn render(
        &self,
        renderer_id: &str,
        view: &ViewModel,
        collapse: &CollapseState,
        options: &RenderOptions,
    ) -> Result<String> {
        let renderer = self.renderer(renderer_id)?;
        log::debug!(
            "rendering {} hunks with '{renderer_id}' ({} collapsed)",
            view.hunks.len(),
            collapse.len()
        );
        Self::invoke(renderer_id, renderer.render(view, collapse, options))
    }

    fn renderer(&self, renderer_id: &str) -> Result<Arc<dyn Renderer>> {
        self.registry
            .get(renderer_id)
            .ok_or_else(|| Error::RendererNotRegistered {
                renderer: renderer_id.to_string(),
            })
    }

    fn invoke<T>(renderer_id: &str, result: RenderResult<T>) -> Result<T> {
        result.map_err(|source| Error::Render {
            renderer: renderer_id.to_string(),
            source,
        })
    }
}

impl std::fmt::Debug for RenderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let renderer_ids: Vec<&str> = self.registry.ids().collect();
        f.debug_struct("RenderService")
            .field("renderers", &renderer_ids)
            .finish()
    }
}
