//! Renderer registry keeps track of available presentation backends.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{RenderCapabilities, Renderer, RendererSummary};

/// In-memory registry of renderers keyed by [`Renderer::id`].
#[derive(Default, Clone)]
pub struct RendererRegistry {
    renderers: BTreeMap<&'static str, Arc<dyn Renderer>>,
}

impl RendererRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer, replacing any previous one with the same id.
    pub fn register<R>(&mut self, renderer: R)
    where
        R: Renderer + 'static,
    {
        self.register_arc(Arc::new(renderer));
    }

    /// Register an already shared renderer.
    pub fn register_arc(&mut self, renderer: Arc<dyn Renderer>) {
        self.renderers.insert(renderer.id(), renderer);
    }

    /// Retrieve a renderer by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<dyn Renderer>> {
        self.renderers.get(id).map(Arc::clone)
    }

    /// Registered identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.renderers.keys().copied()
    }

    /// Capabilities for a renderer, if registered.
    #[must_use]
    pub fn capabilities(&self, id: &str) -> Option<RenderCapabilities> {
        self.renderers.get(id).map(|renderer| renderer.capabilities())
    }

    /// Summaries for every registered renderer, ordered by id.
    #[must_use]
    pub fn summaries(&self) -> Vec<RendererSummary> {
        self.renderers
            .values()
            .map(|renderer| RendererSummary {
                id: renderer.id().to_owned(),
                label: renderer.label().to_owned(),
                capabilities: renderer.capabilities(),
            })
            .collect()
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("renderers", &self.renderers.keys().collect::<Vec<_>>())
            .finish()
    }
}
