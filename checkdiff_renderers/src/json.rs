use checkdiff_api::{CollapseState, ViewModel};
use checkdiff_render_api::{
    RenderCapabilities, RenderError, RenderOptions, RenderResult, Renderer,
};
use serde::Serialize;

/// Emits the view model and collapse state as a JSON document.
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    /// Renderer producing single-line JSON.
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    view: &'a ViewModel,
    collapsed: &'a CollapseState,
}

impl Renderer for JsonRenderer {
    fn id(&self) -> &'static str {
        "json"
    }

    fn label(&self) -> &'static str {
        "JSON"
    }

    fn capabilities(&self) -> RenderCapabilities {
        RenderCapabilities::new(false, true, true)
    }

    fn render(
        &self,
        view: &ViewModel,
        collapse: &CollapseState,
        _options: &RenderOptions,
    ) -> RenderResult<String> {
        let document = JsonDocument {
            view,
            collapsed: collapse,
        };
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        encoded.map_err(|err| RenderError::message(format!("failed to encode view model: {err}")))
    }
}
