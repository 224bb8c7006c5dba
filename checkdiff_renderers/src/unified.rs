use checkdiff_api::{CollapseState, LineKind, RenderedLine, Row, ViewModel};
use checkdiff_render_api::{RenderCapabilities, RenderOptions, RenderResult, Renderer};

use crate::text::{inline_markup, marker, number, number_width};

/// Single-column renderer with both line numbers and a change marker per row.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnifiedRenderer;

impl UnifiedRenderer {
    fn line(line: &RenderedLine, width: usize) -> String {
        let text = match line.kind {
            LineKind::Modified => inline_markup(line),
            LineKind::Removed => line.old_text(),
            LineKind::Unchanged | LineKind::Added => line.new_text(),
        };

        let mut row = format!(
            "{} {} {}",
            number(line.left_line, width),
            number(line.right_line, width),
            marker(line.kind)
        );
        if text.is_empty() {
            row.truncate(row.trim_end().len());
        } else {
            row.push(' ');
            row.push_str(&text);
        }
        row
    }
}

impl Renderer for UnifiedRenderer {
    fn id(&self) -> &'static str {
        "unified"
    }

    fn label(&self) -> &'static str {
        "Unified"
    }

    fn capabilities(&self) -> RenderCapabilities {
        RenderCapabilities::new(true, true, false)
    }

    fn render(
        &self,
        view: &ViewModel,
        collapse: &CollapseState,
        _options: &RenderOptions,
    ) -> RenderResult<String> {
        let width = number_width(view);
        let blank = " ".repeat(width);
        let mut out = String::new();

        for row in view.rows(collapse) {
            match row {
                Row::Line { line, .. } => out.push_str(&Self::line(line, width)),
                Row::Collapsed { .. } => {
                    let summary = row.summary().unwrap_or_default();
                    out.push_str(&format!("{blank} {blank} … {summary}"));
                }
            }
            out.push('\n');
        }

        Ok(out)
    }
}
