use checkdiff_api::{CollapseState, LineKind, RenderedLine, Row, ViewModel};
use checkdiff_render_api::{
    RenderCapabilities, RenderError, RenderOptions, RenderResult, Renderer,
};

use crate::text::{fit, number, number_width};

const SEPARATOR: &str = " | ";

/// Two-column renderer placing the left document beside the right one.
#[derive(Debug, Default, Clone, Copy)]
pub struct SplitRenderer;

#[derive(Debug, Clone, Copy)]
struct Layout {
    number_width: usize,
    column: usize,
}

impl Layout {
    fn text_width(self) -> usize {
        // "<number> <marker> <text>"
        self.column - self.number_width - 3
    }

    fn cell(self, line_number: Option<u32>, marker: char, text: &str) -> String {
        if line_number.is_none() {
            return " ".repeat(self.column);
        }
        format!(
            "{} {marker} {}",
            number(line_number, self.number_width),
            fit(text, self.text_width())
        )
    }
}

impl SplitRenderer {
    fn layout(view: &ViewModel, options: &RenderOptions) -> RenderResult<Layout> {
        let number_width = number_width(view);
        let minimum_column = number_width + 3 + 1;
        let minimum = minimum_column * 2 + SEPARATOR.len();
        if options.width < minimum {
            return Err(RenderError::TooNarrow {
                width: options.width,
                minimum,
            });
        }

        Ok(Layout {
            number_width,
            column: (options.width - SEPARATOR.len()) / 2,
        })
    }

    fn line(layout: Layout, line: &RenderedLine) -> String {
        let (left_marker, right_marker) = match line.kind {
            LineKind::Unchanged => (' ', ' '),
            LineKind::Added | LineKind::Removed | LineKind::Modified => ('-', '+'),
        };
        let left = layout.cell(line.left_line, left_marker, &line.old_text());
        let right = layout.cell(line.right_line, right_marker, &line.new_text());
        format!("{left}{SEPARATOR}{right}")
    }
}

impl Renderer for SplitRenderer {
    fn id(&self) -> &'static str {
        "split"
    }

    fn label(&self) -> &'static str {
        "Side by side"
    }

    fn capabilities(&self) -> RenderCapabilities {
        RenderCapabilities::new(true, false, false)
    }

    fn render(
        &self,
        view: &ViewModel,
        collapse: &CollapseState,
        options: &RenderOptions,
    ) -> RenderResult<String> {
        let layout = Self::layout(view, options)?;
        let mut out = String::new();

        for row in view.rows(collapse) {
            let rendered = match row {
                Row::Line { line, .. } => Self::line(layout, line),
                Row::Collapsed { .. } => {
                    let summary = format!("… {}", row.summary().unwrap_or_default());
                    let cell = fit(&summary, layout.column);
                    format!("{cell}{SEPARATOR}{cell}")
                }
            };
            out.push_str(rendered.trim_end());
            out.push('\n');
        }

        Ok(out)
    }
}
