use checkdiff_api::{
    CollapseState, DiffStats, Hunk, HunkKind, HunkRange, RenderedLine, Span, SpanKind, ViewModel,
};
use checkdiff_render_api::{RenderError, RenderOptions, Renderer};
use checkdiff_renderers::{default_registry, JsonRenderer, SplitRenderer, UnifiedRenderer};

/// `"a\nold\n"` against `"a\nnew\nextra\n"`.
fn sample_view() -> ViewModel {
    ViewModel {
        hunks: vec![
            Hunk {
                kind: HunkKind::Unchanged,
                range: HunkRange {
                    left_start: 1,
                    left_lines: 1,
                    right_start: 1,
                    right_lines: 1,
                },
                lines: vec![RenderedLine::unchanged(1, 1, "a")],
            },
            Hunk {
                kind: HunkKind::Modified,
                range: HunkRange {
                    left_start: 2,
                    left_lines: 1,
                    right_start: 2,
                    right_lines: 2,
                },
                lines: vec![
                    RenderedLine::modified(
                        2,
                        2,
                        vec![
                            Span::new(SpanKind::Removed, "old"),
                            Span::new(SpanKind::Added, "new"),
                        ],
                    ),
                    RenderedLine::added(3, "extra"),
                ],
            },
        ],
        gutter: vec![HunkKind::Unchanged, HunkKind::Modified],
        left_line_count: 2,
        right_line_count: 3,
        stats: DiffStats::new(2, 1),
    }
}

#[test]
fn unified_marks_inline_changes() {
    let output = UnifiedRenderer
        .render(&sample_view(), &CollapseState::new(), &RenderOptions::default())
        .expect("render");
    assert_eq!(output, "1 1   a\n2 2 ~ [-old-]{+new+}\n  3 + extra\n");
}

#[test]
fn unified_replaces_collapsed_hunks_with_summary() {
    let collapse = CollapseState::new().toggled(0);
    let output = UnifiedRenderer
        .render(&sample_view(), &collapse, &RenderOptions::default())
        .expect("render");
    let first = output.lines().next().expect("first row");
    assert_eq!(first, format!("{0} {0} … 1 unchanged line", " "));
    assert_eq!(output.lines().count(), 3);
}

#[test]
fn split_places_documents_side_by_side() {
    let output = SplitRenderer
        .render(
            &sample_view(),
            &CollapseState::new(),
            &RenderOptions::with_width(31),
        )
        .expect("render");
    let expected = [
        format!("{:<14} | {}", "1   a", "1   a"),
        format!("{:<14} | {}", "2 - old", "2 + new"),
        format!("{:<14} | {}", "", "3 + extra"),
    ];
    let rows: Vec<&str> = output.lines().collect();
    assert_eq!(rows, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn split_rejects_widths_below_two_columns() {
    let result = SplitRenderer.render(
        &sample_view(),
        &CollapseState::new(),
        &RenderOptions::with_width(10),
    );
    assert!(matches!(
        result,
        Err(RenderError::TooNarrow {
            width: 10,
            minimum: 13
        })
    ));
}

#[test]
fn json_carries_view_and_collapse_state() {
    let collapse = CollapseState::new().toggled(0);
    let output = JsonRenderer::compact()
        .render(&sample_view(), &collapse, &RenderOptions::default())
        .expect("render");
    assert!(!output.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(value["collapsed"], serde_json::json!([0]));
    assert_eq!(value["view"]["hunks"][1]["kind"], "modified");
    assert_eq!(value["view"]["hunks"][1]["lines"][1]["left_line"], serde_json::Value::Null);
    assert_eq!(value["view"]["stats"]["additions"], 2);
}

#[test]
fn default_registry_exposes_builtins() {
    let registry = default_registry();
    assert_eq!(
        registry.ids().collect::<Vec<_>>(),
        vec!["json", "split", "unified"]
    );
    let json = registry.capabilities("json").expect("json registered");
    assert!(json.machine_readable);
    assert!(!json.supports_collapse);
}
