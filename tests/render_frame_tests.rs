use chart_scrubber::api::{ChartEngine, ChartEngineConfig, RenderStyle, build_render_frame};
use chart_scrubber::core::{Color, PlotSize, SeriesStore};
use chart_scrubber::render::{NullRenderer, Renderer};

fn engine() -> ChartEngine<NullRenderer> {
    let store = SeriesStore::new(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![vec![100.0, 55.0, 28.0, 99.0, 128.0]],
        vec![Color::rgb(0.2, 0.6, 0.9)],
        vec!["Joined".to_owned()],
    )
    .expect("valid store");
    let config = ChartEngineConfig::new(PlotSize::new(500.0, 200.0));
    ChartEngine::new(NullRenderer::default(), store, config).expect("engine init")
}

#[test]
fn frame_stacks_chart_labels_and_preview() {
    let mut engine = engine();
    let style = RenderStyle::default();
    let state = engine.recompute();
    let frame = build_render_frame(&state, &style);

    frame.validate().expect("valid frame");
    assert_eq!(frame.size.width, 500.0);
    assert_eq!(
        frame.size.height,
        200.0 + style.x_label_band_px + style.preview_gap_px + 40.0
    );

    let main = &frame.polylines[0];
    assert_eq!(main.stroke_width, style.series_stroke_width);
    assert_eq!(main.points.first().copied(), Some((0.0, 56.0)));
    assert_eq!(main.points.last().copied(), Some((500.0, 0.0)));

    let preview = &frame.polylines[1];
    let preview_top = 200.0 + style.x_label_band_px + style.preview_gap_px;
    assert_eq!(preview.points.first().map(|point| point.0), Some(16.0));
    assert!(
        preview
            .points
            .iter()
            .all(|(_, y)| *y >= preview_top && *y <= preview_top + 40.0)
    );
}

#[test]
fn scrubber_rects_dim_outside_the_window() {
    let mut engine = engine();
    assert!(engine.set_bounds(100.0, 400.0));
    let state = engine.recompute();
    let frame = build_render_frame(&state, &RenderStyle::default());

    let handles = engine.scrubber().handles();
    let dim_left = frame.rects[0];
    assert_eq!(dim_left.x, 0.0);
    approx::assert_abs_diff_eq!(dim_left.width, handles.left_handle_px, epsilon = 1e-9);
    assert!(frame.rects.iter().all(|rect| rect.width >= 0.0));
}

#[test]
fn null_renderer_records_the_last_frame() {
    let mut engine = engine();
    let style = RenderStyle::default();
    let state = engine.recompute();
    let frame = build_render_frame(&state, &style);

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_frame.as_ref(), Some(&frame));
    assert_eq!(renderer.last_text_count, frame.texts.len());
}

#[test]
fn render_style_is_validated() {
    let mut engine = engine();
    let style = RenderStyle {
        series_stroke_width: 0.0,
        ..RenderStyle::default()
    };
    assert!(engine.set_render_style(style).is_err());
    assert_eq!(engine.render_style(), RenderStyle::default());
}
