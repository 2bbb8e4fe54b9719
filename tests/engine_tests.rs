use std::sync::Arc;

use chart_scrubber::api::{ChartEngine, ChartEngineConfig};
use chart_scrubber::core::{Color, PlotSize, SeriesStore, ViewBounds, ViewportMode};
use chart_scrubber::interaction::{PointerEvent, ScrubberDrag};
use chart_scrubber::render::NullRenderer;

fn store() -> SeriesStore {
    SeriesStore::new(
        (0..10).map(f64::from).collect(),
        vec![
            vec![5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0],
            vec![50.0, 40.0, 30.0, 20.0, 10.0, 0.0, -10.0, -20.0, -30.0, -40.0],
        ],
        vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)],
        vec!["up".to_owned(), "down".to_owned()],
    )
    .expect("valid store")
}

fn engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(PlotSize::new(500.0, 200.0));
    ChartEngine::new(NullRenderer::default(), store(), config).expect("engine init")
}

fn handles(engine: &ChartEngine<NullRenderer>) -> (f64, f64) {
    let update = engine.scrubber().handles();
    (update.left_handle_px, update.right_handle_px)
}

#[test]
fn engine_starts_on_the_full_view() {
    let engine = engine();
    assert_eq!(engine.viewport().mode(), ViewportMode::Unbounded);
    assert_eq!(engine.viewport().bounds(), ViewBounds::new(0.0, 500.0));
    let (left, right) = handles(&engine);
    assert_eq!(left, 0.0);
    approx::assert_abs_diff_eq!(right, 484.0, epsilon = 1e-9);
    assert!(engine.tooltip().is_none());
    assert_eq!(engine.baseline().x_px.last().copied(), Some(500.0));
}

#[test]
fn invalid_config_is_rejected() {
    let config = ChartEngineConfig::new(PlotSize::new(500.0, 200.0)).with_min_span_points(0);
    assert!(ChartEngine::new(NullRenderer::default(), store(), config).is_err());
    let config = ChartEngineConfig::new(PlotSize::new(-1.0, 200.0));
    assert!(ChartEngine::new(NullRenderer::default(), store(), config).is_err());
}

#[test]
fn external_bounds_move_the_scrubber_handles() {
    let mut engine = engine();
    assert!(engine.set_bounds(100.0, 400.0));

    let bounds = engine.scrubber().chart_bounds(500.0);
    approx::assert_abs_diff_eq!(bounds.left_px, 100.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(bounds.right_px, 400.0, epsilon = 1e-9);

    let before = engine.viewport().clone();
    assert!(!engine.set_bounds(100.0, 150.0));
    assert_eq!(engine.viewport(), &before);
}

#[test]
fn scrubber_drag_zooms_the_chart() {
    let mut engine = engine();
    assert!(!engine.scrubber_pointer(PointerEvent::down(8.0, 20.0)));
    assert_eq!(engine.scrubber_drag(), ScrubberDrag::DraggingLeftHandle);
    assert!(engine.scrubber_pointer(PointerEvent::moved(108.0, 20.0)));

    let bounds = engine.viewport().bounds();
    approx::assert_abs_diff_eq!(bounds.left_px, 100.0 * 500.0 / 468.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(bounds.right_px, 500.0, epsilon = 1e-9);
    assert_eq!(engine.viewport().mode(), ViewportMode::Bounded);

    assert!(!engine.scrubber_pointer(PointerEvent::up(108.0, 20.0)));
    assert_eq!(engine.scrubber_drag(), ScrubberDrag::Idle);
}

#[test]
fn rejected_scrubber_move_restores_the_handles() {
    let mut engine = engine();
    engine.scrubber_pointer(PointerEvent::down(492.0, 20.0));
    assert_eq!(engine.scrubber_drag(), ScrubberDrag::DraggingRightHandle);

    // a 64 px gap maps to about 51 chart px, below the 100 px minimum span
    assert!(!engine.scrubber_pointer(PointerEvent::moved(0.0, 20.0)));
    assert_eq!(engine.viewport().mode(), ViewportMode::Unbounded);
    let (left, right) = handles(&engine);
    assert_eq!(left, 0.0);
    approx::assert_abs_diff_eq!(right, 484.0, epsilon = 1e-9);
}

#[test]
fn chart_pointer_drags_the_tooltip() {
    let mut engine = engine();
    let tooltip = engine
        .chart_pointer(PointerEvent::down(600.0, 50.0))
        .expect("tooltip shown");
    assert_eq!(tooltip.data_index, 9);
    assert_eq!(tooltip.pixel_x, 500.0);

    let tooltip = engine
        .chart_pointer(PointerEvent::moved(550.0, 50.0))
        .expect("tooltip shown");
    assert_eq!(tooltip.data_index, 8);

    assert!(engine.chart_pointer(PointerEvent::up(550.0, 50.0)).is_some());
    assert!(engine.chart_pointer(PointerEvent::moved(100.0, 50.0)).is_some());
    assert_eq!(engine.tooltip().map(|tooltip| tooltip.data_index), Some(8));

    engine.dismiss_tooltip();
    assert!(engine.tooltip().is_none());
}

#[test]
fn bound_changes_clear_the_tooltip() {
    let mut engine = engine();
    assert!(engine.show_tooltip_at(250.0).is_some());
    assert!(engine.set_bounds(100.0, 400.0));
    assert!(engine.tooltip().is_none());

    assert!(engine.show_tooltip_at(250.0).is_some());
    engine.reset_bounds();
    assert!(engine.tooltip().is_none());
}

#[test]
fn selection_changes_refresh_range_and_tooltip() {
    let mut engine = engine();
    assert!(engine.set_bounds(100.0, 300.0));
    let bounds = engine.viewport().bounds();
    engine.show_tooltip_at(250.0);
    assert_eq!(engine.tooltip().map(|tooltip| tooltip.values.len()), Some(2));

    assert!(engine.toggle_series(1).expect("valid series"));
    assert_eq!(engine.tooltip().map(|tooltip| tooltip.values.len()), Some(1));
    assert_eq!(engine.viewport().bounds(), bounds);
    let y_range = engine.viewport().bounded_y_range();
    assert_eq!((y_range.min, y_range.max), (7.0, 11.0));

    assert!(!engine.toggle_series(0).expect("valid series"));
    assert!(engine.toggle_series(9).is_err());

    engine.select_all_series();
    assert_eq!(engine.selection().selected_count(), 2);
    assert_eq!(engine.tooltip().map(|tooltip| tooltip.values.len()), Some(2));
}

#[test]
fn recompute_cuts_polylines_to_the_window() {
    let mut engine = engine();
    assert!(engine.set_bounds(100.0, 300.0));
    assert!(engine.set_series_selected(0, false).expect("valid series"));
    let state = engine.recompute();

    assert_eq!(state.index_range.left, 2);
    assert_eq!(state.index_range.right, 6);
    assert_eq!(state.series.len(), 1);
    assert_eq!(state.series[0].label, "down");
    // one neighbor past each end of the window
    assert_eq!(state.series[0].points.len(), 7);
    assert_eq!(state.preview_series.len(), 1);
    assert_eq!(state.preview_series[0].points.len(), 10);
    assert_eq!(state.y_gridlines.len(), 6);
    assert_eq!(state.x_labels.labels.len(), 5);

    let json = state.to_json_pretty().expect("json");
    assert!(json.contains("\"preview_series\""));
}

#[test]
fn pinch_zoom_and_pan_feed_bounds() {
    let mut engine = engine();
    assert!(engine.zoom_around(2.0, 250.0).expect("valid zoom"));
    assert_eq!(engine.viewport().bounds(), ViewBounds::new(125.0, 375.0));

    assert!(engine.pan_by(50.0).expect("valid pan"));
    assert_eq!(engine.viewport().bounds(), ViewBounds::new(100.0, 350.0));

    assert!(engine.zoom_around(1_000.0, 0.0).expect("valid zoom"));
    assert!(engine.viewport().bounds().span() >= engine.viewport().min_span_px());

    assert!(engine.zoom_around(0.0, 10.0).is_err());
    assert!(engine.pan_by(f64::INFINITY).is_err());
}

#[test]
fn resize_rescales_bounds_and_baseline() {
    let mut engine = engine();
    assert!(engine.set_bounds(100.0, 300.0));
    engine
        .resize(PlotSize::new(1000.0, 400.0))
        .expect("valid size");

    assert_eq!(engine.viewport().bounds(), ViewBounds::new(200.0, 600.0));
    assert_eq!(engine.baseline().x_px.last().copied(), Some(1000.0));
    let bounds = engine.scrubber().chart_bounds(1000.0);
    approx::assert_abs_diff_eq!(bounds.left_px, 200.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(bounds.right_px, 600.0, epsilon = 1e-9);
}

#[test]
fn x_labels_are_cached_per_formatter() {
    let mut engine = engine();
    engine.set_x_label_formatter(Arc::new(|x| format!("t{x}")));
    let first = engine.recompute();
    let misses = engine.x_label_cache_stats().misses;
    let second = engine.recompute();

    assert_eq!(first.x_labels.labels, second.x_labels.labels);
    assert_eq!(engine.x_label_cache_stats().misses, misses);
    assert!(engine.x_label_cache_stats().hits > 0);
    assert!(first.x_labels.labels.iter().all(|label| label.text.starts_with('t')));

    engine.clear_x_label_formatter();
    assert_eq!(engine.x_label_cache_stats().size, 0);
}

#[test]
fn sub_millisecond_x_values_get_their_own_labels() {
    let store = SeriesStore::new(
        (1..=10).map(|step| f64::from(step) * 0.0001).collect(),
        vec![(1..=10).map(f64::from).collect()],
        vec![Color::rgb(0.0, 0.5, 0.0)],
        vec!["fine".to_owned()],
    )
    .expect("valid store");
    let config = ChartEngineConfig::new(PlotSize::new(2000.0, 200.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), store, config).expect("engine init");
    engine.set_x_label_formatter(Arc::new(|x| format!("{x:.4}")));

    let state = engine.recompute();
    let labels = &state.x_labels.labels;
    assert_eq!(labels.len(), 10);
    for label in labels {
        assert_eq!(label.text, format!("{:.4}", label.x_value), "label for index {}", label.index);
    }
    assert_eq!(engine.x_label_cache_stats().size, 10);
}

#[test]
fn details_formatter_titles_the_tooltip() {
    let mut engine = engine();
    engine.set_x_details_formatter(Arc::new(|x| format!("point {x}")));
    let tooltip = engine.show_tooltip_at(0.0).expect("tooltip");
    assert_eq!(tooltip.title, "point 0");
}

#[test]
fn render_pushes_a_frame() {
    let mut engine = engine();
    engine.show_tooltip_at(250.0);
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    // main and preview polyline per selected series
    assert_eq!(renderer.last_polyline_count, 4);
    // six gridlines plus the tooltip guide
    assert_eq!(renderer.last_line_count, 7);
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartEngineConfig::new(PlotSize::new(640.0, 320.0)).with_min_span_points(4);
    let json = config.to_json_pretty().expect("json");
    let parsed = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);

    let engine = ChartEngine::new(NullRenderer::default(), store(), config).expect("engine");
    assert_eq!(engine.config(), config);
}

#[test]
fn config_json_fills_defaults() {
    let json = r#"{
        "chart_size": { "width": 400.0, "height": 200.0 },
        "preview": {
            "width": 400.0,
            "top": 0.0,
            "height": 40.0,
            "handle_width": 12.0,
            "min_handle_gap_px": 48.0
        }
    }"#;
    let config = ChartEngineConfig::from_json_str(json).expect("parse");
    assert_eq!(config.min_span_points, 2);
    assert_eq!(config.zoom_limits.max_zoom, 15.0);
    assert_eq!(config.axis_labels.y_gridline_count, 6);
}
