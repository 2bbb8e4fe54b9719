use crate::core::PlotSize;
use crate::render::{
    LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{RenderStyle, ViewState};

/// Space between a y label's baseline and its gridline.
const Y_LABEL_LIFT_PX: f64 = 4.0;

/// Lays a view state out as one frame: chart, x label band, gap, preview strip.
#[must_use]
pub fn build_render_frame(state: &ViewState, style: &RenderStyle) -> RenderFrame {
    let chart = state.chart_size;
    let layout = state.scrubber.layout;
    let preview_top = chart.height + style.x_label_band_px + style.preview_gap_px + layout.top;
    let mut frame = RenderFrame::new(PlotSize::new(
        chart.width.max(layout.width),
        preview_top + layout.height,
    ));

    for line in &state.y_gridlines {
        frame.lines.push(LinePrimitive::new(
            0.0,
            line.pixel_y,
            chart.width,
            line.pixel_y,
            style.grid_line_width,
            style.grid_line_color,
        ));
        if !line.text.is_empty() {
            frame.texts.push(TextPrimitive::new(
                line.text.clone(),
                0.0,
                line.pixel_y - Y_LABEL_LIFT_PX,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Left,
            ));
        }
    }

    for polyline in &state.series {
        frame.polylines.push(PolylinePrimitive::new(
            polyline.points.clone(),
            style.series_stroke_width,
            polyline.color,
        ));
    }

    let label_y = chart.height + style.x_label_band_px / 2.0;
    for label in state.x_labels.labels.iter().filter(|label| !label.text.is_empty()) {
        frame.texts.push(TextPrimitive::new(
            label.text.clone(),
            label.draw_x_px,
            label_y,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Left,
        ));
    }

    if let Some(tooltip) = &state.tooltip {
        frame.lines.push(LinePrimitive::new(
            tooltip.pixel_x,
            0.0,
            tooltip.pixel_x,
            chart.height,
            style.tooltip_line_width,
            style.tooltip_line_color,
        ));
        let half = style.tooltip_marker_size_px / 2.0;
        for value in &tooltip.values {
            frame.rects.push(RectPrimitive::new(
                tooltip.pixel_x - half,
                value.pixel_y - half,
                style.tooltip_marker_size_px,
                style.tooltip_marker_size_px,
                value.color,
            ));
        }
    }

    for polyline in &state.preview_series {
        let points = polyline
            .points
            .iter()
            .map(|(x, y)| (x + layout.handle_width, y + preview_top))
            .collect();
        frame.polylines.push(PolylinePrimitive::new(
            points,
            style.preview_stroke_width,
            polyline.color,
        ));
    }

    push_scrubber_rects(&mut frame, state, style, preview_top);
    frame
}

fn push_scrubber_rects(frame: &mut RenderFrame, state: &ViewState, style: &RenderStyle, top: f64) {
    let overlay = state.scrubber;
    let layout = overlay.layout;
    let handle_width = layout.handle_width;
    let window_left = overlay.left_handle_px + handle_width;
    let window_width = (overlay.right_handle_px - window_left).max(0.0);
    let right_edge = overlay.right_handle_px + handle_width;

    frame.rects.extend([
        RectPrimitive::new(
            0.0,
            top,
            overlay.left_handle_px,
            layout.height,
            style.scrubber_dim_color,
        ),
        RectPrimitive::new(
            right_edge,
            top,
            (layout.width - right_edge).max(0.0),
            layout.height,
            style.scrubber_dim_color,
        ),
        RectPrimitive::new(
            overlay.left_handle_px,
            top,
            handle_width,
            layout.height,
            style.scrubber_handle_color,
        ),
        RectPrimitive::new(
            overlay.right_handle_px,
            top,
            handle_width,
            layout.height,
            style.scrubber_handle_color,
        ),
        RectPrimitive::new(
            window_left,
            top,
            window_width,
            style.scrubber_frame_width,
            style.scrubber_frame_color,
        ),
        RectPrimitive::new(
            window_left,
            top + layout.height - style.scrubber_frame_width,
            window_width,
            style.scrubber_frame_width,
            style.scrubber_frame_color,
        ),
    ]);
}
