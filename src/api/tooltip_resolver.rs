use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, SelectionMask, SeriesStore, ViewportController};

/// Steps taken toward the inside when the resolved point lands off-screen.
const MAX_INWARD_STEPS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipSeriesValue {
    pub series: usize,
    pub label: String,
    pub color: Color,
    pub value: f64,
    /// Zoomed y pixel of `value`.
    pub pixel_y: f64,
}

/// Data shown in the details popup for one resolved index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub data_index: usize,
    pub x_value: f64,
    /// Zoomed x pixel of the guide line, always inside the chart.
    pub pixel_x: f64,
    pub title: String,
    /// One entry per selected series, in series order.
    pub values: Vec<TooltipSeriesValue>,
}

impl TooltipState {
    /// Left edge of a popup centered on the guide line and kept inside
    /// `[0, chart_width]`. A popup wider than the chart sticks to the left.
    #[must_use]
    pub fn popup_left(&self, popup_width: f64, chart_width: f64) -> f64 {
        let max_left = (chart_width - popup_width).max(0.0);
        (self.pixel_x - popup_width / 2.0).clamp(0.0, max_left)
    }
}

/// Resolves the data index under a zoomed pointer x.
///
/// The index never leaves the viewport's index window and its pixel is kept
/// inside `[0, width]`. Returns `None` only for a non-finite pointer.
pub fn resolve_tooltip(
    pointer_x: f64,
    store: &SeriesStore,
    selection: &SelectionMask,
    viewport: &ViewportController,
    format_title: impl Fn(f64) -> String,
) -> Option<TooltipState> {
    if !pointer_x.is_finite() {
        return None;
    }
    let width = viewport.size().width;
    let pointer_x = pointer_x.clamp(0.0, width);
    let (data_index, pixel_x) = nearest_visible_index(pointer_x, store, viewport)?;
    let x_value = store.x_at(data_index)?;

    let values = selection
        .selected_indices()
        .filter_map(|series| {
            let value = store.y_at(series, data_index)?;
            Some(TooltipSeriesValue {
                series,
                label: store.label(series)?.to_owned(),
                color: store.color(series)?,
                value,
                pixel_y: viewport.pixel_of_value(value),
            })
        })
        .collect();

    Some(TooltipState {
        data_index,
        x_value,
        pixel_x,
        title: format_title(x_value),
        values,
    })
}

fn nearest_visible_index(
    pointer_x: f64,
    store: &SeriesStore,
    viewport: &ViewportController,
) -> Option<(usize, f64)> {
    let width = viewport.size().width;
    let range = viewport.index_range();
    let start = viewport.index_at_pixel(store, pointer_x);
    let on_screen = |pixel: f64| (0.0..=width).contains(&pixel);

    let mut candidates: SmallVec<[(OrderedFloat<f64>, usize, f64); 3]> = SmallVec::new();
    for index in [Some(start), start.checked_sub(1), start.checked_add(1)]
        .into_iter()
        .flatten()
        .filter(|index| range.contains(*index))
    {
        let pixel = viewport.pixel_of_index(store, index)?;
        if on_screen(pixel) {
            candidates.push((OrderedFloat((pixel - pointer_x).abs()), index, pixel));
        }
    }
    if let Some((_, index, pixel)) = candidates.into_iter().min_by_key(|item| item.0) {
        return Some((index, pixel));
    }

    let mut index = start;
    let mut pixel = viewport.pixel_of_index(store, index)?;
    for _ in 0..MAX_INWARD_STEPS {
        if pixel < 0.0 && index < range.right {
            index += 1;
        } else if pixel > width && index > range.left {
            index -= 1;
        } else {
            break;
        }
        pixel = viewport.pixel_of_index(store, index)?;
    }
    Some((index, pixel.clamp(0.0, width)))
}
