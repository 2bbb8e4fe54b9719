//! Pure data-to-pixel mapping.
//!
//! The x mapping is anchored on the right edge: the largest x value always
//! lands exactly on `width_px`, no matter how often the layout is recomputed.
//! Zero-width ranges use a scale factor of `0.0` instead of dividing by zero.

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{PlotSize, SeriesStore, ValueRange};

/// Maps an x value into pixel space, pinning `x_max` to `width_px`.
#[must_use]
pub fn map_x(x_value: f64, width_px: f64, x_min: f64, x_max: f64) -> f64 {
    let scale = ValueRange::new(x_min, x_max).pixel_scale(width_px);
    if scale == 0.0 {
        return width_px;
    }
    if x_value == x_min {
        return 0.0;
    }
    width_px - (x_max - x_value) * scale
}

/// Inverse of [`map_x`].
#[must_use]
pub fn pixel_to_x(pixel_x: f64, width_px: f64, x_min: f64, x_max: f64) -> f64 {
    let scale = ValueRange::new(x_min, x_max).pixel_scale(width_px);
    if scale == 0.0 {
        return x_max;
    }
    if pixel_x == 0.0 {
        return x_min;
    }
    x_max - (width_px - pixel_x) / scale
}

/// Maps a y value into pixel space; larger values sit closer to the top.
#[must_use]
pub fn map_y(value: f64, height_px: f64, y_min: f64, y_max: f64) -> f64 {
    (y_max - value) * ValueRange::new(y_min, y_max).pixel_scale(height_px)
}

/// Inverse of [`map_y`]. A flat range resolves every pixel to `y_max`.
#[must_use]
pub fn pixel_to_y(pixel_y: f64, height_px: f64, y_min: f64, y_max: f64) -> f64 {
    let scale = ValueRange::new(y_min, y_max).pixel_scale(height_px);
    if scale == 0.0 {
        return y_max;
    }
    if pixel_y == height_px {
        return y_min;
    }
    y_max - pixel_y / scale
}

/// Pixel layout of every series over the full, unzoomed x range.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineLayout {
    pub size: PlotSize,
    pub y_range: ValueRange,
    pub x_px: Vec<f64>,
    pub y_px: Vec<Vec<f64>>,
}

/// Store-bound mapper for one plot surface.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper<'a> {
    store: &'a SeriesStore,
    size: PlotSize,
}

impl<'a> CoordinateMapper<'a> {
    #[must_use]
    pub fn new(store: &'a SeriesStore, size: PlotSize) -> Self {
        Self { store, size }
    }

    #[must_use]
    pub fn size(&self) -> PlotSize {
        self.size
    }

    #[must_use]
    pub fn index_to_pixel(&self, index: usize) -> Option<f64> {
        let x_range = self.store.x_range();
        self.store
            .x_at(index)
            .map(|x| map_x(x, self.size.width, x_range.min, x_range.max))
    }

    /// Nearest data index for a pixel of the unzoomed layout.
    #[must_use]
    pub fn pixel_to_index(&self, pixel_x: f64) -> usize {
        let x_range = self.store.x_range();
        if pixel_x <= 0.0 {
            return 0;
        }
        if pixel_x >= self.size.width {
            return self.store.last_index();
        }
        let x = pixel_to_x(pixel_x, self.size.width, x_range.min, x_range.max);
        self.store.nearest_index(x)
    }

    #[must_use]
    pub fn value_to_pixel(&self, value: f64, y_range: ValueRange) -> f64 {
        map_y(value, self.size.height, y_range.min, y_range.max)
    }

    #[must_use]
    pub fn pixel_to_value(&self, pixel_y: f64, y_range: ValueRange) -> f64 {
        pixel_to_y(pixel_y, self.size.height, y_range.min, y_range.max)
    }

    /// Projects every x value and every series against the given y range.
    #[must_use]
    pub fn project(&self, y_range: ValueRange) -> BaselineLayout {
        let x_range = self.store.x_range();
        let width = self.size.width;
        let x_px: Vec<f64> = self
            .store
            .x_values()
            .iter()
            .map(|x| map_x(*x, width, x_range.min, x_range.max))
            .collect();

        let project_series = |series: usize| -> Vec<f64> {
            self.store
                .series(series)
                .unwrap_or_default()
                .iter()
                .map(|value| self.value_to_pixel(*value, y_range))
                .collect()
        };

        #[cfg(feature = "parallel-projection")]
        let y_px: Vec<Vec<f64>> = (0..self.store.series_count())
            .into_par_iter()
            .map(project_series)
            .collect();
        #[cfg(not(feature = "parallel-projection"))]
        let y_px: Vec<Vec<f64>> = (0..self.store.series_count()).map(project_series).collect();

        BaselineLayout {
            size: self.size,
            y_range,
            x_px,
            y_px,
        }
    }

    /// Baseline layout: all series, full x range, full y range.
    #[must_use]
    pub fn baseline(&self) -> BaselineLayout {
        self.project(self.store.full_y_range())
    }
}

#[cfg(test)]
mod tests {
    use super::{map_x, map_y, pixel_to_x, pixel_to_y};

    #[test]
    fn boundary_points_are_pinned_exactly() {
        let (min, max) = (0.1, 0.7);
        assert_eq!(map_x(min, 333.3, min, max), 0.0);
        assert_eq!(map_x(max, 333.3, min, max), 333.3);
        assert_eq!(pixel_to_x(0.0, 333.3, min, max), min);
        assert_eq!(pixel_to_x(333.3, 333.3, min, max), max);
    }

    #[test]
    fn flat_ranges_use_zero_scale() {
        assert_eq!(map_y(5.0, 200.0, 5.0, 5.0), 0.0);
        assert_eq!(pixel_to_y(120.0, 200.0, 5.0, 5.0), 5.0);
        assert_eq!(map_x(3.0, 400.0, 3.0, 3.0), 400.0);
    }
}
