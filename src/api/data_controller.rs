use tracing::debug;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Shows or hides one series.
    ///
    /// Returns `Ok(false)` when nothing changed, including an attempt to hide
    /// the last visible series. The bounded y range and an open tooltip are
    /// refreshed; bounds and the shared baseline stay as they are.
    pub fn set_series_selected(&mut self, series: usize, selected: bool) -> ChartResult<bool> {
        let changed = self.core.model.selection.set_selected(series, selected)?;
        if changed {
            self.after_selection_change(series);
        }
        Ok(changed)
    }

    /// Flips one series' visibility; same rules as [`Self::set_series_selected`].
    pub fn toggle_series(&mut self, series: usize) -> ChartResult<bool> {
        let changed = self.core.model.selection.toggle(series)?;
        if changed {
            self.after_selection_change(series);
        }
        Ok(changed)
    }

    /// Selects every series again.
    pub fn select_all_series(&mut self) {
        let model = &mut self.core.model;
        let mut changed = false;
        for series in 0..model.store.series_count() {
            changed |= model.selection.set_selected(series, true).unwrap_or(false);
        }
        if changed {
            model.viewport.refresh_selection(&model.store, &model.selection);
            debug!("all series selected");
            self.refresh_tooltip();
        }
    }

    fn after_selection_change(&mut self, series: usize) {
        let model = &mut self.core.model;
        model.viewport.refresh_selection(&model.store, &model.selection);
        debug!(
            series,
            selected = model.selection.as_slice().get(series).copied().unwrap_or(false),
            selected_count = model.selection.selected_count(),
            y_min = model.viewport.bounded_y_range().min,
            y_max = model.viewport.bounded_y_range().max,
            "series selection changed"
        );
        self.refresh_tooltip();
    }
}
