use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Per-series inclusion flags for the rendered and rescaled set.
///
/// At least one series always stays selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMask {
    selected: Vec<bool>,
}

impl SelectionMask {
    /// Creates a mask with every series selected.
    pub fn all(series_count: usize) -> ChartResult<Self> {
        if series_count == 0 {
            return Err(ChartError::EmptySeries);
        }
        Ok(Self {
            selected: vec![true; series_count],
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, series: usize) -> ChartResult<bool> {
        self.selected
            .get(series)
            .copied()
            .ok_or(ChartError::SeriesIndexOutOfRange {
                index: series,
                len: self.selected.len(),
            })
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|flag| **flag).count()
    }

    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(index, flag)| flag.then_some(index))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.selected
    }

    /// Sets one flag.
    ///
    /// Returns `Ok(false)` without changing anything when the request would
    /// leave no series selected, or when the flag already has that value.
    pub fn set_selected(&mut self, series: usize, selected: bool) -> ChartResult<bool> {
        let current = self.is_selected(series)?;
        if current == selected {
            return Ok(false);
        }
        if !selected && self.selected_count() == 1 {
            debug!(series, "rejecting deselection of the last visible series");
            return Ok(false);
        }
        self.selected[series] = selected;
        Ok(true)
    }

    pub fn toggle(&mut self, series: usize) -> ChartResult<bool> {
        let current = self.is_selected(series)?;
        self.set_selected(series, !current)
    }
}
