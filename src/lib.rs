//! chart-scrubber: interactive time-series chart engine.
//!
//! The crate turns a shared x axis plus several y series into pixel
//! geometry for a zoomable main chart, a preview strip with a two-handle
//! scrubber, a tooltip and axis labels. Hosts feed pointer samples and
//! receive a serializable [`api::ViewState`] or a [`render::RenderFrame`]
//! pushed through their own [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
