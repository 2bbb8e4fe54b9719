pub mod mapper;
pub mod primitives;
pub mod selection;
pub mod series;
pub mod types;
pub mod viewport;

pub use mapper::{BaselineLayout, CoordinateMapper, map_x, map_y, pixel_to_x, pixel_to_y};
pub use selection::SelectionMask;
pub use series::SeriesStore;
pub use types::{Color, PlotSize, ValueRange};
pub use viewport::{IndexRange, ViewBounds, ViewTransform, ViewportController, ViewportMode};
