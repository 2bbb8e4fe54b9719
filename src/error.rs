use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid plot size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("series data cannot be empty")]
    EmptySeries,

    #[error("series {series} has {actual} values but x has {expected}")]
    SeriesLengthMismatch {
        series: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{field} count {actual} does not match series count {expected}")]
    MetadataCountMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("x values must be strictly increasing (violated at index {index})")]
    NonIncreasingX { index: usize },

    #[error("series index {index} is out of range for {len} series")]
    SeriesIndexOutOfRange { index: usize, len: usize },
}
