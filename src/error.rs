use thiserror::Error;

use crate::api::WidgetState;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series length mismatch: x has {x_len} values, y has {y_len}")]
    SeriesLengthMismatch { x_len: usize, y_len: usize },

    #[error("unknown chart type: `{0}`")]
    UnknownChartType(String),

    #[error("`{operation}` is not allowed while the widget is {state}")]
    InvalidLifecycle {
        operation: &'static str,
        state: WidgetState,
    },

    #[error("drawing service failure: {0}")]
    DrawingService(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
