use crate::core::SeriesData;
use crate::render::DrawingService;

use super::{ChartProps, ChartWidget};

/// Returns `true` when either axis of `next` differs by value from `previous`.
#[must_use]
pub fn series_changed(previous: &SeriesData, next: &SeriesData) -> bool {
    !previous.x_eq(next) || !previous.y_eq(next)
}

impl<S: DrawingService> ChartWidget<S> {
    /// Decides whether `next` props require a redraw.
    ///
    /// Only series values are compared. A new chart type or click handler with
    /// unchanged series does not redraw; the new props are still adopted and
    /// take effect on the next redraw.
    #[must_use]
    pub fn should_redraw(&self, next: &ChartProps) -> bool {
        series_changed(&self.props.series, &next.series)
    }
}
