use std::fmt;

use crate::core::{ChartType, SeriesData};
use crate::interaction::ClickHandler;

/// Parent-owned inputs of a [`super::ChartWidget`].
#[derive(Clone)]
pub struct ChartProps {
    pub series: SeriesData,
    pub chart_type: ChartType,
    pub on_click: ClickHandler,
}

impl ChartProps {
    #[must_use]
    pub fn new(series: SeriesData, chart_type: ChartType, on_click: ClickHandler) -> Self {
        Self {
            series,
            chart_type,
            on_click,
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesData) -> Self {
        self.series = series;
        self
    }

    #[must_use]
    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type;
        self
    }

    #[must_use]
    pub fn with_on_click(mut self, on_click: ClickHandler) -> Self {
        self.on_click = on_click;
        self
    }
}

impl fmt::Debug for ChartProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartProps")
            .field("series", &self.series)
            .field("chart_type", &self.chart_type)
            .finish_non_exhaustive()
    }
}
