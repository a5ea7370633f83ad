use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartType, SeriesData, same_value};
use crate::error::{ChartError, ChartResult};
use crate::render::SurfaceId;

/// One `{x, y, type}` trace handed to the drawing service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    #[serde(with = "nan_as_null")]
    pub x: Arc<[f64]>,
    #[serde(with = "nan_as_null")]
    pub y: Arc<[f64]>,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn from_series(series: &SeriesData, chart_type: ChartType) -> Self {
        Self {
            x: series.x_shared(),
            y: series.y_shared(),
            chart_type,
        }
    }
}

impl PartialEq for SeriesDescriptor {
    fn eq(&self, other: &Self) -> bool {
        fn axis_eq(a: &[f64], b: &[f64]) -> bool {
            a.len() == b.len() && a.iter().zip(b).all(|(&l, &r)| same_value(l, r))
        }
        self.chart_type == other.chart_type
            && axis_eq(&self.x, &other.x)
            && axis_eq(&self.y, &other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMargin {
    pub t: u32,
    pub r: u32,
    pub l: u32,
}

impl Default for LayoutMargin {
    fn default() -> Self {
        Self { t: 0, r: 0, l: 30 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub gridcolor: String,
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self {
            gridcolor: "transparent".to_owned(),
        }
    }
}

/// Layout argument of a draw call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlotLayout {
    #[serde(default)]
    pub margin: LayoutMargin,
    #[serde(default)]
    pub xaxis: AxisLayout,
}

/// Display options argument of a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    #[serde(default)]
    pub display_mode_bar: bool,
}

/// Full redraw request: target surface, traces, layout, display options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub surface: SurfaceId,
    #[serde(rename = "data")]
    pub series: SmallVec<[SeriesDescriptor; 1]>,
    pub layout: PlotLayout,
    pub config: DisplayConfig,
}

impl DrawCommand {
    #[must_use]
    pub fn single_series(
        surface: SurfaceId,
        series: SeriesDescriptor,
        layout: PlotLayout,
        config: DisplayConfig,
    ) -> Self {
        let mut traces = SmallVec::new();
        traces.push(series);
        Self {
            surface,
            series: traces,
            layout,
            config,
        }
    }

    /// Total number of plotted points across all traces.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|trace| trace.x.len()).sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.surface.as_str().is_empty() {
            return Err(ChartError::InvalidData(
                "draw command surface id must not be empty".to_owned(),
            ));
        }
        for trace in &self.series {
            if trace.x.len() != trace.y.len() {
                return Err(ChartError::SeriesLengthMismatch {
                    x_len: trace.x.len(),
                    y_len: trace.y.len(),
                });
            }
        }
        Ok(())
    }
}

/// Axis values as JSON arrays where a `NaN` gap is written and read as `null`.
mod nan_as_null {
    use std::sync::Arc;

    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        values: &Arc<[f64]>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values.iter() {
            if value.is_nan() {
                seq.serialize_element(&None::<f64>)?;
            } else {
                seq.serialize_element(value)?;
            }
        }
        seq.end()
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Arc<[f64]>, D::Error> {
        let values = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(values
            .into_iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect())
    }
}
