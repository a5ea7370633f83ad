use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Rendering mode tag forwarded as the series `type`.
///
/// Tags without a dedicated variant (e.g. `"histogram"`) pass through as
/// [`ChartType::Other`] so any mode the drawing service knows can be used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum ChartType {
    #[default]
    Scatter,
    Bar,
    Line,
    Other(String),
}

impl ChartType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scatter => "scatter",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    /// Only an empty or all-whitespace tag is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "scatter" => Ok(Self::Scatter),
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "" => Err(ChartError::UnknownChartType(s.to_owned())),
            other => Ok(Self::Other(other.to_owned())),
        }
    }
}

impl TryFrom<String> for ChartType {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChartType> for String {
    fn from(value: ChartType) -> Self {
        match value {
            ChartType::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}
