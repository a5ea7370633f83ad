use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{DisplayConfig, LayoutMargin, PlotLayout};

/// How click subscriptions are handled across redraws and detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPolicy {
    /// Unsubscribe the previous handler before each re-subscribe, and every
    /// handler on detach.
    #[default]
    ReplaceOnRedraw,
    /// Subscribe on every redraw and never unsubscribe. Handlers accumulate
    /// and outlive the widget on the service side.
    Accumulate,
}

/// Widget configuration.
///
/// Defaults are the fixed presentation used for every draw: zero top/right
/// margins, a 30px left margin, transparent x-axis gridlines, no mode bar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartWidgetConfig {
    #[serde(default)]
    pub layout: PlotLayout,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub subscription_policy: SubscriptionPolicy,
}

impl ChartWidgetConfig {
    #[must_use]
    pub fn with_subscription_policy(mut self, policy: SubscriptionPolicy) -> Self {
        self.subscription_policy = policy;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: LayoutMargin) -> Self {
        self.layout.margin = margin;
        self
    }

    #[must_use]
    pub fn with_x_grid_color(mut self, color: impl Into<String>) -> Self {
        self.layout.xaxis.gridcolor = color.into();
        self
    }

    #[must_use]
    pub fn with_display_mode_bar(mut self, visible: bool) -> Self {
        self.display.display_mode_bar = visible;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse widget config json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize widget config json: {e}"))
        })
    }
}
