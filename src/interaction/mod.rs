use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Callback invoked by the drawing service when a rendered chart is clicked.
pub type ClickHandler = Arc<dyn Fn(&ClickEvent) + Send + Sync>;

/// Wraps a closure into a [`ClickHandler`].
pub fn click_handler<F>(handler: F) -> ClickHandler
where
    F: Fn(&ClickEvent) + Send + Sync + 'static,
{
    Arc::new(handler)
}

/// Native click payload emitted by the drawing service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClickEvent {
    #[serde(default)]
    pub points: Vec<ClickPoint>,
}

impl ClickEvent {
    #[must_use]
    pub fn single(point: ClickPoint) -> Self {
        Self {
            points: vec![point],
        }
    }
}

/// One data point hit by a click.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickPoint {
    /// Index of the series within the draw command.
    pub curve_number: usize,
    /// Index of the point within its series.
    pub point_number: usize,
    pub x: f64,
    pub y: f64,
}

/// Surface events a widget can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotEventKind {
    Click,
}

impl PlotEventKind {
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Click => "click",
        }
    }
}

impl fmt::Display for PlotEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// Handle returned by a drawing service for one event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}
