mod command;
mod recording_service;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use command::{
    AxisLayout, DisplayConfig, DrawCommand, LayoutMargin, PlotLayout, SeriesDescriptor,
};
pub use recording_service::{RecordedSubscription, RecordingDrawingService};

use crate::error::ChartResult;
use crate::interaction::{ClickHandler, PlotEventKind, SubscriptionId};

/// Identifier of the drawable surface a host allocates for one widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(String);

impl SurfaceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SurfaceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Contract implemented by the plotting backend a widget draws through.
///
/// Every `draw` replaces the surface content entirely. Errors are returned to
/// the widget caller untouched.
pub trait DrawingService {
    fn draw(&mut self, command: &DrawCommand) -> ChartResult<()>;

    fn subscribe(
        &mut self,
        surface: &SurfaceId,
        event: PlotEventKind,
        handler: ClickHandler,
    ) -> ChartResult<SubscriptionId>;

    /// Removes a subscription. Returns `true` when it was live.
    fn unsubscribe(
        &mut self,
        surface: &SurfaceId,
        subscription: SubscriptionId,
    ) -> ChartResult<bool>;
}

impl<S: DrawingService + ?Sized> DrawingService for Box<S> {
    fn draw(&mut self, command: &DrawCommand) -> ChartResult<()> {
        (**self).draw(command)
    }

    fn subscribe(
        &mut self,
        surface: &SurfaceId,
        event: PlotEventKind,
        handler: ClickHandler,
    ) -> ChartResult<SubscriptionId> {
        (**self).subscribe(surface, event, handler)
    }

    fn unsubscribe(
        &mut self,
        surface: &SurfaceId,
        subscription: SubscriptionId,
    ) -> ChartResult<bool> {
        (**self).unsubscribe(surface, subscription)
    }
}
