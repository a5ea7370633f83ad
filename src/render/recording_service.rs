use std::fmt;

use indexmap::IndexMap;
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{ClickEvent, ClickHandler, PlotEventKind, SubscriptionId};
use crate::render::{DrawCommand, DrawingService, SurfaceId};

/// Live subscription held by [`RecordingDrawingService`].
#[derive(Clone)]
pub struct RecordedSubscription {
    pub surface: SurfaceId,
    pub event: PlotEventKind,
    pub handler: ClickHandler,
}

impl fmt::Debug for RecordedSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordedSubscription")
            .field("surface", &self.surface)
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

/// Headless drawing service used by tests and hosts without a plotting backend.
///
/// Draw commands are validated and kept in call order. Subscriptions stay live
/// until unsubscribed, and `emit_click` dispatches to them the way a real
/// backend would on a user click.
#[derive(Debug, Default)]
pub struct RecordingDrawingService {
    draws: Vec<DrawCommand>,
    subscriptions: IndexMap<SubscriptionId, RecordedSubscription>,
    next_subscription: u64,
    subscribe_calls: usize,
    unsubscribe_calls: usize,
    pending_draw_failure: Option<String>,
}

impl RecordingDrawingService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every draw command received so far, oldest first.
    #[must_use]
    pub fn draws(&self) -> &[DrawCommand] {
        &self.draws
    }

    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }

    #[must_use]
    pub fn last_draw(&self) -> Option<&DrawCommand> {
        self.draws.last()
    }

    #[must_use]
    pub fn subscribe_calls(&self) -> usize {
        self.subscribe_calls
    }

    #[must_use]
    pub fn unsubscribe_calls(&self) -> usize {
        self.unsubscribe_calls
    }

    /// Number of live subscriptions on `surface`.
    #[must_use]
    pub fn live_subscriptions(&self, surface: &SurfaceId) -> usize {
        self.subscriptions
            .values()
            .filter(|entry| &entry.surface == surface)
            .count()
    }

    #[must_use]
    pub fn subscription(&self, id: SubscriptionId) -> Option<&RecordedSubscription> {
        self.subscriptions.get(&id)
    }

    /// Makes the next `draw` call fail with `ChartError::DrawingService`.
    pub fn fail_next_draw(&mut self, message: impl Into<String>) {
        self.pending_draw_failure = Some(message.into());
    }

    /// Invokes every live click handler on `surface` in subscription order.
    ///
    /// Returns how many handlers ran.
    pub fn emit_click(&self, surface: &SurfaceId, event: &ClickEvent) -> usize {
        let handlers: Vec<ClickHandler> = self
            .subscriptions
            .values()
            .filter(|entry| &entry.surface == surface && entry.event == PlotEventKind::Click)
            .map(|entry| entry.handler.clone())
            .collect();
        for handler in &handlers {
            handler(event);
        }
        trace!(surface = %surface, handlers = handlers.len(), "emit click");
        handlers.len()
    }

    pub fn clear_draws(&mut self) {
        self.draws.clear();
    }
}

impl DrawingService for RecordingDrawingService {
    fn draw(&mut self, command: &DrawCommand) -> ChartResult<()> {
        if let Some(message) = self.pending_draw_failure.take() {
            return Err(ChartError::DrawingService(message));
        }
        command.validate()?;
        self.draws.push(command.clone());
        Ok(())
    }

    fn subscribe(
        &mut self,
        surface: &SurfaceId,
        event: PlotEventKind,
        handler: ClickHandler,
    ) -> ChartResult<SubscriptionId> {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscribe_calls += 1;
        self.subscriptions.insert(
            id,
            RecordedSubscription {
                surface: surface.clone(),
                event,
                handler,
            },
        );
        Ok(id)
    }

    fn unsubscribe(
        &mut self,
        surface: &SurfaceId,
        subscription: SubscriptionId,
    ) -> ChartResult<bool> {
        self.unsubscribe_calls += 1;
        match self.subscriptions.get(&subscription) {
            Some(entry) if &entry.surface == surface => {
                self.subscriptions.shift_remove(&subscription);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
