use tracing::{trace, warn};

use crate::error::ChartResult;
use crate::interaction::{ClickHandler, PlotEventKind, SubscriptionId};
use crate::render::{DrawingService, SurfaceId};

use super::SubscriptionPolicy;

/// Click subscriptions a widget registered, in registration order.
#[derive(Debug, Default)]
pub(super) struct SubscriptionTracker {
    policy: SubscriptionPolicy,
    active: Vec<SubscriptionId>,
}

impl SubscriptionTracker {
    pub(super) fn new(policy: SubscriptionPolicy) -> Self {
        Self {
            policy,
            active: Vec::new(),
        }
    }

    pub(super) fn active(&self) -> &[SubscriptionId] {
        &self.active
    }

    /// Subscribes `handler` to clicks on `surface`, first releasing earlier
    /// subscriptions under [`SubscriptionPolicy::ReplaceOnRedraw`].
    pub(super) fn subscribe_click<S: DrawingService>(
        &mut self,
        service: &mut S,
        surface: &SurfaceId,
        handler: ClickHandler,
    ) -> ChartResult<SubscriptionId> {
        if self.policy == SubscriptionPolicy::ReplaceOnRedraw {
            self.release_all(service, surface)?;
        }
        let id = service.subscribe(surface, PlotEventKind::Click, handler)?;
        self.active.push(id);
        trace!(
            surface = %surface,
            subscription = %id,
            active = self.active.len(),
            "click handler subscribed"
        );
        Ok(id)
    }

    /// Unsubscribes every tracked subscription. Returns how many the service
    /// reported as live.
    ///
    /// An id is dropped from tracking only after its unsubscribe succeeded.
    pub(super) fn release_all<S: DrawingService>(
        &mut self,
        service: &mut S,
        surface: &SurfaceId,
    ) -> ChartResult<usize> {
        let mut removed = 0;
        while let Some(&id) = self.active.first() {
            if service.unsubscribe(surface, id)? {
                removed += 1;
            }
            self.active.remove(0);
            trace!(surface = %surface, subscription = %id, "click handler unsubscribed");
        }
        Ok(removed)
    }

    pub(super) fn on_detach<S: DrawingService>(
        &mut self,
        service: &mut S,
        surface: &SurfaceId,
    ) -> ChartResult<()> {
        match self.policy {
            SubscriptionPolicy::ReplaceOnRedraw => {
                self.release_all(service, surface)?;
            }
            SubscriptionPolicy::Accumulate => {
                if !self.active.is_empty() {
                    warn!(
                        surface = %surface,
                        leaked = self.active.len(),
                        "detaching with click subscriptions still registered"
                    );
                }
            }
        }
        Ok(())
    }
}
