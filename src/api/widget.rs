use crate::interaction::SubscriptionId;
use crate::render::{DrawingService, SurfaceId};

use super::subscription_tracker::SubscriptionTracker;
use super::{ChartProps, ChartWidgetConfig, WidgetState};

/// Chart widget driven by host lifecycle callbacks.
///
/// `ChartWidget` keeps the latest props, decides whether a prop change needs a
/// redraw, and issues full draw commands plus click subscriptions through the
/// injected drawing service. It never draws incrementally.
pub struct ChartWidget<S: DrawingService> {
    pub(super) service: S,
    pub(super) props: ChartProps,
    pub(super) config: ChartWidgetConfig,
    pub(super) state: WidgetState,
    pub(super) surface: Option<SurfaceId>,
    pub(super) subscriptions: SubscriptionTracker,
    pub(super) draw_count: u64,
}

impl<S: DrawingService> ChartWidget<S> {
    /// Creates an unattached widget. Nothing is drawn until [`Self::attach`].
    #[must_use]
    pub fn new(service: S, props: ChartProps, config: ChartWidgetConfig) -> Self {
        let subscriptions = SubscriptionTracker::new(config.subscription_policy);
        Self {
            service,
            props,
            config,
            state: WidgetState::Unattached,
            surface: None,
            subscriptions,
            draw_count: 0,
        }
    }

    #[must_use]
    pub fn props(&self) -> &ChartProps {
        &self.props
    }

    #[must_use]
    pub fn config(&self) -> &ChartWidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> WidgetState {
        self.state
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.state == WidgetState::Attached
    }

    #[must_use]
    pub fn surface(&self) -> Option<&SurfaceId> {
        self.surface.as_ref()
    }

    /// Number of draw commands this widget has issued successfully.
    #[must_use]
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    /// Subscriptions this widget registered that have not been unsubscribed.
    #[must_use]
    pub fn active_subscriptions(&self) -> &[SubscriptionId] {
        self.subscriptions.active()
    }

    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    #[must_use]
    pub fn into_service(self) -> S {
        self.service
    }
}
