use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::render::{DrawCommand, DrawingService, SeriesDescriptor, SurfaceId};

use super::{ChartProps, ChartWidget, WidgetState};

impl<S: DrawingService> ChartWidget<S> {
    /// Host callback for when the mount point becomes available.
    ///
    /// Draws the current props into `surface`, then subscribes the click
    /// handler. An empty surface id is rejected before any state change.
    ///
    /// The widget counts as attached even if that first draw fails. Updates
    /// with unchanged series still skip drawing, so after an attach error the
    /// host must call [`Self::redraw`] to put content on the surface.
    pub fn attach(&mut self, surface: SurfaceId) -> ChartResult<()> {
        self.require_state("attach", WidgetState::Unattached)?;
        if surface.as_str().is_empty() {
            return Err(ChartError::InvalidData(
                "surface id must not be empty".to_owned(),
            ));
        }
        debug!(surface = %surface, points = self.props.series.len(), "attach chart widget");
        self.surface = Some(surface);
        self.state = WidgetState::Attached;
        self.redraw_attached()
    }

    /// Host callback for a prop change.
    ///
    /// `next` always replaces the current props. Returns `true` when the series
    /// changed and a full redraw was issued.
    pub fn update(&mut self, next: ChartProps) -> ChartResult<bool> {
        if self.state == WidgetState::Detached {
            return Err(ChartError::InvalidLifecycle {
                operation: "update",
                state: self.state,
            });
        }
        let redraw = self.should_redraw(&next);
        self.props = next;
        if !redraw {
            trace!(surface = ?self.surface, "series unchanged, redraw skipped");
            return Ok(false);
        }
        if self.state != WidgetState::Attached {
            trace!("series changed before attach, props stored");
            return Ok(false);
        }
        self.redraw_attached()?;
        Ok(true)
    }

    /// Issues a full redraw regardless of whether props changed.
    pub fn redraw(&mut self) -> ChartResult<()> {
        self.require_state("redraw", WidgetState::Attached)?;
        self.redraw_attached()
    }

    /// Host callback for when the mount point is going away.
    ///
    /// Returns the released surface handle. Detached is terminal.
    pub fn detach(&mut self) -> ChartResult<SurfaceId> {
        self.require_state("detach", WidgetState::Attached)?;
        let surface = self.surface.take().ok_or(ChartError::InvalidLifecycle {
            operation: "detach",
            state: self.state,
        })?;
        self.state = WidgetState::Detached;
        self.subscriptions.on_detach(&mut self.service, &surface)?;
        debug!(surface = %surface, draws = self.draw_count, "detach chart widget");
        Ok(surface)
    }

    /// The command the next redraw would issue, or `None` while unattached.
    #[must_use]
    pub fn draw_command(&self) -> Option<DrawCommand> {
        let surface = self.surface.clone()?;
        Some(DrawCommand::single_series(
            surface,
            SeriesDescriptor::from_series(&self.props.series, self.props.chart_type.clone()),
            self.config.layout.clone(),
            self.config.display,
        ))
    }

    fn redraw_attached(&mut self) -> ChartResult<()> {
        let command = self.draw_command().ok_or(ChartError::InvalidLifecycle {
            operation: "redraw",
            state: self.state,
        })?;
        self.service.draw(&command)?;
        self.draw_count += 1;
        debug!(
            surface = %command.surface,
            draw_count = self.draw_count,
            points = command.point_count(),
            chart_type = %self.props.chart_type,
            "chart redraw issued"
        );
        self.subscriptions.subscribe_click(
            &mut self.service,
            &command.surface,
            self.props.on_click.clone(),
        )?;
        Ok(())
    }

    fn require_state(&self, operation: &'static str, expected: WidgetState) -> ChartResult<()> {
        if self.state != expected {
            return Err(ChartError::InvalidLifecycle {
                operation,
                state: self.state,
            });
        }
        Ok(())
    }
}
