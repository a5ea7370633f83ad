//! chart-widget: a props-driven chart widget over an injected drawing service.
//!
//! The widget owns no drawing code. It decides when the current series data
//! warrants a redraw and forwards full draw commands and click subscriptions
//! to a [`render::DrawingService`] supplied by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartProps, ChartWidget, ChartWidgetConfig};
pub use error::{ChartError, ChartResult};
