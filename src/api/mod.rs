mod json_contract;
mod lifecycle;
mod lifecycle_controller;
mod props;
mod redraw_gate;
mod subscription_tracker;
mod widget;
mod widget_config;

pub use json_contract::{DRAW_COMMAND_JSON_SCHEMA_V1, DrawCommandJsonContractV1};
pub use lifecycle::WidgetState;
pub use props::ChartProps;
pub use redraw_gate::series_changed;
pub use widget::ChartWidget;
pub use widget_config::{ChartWidgetConfig, SubscriptionPolicy};
