pub mod chart_type;
pub mod primitives;
pub mod series;

pub use chart_type::ChartType;
pub use primitives::same_value;
pub use series::SeriesData;
