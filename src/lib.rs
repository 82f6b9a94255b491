//! metrics_chart: chart data and rendering engine for metrics dashboards

pub mod bounds;
pub mod chart;
pub mod config;
pub mod data_types;
pub mod grid;
pub mod layout;
pub mod opacity;
pub mod plot_types;
pub mod rendering;
pub mod scales;
pub mod theme;
pub mod tooltip;
pub mod transform;
pub mod utils;

pub use bounds::DataBoundsTracker;
pub use chart::{ChartFrame, MetricChart};
pub use config::{CardConfig, DashboardConfig};
pub use data_types::{Bounds, ChartType, DisplayOptions, ProjectedPoint, Sample, TimeRange};
pub use grid::GridAnnotator;
pub use layout::{ExpandLayoutCoordinator, LayoutProvider};
pub use plot_types::{ChartRenderer, RendererRegistry};
pub use rendering::VisualPrimitive;
pub use tooltip::TooltipResolver;
pub use transform::CoordinateProjector;
