use serde::{Deserialize, Serialize};

pub const PRIMARY_COLOR: &str = "hsl(var(--primary))";

/// Palette slots, resolved by the drawing layer.
pub const CHART_1: &str = "hsl(var(--chart-1))";
pub const CHART_2: &str = "hsl(var(--chart-2))";
pub const CHART_3: &str = "hsl(var(--chart-3))";
pub const CHART_4: &str = "hsl(var(--chart-4))";
pub const CHART_5: &str = "hsl(var(--chart-5))";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricGroup {
    System,
    Performance,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub grid_line: String,
    pub grid_line_width: f64,
    pub grid_dash: String,
    pub default_color: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            grid_line: "white".to_string(),
            grid_line_width: 0.1,
            grid_dash: "1,2".to_string(),
            default_color: PRIMARY_COLOR.to_string(),
        }
    }
}

/// Palette colour for a known metric, falling back to the primary colour.
pub fn metric_color(metric_id: &str, group: MetricGroup) -> &'static str {
    match (group, metric_id) {
        (MetricGroup::System, "cpu") => CHART_5,
        (MetricGroup::System, "memory") => CHART_4,
        (MetricGroup::System, "gpu") => CHART_2,
        (MetricGroup::System, "disk") => CHART_3,
        (MetricGroup::Performance, "executions-per-minute") => CHART_4,
        (MetricGroup::Performance, "method-duration") => CHART_1,
        (MetricGroup::Performance, "queue-size") => CHART_3,
        (MetricGroup::Performance, "concurrency-level") => CHART_2,
        _ => PRIMARY_COLOR,
    }
}
