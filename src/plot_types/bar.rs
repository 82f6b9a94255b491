use super::{finite_points, ChartRenderer};
use crate::data_types::{BarPlotConfig, ChartType, ProjectedPoint, RenderStyle};
use crate::rendering::{BarRect, VisualPrimitive};
use crate::transform::{PLOT_BOTTOM, PLOT_LEFT, PLOT_RIGHT, PLOT_TOP};

/// Bar plot type
#[derive(Clone, Debug, Default)]
pub struct BarPlot {
    pub config: BarPlotConfig,
}

impl BarPlot {
    pub fn new(config: BarPlotConfig) -> Self {
        Self { config }
    }

    /// The newest points that fit in the bar budget.
    pub fn visible<'a>(&self, points: &'a [ProjectedPoint]) -> &'a [ProjectedPoint] {
        let start = points.len().saturating_sub(self.config.max_bars);
        &points[start..]
    }
}

impl ChartRenderer for BarPlot {
    fn chart_type(&self) -> ChartType {
        ChartType::Bar
    }

    fn render(&self, points: &[ProjectedPoint], style: &RenderStyle) -> VisualPrimitive {
        let points = finite_points(points);
        let visible = self.visible(&points);
        if visible.is_empty() {
            tracing::debug!("bar plot has no drawable points");
            return VisualPrimitive::no_data();
        }

        let slot = (PLOT_RIGHT - PLOT_LEFT) / visible.len() as f64;
        let width = slot * self.config.bar_width_pct.clamp(0.0, 1.0);
        let band = PLOT_BOTTOM - PLOT_TOP;

        let bars = visible
            .iter()
            .enumerate()
            .map(|(i, point)| {
                // Projected y already encodes (value - min) / range over the band.
                let height = (PLOT_BOTTOM - point.y).clamp(self.config.min_height, band);
                BarRect {
                    x: PLOT_LEFT + i as f64 * slot + (slot - width) / 2.0,
                    y: PLOT_BOTTOM - height,
                    width,
                    height,
                    timestamp: point.source.timestamp,
                    value: point.source.value,
                }
            })
            .collect();

        VisualPrimitive::Bars {
            bars,
            color: style.color.clone(),
            opacity: style.opacity,
            corner_radius: self.config.corner_radius,
        }
    }
}
