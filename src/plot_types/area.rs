// Area plot implementation

use super::{finite_points, positions, ChartRenderer};
use crate::data_types::{AreaPlotConfig, ChartType, ProjectedPoint, RenderStyle};
use crate::rendering::{area_polygon, AreaFill, LinearGradient, Stroke, VisualPrimitive};

/// Area plot type
#[derive(Clone, Debug, Default)]
pub struct AreaPlot {
    pub config: AreaPlotConfig,
}

impl AreaPlot {
    pub fn new(config: AreaPlotConfig) -> Self {
        Self { config }
    }
}

impl ChartRenderer for AreaPlot {
    fn chart_type(&self) -> ChartType {
        ChartType::Area
    }

    fn render(&self, points: &[ProjectedPoint], style: &RenderStyle) -> VisualPrimitive {
        let points = finite_points(points);
        if points.is_empty() {
            tracing::debug!("area plot has no drawable points");
            return VisualPrimitive::no_data();
        }
        let border = positions(&points);

        VisualPrimitive::Area {
            fill: AreaFill {
                polygon: area_polygon(&border),
                gradient: LinearGradient::vertical(
                    &style.color,
                    self.config.gradient_top,
                    self.config.gradient_bottom,
                ),
            },
            border,
            stroke: Stroke {
                color: style.color.clone(),
                width: self.config.line_width,
                opacity: style.opacity,
            },
        }
    }
}
