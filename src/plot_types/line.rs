use super::{finite_points, positions, ChartRenderer};
use crate::data_types::{ChartType, LinePlotConfig, ProjectedPoint, RenderStyle};
use crate::rendering::{area_polygon, AreaFill, LinearGradient, Marker, Stroke, VisualPrimitive};

/// Line plot type
#[derive(Clone, Debug, Default)]
pub struct LinePlot {
    pub config: LinePlotConfig,
}

impl LinePlot {
    pub fn new(config: LinePlotConfig) -> Self {
        Self { config }
    }
}

impl ChartRenderer for LinePlot {
    fn chart_type(&self) -> ChartType {
        ChartType::Line
    }

    fn render(&self, points: &[ProjectedPoint], style: &RenderStyle) -> VisualPrimitive {
        let points = finite_points(points);
        if points.is_empty() {
            tracing::debug!("line plot has no drawable points");
            return VisualPrimitive::no_data();
        }
        let path = positions(&points);

        let fill = self.config.show_fill.then(|| AreaFill {
            polygon: area_polygon(&path),
            gradient: LinearGradient::vertical(&style.color, 0.3, 0.0),
        });

        // Markers only make sense at the expanded size.
        let markers = if style.is_expanded {
            path.iter()
                .map(|&center| Marker {
                    center,
                    radius: self.config.marker_radius,
                })
                .collect()
        } else {
            Vec::new()
        };

        VisualPrimitive::Polyline {
            points: path,
            stroke: Stroke {
                color: style.color.clone(),
                width: self.config.line_width,
                opacity: style.opacity,
            },
            fill,
            markers,
        }
    }
}
