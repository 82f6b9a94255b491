// Plot types module

pub mod area;
pub mod bar;
pub mod line;

pub use area::AreaPlot;
pub use bar::BarPlot;
pub use line::LinePlot;

use crate::data_types::{ChartType, PlotPoint, ProjectedPoint, RenderStyle};
use crate::rendering::VisualPrimitive;
use std::collections::HashMap;

/// Trait for rendering plot types
pub trait ChartRenderer: Send + Sync {
    fn chart_type(&self) -> ChartType;

    /// Turns projected points into a drawable primitive. Empty or non-finite
    /// input yields [`VisualPrimitive::NoData`].
    fn render(&self, points: &[ProjectedPoint], style: &RenderStyle) -> VisualPrimitive;
}

/// Points with finite coordinates, in input order.
pub(crate) fn finite_points(points: &[ProjectedPoint]) -> Vec<ProjectedPoint> {
    points
        .iter()
        .filter(|p| p.position().is_finite() && p.source.is_finite())
        .copied()
        .collect()
}

pub(crate) fn positions(points: &[ProjectedPoint]) -> Vec<PlotPoint> {
    points.iter().map(ProjectedPoint::position).collect()
}

/// Lookup table from chart type to renderer.
pub struct RendererRegistry {
    renderers: HashMap<ChartType, Box<dyn ChartRenderer>>,
}

impl Default for RendererRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(LinePlot::default()));
        registry.register(Box::new(AreaPlot::default()));
        registry.register(Box::new(BarPlot::default()));
        registry
    }
}

impl RendererRegistry {
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Installs `renderer`, replacing any previous one for its chart type.
    pub fn register(&mut self, renderer: Box<dyn ChartRenderer>) {
        self.renderers.insert(renderer.chart_type(), renderer);
    }

    pub fn get(&self, chart_type: ChartType) -> Option<&dyn ChartRenderer> {
        self.renderers.get(&chart_type).map(|r| r.as_ref())
    }

    /// Renders with the registered renderer, or the no-data placeholder when
    /// none is installed for `chart_type`.
    pub fn render(
        &self,
        chart_type: ChartType,
        points: &[ProjectedPoint],
        style: &RenderStyle,
    ) -> VisualPrimitive {
        match self.get(chart_type) {
            Some(renderer) => renderer.render(points, style),
            None => {
                tracing::warn!(%chart_type, "no renderer registered");
                VisualPrimitive::no_data()
            }
        }
    }
}
