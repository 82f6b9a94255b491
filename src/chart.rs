//! Per-card chart pipeline: bounds, projection, rendering, grid and tooltips.

use crate::bounds::DataBoundsTracker;
use crate::config::{CardConfig, DashboardConfig};
use crate::data_types::{
    is_valid_series, Bounds, ChartType, DisplayOptions, GridAnnotation, ProjectedPoint,
    RenderStyle, Sample, TimeRange, TooltipState,
};
use crate::grid::GridAnnotator;
use crate::opacity::OpacityPolicy;
use crate::plot_types::RendererRegistry;
use crate::rendering::{Stroke, VisualPrimitive};
use crate::theme::ChartTheme;
use crate::tooltip::{Pointer, TooltipResolver};
use crate::transform::CoordinateProjector;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Everything the drawing layer needs for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    pub chart_type: ChartType,
    pub bounds: Bounds,
    pub points: Vec<ProjectedPoint>,
    pub primitive: VisualPrimitive,
    pub grid: GridAnnotation,
    pub opacity: u8,
    pub grid_stroke: Stroke,
}

impl ChartFrame {
    pub fn is_no_data(&self) -> bool {
        self.primitive.is_no_data()
    }
}

/// One metric card's chart.
///
/// Render passes take `&self` so the feed and pointer handlers can share the
/// chart; bounds and the last projected points sit behind locks.
pub struct MetricChart {
    card: CardConfig,
    color: String,
    time_range: TimeRange,
    tracker: Mutex<DataBoundsTracker>,
    last_points: Mutex<Vec<ProjectedPoint>>,
    registry: Arc<RendererRegistry>,
    opacity: OpacityPolicy,
    theme: ChartTheme,
    projector: CoordinateProjector,
    annotator: GridAnnotator,
    resolver: TooltipResolver,
}

impl MetricChart {
    pub fn new(card: CardConfig) -> Self {
        let theme = ChartTheme::default();
        let color = card.resolved_color(&theme);
        let resolver = match &card.unit {
            Some(unit) => TooltipResolver::with_unit(unit.clone()),
            None => TooltipResolver::new(),
        };
        Self {
            card,
            color,
            time_range: TimeRange::default(),
            tracker: Mutex::new(DataBoundsTracker::new()),
            last_points: Mutex::new(Vec::new()),
            registry: Arc::new(RendererRegistry::default()),
            opacity: OpacityPolicy::default(),
            theme,
            projector: CoordinateProjector::new(),
            annotator: GridAnnotator::new(),
            resolver,
        }
    }

    /// Builds a chart for `card` using the dashboard-wide settings of `config`.
    pub fn from_config(card: CardConfig, config: &DashboardConfig, registry: Arc<RendererRegistry>) -> Self {
        let mut chart = Self::new(card);
        chart.theme = config.theme.clone();
        chart.color = chart.card.resolved_color(&chart.theme);
        chart.time_range = config.default_time_range;
        chart.tracker = Mutex::new(DataBoundsTracker::with_padding(config.bounds_padding));
        chart.registry = registry;
        chart.opacity = OpacityPolicy::new(config.opacity.clone());
        chart
    }

    pub fn card(&self) -> &CardConfig {
        &self.card
    }

    pub fn chart_type(&self) -> ChartType {
        self.card.chart_type
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// Switches the time range. A change starts a new bounds session.
    pub fn set_time_range(&mut self, range: TimeRange) {
        if range != self.time_range {
            debug!(card = %self.card.id, from = %self.time_range, to = %range, "time range changed");
            self.time_range = range;
            self.tracker.lock().reset();
            self.last_points.lock().clear();
        }
    }

    /// Current padded bounds.
    pub fn bounds(&self) -> Bounds {
        self.tracker.lock().bounds()
    }

    pub fn render(&self, samples: &[Sample], options: &DisplayOptions) -> ChartFrame {
        let chart_type = self.card.chart_type;
        let opacity = self.opacity.resolve(chart_type, options.is_expanded, options.opacity);
        let grid_stroke = Stroke {
            color: self.theme.grid_line.clone(),
            width: self.theme.grid_line_width,
            opacity: self.opacity.grid(chart_type, Some(opacity as f64)),
        };

        if !is_valid_series(samples) {
            debug!(card = %self.card.id, len = samples.len(), "rendering no-data placeholder");
            self.last_points.lock().clear();
            let bounds = self.bounds();
            return ChartFrame {
                chart_type,
                bounds,
                points: Vec::new(),
                primitive: VisualPrimitive::no_data(),
                grid: self.annotator.annotate(&bounds, &[], &options.grid_options()),
                opacity,
                grid_stroke,
            };
        }

        let window = self.time_range.window(samples);
        let bounds = self.tracker.lock().update(window);
        let points = self.projector.project(window, &bounds);

        let style = RenderStyle::new(self.color.clone(), opacity).expanded(options.is_expanded);
        let primitive = self.registry.render(chart_type, &points, &style);
        let grid = self.annotator.annotate(&bounds, window, &options.grid_options());

        *self.last_points.lock() = points.clone();

        ChartFrame {
            chart_type,
            bounds,
            points,
            primitive,
            grid,
            opacity,
            grid_stroke,
        }
    }

    /// Tooltip for a pointer over the most recently rendered points.
    pub fn tooltip(&self, pointer: Pointer) -> Option<TooltipState> {
        self.resolver.resolve(pointer, &self.last_points.lock())
    }
}
