use crate::data_types::{ChartType, OpacityConfig};
use crate::utils::normalize_percent;

/// Floor applied to derived grid opacity.
pub const MIN_GRID_OPACITY: f64 = 10.0;
/// Share of the data opacity given to the grid.
pub const GRID_OPACITY_RATIO: f64 = 0.3;

/// Resolves the opacity of a chart and of its grid.
///
/// Precedence: caller override, then the expanded default, then the
/// per-type default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpacityPolicy {
    config: OpacityConfig,
}

impl OpacityPolicy {
    pub fn new(config: OpacityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OpacityConfig {
        &self.config
    }

    pub fn resolve(&self, chart_type: ChartType, is_expanded: bool, user: Option<f64>) -> u8 {
        let raw = match user {
            Some(opacity) => opacity,
            None if is_expanded => self.config.expanded,
            None => self.config.by_type.get(chart_type),
        };
        normalize_percent(raw)
    }

    /// `max(10, floor(base * 0.3))` when a base is given, else the per-type grid default.
    pub fn grid(&self, chart_type: ChartType, base: Option<f64>) -> u8 {
        let raw = match base {
            Some(base) => MIN_GRID_OPACITY.max((base * GRID_OPACITY_RATIO).floor()),
            None => self.config.grid.get(chart_type),
        };
        normalize_percent(raw)
    }
}
