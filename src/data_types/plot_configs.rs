use eyre::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Area,
    Bar,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [ChartType::Line, ChartType::Area, ChartType::Bar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Area => "area",
            Self::Bar => "bar",
        }
    }

    pub fn is_valid(name: &str) -> bool {
        name.parse::<ChartType>().is_ok()
    }
}

impl FromStr for ChartType {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "line" => Ok(Self::Line),
            "area" => Ok(Self::Area),
            "bar" => Ok(Self::Bar),
            other => bail!("unknown chart type {:?}, expected line, area or bar", other),
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per chart type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ByType<T> {
    pub line: T,
    pub area: T,
    pub bar: T,
}

impl<T: Copy> ByType<T> {
    pub fn get(&self, chart_type: ChartType) -> T {
        match chart_type {
            ChartType::Line => self.line,
            ChartType::Area => self.area,
            ChartType::Bar => self.bar,
        }
    }
}

/// Opacity defaults, all on a 0..=100 scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpacityConfig {
    pub by_type: ByType<f64>,
    pub expanded: f64,
    pub collapsed: f64,
    pub grid: ByType<f64>,
}

impl Default for OpacityConfig {
    fn default() -> Self {
        Self {
            by_type: ByType {
                line: 60.0,
                area: 40.0,
                bar: 80.0,
            },
            expanded: 90.0,
            collapsed: 60.0,
            grid: ByType {
                line: 20.0,
                area: 15.0,
                bar: 25.0,
            },
        }
    }
}

/// Display flags supplied by the presentation layer for one chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub show_grid: bool,
    pub show_y_axis: bool,
    pub show_x_axis: bool,
    pub is_expanded: bool,
    /// Caller override on the 0..=100 scale.
    pub opacity: Option<f64>,
}

impl DisplayOptions {
    pub fn expanded() -> Self {
        Self {
            show_grid: true,
            show_y_axis: true,
            show_x_axis: true,
            is_expanded: true,
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            show_grid: self.show_grid,
            show_y_axis: self.show_y_axis,
            show_x_axis: self.show_x_axis,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOptions {
    pub show_grid: bool,
    pub show_y_axis: bool,
    pub show_x_axis: bool,
}

impl GridOptions {
    pub fn all() -> Self {
        Self {
            show_grid: true,
            show_y_axis: true,
            show_x_axis: true,
        }
    }
}

/// Resolved paint parameters handed to a renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub color: String,
    /// Already normalized to 0..=100.
    pub opacity: u8,
    pub is_expanded: bool,
}

impl RenderStyle {
    pub fn new(color: impl Into<String>, opacity: u8) -> Self {
        Self {
            color: color.into(),
            opacity,
            is_expanded: false,
        }
    }

    pub fn expanded(mut self, is_expanded: bool) -> Self {
        self.is_expanded = is_expanded;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinePlotConfig {
    pub line_width: f64,
    /// Gradient polygon beneath the line.
    pub show_fill: bool,
    /// Marker radius used in expanded mode.
    pub marker_radius: f64,
}

impl Default for LinePlotConfig {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            show_fill: true,
            marker_radius: 1.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AreaPlotConfig {
    pub line_width: f64,
    /// Fill opacity at the top of the gradient, 0.0 to 1.0.
    pub gradient_top: f64,
    /// Fill opacity at the bottom of the gradient, 0.0 to 1.0.
    pub gradient_bottom: f64,
}

impl Default for AreaPlotConfig {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            gradient_top: 0.8,
            gradient_bottom: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarPlotConfig {
    /// Only the newest `max_bars` samples are drawn.
    pub max_bars: usize,
    /// 0.0 to 1.0 relative to the slot width
    pub bar_width_pct: f64,
    /// Minimum bar height in plot units.
    pub min_height: f64,
    pub corner_radius: f64,
}

impl Default for BarPlotConfig {
    fn default() -> Self {
        Self {
            max_bars: 12,
            bar_width_pct: 0.8,
            min_height: 2.0,
            corner_radius: 4.0,
        }
    }
}
