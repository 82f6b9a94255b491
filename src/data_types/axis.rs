use serde::{Deserialize, Serialize};

/// Y-axis label: a value and its vertical plot position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// X-axis label: a sample timestamp and its horizontal plot position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XTick {
    pub timestamp: i64,
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridDirection {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub direction: GridDirection,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl GridLine {
    pub fn horizontal(y: f64, x_from: f64, x_to: f64) -> Self {
        Self {
            direction: GridDirection::Horizontal,
            x1: x_from,
            y1: y,
            x2: x_to,
            y2: y,
        }
    }

    pub fn vertical(x: f64, y_from: f64, y_to: f64) -> Self {
        Self {
            direction: GridDirection::Vertical,
            x1: x,
            y1: y_from,
            x2: x,
            y2: y_to,
        }
    }
}

/// Grid and axis overlay for one chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridAnnotation {
    pub grid_lines: Vec<GridLine>,
    pub y_ticks: Vec<YTick>,
    pub x_ticks: Vec<XTick>,
}

impl GridAnnotation {
    pub fn is_empty(&self) -> bool {
        self.grid_lines.is_empty() && self.y_ticks.is_empty() && self.x_ticks.is_empty()
    }
}
