// Visual primitives produced by the chart renderers

use crate::data_types::PlotPoint;
use crate::transform::{PLOT_BASELINE, PLOT_LEFT, PLOT_RIGHT};
use serde::{Deserialize, Serialize};

pub const NO_DATA_MESSAGE: &str = "No data available";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub opacity: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// 0.0 at the top of the plot, 1.0 at the bottom.
    pub offset: f64,
    pub opacity: f64,
}

/// Vertical gradient, referenced by id from the drawing layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub id: String,
    pub color: String,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn vertical(color: &str, top: f64, bottom: f64) -> Self {
        Self {
            id: gradient_id(color),
            color: color.to_string(),
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    opacity: top,
                },
                GradientStop {
                    offset: 1.0,
                    opacity: bottom,
                },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaFill {
    pub polygon: Vec<PlotPoint>,
    pub gradient: LinearGradient,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub center: PlotPoint,
    pub radius: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub timestamp: i64,
    pub value: f64,
}

/// Output of a chart renderer, consumed by the drawing layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualPrimitive {
    Polyline {
        points: Vec<PlotPoint>,
        stroke: Stroke,
        fill: Option<AreaFill>,
        markers: Vec<Marker>,
    },
    Area {
        fill: AreaFill,
        border: Vec<PlotPoint>,
        stroke: Stroke,
    },
    Bars {
        bars: Vec<BarRect>,
        color: String,
        opacity: u8,
        corner_radius: f64,
    },
    NoData {
        message: String,
    },
}

impl VisualPrimitive {
    pub fn no_data() -> Self {
        Self::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    pub fn opacity(&self) -> Option<u8> {
        match self {
            Self::Polyline { stroke, .. } | Self::Area { stroke, .. } => Some(stroke.opacity),
            Self::Bars { opacity, .. } => Some(*opacity),
            Self::NoData { .. } => None,
        }
    }

    /// Every coordinate carried by the primitive.
    pub fn coordinates(&self) -> Vec<PlotPoint> {
        match self {
            Self::Polyline {
                points,
                fill,
                markers,
                ..
            } => {
                let mut out = points.clone();
                if let Some(fill) = fill {
                    out.extend_from_slice(&fill.polygon);
                }
                out.extend(markers.iter().map(|m| m.center));
                out
            }
            Self::Area { fill, border, .. } => {
                let mut out = fill.polygon.clone();
                out.extend_from_slice(border);
                out
            }
            Self::Bars { bars, .. } => bars
                .iter()
                .flat_map(|b| {
                    [
                        PlotPoint::new(b.x, b.y),
                        PlotPoint::new(b.x + b.width, b.y + b.height),
                    ]
                })
                .collect(),
            Self::NoData { .. } => Vec::new(),
        }
    }
}

/// Closes a point path against the baseline corners.
pub fn area_polygon(points: &[PlotPoint]) -> Vec<PlotPoint> {
    if points.is_empty() {
        return Vec::new();
    }
    let mut polygon = Vec::with_capacity(points.len() + 2);
    polygon.push(PlotPoint::new(PLOT_LEFT, PLOT_BASELINE));
    polygon.extend_from_slice(points);
    polygon.push(PlotPoint::new(PLOT_RIGHT, PLOT_BASELINE));
    polygon
}

/// `"x,y x,y ..."` as used by SVG `points` attributes.
pub fn points_to_svg(points: &[PlotPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn area_polygon_svg(points: &[PlotPoint]) -> String {
    points_to_svg(&area_polygon(points))
}

/// Deterministic gradient id for a colour string.
pub fn gradient_id(color: &str) -> String {
    let cleaned: String = color.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let hash = cleaned.bytes().fold(0i32, |h, c| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(c as i32)
    });
    let suffix: String = to_base36((hash as i64).unsigned_abs()).chars().take(5).collect();
    format!("gradient-{cleaned}-{suffix}")
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}
