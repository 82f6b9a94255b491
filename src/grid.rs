//! Gridlines and axis ticks, shared by every chart type.

use crate::data_types::{Bounds, GridAnnotation, GridLine, GridOptions, Sample, XTick, YTick};
use crate::scales::ChartScale;
use crate::transform::{PLOT_BOTTOM, PLOT_LEFT, PLOT_RIGHT, PLOT_TOP};
use crate::utils::date_formatter::format_tooltip_time;

/// Fractions of the bounds range labelled on the Y axis, top to bottom.
pub const Y_TICK_FRACTIONS: [f64; 5] = [1.0, 0.75, 0.5, 0.25, 0.0];
/// Fractions of the sample sequence labelled on the X axis, left to right.
pub const X_TICK_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
/// Vertical gridline positions.
pub const VERTICAL_GRID_POSITIONS: [f64; 3] = [25.0, 50.0, 75.0];

/// Y tick positions run from the top of the band (max) to 80 (min).
const Y_TICK_TOP: f64 = PLOT_TOP;
const Y_TICK_BOTTOM: f64 = 80.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct GridAnnotator;

impl GridAnnotator {
    pub fn new() -> Self {
        Self
    }

    pub fn annotate(&self, bounds: &Bounds, samples: &[Sample], options: &GridOptions) -> GridAnnotation {
        let y_ticks = Self::y_ticks(bounds);

        let grid_lines = if options.show_grid {
            y_ticks
                .iter()
                .map(|t| GridLine::horizontal(t.position, PLOT_LEFT, PLOT_RIGHT))
                .chain(
                    VERTICAL_GRID_POSITIONS
                        .iter()
                        .map(|&x| GridLine::vertical(x, PLOT_TOP, PLOT_BOTTOM)),
                )
                .collect()
        } else {
            Vec::new()
        };

        GridAnnotation {
            grid_lines,
            y_ticks: if options.show_y_axis { y_ticks } else { Vec::new() },
            x_ticks: if options.show_x_axis {
                Self::x_ticks(samples)
            } else {
                Vec::new()
            },
        }
    }

    /// Five evenly spaced values of `bounds`, top to bottom.
    pub fn y_ticks(bounds: &Bounds) -> Vec<YTick> {
        let position = ChartScale::new_linear((0.0, 1.0), (Y_TICK_BOTTOM, Y_TICK_TOP));
        let range = bounds.range();

        Y_TICK_FRACTIONS
            .iter()
            .map(|&fraction| {
                let value = bounds.min + range * fraction;
                YTick {
                    value,
                    position: position.map(fraction),
                    label: format!("{:.0}", value),
                }
            })
            .collect()
    }

    /// Five timestamps picked at even fractions of the sequence. Empty input
    /// gives no ticks.
    pub fn x_ticks(samples: &[Sample]) -> Vec<XTick> {
        if samples.is_empty() {
            return Vec::new();
        }
        let last = samples.len() - 1;

        X_TICK_FRACTIONS
            .iter()
            .map(|&fraction| {
                let index = ((fraction * last as f64).floor() as usize).min(last);
                let timestamp = samples[index].timestamp;
                XTick {
                    timestamp,
                    position: fraction * PLOT_RIGHT,
                    label: format_tooltip_time(timestamp),
                }
            })
            .collect()
    }
}
