//! Projection of samples into plot space

use crate::data_types::{Bounds, ProjectedPoint, Sample};
use crate::scales::ChartScale;

/// Horizontal extent of plot space.
pub const PLOT_LEFT: f64 = 0.0;
pub const PLOT_RIGHT: f64 = 100.0;
/// Vertical band used by data; the rest is left for axis labels.
pub const PLOT_TOP: f64 = 10.0;
pub const PLOT_BOTTOM: f64 = 90.0;
/// Baseline for filled shapes.
pub const PLOT_BASELINE: f64 = 100.0;

/// Maps samples onto the 0..=100 plot space.
///
/// `x` follows the index of the sample, not its timestamp. `y` is inverted
/// so larger values sit higher, and confined to `PLOT_TOP..=PLOT_BOTTOM`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoordinateProjector;

impl CoordinateProjector {
    pub fn new() -> Self {
        Self
    }

    pub fn x_scale(len: usize) -> ChartScale {
        let last = len.saturating_sub(1) as f64;
        ChartScale::new_linear((0.0, last), (PLOT_LEFT, PLOT_RIGHT))
    }

    pub fn y_scale(bounds: &Bounds) -> ChartScale {
        ChartScale::new_linear((bounds.min, bounds.max), (PLOT_BOTTOM, PLOT_TOP))
    }

    /// Projects the finite samples of `samples`, preserving their order.
    pub fn project(&self, samples: &[Sample], bounds: &Bounds) -> Vec<ProjectedPoint> {
        let finite: Vec<&Sample> = samples.iter().filter(|s| s.is_finite()).collect();
        let x_scale = Self::x_scale(finite.len());
        let y_scale = Self::y_scale(bounds);

        finite
            .into_iter()
            .enumerate()
            .map(|(i, sample)| ProjectedPoint {
                x: if i == 0 { PLOT_LEFT } else { x_scale.map(i as f64) },
                y: y_scale.map_clamped(sample.value),
                source: *sample,
            })
            .collect()
    }
}
