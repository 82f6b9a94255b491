use serde::{Deserialize, Serialize};

/// A single reading from a metrics feed.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// A series can be drawn only if it is non-empty and every value is finite.
pub fn is_valid_series(samples: &[Sample]) -> bool {
    !samples.is_empty() && samples.iter().all(Sample::is_finite)
}

/// Value range used to normalize a series onto plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNSET
    }
}

impl Bounds {
    /// Exposed while no sample has been observed.
    pub const UNSET: Bounds = Bounds { min: 0.0, max: 100.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Min/max over the finite values of `samples`.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        samples
            .iter()
            .filter(|s| s.is_finite())
            .fold(None, |acc: Option<Bounds>, s| match acc {
                None => Some(Bounds::new(s.value, s.value)),
                Some(b) => Some(Bounds::new(b.min.min(s.value), b.max.max(s.value))),
            })
    }

    /// Span of the bounds, with a unit span substituted for a degenerate range.
    pub fn range(&self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() {
            1.0
        } else {
            span
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(self.min.min(other.min), self.max.max(other.max))
    }

    pub fn contains(&self, other: &Bounds) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    /// Grows both ends by `pct` of the range.
    pub fn padded(&self, pct: f64) -> Bounds {
        let pad = self.range() * pct;
        Bounds::new(self.min - pad, self.max + pad)
    }

    /// Position of `value` inside the bounds, 0.0 at `min` and 1.0 at `max`.
    pub fn fraction_of(&self, value: f64) -> f64 {
        (value - self.min) / self.range()
    }
}

/// A coordinate in the 0..=100 plot space.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A sample mapped into plot space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub source: Sample,
}

impl ProjectedPoint {
    pub fn position(&self) -> PlotPoint {
        PlotPoint::new(self.x, self.y)
    }
}
