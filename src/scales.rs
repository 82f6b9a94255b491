/// Linear mapping from a data domain onto a plot range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain span, with a unit span substituted when the domain collapses.
    fn span(&self) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 || !span.is_finite() {
            1.0
        } else {
            span
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.domain.0) / self.span();
        let res = self.range.0 + t * (self.range.1 - self.range.0);
        if res.is_nan() || res.is_infinite() {
            self.range.0
        } else {
            res
        }
    }

    /// Like [`ChartScale::map`] but never leaves the range.
    pub fn map_clamped(&self, value: f64) -> f64 {
        let (lo, hi) = if self.range.0 <= self.range.1 {
            (self.range.0, self.range.1)
        } else {
            (self.range.1, self.range.0)
        };
        self.map(value).clamp(lo, hi)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let r_span = self.range.1 - self.range.0;
        if r_span == 0.0 {
            return self.domain.0;
        }
        self.domain.0 + (pixel - self.range.0) / r_span * self.span()
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn update_domain(&mut self, min: f64, max: f64) {
        self.domain = (min, max);
    }

    pub fn update_range(&mut self, min: f64, max: f64) {
        self.range = (min, max);
    }
}
