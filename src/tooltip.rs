use crate::data_types::{ProjectedPoint, TooltipState};

/// Pointer position over a chart's plotting area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Horizontal position as a fraction of the plot width.
    pub fraction: f64,
    pub screen_x: f64,
    pub screen_y: f64,
}

impl Pointer {
    pub fn new(fraction: f64, screen_x: f64, screen_y: f64) -> Self {
        Self {
            fraction,
            screen_x,
            screen_y,
        }
    }

    /// Builds a pointer from client coordinates and the plot element's
    /// left edge and width. A non-positive width yields `None`.
    pub fn from_client(client_x: f64, client_y: f64, rect_left: f64, rect_width: f64) -> Option<Self> {
        if rect_width <= 0.0 || !rect_width.is_finite() {
            return None;
        }
        Some(Self::new((client_x - rect_left) / rect_width, client_x, client_y))
    }
}

/// Index-proportional lookup of the sample under the pointer.
#[derive(Clone, Debug, Default)]
pub struct TooltipResolver {
    unit: Option<String>,
}

impl TooltipResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(unit: impl Into<String>) -> Self {
        Self {
            unit: Some(unit.into()),
        }
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Index of the point at `fraction`, clamped to the sequence.
    pub fn index_at(fraction: f64, len: usize) -> Option<usize> {
        if len == 0 || fraction.is_nan() {
            return None;
        }
        let last = len - 1;
        let index = (fraction.clamp(0.0, 1.0) * last as f64).round() as usize;
        Some(index.min(last))
    }

    pub fn point_at(fraction: f64, points: &[ProjectedPoint]) -> Option<&ProjectedPoint> {
        Self::index_at(fraction, points.len()).and_then(|i| points.get(i))
    }

    pub fn resolve(&self, pointer: Pointer, points: &[ProjectedPoint]) -> Option<TooltipState> {
        let point = Self::point_at(pointer.fraction, points)?;
        Some(TooltipState {
            screen_x: pointer.screen_x,
            screen_y: pointer.screen_y,
            timestamp: point.source.timestamp,
            value: point.source.value,
            unit: self.unit.clone(),
        })
    }
}

/// Tooltip currently shown by one chart.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
    current: Option<TooltipState>,
}

impl HoverState {
    pub fn current(&self) -> Option<&TooltipState> {
        self.current.as_ref()
    }

    /// Updates the tooltip for a pointer move; a miss hides it.
    pub fn hover(
        &mut self,
        resolver: &TooltipResolver,
        pointer: Pointer,
        points: &[ProjectedPoint],
    ) -> Option<&TooltipState> {
        self.current = resolver.resolve(pointer, points);
        self.current.as_ref()
    }

    pub fn leave(&mut self) {
        self.current = None;
    }
}
