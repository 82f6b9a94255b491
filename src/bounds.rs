use crate::data_types::{Bounds, Sample};
use tracing::{debug, trace};

pub const DEFAULT_PADDING_PCT: f64 = 0.1;

/// Running min/max of a series for the lifetime of one time-range session.
///
/// Stored bounds only ever grow so the Y axis stays put while new samples
/// stream in. [`DataBoundsTracker::reset`] starts a new session.
#[derive(Clone, Debug)]
pub struct DataBoundsTracker {
    stored: Option<Bounds>,
    padding_pct: f64,
}

impl Default for DataBoundsTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DataBoundsTracker {
    pub fn new() -> Self {
        Self::with_padding(DEFAULT_PADDING_PCT)
    }

    pub fn with_padding(padding_pct: f64) -> Self {
        Self {
            stored: None,
            padding_pct,
        }
    }

    /// Folds `samples` into the stored bounds and returns the padded result.
    ///
    /// An empty (or all non-finite) batch leaves the stored bounds untouched.
    pub fn update(&mut self, samples: &[Sample]) -> Bounds {
        if let Some(incoming) = Bounds::from_samples(samples) {
            let merged = match self.stored {
                Some(current) => current.union(&incoming),
                None => incoming,
            };
            if self.stored != Some(merged) {
                debug!(min = merged.min, max = merged.max, "bounds expanded");
                self.stored = Some(merged);
            }
        } else {
            trace!("bounds update skipped, no finite samples");
        }
        self.bounds()
    }

    /// Padded bounds for consumers, [`Bounds::UNSET`] before any sample.
    pub fn bounds(&self) -> Bounds {
        match self.stored {
            Some(raw) => raw.padded(self.padding_pct),
            None => Bounds::UNSET,
        }
    }

    /// Unpadded bounds, `None` in the sentinel state.
    pub fn raw(&self) -> Option<Bounds> {
        self.stored
    }

    pub fn is_set(&self) -> bool {
        self.stored.is_some()
    }

    pub fn padding_pct(&self) -> f64 {
        self.padding_pct
    }

    pub fn reset(&mut self) {
        if self.stored.take().is_some() {
            debug!("bounds reset");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_keeps_sentinel() {
        let mut tracker = DataBoundsTracker::new();
        assert_eq!(tracker.update(&[]), Bounds::UNSET);
        assert!(!tracker.is_set());
    }

    #[test]
    fn test_non_finite_values_are_ignored() {
        let mut tracker = DataBoundsTracker::new();
        tracker.update(&[Sample::new(0, 4.0), Sample::new(1, f64::NAN)]);
        assert_eq!(tracker.raw(), Some(Bounds::new(4.0, 4.0)));
    }
}
