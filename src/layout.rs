//! Expand/collapse bookkeeping for a responsive grid of chart cards.

use crate::data_types::CardLayoutState;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Offsets closer than this are treated as the same row.
const ROW_TOLERANCE: f64 = 0.5;

/// Measured vertical offset of one card, in layout order.
#[derive(Clone, Debug, PartialEq)]
pub struct CardOffset {
    pub id: String,
    pub top: f64,
}

impl CardOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Source of live card measurements, e.g. the rendering surface.
pub trait LayoutProvider {
    /// Offsets of every card with all cards visible, in layout order.
    fn card_offsets(&self) -> Vec<CardOffset>;
}

impl<F> LayoutProvider for F
where
    F: Fn() -> Vec<CardOffset>,
{
    fn card_offsets(&self) -> Vec<CardOffset> {
        self()
    }
}

/// Cards grouped into visual rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowLayout {
    /// Size of the first row, at least 1.
    pub cards_per_row: usize,
    /// Card ids per row, top to bottom, each row in layout order.
    pub rows: Vec<Vec<String>>,
}

impl RowLayout {
    pub fn calculate(offsets: &[CardOffset]) -> Self {
        let mut order: Vec<usize> = (0..offsets.len()).collect();
        order.sort_by(|&a, &b| offsets[a].top.total_cmp(&offsets[b].top));

        let mut grouped: Vec<(f64, Vec<usize>)> = Vec::new();
        for idx in order {
            let top = offsets[idx].top;
            let same_row = grouped
                .last()
                .is_some_and(|(row_top, _)| (top - row_top).abs() <= ROW_TOLERANCE);
            if same_row {
                if let Some((_, members)) = grouped.last_mut() {
                    members.push(idx);
                }
            } else {
                grouped.push((top, vec![idx]));
            }
        }

        let rows: Vec<Vec<String>> = grouped
            .into_iter()
            .map(|(_, mut members)| {
                members.sort_unstable();
                members.into_iter().map(|i| offsets[i].id.clone()).collect()
            })
            .collect();

        Self {
            cards_per_row: rows.first().map(|r| r.len()).unwrap_or(1).max(1),
            rows,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row_of(&self, card_id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.iter().any(|id| id == card_id))
    }

    /// Other cards in the same row as `card_id`.
    pub fn siblings(&self, card_id: &str) -> Vec<String> {
        self.row_of(card_id)
            .map(|row| {
                self.rows[row]
                    .iter()
                    .filter(|id| id.as_str() != card_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_alone_in_row(&self, card_id: &str) -> bool {
        self.siblings(card_id).is_empty()
    }

    /// Row mates of `card_index` in a uniform grid of `cards_per_row` columns.
    pub fn sibling_indices(card_index: usize, cards_per_row: usize, total_cards: usize) -> Vec<usize> {
        let per_row = cards_per_row.max(1);
        let start = (card_index / per_row) * per_row;
        let end = (start + per_row).min(total_cards);
        (start..end).filter(|&i| i != card_index).collect()
    }
}

/// Trailing-edge debounce driven by explicit timestamps.
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records an event, pushing the deadline back.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True once per burst, when the quiet period has elapsed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutPhase {
    Collapsed,
    Expanded(String),
}

/// Owns the expand state of one dashboard view.
///
/// Expanding a card hides the other cards in its visual row; collapsing
/// shows them again. Resizes while expanded are debounced, then the row is
/// recomputed from fresh measurements.
pub struct ExpandLayoutCoordinator<P: LayoutProvider> {
    provider: P,
    state: CardLayoutState,
    debouncer: ResizeDebouncer,
}

impl<P: LayoutProvider> ExpandLayoutCoordinator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_debounce(provider, DEFAULT_RESIZE_DEBOUNCE)
    }

    pub fn with_debounce(provider: P, delay: Duration) -> Self {
        Self {
            provider,
            state: CardLayoutState::default(),
            debouncer: ResizeDebouncer::new(delay),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn state(&self) -> &CardLayoutState {
        &self.state
    }

    pub fn phase(&self) -> LayoutPhase {
        match &self.state.expanded_card_id {
            Some(id) => LayoutPhase::Expanded(id.clone()),
            None => LayoutPhase::Collapsed,
        }
    }

    pub fn expanded_card(&self) -> Option<&str> {
        self.state.expanded_card_id.as_deref()
    }

    pub fn is_hidden(&self, card_id: &str) -> bool {
        self.state.is_hidden(card_id)
    }

    /// Cards currently shown, in layout order.
    pub fn visible_cards(&self) -> Vec<String> {
        self.provider
            .card_offsets()
            .into_iter()
            .map(|o| o.id)
            .filter(|id| !self.state.is_hidden(id))
            .collect()
    }

    pub fn has_pending_resize(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn expand(&mut self, card_id: &str) -> &CardLayoutState {
        if self.state.is_expanded(card_id) {
            return &self.state;
        }
        self.state.hidden_sibling_ids.clear();
        self.state.expanded_card_id = Some(card_id.to_string());
        self.hide_row_siblings();
        debug!(
            card = card_id,
            hidden = self.state.hidden_sibling_ids.len(),
            "card expanded"
        );
        &self.state
    }

    pub fn collapse(&mut self) -> &CardLayoutState {
        if let Some(card) = self.state.expanded_card_id.as_deref() {
            debug!(card, "card collapsed");
        }
        self.state.clear();
        self.debouncer.cancel();
        &self.state
    }

    pub fn toggle(&mut self, card_id: &str) -> &CardLayoutState {
        if self.state.is_expanded(card_id) {
            self.collapse()
        } else {
            self.expand(card_id)
        }
    }

    /// Window resize notification. Ignored unless a card is expanded.
    pub fn on_resize(&mut self, now: Instant) {
        if self.state.expanded_card_id.is_some() {
            trace!("resize scheduled");
            self.debouncer.trigger(now);
        }
    }

    /// Runs a due recomputation. Returns true when the hidden set was rebuilt.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.debouncer.fire(now) || self.state.expanded_card_id.is_none() {
            return false;
        }
        self.state.hidden_sibling_ids.clear();
        self.hide_row_siblings();
        debug!(hidden = self.state.hidden_sibling_ids.len(), "row siblings recomputed after resize");
        true
    }

    fn hide_row_siblings(&mut self) {
        let Some(card_id) = self.state.expanded_card_id.as_deref() else {
            return;
        };
        let layout = RowLayout::calculate(&self.provider.card_offsets());
        if layout.row_of(card_id).is_none() {
            warn!(card = card_id, "expanded card not found in layout");
        }
        let siblings: BTreeSet<String> = layout.siblings(card_id).into_iter().collect();
        self.state.hidden_sibling_ids = siblings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_indices() {
        assert_eq!(RowLayout::sibling_indices(5, 4, 8), vec![4, 6, 7]);
        assert_eq!(RowLayout::sibling_indices(8, 4, 9), Vec::<usize>::new());
        assert_eq!(RowLayout::sibling_indices(0, 0, 3), Vec::<usize>::new());
    }

    #[test]
    fn test_debouncer_coalesces_burst() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::new(Duration::from_millis(150));
        debouncer.trigger(start);
        debouncer.trigger(start + Duration::from_millis(100));
        assert!(!debouncer.fire(start + Duration::from_millis(200)));
        assert!(debouncer.fire(start + Duration::from_millis(250)));
        assert!(!debouncer.fire(start + Duration::from_millis(400)));
    }
}
