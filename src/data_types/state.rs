use crate::utils::date_formatter::format_tooltip_time;
use crate::utils::format_value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Transient hover state owned by one chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub screen_x: f64,
    pub screen_y: f64,
    pub timestamp: i64,
    pub value: f64,
    pub unit: Option<String>,
}

impl TooltipState {
    /// Value with one decimal and the unit, e.g. `42.5%`.
    pub fn formatted_value(&self) -> String {
        format_value(self.value, self.unit.as_deref(), 1)
    }

    pub fn formatted_time(&self) -> String {
        format_tooltip_time(self.timestamp)
    }
}

/// Expand/hide bookkeeping for one dashboard view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLayoutState {
    pub expanded_card_id: Option<String>,
    pub hidden_sibling_ids: BTreeSet<String>,
}

impl CardLayoutState {
    pub fn is_expanded(&self, card_id: &str) -> bool {
        self.expanded_card_id.as_deref() == Some(card_id)
    }

    pub fn is_hidden(&self, card_id: &str) -> bool {
        self.hidden_sibling_ids.contains(card_id)
    }

    pub fn clear(&mut self) {
        self.expanded_card_id = None;
        self.hidden_sibling_ids.clear();
    }
}
