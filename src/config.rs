//! Dashboard configuration, loaded from JSON.

use crate::bounds::DEFAULT_PADDING_PCT;
use crate::data_types::{ChartType, DisplayOptions, OpacityConfig, TimeRange};
use crate::theme::{metric_color, ChartTheme, MetricGroup};
use crate::utils::is_valid_percent;
use eyre::{bail, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default)]
    pub chart_type: ChartType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<MetricGroup>,
}

impl CardConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>, chart_type: ChartType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            unit: None,
            chart_type,
            color: None,
            group: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_group(mut self, group: MetricGroup) -> Self {
        self.group = Some(group);
        self
    }

    /// Explicit colour, else the palette colour of the metric.
    pub fn resolved_color(&self, theme: &ChartTheme) -> String {
        if let Some(color) = &self.color {
            return color.clone();
        }
        match self.group {
            Some(group) => metric_color(&self.id, group).to_string(),
            None => theme.default_color.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Cadence of the external sample feed.
    pub update_interval_ms: u64,
    pub resize_debounce_ms: u64,
    pub default_time_range: TimeRange,
    pub bounds_padding: f64,
    pub opacity: OpacityConfig,
    pub display: DisplayOptions,
    pub theme: ChartTheme,
    pub cards: Vec<CardConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 1500,
            resize_debounce_ms: 150,
            default_time_range: TimeRange::default(),
            bounds_padding: DEFAULT_PADDING_PCT,
            opacity: OpacityConfig::default(),
            display: DisplayOptions::default(),
            theme: ChartTheme::default(),
            cards: default_cards(),
        }
    }
}

/// System and performance metric cards shown by a stock dashboard.
pub fn default_cards() -> Vec<CardConfig> {
    use ChartType::*;
    use MetricGroup::*;

    vec![
        CardConfig::new("cpu", "CPU Usage", Line).with_unit("%").with_group(System),
        CardConfig::new("memory", "Memory Usage", Area).with_unit("%").with_group(System),
        CardConfig::new("gpu", "GPU Usage", Line).with_unit("%").with_group(System),
        CardConfig::new("disk", "Disk Usage", Area).with_unit("%").with_group(System),
        CardConfig::new("executions-per-minute", "Executions / min", Bar).with_group(Performance),
        CardConfig::new("method-duration", "Method Duration", Line)
            .with_unit("ms")
            .with_group(Performance),
        CardConfig::new("queue-size", "Queue Size", Area).with_group(Performance),
        CardConfig::new("concurrency-level", "Concurrency Level", Line).with_group(Performance),
    ]
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).wrap_err("failed to parse dashboard config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read dashboard config {}", path.display()))?;
        Self::from_json(&json).wrap_err_with(|| format!("invalid dashboard config {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize dashboard config")
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn card(&self, id: &str) -> Option<&CardConfig> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn validate(&self) -> Result<()> {
        if self.update_interval_ms == 0 {
            bail!("update_interval_ms must be positive");
        }
        if self.resize_debounce_ms == 0 {
            bail!("resize_debounce_ms must be positive");
        }
        if !self.bounds_padding.is_finite() || self.bounds_padding < 0.0 {
            bail!("bounds_padding must be a non-negative number, got {}", self.bounds_padding);
        }

        let o = &self.opacity;
        let opacities = ChartType::ALL
            .iter()
            .flat_map(|&t| [o.by_type.get(t), o.grid.get(t)])
            .chain([o.expanded, o.collapsed])
            .chain(self.display.opacity);
        for value in opacities {
            if !is_valid_percent(value) {
                bail!("opacity {} is outside 0..=100", value);
            }
        }

        let mut seen = HashSet::new();
        for card in &self.cards {
            if card.id.is_empty() {
                bail!("card ids must not be empty");
            }
            if !seen.insert(card.id.as_str()) {
                bail!("duplicate card id {:?}", card.id);
            }
        }
        Ok(())
    }
}
