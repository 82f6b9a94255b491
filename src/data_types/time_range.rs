use eyre::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Point budget used when a range string is not recognised.
pub const FALLBACK_POINTS: usize = 30;

/// Caller-selected window, mapped to a fixed sample budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "30m")]
    Minutes30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "6h")]
    Hours6,
    #[serde(rename = "12h")]
    Hours12,
    #[serde(rename = "24h")]
    Hours24,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::Minutes30,
        TimeRange::Hour1,
        TimeRange::Hours6,
        TimeRange::Hours12,
        TimeRange::Hours24,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minutes30 => "30m",
            Self::Hour1 => "1h",
            Self::Hours6 => "6h",
            Self::Hours12 => "12h",
            Self::Hours24 => "24h",
        }
    }

    /// Number of samples kept for display.
    pub fn points(&self) -> usize {
        match self {
            Self::Minutes30 => 30,
            Self::Hour1 => 60,
            Self::Hours6 => 72,
            Self::Hours12 => 72,
            Self::Hours24 => 96,
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        match self {
            Self::Minutes30 => 30,
            Self::Hour1 => 60,
            Self::Hours6 => 360,
            Self::Hours12 => 720,
            Self::Hours24 => 1440,
        }
    }

    /// Lenient lookup: unknown strings get [`FALLBACK_POINTS`].
    pub fn points_for(range: &str) -> usize {
        range
            .parse::<TimeRange>()
            .map(|r| r.points())
            .unwrap_or(FALLBACK_POINTS)
    }

    /// The newest `points()` samples of `samples`.
    pub fn window<'a, T>(&self, samples: &'a [T]) -> &'a [T] {
        let start = samples.len().saturating_sub(self.points());
        &samples[start..]
    }
}

impl FromStr for TimeRange {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "30m" => Ok(Self::Minutes30),
            "1h" => Ok(Self::Hour1),
            "6h" => Ok(Self::Hours6),
            "12h" => Ok(Self::Hours12),
            "24h" => Ok(Self::Hours24),
            other => bail!("unknown time range {:?}, expected one of 30m, 1h, 6h, 12h, 24h", other),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
