use crate::stock::sec::FilingRecord;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Anything above $1B.
pub const MAJOR_BUY_THRESHOLD: f64 = 1_000_000_000.0;

/// Anything above $100M.
pub const BUY_THRESHOLD: f64 = 100_000_000.0;

/// ISO 8601, local time, microsecond precision.
///
/// The fraction is always written, `.000000` included, so every timestamp has the same width.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Hold,
    Buy,
    MajorBuy,
    Sell,
}

impl Action {
    /// Thresholds are exclusive and checked top-down; the first match wins.
    pub fn from_value(value: f64) -> Self {
        if value > MAJOR_BUY_THRESHOLD {
            Self::MajorBuy
        } else if value > BUY_THRESHOLD {
            Self::Buy
        } else if value < 0.0 {
            Self::Sell
        } else {
            Self::Hold
        }
    }

    /// [`Action::from_value`] on a reported number; integers beyond 2^53 round, which no
    /// threshold is close enough to notice.
    pub fn from_number(value: &Number) -> Self {
        Self::from_value(value.as_f64().unwrap_or_default())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hold => "HOLD",
            Self::Buy => "BUY",
            Self::MajorBuy => "MAJOR_BUY",
            Self::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The verdict on one filing, as written to disk.
///
/// Field order is the serialized order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// When the classification was made, not when the filing was.
    pub timestamp: String,
    pub filing_date: String,
    /// The reported value, unchanged.
    pub assets: Number,
    pub action: Action,
}

/// Classify `record` against the current local time.
pub fn classify(record: &FilingRecord) -> Classification {
    classify_at(record, Local::now().naive_local())
}

pub fn classify_at(record: &FilingRecord, now: NaiveDateTime) -> Classification {
    Classification {
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        filing_date: record.date.clone(),
        assets: record.value.clone(),
        action: Action::from_number(&record.value),
    }
}
