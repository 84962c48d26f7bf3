use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One satisfaction event, stored as a ledger row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackRecord {
    pub timestamp: DateTime<Utc>,
    pub before_mood: String,
    pub after_mood: String,
    /// Persisted as 0/1
    #[serde(with = "bool_as_int")]
    pub satisfied: bool,
}

impl FeedbackRecord {
    /// Creates a record stamped with the current time
    pub fn new(before_mood: String, after_mood: String, satisfied: bool) -> Self {
        Self {
            timestamp: Utc::now(),
            before_mood,
            after_mood,
            satisfied,
        }
    }
}

/// Aggregate view of the feedback history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackSummary {
    pub count: usize,
    /// Share of satisfied records; `None` when there is no feedback yet
    pub satisfaction_rate: Option<f64>,
}

impl FeedbackSummary {
    pub fn from_records(records: &[FeedbackRecord]) -> Self {
        let count = records.len();
        let satisfaction_rate = if count == 0 {
            None
        } else {
            let satisfied = records.iter().filter(|r| r.satisfied).count();
            Some(satisfied as f64 / count as f64)
        };
        Self {
            count,
            satisfaction_rate,
        }
    }
}

mod bool_as_int {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(de::Error::custom(format!(
                "satisfied must be 0 or 1, got {}",
                other
            ))),
        }
    }
}
