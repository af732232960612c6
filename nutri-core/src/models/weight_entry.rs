use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of the append-only weight series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightProgress {
    pub date: DateTime<Utc>,
    /// kg
    pub weight: f64,
}

impl WeightProgress {
    pub fn new(weight: f64) -> Self {
        Self {
            date: Utc::now(),
            weight,
        }
    }
}
