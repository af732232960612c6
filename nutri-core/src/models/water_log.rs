use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Default source tag for water entries.
pub const DEFAULT_WATER_SOURCE: &str = "water";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaterLog {
    pub id: Uuid,
    /// Liters
    pub amount: f64,
    pub source: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl WaterLog {
    pub fn new(amount_liters: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount: amount_liters,
            source: Some(DEFAULT_WATER_SOURCE.to_string()),
            timestamp: Utc::now(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// A water amount in whichever unit the caller collected it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaterAmount {
    Liters(f64),
    Milliliters(f64),
}

impl WaterAmount {
    pub fn liters(&self) -> f64 {
        match *self {
            WaterAmount::Liters(l) => l,
            WaterAmount::Milliliters(ml) => ml / 1000.0,
        }
    }
}

impl fmt::Display for WaterLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{:.2} L ({})", self.amount, source),
            None => write!(f, "{:.2} L", self.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_log_defaults_to_water_source() {
        let log = WaterLog::new(0.25);
        assert_eq!(log.amount, 0.25);
        assert_eq!(log.source.as_deref(), Some("water"));
    }

    #[test]
    fn test_water_amount_normalizes_to_liters() {
        assert_eq!(WaterAmount::Liters(1.5).liters(), 1.5);
        assert_eq!(WaterAmount::Milliliters(250.0).liters(), 0.25);
    }

    #[test]
    fn test_water_log_display() {
        let log = WaterLog::new(0.5).with_source("juice");
        assert_eq!(format!("{}", log), "0.50 L (juice)");
    }
}
