use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutLog {
    pub id: Uuid,
    /// Catalogue exercise this log refers to, if any
    pub exercise_id: Option<String>,
    pub exercise_name: String,
    pub exercise_description: Option<String>,
    pub calories_burned: u32,
    pub completed: bool,
    pub date: DateTime<Utc>,
}

impl WorkoutLog {
    pub fn new(exercise_name: impl Into<String>, calories_burned: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_id: None,
            exercise_name: exercise_name.into(),
            exercise_description: None,
            calories_burned,
            completed: true,
            date: Utc::now(),
        }
    }

    pub fn with_exercise_id(mut self, exercise_id: impl Into<String>) -> Self {
        self.exercise_id = Some(exercise_id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.exercise_description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}

impl fmt::Display for WorkoutLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} kcal", self.exercise_name, self.calories_burned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_log_new() {
        let log = WorkoutLog::new("Burpee", 100).with_description("Full body");
        assert_eq!(log.exercise_name, "Burpee");
        assert_eq!(log.calories_burned, 100);
        assert!(log.completed);
        assert!(log.exercise_id.is_none());
        assert_eq!(log.exercise_description.as_deref(), Some("Full body"));
    }

    #[test]
    fn test_workout_log_json_roundtrip() {
        let log = WorkoutLog::new("Squat", 80).with_exercise_id("h2");
        let json = serde_json::to_string(&log).unwrap();
        let parsed: WorkoutLog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log);
    }
}
