use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::activity_level::ActivityLevel;
use super::biological_sex::BiologicalSex;
use super::goal::Goal;
use super::macros::MacroTargets;
use super::workout_priority::WorkoutPriority;

/// The user's body data, goal and the daily targets derived from them.
///
/// Fields are read-only outside the crate: the daily targets are a function
/// of the body inputs, so both can only change together through
/// [`crate::profile::update_profile`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub(crate) id: Uuid,
    pub(crate) name: String,
    pub(crate) age: u32,
    pub(crate) biological_sex: BiologicalSex,
    pub(crate) gender: Option<String>,
    pub(crate) weight: f64,
    pub(crate) height: f64,
    pub(crate) goal: Goal,
    pub(crate) activity_level: ActivityLevel,
    pub(crate) weight_loss_weeks: Option<u32>,
    pub(crate) daily_calories: i32,
    pub(crate) daily_macros: MacroTargets,
    pub(crate) daily_water_goal: f64,
    pub(crate) target_weight: Option<f64>,
    #[serde(default)]
    pub(crate) workout_priorities: Vec<WorkoutPriority>,
    pub(crate) created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn biological_sex(&self) -> BiologicalSex {
        self.biological_sex
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    /// kg, as entered at onboarding or last update
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// cm
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    pub fn weight_loss_weeks(&self) -> Option<u32> {
        self.weight_loss_weeks
    }

    pub fn daily_calories(&self) -> i32 {
        self.daily_calories
    }

    pub fn daily_macros(&self) -> MacroTargets {
        self.daily_macros
    }

    /// Liters, one decimal
    pub fn daily_water_goal(&self) -> f64 {
        self.daily_water_goal
    }

    pub fn target_weight(&self) -> Option<f64> {
        self.target_weight
    }

    pub fn workout_priorities(&self) -> &[WorkoutPriority] {
        &self.workout_priorities
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.len()))?;
        writeln!(f, "Age: {} | Sex: {}", self.age, self.biological_sex)?;
        if let Some(gender) = &self.gender {
            writeln!(f, "Gender: {}", gender)?;
        }
        writeln!(f, "Weight: {:.1} kg | Height: {:.0} cm", self.weight, self.height)?;
        writeln!(
            f,
            "Goal: {} | Activity: {}",
            self.goal.label(),
            self.activity_level
        )?;
        if let Some(target) = self.target_weight {
            writeln!(f, "Target weight: {:.1} kg", target)?;
        }
        if let Some(weeks) = self.weight_loss_weeks {
            writeln!(f, "Timeline: {} weeks", weeks)?;
        }
        if !self.workout_priorities.is_empty() {
            let names: Vec<String> = self
                .workout_priorities
                .iter()
                .map(|p| p.to_string())
                .collect();
            writeln!(f, "Workout priorities: {}", names.join(", "))?;
        }
        writeln!(f, "\nDaily targets:")?;
        writeln!(f, "  Calories: {} kcal", self.daily_calories)?;
        writeln!(f, "  {}", self.daily_macros)?;
        writeln!(f, "  Water: {:.1} L", self.daily_water_goal)?;
        Ok(())
    }
}
