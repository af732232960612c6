//! Building and updating the user profile.
//!
//! The daily targets on a [`UserProfile`] are derived here and only here,
//! in dependency order: BMR → TDEE → calories → macros, plus water.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::metrics::{
    basal_metabolic_rate, daily_calorie_target, daily_macro_targets, daily_water_target,
    total_daily_energy_expenditure, validate_weight_loss_pace,
};
use crate::models::{
    ActivityLevel, BiologicalSex, Goal, MacroTargets, UserProfile, WorkoutPriority,
};

/// Raw onboarding answers. Absent values are `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileInput {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub biological_sex: BiologicalSex,
    pub gender: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    pub target_weight: Option<f64>,
    pub weight_loss_weeks: Option<u32>,
    pub workout_priorities: Vec<WorkoutPriority>,
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            name: None,
            age: None,
            biological_sex: BiologicalSex::Male,
            gender: None,
            weight: None,
            height: None,
            goal: Goal::Maintain,
            activity_level: ActivityLevel::Moderate,
            target_weight: None,
            weight_loss_weeks: None,
            workout_priorities: Vec::new(),
        }
    }
}

/// A partial profile edit. Only `Some` fields are applied.
///
/// `None` always means "leave as is": a target weight or timeline can be
/// replaced but not cleared once set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub biological_sex: Option<BiologicalSex>,
    pub gender: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub goal: Option<Goal>,
    pub activity_level: Option<ActivityLevel>,
    pub weight_loss_weeks: Option<u32>,
    pub target_weight: Option<f64>,
    pub workout_priorities: Option<Vec<WorkoutPriority>>,
}

impl ProfileUpdate {
    /// Whether the update carries any input the daily targets depend on.
    pub fn touches_targets(&self) -> bool {
        self.weight.is_some()
            || self.goal.is_some()
            || self.activity_level.is_some()
            || self.height.is_some()
            || self.age.is_some()
            || self.biological_sex.is_some()
            || self.weight_loss_weeks.is_some()
    }
}

/// Everything the daily targets are computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetInputs {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub biological_sex: BiologicalSex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub weight_loss_weeks: Option<u32>,
}

impl From<&UserProfile> for TargetInputs {
    fn from(profile: &UserProfile) -> Self {
        Self {
            weight: profile.weight,
            height: profile.height,
            age: profile.age,
            biological_sex: profile.biological_sex,
            activity_level: profile.activity_level,
            goal: profile.goal,
            weight_loss_weeks: profile.weight_loss_weeks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTargets {
    pub calories: i32,
    pub macros: MacroTargets,
    /// Liters
    pub water: f64,
}

/// Runs the formula pipeline for a set of inputs.
pub fn derive_targets(inputs: &TargetInputs) -> DailyTargets {
    let bmr = basal_metabolic_rate(
        inputs.weight,
        inputs.height,
        inputs.age,
        inputs.biological_sex,
    );
    let tdee = total_daily_energy_expenditure(bmr, inputs.activity_level);
    let calories = daily_calorie_target(tdee, inputs.goal, inputs.weight_loss_weeks);
    let macros = daily_macro_targets(calories, inputs.goal, inputs.weight);
    let water = daily_water_target(inputs.weight, inputs.activity_level);

    DailyTargets {
        calories,
        macros,
        water,
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

fn require_weeks(weeks: Option<u32>) -> Result<Option<u32>, ValidationError> {
    match weeks {
        Some(0) => Err(ValidationError::WeeksTooFew),
        other => Ok(other),
    }
}

/// Target and timeline checks for a `Lose` goal.
fn check_lose_plan(
    weight: f64,
    target_weight: Option<f64>,
    weight_loss_weeks: Option<u32>,
) -> Result<(), ValidationError> {
    match (target_weight, weight_loss_weeks) {
        (Some(target), Some(weeks)) => {
            let pace = validate_weight_loss_pace(weight, target, weeks);
            if !pace.is_valid {
                return Err(ValidationError::Pace {
                    message: pace.message.unwrap_or_default(),
                    adjusted_weeks: pace.adjusted_weeks,
                });
            }
            if let Some(advice) = pace.message {
                tracing::info!("Weight loss timeline accepted with advice: {}", advice);
            }
            Ok(())
        }
        (Some(target), None) if target >= weight => Err(ValidationError::TargetNotBelowCurrent),
        _ => Ok(()),
    }
}

/// Validates onboarding answers and builds a profile with fresh targets.
///
/// For a `Lose` goal with both a target weight and a timeline, the pace
/// check must pass; a rejected pace is returned as
/// [`ValidationError::Pace`] carrying the suggested number of weeks so the
/// caller can ask again. Nothing is clamped silently.
pub fn create_profile(input: ProfileInput) -> Result<UserProfile, ValidationError> {
    let name = input
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or(ValidationError::Missing("Name"))?;
    let age = input.age.ok_or(ValidationError::Missing("Age"))?;
    if age == 0 {
        return Err(ValidationError::NotPositive {
            field: "Age",
            value: 0.0,
        });
    }
    let weight = require_positive("Weight", input.weight.ok_or(ValidationError::Missing("Weight"))?)?;
    let height = require_positive("Height", input.height.ok_or(ValidationError::Missing("Height"))?)?;
    let weight_loss_weeks = require_weeks(input.weight_loss_weeks)?;
    let target_weight = input
        .target_weight
        .map(|t| require_positive("Target weight", t))
        .transpose()?;

    if input.goal == Goal::Lose {
        check_lose_plan(weight, target_weight, weight_loss_weeks)?;
    }

    let targets = derive_targets(&TargetInputs {
        weight,
        height,
        age,
        biological_sex: input.biological_sex,
        activity_level: input.activity_level,
        goal: input.goal,
        weight_loss_weeks,
    });

    let profile = UserProfile {
        id: Uuid::new_v4(),
        name,
        age,
        biological_sex: input.biological_sex,
        gender: input.gender.filter(|g| !g.trim().is_empty()),
        weight,
        height,
        goal: input.goal,
        activity_level: input.activity_level,
        weight_loss_weeks,
        daily_calories: targets.calories,
        daily_macros: targets.macros,
        daily_water_goal: targets.water,
        target_weight,
        workout_priorities: input.workout_priorities,
        created_at: Utc::now(),
    };

    tracing::info!(
        "Created profile {} ({} kcal, {:.1} L water)",
        profile.id,
        profile.daily_calories,
        profile.daily_water_goal
    );

    Ok(profile)
}

/// Returns a copy of `existing` with `update` merged in.
///
/// Targets are re-derived from the merged values only when the update
/// carries one of their inputs; otherwise they are carried over unchanged.
/// When the merged goal is `Lose` and the update sets the goal, target
/// weight or timeline, the merged plan goes through the same target and
/// pace checks as [`create_profile`]. Weight-only updates skip them.
pub fn update_profile(
    existing: &UserProfile,
    update: ProfileUpdate,
) -> Result<UserProfile, ValidationError> {
    let recompute = update.touches_targets();
    let replans = update.target_weight.is_some()
        || update.weight_loss_weeks.is_some()
        || update.goal.is_some();
    let mut profile = existing.clone();

    if let Some(name) = update.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::Missing("Name"));
        }
        profile.name = name;
    }
    if let Some(age) = update.age {
        if age == 0 {
            return Err(ValidationError::NotPositive {
                field: "Age",
                value: 0.0,
            });
        }
        profile.age = age;
    }
    if let Some(weight) = update.weight {
        profile.weight = require_positive("Weight", weight)?;
    }
    if let Some(height) = update.height {
        profile.height = require_positive("Height", height)?;
    }
    if let Some(target) = update.target_weight {
        profile.target_weight = Some(require_positive("Target weight", target)?);
    }
    if let Some(weeks) = update.weight_loss_weeks {
        profile.weight_loss_weeks = require_weeks(Some(weeks))?;
    }
    if let Some(sex) = update.biological_sex {
        profile.biological_sex = sex;
    }
    if let Some(gender) = update.gender {
        profile.gender = Some(gender).filter(|g| !g.trim().is_empty());
    }
    if let Some(goal) = update.goal {
        profile.goal = goal;
    }
    if let Some(level) = update.activity_level {
        profile.activity_level = level;
    }
    if let Some(priorities) = update.workout_priorities {
        profile.workout_priorities = priorities;
    }

    if replans && profile.goal == Goal::Lose {
        check_lose_plan(
            profile.weight,
            profile.target_weight,
            profile.weight_loss_weeks,
        )?;
    }

    if recompute {
        let targets = derive_targets(&TargetInputs::from(&profile));
        profile.daily_calories = targets.calories;
        profile.daily_macros = targets.macros;
        profile.daily_water_goal = targets.water;
        tracing::info!(
            "Recomputed targets for profile {}: {} kcal, {:.1} L water",
            profile.id,
            profile.daily_calories,
            profile.daily_water_goal
        );
    }

    Ok(profile)
}
