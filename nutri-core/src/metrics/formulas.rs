//! Energy, macronutrient and hydration targets.
//!
//! # References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2).
//! - ISSN Position Stand: protein and exercise (2017).
//! - EFSA dietary reference values for water (2010).

use crate::metrics::numeric::{round_half_up, round_to_tenth};
use crate::models::{ActivityLevel, BiologicalSex, Goal, MacroTargets};

/// Calorie floor for any weight-loss target.
pub const MIN_DAILY_CALORIES: i32 = 1200;

/// Daily surplus for a gain goal.
pub const GAIN_SURPLUS_KCAL: f64 = 400.0;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

const WATER_ML_PER_KG: f64 = 35.0;

const WEEKLY_LOSS_CEILING_KG: f64 = 1.2;
const MAX_LOSS_FRACTION: f64 = 0.15;
const WEEKLY_GAIN_KG: f64 = 0.4;

/// Basal Metabolic Rate in kcal/day (Mifflin-St Jeor).
///
/// - male: `10·w + 6.25·h − 5·a + 5`
/// - female: `10·w + 6.25·h − 5·a − 161`
pub fn basal_metabolic_rate(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: BiologicalSex,
) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Water target multiplier for an activity level.
pub fn hydration_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.0,
        ActivityLevel::Light => 1.1,
        ActivityLevel::Moderate => 1.2,
        ActivityLevel::Active => 1.3,
        ActivityLevel::VeryActive => 1.4,
    }
}

/// Total Daily Energy Expenditure: BMR scaled by activity.
pub fn total_daily_energy_expenditure(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(level)
}

/// Daily calorie target for a goal.
///
/// For `Lose` the deficit depends on the requested timeline: 8 weeks or
/// fewer uses 1100 kcal, 16 or more uses 500 kcal, anything else (including
/// no timeline) uses 750 kcal. The result never drops below
/// [`MIN_DAILY_CALORIES`].
pub fn daily_calorie_target(tdee: f64, goal: Goal, weight_loss_weeks: Option<u32>) -> i32 {
    match goal {
        Goal::Maintain => round_half_up(tdee) as i32,
        Goal::Lose => {
            let deficit = match weight_loss_weeks {
                Some(weeks) if weeks > 0 && weeks <= 8 => 1100.0,
                Some(weeks) if weeks >= 16 => 500.0,
                _ => 750.0,
            };
            (round_half_up(tdee - deficit) as i32).max(MIN_DAILY_CALORIES)
        }
        Goal::Gain => round_half_up(tdee + GAIN_SURPLUS_KCAL) as i32,
    }
}

/// Splits a calorie target into protein, fat and carbs.
///
/// Protein is per kg of body weight (2.0 g for lose/gain, 1.4 g for
/// maintain), fat is a share of calories (25% or 28%), carbs take whatever is
/// left. The three values are rounded only at the end. Carbs are not clamped
/// and go negative when protein and fat already exceed the target.
pub fn daily_macro_targets(daily_calories: i32, goal: Goal, weight_kg: f64) -> MacroTargets {
    let (protein_per_kg, fat_share) = match goal {
        Goal::Lose | Goal::Gain => (2.0, 0.25),
        Goal::Maintain => (1.4, 0.28),
    };

    let calories = f64::from(daily_calories);
    let protein = weight_kg * protein_per_kg;
    let fat = calories * fat_share / KCAL_PER_GRAM_FAT;
    let remaining = calories - (protein * KCAL_PER_GRAM_PROTEIN + fat * KCAL_PER_GRAM_FAT);
    let carbs = remaining / KCAL_PER_GRAM_CARBS;

    MacroTargets {
        protein: round_half_up(protein) as i32,
        carbs: round_half_up(carbs) as i32,
        fat: round_half_up(fat) as i32,
    }
}

/// Daily water target in liters, one decimal: 35 ml per kg scaled by activity.
pub fn daily_water_target(weight_kg: f64, level: ActivityLevel) -> f64 {
    let base = weight_kg * WATER_ML_PER_KG / 1000.0;
    round_to_tenth(base * hydration_factor(level))
}

/// Weight reachable after `weeks` at a healthy pace, one decimal.
///
/// Loss is capped at 15% of the current weight.
pub fn target_weight_projection(current_weight: f64, goal: Goal, weeks: u32) -> f64 {
    let weeks = f64::from(weeks);
    match goal {
        Goal::Lose => {
            let loss = (weeks * WEEKLY_LOSS_CEILING_KG).min(current_weight * MAX_LOSS_FRACTION);
            round_to_tenth(current_weight - loss)
        }
        Goal::Gain => round_to_tenth(current_weight + weeks * WEEKLY_GAIN_KG),
        Goal::Maintain => current_weight,
    }
}
