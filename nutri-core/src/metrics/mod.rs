//! Body-metric formulas.
//!
//! Everything here is pure: no state, no I/O, same output for the same
//! inputs. Inputs are not range-checked; zero or negative body values flow
//! through the arithmetic unchanged and validation is left to the profile
//! layer.

mod body;
mod formulas;
mod numeric;
mod pace;

pub use body::{body_mass_index, BmiCategory};
pub use formulas::{
    activity_multiplier, basal_metabolic_rate, daily_calorie_target, daily_macro_targets,
    daily_water_target, hydration_factor, target_weight_projection,
    total_daily_energy_expenditure, GAIN_SURPLUS_KCAL, MIN_DAILY_CALORIES,
};
pub use numeric::{finite_or, percentage, round_half_up, round_to_tenth};
pub use pace::{
    validate_weight_loss_pace, PaceValidation, MAX_WEEKLY_LOSS_KG, MIN_WEEKLY_LOSS_KG,
};
