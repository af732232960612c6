mod activity_level;
mod biological_sex;
mod food_item;
mod goal;
mod macros;
mod meal_type;
mod portion;
mod recipe;
mod user_profile;
mod water_log;
mod weight_entry;
mod workout_log;
mod workout_priority;

pub use activity_level::ActivityLevel;
pub use biological_sex::BiologicalSex;
pub use food_item::{FoodItem, ReferenceNutrition};
pub use goal::Goal;
pub use macros::{MacroTargets, Macros};
pub use meal_type::MealType;
pub use portion::PortionUnit;
pub use recipe::{Recipe, RecipeNutrition};
pub use user_profile::UserProfile;
pub use water_log::{WaterAmount, WaterLog, DEFAULT_WATER_SOURCE};
pub use weight_entry::WeightProgress;
pub use workout_log::WorkoutLog;
pub use workout_priority::WorkoutPriority;
