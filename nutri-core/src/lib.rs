//! Nutri Core Library
//!
//! Nutrition formulas, the daily ledger, the undo journal and the
//! persisted session shared by Nutri front-ends.

pub mod catalog;
pub mod error;
pub mod journal;
pub mod ledger;
pub mod metrics;
pub mod models;
pub mod profile;
pub mod session;
pub mod store;

pub use catalog::{Exercise, ExerciseCategory};
pub use error::{Error, Result, ValidationError};
pub use journal::{Action, ActionEntry, ActionJournal};
pub use ledger::{compute_daily_progress, local_date, DailyLedger, DailyProgress, MacroPercents};
pub use models::{
    ActivityLevel, BiologicalSex, FoodItem, Goal, MacroTargets, Macros, MealType, PortionUnit,
    Recipe, RecipeNutrition, ReferenceNutrition, UserProfile, WaterAmount, WaterLog,
    WeightProgress, WorkoutLog, WorkoutPriority,
};
pub use profile::{create_profile, derive_targets, update_profile, DailyTargets, ProfileInput, ProfileUpdate};
pub use session::{Session, SessionState};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreKey};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
