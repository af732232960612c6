//! The session state container.
//!
//! A [`Session`] owns the key-value store and every in-memory collection the
//! application works with. It is rebuilt from the store on open and writes
//! the affected keys back after each mutation. When a write fails the
//! mutation is rolled back, so memory and store never disagree.

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog;
use crate::error::{Error, Result, ValidationError};
use crate::journal::{Action, ActionEntry, ActionJournal};
use crate::ledger::{local_date, DailyLedger, DailyProgress};
use crate::models::{
    FoodItem, MealType, Recipe, UserProfile, WaterAmount, WaterLog, WeightProgress, WorkoutLog,
};
use crate::profile::{self, ProfileInput, ProfileUpdate};
use crate::store::{KeyValueStore, StoreKey};

/// Name given to workouts logged through [`Session::log_predefined_workout`].
pub const PREDEFINED_WORKOUT_NAME: &str = "Exercise";

/// Everything the session keeps in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub profile: Option<UserProfile>,
    pub ledger: DailyLedger,
    pub weight_history: Vec<WeightProgress>,
    pub recipes: Vec<Recipe>,
    pub journal: ActionJournal,
}

impl SessionState {
    /// Serializes the collection stored under `key`.
    fn encode(&self, key: StoreKey) -> Result<String> {
        match key {
            StoreKey::UserProfile => to_json(key, &self.profile),
            StoreKey::TodayFoods => to_json(key, self.ledger.foods()),
            StoreKey::TodayWater => to_json(key, self.ledger.water()),
            StoreKey::WorkoutLogs => to_json(key, self.ledger.workouts()),
            StoreKey::WeightHistory => to_json(key, &self.weight_history),
            StoreKey::FavoriteRecipes => to_json(key, &self.recipes),
            StoreKey::ActionJournal => to_json(key, self.journal.actions()),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(key: StoreKey, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|source| Error::Serialization { key, source })
}

fn load<S: KeyValueStore, T: DeserializeOwned + Default>(store: &S, key: StoreKey) -> Result<T> {
    match store.get(key)? {
        Some(json) => serde_json::from_str(&json).map_err(|source| Error::Serialization { key, source }),
        None => Ok(T::default()),
    }
}

/// Store key holding the collection an action's entry lives in.
fn ledger_key(entry: &ActionEntry) -> StoreKey {
    match entry {
        ActionEntry::AddFood(_) => StoreKey::TodayFoods,
        ActionEntry::AddWater(_) => StoreKey::TodayWater,
        ActionEntry::AddWorkout(_) => StoreKey::WorkoutLogs,
    }
}

pub struct Session<S: KeyValueStore> {
    store: S,
    state: SessionState,
}

impl<S: KeyValueStore> Session<S> {
    /// Rebuilds the session from every key in `store`.
    ///
    /// Keys that were never written yield empty collections.
    pub fn open(store: S) -> Result<Self> {
        let foods: Vec<FoodItem> = load(&store, StoreKey::TodayFoods)?;
        let water: Vec<WaterLog> = load(&store, StoreKey::TodayWater)?;
        let workouts: Vec<WorkoutLog> = load(&store, StoreKey::WorkoutLogs)?;
        let actions: Vec<Action> = load(&store, StoreKey::ActionJournal)?;

        let state = SessionState {
            profile: load(&store, StoreKey::UserProfile)?,
            ledger: DailyLedger::new(foods, water, workouts),
            weight_history: load(&store, StoreKey::WeightHistory)?,
            recipes: load(&store, StoreKey::FavoriteRecipes)?,
            journal: ActionJournal::new(actions),
        };

        debug!(
            "Opened session: {} foods, {} water logs, {} workouts, {} actions",
            state.ledger.foods().len(),
            state.ledger.water().len(),
            state.ledger.workouts().len(),
            state.journal.len()
        );

        Ok(Self { store, state })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Applies `mutate` and persists `keys`, in order.
    ///
    /// On any failure the previous state is restored and the keys already
    /// written are put back with their previous snapshot.
    fn commit<T>(
        &mut self,
        keys: &[StoreKey],
        mutate: impl FnOnce(&mut SessionState) -> T,
    ) -> Result<T> {
        let before = self.state.clone();
        let value = mutate(&mut self.state);

        for (index, &key) in keys.iter().enumerate() {
            let written = self
                .state
                .encode(key)
                .and_then(|json| self.store.put(key, &json).map_err(Error::from));

            if let Err(err) = written {
                warn!("Failed to persist '{}', rolling back: {}", key, err);
                self.state = before;
                self.compensate(&keys[..index]);
                return Err(err);
            }
            debug!("Persisted '{}'", key);
        }

        Ok(value)
    }

    fn compensate(&mut self, keys: &[StoreKey]) {
        for &key in keys {
            let restored = self
                .state
                .encode(key)
                .and_then(|json| self.store.put(key, &json).map_err(Error::from));
            if let Err(err) = restored {
                warn!("Could not restore '{}' after a failed write: {}", key, err);
            }
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.state.profile.as_ref()
    }

    /// Validates onboarding answers and stores the resulting profile.
    pub fn create_profile(&mut self, input: ProfileInput) -> Result<UserProfile> {
        let profile = profile::create_profile(input)?;
        self.commit(&[StoreKey::UserProfile], |state| {
            state.profile = Some(profile.clone());
        })?;
        Ok(profile)
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<UserProfile> {
        let existing = self.state.profile.as_ref().ok_or(ValidationError::NoProfile)?;
        let updated = profile::update_profile(existing, update)?;
        self.commit(&[StoreKey::UserProfile], |state| {
            state.profile = Some(updated.clone());
        })?;
        Ok(updated)
    }

    /// Logs a food and journals it. Returns the action id.
    pub fn add_food(&mut self, food: FoodItem) -> Result<Uuid> {
        debug!("Adding food '{}' ({} kcal)", food.name, food.calories);
        self.commit(&[StoreKey::TodayFoods, StoreKey::ActionJournal], |state| {
            state.ledger.add_food(food.clone());
            state.journal.record(ActionEntry::AddFood(food))
        })
    }

    /// Removes a food. Returns `false` when no food has that id.
    pub fn remove_food(&mut self, id: Uuid) -> Result<bool> {
        if !self.state.ledger.foods().iter().any(|f| f.id == id) {
            debug!("No food with id {}, nothing to remove", id);
            return Ok(false);
        }
        self.commit(&[StoreKey::TodayFoods], |state| {
            state.ledger.remove_food(id).is_some()
        })
    }

    /// Logs water in either unit and journals it. Returns the action id.
    pub fn add_water(&mut self, amount: WaterAmount, source: Option<&str>) -> Result<Uuid> {
        let liters = amount.liters();
        if !liters.is_finite() || liters <= 0.0 {
            return Err(ValidationError::WaterAmount(liters).into());
        }

        let mut log = WaterLog::new(liters);
        if let Some(source) = source.map(str::trim).filter(|s| !s.is_empty()) {
            log = log.with_source(source);
        }

        debug!("Adding {:.3} L of water", liters);
        self.commit(&[StoreKey::TodayWater, StoreKey::ActionJournal], |state| {
            state.ledger.add_water(log.clone());
            state.journal.record(ActionEntry::AddWater(log))
        })
    }

    /// Appends a weight reading and moves the profile weight to it.
    ///
    /// With a profile present this recomputes the daily targets.
    pub fn add_weight_entry(&mut self, weight: f64) -> Result<WeightProgress> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "Weight",
                value: weight,
            }
            .into());
        }

        let updated = match self.state.profile.as_ref() {
            Some(existing) => Some(profile::update_profile(
                existing,
                ProfileUpdate {
                    weight: Some(weight),
                    ..ProfileUpdate::default()
                },
            )?),
            None => None,
        };
        let keys: &[StoreKey] = if updated.is_some() {
            &[StoreKey::WeightHistory, StoreKey::UserProfile]
        } else {
            &[StoreKey::WeightHistory]
        };

        let entry = WeightProgress::new(weight);
        self.commit(keys, |state| {
            state.weight_history.push(entry);
            if updated.is_some() {
                state.profile = updated;
            }
        })?;
        debug!("Recorded weight {:.1} kg", weight);
        Ok(entry)
    }

    pub fn weight_history(&self) -> &[WeightProgress] {
        &self.state.weight_history
    }

    /// Latest recorded weight, else the profile weight.
    pub fn current_weight(&self) -> Option<f64> {
        self.state
            .weight_history
            .last()
            .map(|entry| entry.weight)
            .or_else(|| self.profile().map(UserProfile::weight))
    }

    /// Logs a custom workout and journals it. Returns the action id.
    pub fn log_workout(
        &mut self,
        name: &str,
        description: Option<&str>,
        calories_burned: u32,
    ) -> Result<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Missing("Exercise name").into());
        }
        let mut log = WorkoutLog::new(name, calories_burned);
        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            log = log.with_description(description);
        }
        self.record_workout(log)
    }

    /// Logs a catalogue exercise with its estimated calories.
    ///
    /// Returns `None` for an unknown exercise id.
    pub fn log_catalog_workout(&mut self, exercise_id: &str) -> Result<Option<Uuid>> {
        let Some(exercise) = catalog::find(exercise_id) else {
            debug!("Unknown exercise '{}'", exercise_id);
            return Ok(None);
        };
        let log = WorkoutLog::new(exercise.name, exercise.estimated_calories)
            .with_exercise_id(exercise.id)
            .with_description(exercise.description);
        self.record_workout(log).map(Some)
    }

    fn record_workout(&mut self, log: WorkoutLog) -> Result<Uuid> {
        debug!(
            "Logging workout '{}' ({} kcal)",
            log.exercise_name, log.calories_burned
        );
        self.commit(&[StoreKey::WorkoutLogs, StoreKey::ActionJournal], |state| {
            state.ledger.add_workout(log.clone());
            state.journal.record(ActionEntry::AddWorkout(log))
        })
    }

    /// Marks an exercise as done without burning calories or journaling.
    ///
    /// Returns the id of the workout log.
    pub fn log_predefined_workout(&mut self, exercise_id: &str) -> Result<Uuid> {
        let log = WorkoutLog::new(PREDEFINED_WORKOUT_NAME, 0).with_exercise_id(exercise_id);
        let id = log.id;
        self.commit(&[StoreKey::WorkoutLogs], |state| {
            state.ledger.add_workout(log);
        })?;
        debug!("Marked exercise '{}' as done", exercise_id);
        Ok(id)
    }

    pub fn is_exercise_completed_on(&self, exercise_id: &str, date: NaiveDate) -> bool {
        self.state.ledger.is_exercise_completed_on(exercise_id, date)
    }

    /// Reverts a journaled action. Unknown ids return `false`.
    pub fn undo(&mut self, action_id: Uuid) -> Result<bool> {
        let Some(action) = self.state.journal.get(action_id) else {
            debug!("No action with id {}, nothing to undo", action_id);
            return Ok(false);
        };
        let keys = [ledger_key(&action.entry), StoreKey::ActionJournal];

        let undone = self.commit(&keys, |state| {
            state.journal.undo(action_id, &mut state.ledger)
        })?;
        if let Some(action) = &undone {
            debug!("Undid action {}: {}", action.id, action.entry);
        }
        Ok(undone.is_some())
    }

    pub fn actions(&self) -> &[Action] {
        self.state.journal.actions()
    }

    /// The `limit` most recent actions, newest first.
    pub fn recent_actions(&self, limit: usize) -> Vec<&Action> {
        self.state.journal.recent(limit)
    }

    pub fn ledger(&self) -> &DailyLedger {
        &self.state.ledger
    }

    pub fn today_progress(&self) -> DailyProgress {
        self.progress_on(local_date(Utc::now()))
    }

    pub fn progress_on(&self, date: NaiveDate) -> DailyProgress {
        self.state.ledger.progress_on(date)
    }

    pub fn week_progress(&self, end: NaiveDate) -> Vec<DailyProgress> {
        self.state.ledger.week_progress(end)
    }

    pub fn foods_by_meal(&self, meal_type: MealType, date: NaiveDate) -> Vec<&FoodItem> {
        self.state.ledger.foods_by_meal(meal_type, date)
    }

    /// Saves a recipe. Returns its id.
    pub fn save_recipe(&mut self, recipe: Recipe) -> Result<Uuid> {
        let id = recipe.id;
        self.commit(&[StoreKey::FavoriteRecipes], |state| {
            state.recipes.push(recipe);
        })?;
        Ok(id)
    }

    /// Flips the favourite flag of a saved recipe.
    ///
    /// Returns the new flag, or `None` when no recipe has that id.
    pub fn toggle_favorite_recipe(&mut self, id: Uuid) -> Result<Option<bool>> {
        if !self.state.recipes.iter().any(|r| r.id == id) {
            return Ok(None);
        }
        self.commit(&[StoreKey::FavoriteRecipes], |state| {
            state.recipes.iter_mut().find(|r| r.id == id).map(|recipe| {
                recipe.is_favorite = !recipe.is_favorite;
                recipe.is_favorite
            })
        })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.state.recipes
    }

    pub fn favorite_recipes(&self) -> Vec<&Recipe> {
        self.state.recipes.iter().filter(|r| r.is_favorite).collect()
    }
}
