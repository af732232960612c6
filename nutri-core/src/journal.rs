//! Append-only journal of logging actions, used for undo.
//!
//! Every successful add (food, water, workout) records one [`Action`]
//! holding a copy of the created entry. Undoing an action removes that entry
//! from the ledger and then drops the action; an action that is never undone
//! stays recorded. Removals are not journaled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::ledger::DailyLedger;
use crate::models::{FoodItem, WaterLog, WorkoutLog};

/// What an action did, with a copy of the entry it created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ActionEntry {
    AddFood(FoodItem),
    AddWater(WaterLog),
    AddWorkout(WorkoutLog),
}

impl ActionEntry {
    /// Id of the ledger entry this action created.
    pub fn entity_id(&self) -> Uuid {
        match self {
            ActionEntry::AddFood(food) => food.id,
            ActionEntry::AddWater(water) => water.id,
            ActionEntry::AddWorkout(workout) => workout.id,
        }
    }

    /// Removes the entry this action created. Returns whether it was still there.
    pub fn revert(&self, ledger: &mut DailyLedger) -> bool {
        match self {
            ActionEntry::AddFood(food) => ledger.remove_food(food.id).is_some(),
            ActionEntry::AddWater(water) => ledger.remove_water(water.id).is_some(),
            ActionEntry::AddWorkout(workout) => ledger.remove_workout(workout.id).is_some(),
        }
    }
}

impl fmt::Display for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionEntry::AddFood(food) => write!(f, "Added food: {} ({} kcal)", food.name, food.calories),
            ActionEntry::AddWater(water) => write!(f, "Added water: {:.2} L", water.amount),
            ActionEntry::AddWorkout(workout) => {
                write!(f, "Logged workout: {} ({} kcal)", workout.exercise_name, workout.calories_burned)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    pub id: Uuid,
    pub entry: ActionEntry,
    pub timestamp: DateTime<Utc>,
}

/// The recorded actions, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionJournal {
    actions: Vec<Action>,
}

impl ActionJournal {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Appends an action and returns its id.
    pub fn record(&mut self, entry: ActionEntry) -> Uuid {
        let action = Action {
            id: Uuid::new_v4(),
            entry,
            timestamp: Utc::now(),
        };
        let id = action.id;
        self.actions.push(action);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn latest(&self) -> Option<&Action> {
        self.actions.last()
    }

    /// The `limit` most recent actions, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&Action> {
        self.actions.iter().rev().take(limit).collect()
    }

    /// Drops an action from the journal.
    pub fn remove(&mut self, id: Uuid) -> Option<Action> {
        let index = self.actions.iter().position(|a| a.id == id)?;
        Some(self.actions.remove(index))
    }

    /// Reverts the action's ledger entry and drops the action.
    ///
    /// An unknown id does nothing and returns `None`; callers may invoke
    /// undo twice for the same action.
    pub fn undo(&mut self, id: Uuid, ledger: &mut DailyLedger) -> Option<Action> {
        let action = self.remove(id)?;
        if !action.entry.revert(ledger) {
            tracing::debug!(
                "Entry {} of action {} was already gone",
                action.entry.entity_id(),
                action.id
            );
        }
        Some(action)
    }
}
