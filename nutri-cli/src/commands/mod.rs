mod config_cmd;
mod food;
mod profile;
mod progress;
mod recipe;
mod undo;
mod water;
mod weight;
mod workout;

pub use config_cmd::ConfigCommand;
pub use food::FoodCommand;
pub use profile::ProfileCommand;
pub use progress::ProgressCommand;
pub use recipe::RecipeCommand;
pub use undo::{ActionsCommand, UndoCommand};
pub use water::WaterCommand;
pub use weight::WeightCommand;
pub use workout::WorkoutCommand;

use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use nutri_core::{FileStore, Session};
use uuid::Uuid;

/// The session every command runs against.
pub type AppSession = Session<FileStore>;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parses a YYYY-MM-DD date, defaulting to today.
pub fn parse_date_or_today(date: Option<&str>) -> Result<NaiveDate, String> {
    match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date format '{}'. Use YYYY-MM-DD.", d)),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn parse_id(id: &str, what: &str) -> Result<Uuid, String> {
    Uuid::parse_str(id).map_err(|_| format!("Invalid {} ID: {}", what, id))
}
