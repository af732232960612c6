use clap::{Args, Subcommand, ValueEnum};
use rand::Rng;

use super::{parse_date_or_today, AppSession, CommandResult, OutputFormat};
use nutri_core::catalog::{self, ExerciseCategory, EXERCISES};

/// Range used to estimate calories when none are given.
const ESTIMATE_RANGE_KCAL: std::ops::RangeInclusive<u32> = 50..=150;

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryFilter {
    Home,
    Gym,
}

impl From<CategoryFilter> for ExerciseCategory {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::Home => ExerciseCategory::Home,
            CategoryFilter::Gym => ExerciseCategory::Gym,
        }
    }
}

#[derive(Args)]
pub struct WorkoutCommand {
    #[command(subcommand)]
    pub command: WorkoutSubcommand,
}

#[derive(Subcommand)]
pub enum WorkoutSubcommand {
    /// Log a custom workout
    Log {
        #[arg(long)]
        name: String,

        #[arg(long, short)]
        description: Option<String>,

        /// Calories burned (estimated when omitted)
        #[arg(long, short)]
        calories: Option<u32>,
    },

    /// Log a catalogue exercise with its estimated calories
    Done {
        /// Exercise ID (e.g. h1, g3)
        exercise_id: String,
    },

    /// Mark a catalogue exercise as done without counting calories
    Predefined {
        /// Exercise ID (e.g. h1, g3)
        exercise_id: String,
    },

    /// List catalogue exercises
    Catalog {
        #[arg(long, value_enum)]
        category: Option<CategoryFilter>,

        /// Date to check completion for (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl WorkoutCommand {
    pub fn run(&self, session: &mut AppSession) -> CommandResult {
        match &self.command {
            WorkoutSubcommand::Log {
                name,
                description,
                calories,
            } => {
                let calories = calories.unwrap_or_else(estimate_calories);
                let action_id = session.log_workout(name, description.as_deref(), calories)?;
                println!("Logged workout: {} - {} kcal", name.trim(), calories);
                println!();
                println!("Action ID: {}", action_id);
                Ok(())
            }

            WorkoutSubcommand::Done { exercise_id } => {
                let action_id = session
                    .log_catalog_workout(exercise_id)?
                    .ok_or_else(|| unknown_exercise(exercise_id))?;
                if let Some(exercise) = catalog::find(exercise_id) {
                    println!(
                        "Logged workout: {} - {} kcal",
                        exercise.name, exercise.estimated_calories
                    );
                }
                println!();
                println!("Action ID: {}", action_id);
                Ok(())
            }

            WorkoutSubcommand::Predefined { exercise_id } => {
                let exercise = catalog::find(exercise_id).ok_or_else(|| unknown_exercise(exercise_id))?;
                let log_id = session.log_predefined_workout(exercise.id)?;
                println!("Marked {} as done", exercise.name);
                println!();
                println!("Workout ID: {}", log_id);
                Ok(())
            }

            WorkoutSubcommand::Catalog {
                category,
                date,
                format,
            } => {
                let date = parse_date_or_today(date.as_deref())?;
                let exercises: Vec<_> = EXERCISES
                    .iter()
                    .filter(|e| category.map_or(true, |c| e.category == ExerciseCategory::from(c)))
                    .collect();

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&exercises)?)
                    }
                    OutputFormat::Text => {
                        for exercise in exercises {
                            let done = if session.is_exercise_completed_on(exercise.id, date) {
                                "[x]"
                            } else {
                                "[ ]"
                            };
                            println!("{} {}", done, exercise);
                            println!("      {}", exercise.description);
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

fn estimate_calories() -> u32 {
    rand::rng().random_range(ESTIMATE_RANGE_KCAL)
}

fn unknown_exercise(id: &str) -> String {
    format!("Unknown exercise '{}'. Run 'nutri workout catalog' to list exercises.", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_calories_in_range() {
        for _ in 0..100 {
            assert!(ESTIMATE_RANGE_KCAL.contains(&estimate_calories()));
        }
    }

    #[test]
    fn test_category_filter_maps_to_catalog() {
        assert_eq!(ExerciseCategory::from(CategoryFilter::Gym), ExerciseCategory::Gym);
    }
}
