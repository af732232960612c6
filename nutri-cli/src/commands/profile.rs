use clap::{Args, Subcommand};

use super::{AppSession, CommandResult, OutputFormat};
use nutri_core::metrics::{
    body_mass_index, target_weight_projection, validate_weight_loss_pace, BmiCategory,
};
use nutri_core::{
    ActivityLevel, BiologicalSex, Error, Goal, ProfileInput, ProfileUpdate, UserProfile,
    ValidationError, WorkoutPriority,
};

#[derive(Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand)]
pub enum ProfileSubcommand {
    /// Create the profile and compute daily targets
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u32,

        /// Biological sex (male, female)
        #[arg(long, default_value = "male")]
        sex: String,

        /// Gender identity (optional, display only)
        #[arg(long)]
        gender: Option<String>,

        /// Weight in kg
        #[arg(long)]
        weight: f64,

        /// Height in cm
        #[arg(long)]
        height: f64,

        /// Goal (lose, maintain, gain)
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Activity level (sedentary, light, moderate, active, very_active)
        #[arg(long, default_value = "moderate")]
        activity: String,

        /// Target weight in kg
        #[arg(long)]
        target_weight: Option<f64>,

        /// Weeks to reach the target weight
        #[arg(long)]
        weeks: Option<u32>,

        /// Workout priority (can be repeated)
        #[arg(long = "priority", value_name = "PRIORITY")]
        priorities: Vec<String>,
    },

    /// Show the profile and daily targets
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Update profile fields
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        sex: Option<String>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        weight: Option<f64>,

        #[arg(long)]
        height: Option<f64>,

        #[arg(long)]
        goal: Option<String>,

        #[arg(long)]
        activity: Option<String>,

        #[arg(long)]
        target_weight: Option<f64>,

        #[arg(long)]
        weeks: Option<u32>,

        /// Replace workout priorities (can be repeated)
        #[arg(long = "priority", value_name = "PRIORITY")]
        priorities: Vec<String>,
    },

    /// Project the weight reached after a number of weeks
    Project {
        #[arg(long)]
        weeks: u32,
    },
}

impl ProfileCommand {
    pub fn run(&self, session: &mut AppSession) -> CommandResult {
        match &self.command {
            ProfileSubcommand::Create {
                name,
                age,
                sex,
                gender,
                weight,
                height,
                goal,
                activity,
                target_weight,
                weeks,
                priorities,
            } => {
                let input = ProfileInput {
                    name: Some(name.clone()),
                    age: Some(*age),
                    biological_sex: sex.parse::<BiologicalSex>()?,
                    gender: gender.clone(),
                    weight: Some(*weight),
                    height: Some(*height),
                    goal: goal.parse::<Goal>()?,
                    activity_level: activity.parse::<ActivityLevel>()?,
                    target_weight: *target_weight,
                    weight_loss_weeks: *weeks,
                    workout_priorities: parse_priorities(priorities)?,
                };

                if let (Goal::Lose, Some(target), Some(weeks)) = (input.goal, target_weight, weeks)
                {
                    let pace = validate_weight_loss_pace(*weight, *target, *weeks);
                    if let (true, Some(advice)) = (pace.is_advisory(), pace.message) {
                        println!("Note: {}", advice);
                    }
                }

                let profile = session.create_profile(input).map_err(suggest_weeks)?;
                println!("Created profile:");
                println!();
                print_profile(&profile);
                Ok(())
            }

            ProfileSubcommand::Show { format } => {
                let profile = session.profile().ok_or(ValidationError::NoProfile)?;
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(profile)?),
                    OutputFormat::Text => print_profile(profile),
                }
                Ok(())
            }

            ProfileSubcommand::Update {
                name,
                age,
                sex,
                gender,
                weight,
                height,
                goal,
                activity,
                target_weight,
                weeks,
                priorities,
            } => {
                let update = ProfileUpdate {
                    name: name.clone(),
                    age: *age,
                    biological_sex: sex.as_deref().map(str::parse).transpose()?,
                    gender: gender.clone(),
                    weight: *weight,
                    height: *height,
                    goal: goal.as_deref().map(str::parse).transpose()?,
                    activity_level: activity.as_deref().map(str::parse).transpose()?,
                    weight_loss_weeks: *weeks,
                    target_weight: *target_weight,
                    workout_priorities: if priorities.is_empty() {
                        None
                    } else {
                        Some(parse_priorities(priorities)?)
                    },
                };

                let recomputed = update.touches_targets();
                let profile = session.update_profile(update)?;
                println!("Updated profile:");
                println!();
                print_profile(&profile);
                if recomputed {
                    println!();
                    println!("Daily targets were recalculated.");
                }
                Ok(())
            }

            ProfileSubcommand::Project { weeks } => {
                let profile = session.profile().ok_or(ValidationError::NoProfile)?;
                let current = session.current_weight().unwrap_or(profile.weight());
                let projected = target_weight_projection(current, profile.goal(), *weeks);
                println!(
                    "{}: {:.1} kg now, about {:.1} kg in {} week(s)",
                    profile.goal().label(),
                    current,
                    projected,
                    weeks
                );
                Ok(())
            }
        }
    }
}

fn parse_priorities(values: &[String]) -> Result<Vec<WorkoutPriority>, String> {
    values.iter().map(|v| v.parse()).collect()
}

/// Appends the suggested timeline to a rejected weight-loss pace.
fn suggest_weeks(err: Error) -> Box<dyn std::error::Error> {
    match err {
        Error::Validation(ValidationError::Pace {
            message,
            adjusted_weeks,
        }) => format!("{} Try --weeks {}.", message, adjusted_weeks).into(),
        other => other.into(),
    }
}

fn print_profile(profile: &UserProfile) {
    print!("{}", profile);
    let bmi = body_mass_index(profile.weight(), profile.height());
    println!("BMI: {:.1} ({})", bmi, BmiCategory::classify(bmi));
    println!();
    println!("Profile ID: {}", profile.id());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_priorities() {
        let parsed = parse_priorities(&["cardio".to_string(), "strength".to_string()]).unwrap();
        assert_eq!(
            parsed,
            vec![WorkoutPriority::Cardio, WorkoutPriority::Strength]
        );
        assert!(parse_priorities(&["yoga".to_string()]).is_err());
    }

    #[test]
    fn test_suggest_weeks_mentions_adjusted_timeline() {
        let err = suggest_weeks(Error::Validation(ValidationError::Pace {
            message: "Too fast.".to_string(),
            adjusted_weeks: 9,
        }));
        assert_eq!(err.to_string(), "Too fast. Try --weeks 9.");
    }
}
