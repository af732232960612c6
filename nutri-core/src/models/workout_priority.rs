use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutPriority {
    Strength,
    Cardio,
    Flexibility,
    WeightLoss,
    MuscleGain,
}

impl fmt::Display for WorkoutPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutPriority::Strength => write!(f, "strength"),
            WorkoutPriority::Cardio => write!(f, "cardio"),
            WorkoutPriority::Flexibility => write!(f, "flexibility"),
            WorkoutPriority::WeightLoss => write!(f, "weight_loss"),
            WorkoutPriority::MuscleGain => write!(f, "muscle_gain"),
        }
    }
}

impl FromStr for WorkoutPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "strength" => Ok(WorkoutPriority::Strength),
            "cardio" => Ok(WorkoutPriority::Cardio),
            "flexibility" => Ok(WorkoutPriority::Flexibility),
            "weight_loss" => Ok(WorkoutPriority::WeightLoss),
            "muscle_gain" => Ok(WorkoutPriority::MuscleGain),
            _ => Err(format!(
                "Invalid workout priority '{}'. Valid options: strength, cardio, flexibility, weight_loss, muscle_gain",
                s
            )),
        }
    }
}
