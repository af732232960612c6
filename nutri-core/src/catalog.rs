//! Built-in exercises that can be logged with one tap.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Home,
    Gym,
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseCategory::Home => write!(f, "home"),
            ExerciseCategory::Gym => write!(f, "gym"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub sets: u32,
    pub reps: &'static str,
    pub category: ExerciseCategory,
    pub estimated_calories: u32,
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} x {} (~{} kcal)",
            self.id, self.name, self.sets, self.reps, self.estimated_calories
        )
    }
}

pub const EXERCISES: &[Exercise] = &[
    Exercise {
        id: "h1",
        name: "Push-up",
        description: "Chest, shoulders and triceps. Keep the body straight and lower until the chest nearly touches the floor.",
        sets: 3,
        reps: "12-15",
        category: ExerciseCategory::Home,
        estimated_calories: 50,
    },
    Exercise {
        id: "h2",
        name: "Bodyweight Squat",
        description: "Legs and glutes. Lower until the thighs are parallel to the floor.",
        sets: 4,
        reps: "15-20",
        category: ExerciseCategory::Home,
        estimated_calories: 80,
    },
    Exercise {
        id: "h3",
        name: "Plank",
        description: "Core and abdominals. Hold the body straight like a board.",
        sets: 3,
        reps: "30-60s",
        category: ExerciseCategory::Home,
        estimated_calories: 40,
    },
    Exercise {
        id: "h4",
        name: "Burpee",
        description: "High-intensity full-body move combining squat, plank and jump.",
        sets: 3,
        reps: "10-12",
        category: ExerciseCategory::Home,
        estimated_calories: 100,
    },
    Exercise {
        id: "h5",
        name: "Mountain Climbers",
        description: "Cardio and core. Alternate the legs quickly from a plank position.",
        sets: 3,
        reps: "20-30",
        category: ExerciseCategory::Home,
        estimated_calories: 70,
    },
    Exercise {
        id: "g1",
        name: "Bench Press",
        description: "Chest development. Use a barbell or dumbbells and lower to the chest.",
        sets: 4,
        reps: "8-12",
        category: ExerciseCategory::Gym,
        estimated_calories: 90,
    },
    Exercise {
        id: "g2",
        name: "Barbell Squat",
        description: "Full leg exercise. Bar on the back, controlled descent.",
        sets: 4,
        reps: "10-12",
        category: ExerciseCategory::Gym,
        estimated_calories: 120,
    },
    Exercise {
        id: "g3",
        name: "Deadlift",
        description: "Back and posterior chain. Lift the bar keeping the back straight.",
        sets: 3,
        reps: "8-10",
        category: ExerciseCategory::Gym,
        estimated_calories: 130,
    },
    Exercise {
        id: "g4",
        name: "Dumbbell Shoulder Press",
        description: "Shoulders and triceps. Press the dumbbells overhead.",
        sets: 3,
        reps: "10-12",
        category: ExerciseCategory::Gym,
        estimated_calories: 80,
    },
    Exercise {
        id: "g5",
        name: "Bent-over Row",
        description: "Back strength. Pull the bar towards the abdomen.",
        sets: 4,
        reps: "10-12",
        category: ExerciseCategory::Gym,
        estimated_calories: 85,
    },
    Exercise {
        id: "g6",
        name: "Barbell Curl",
        description: "Biceps. Bend the elbows while keeping them fixed.",
        sets: 3,
        reps: "12-15",
        category: ExerciseCategory::Gym,
        estimated_calories: 60,
    },
];

/// Looks up a catalogue exercise by id (case-insensitive).
pub fn find(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id.eq_ignore_ascii_case(id))
}

pub fn by_category(category: ExerciseCategory) -> impl Iterator<Item = &'static Exercise> {
    EXERCISES.iter().filter(move |e| e.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_find() {
        assert_eq!(find("h4").unwrap().name, "Burpee");
        assert_eq!(find("G3").unwrap().estimated_calories, 130);
        assert!(find("x9").is_none());
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<&str> = EXERCISES.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), EXERCISES.len());
    }

    #[test]
    fn test_by_category() {
        assert_eq!(by_category(ExerciseCategory::Home).count(), 5);
        assert_eq!(by_category(ExerciseCategory::Gym).count(), 6);
    }
}
