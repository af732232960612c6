use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Grams of each macronutrient in a food or a day's intake.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Macros {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl Macros {
    pub fn new(carbs: f64, protein: f64, fat: f64) -> Self {
        Self {
            carbs,
            protein,
            fat,
        }
    }

    /// Multiplies every macro by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            carbs: self.carbs * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
        }
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros {
            carbs: self.carbs + other.carbs,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
        }
    }
}

impl fmt::Display for Macros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Protein: {:.0}g | Carbs: {:.0}g | Fat: {:.0}g",
            self.protein, self.carbs, self.fat
        )
    }
}

/// Daily macronutrient targets in whole grams.
///
/// Carbs are the remainder after protein and fat and may be negative for
/// heavy users on a low calorie target.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

impl fmt::Display for MacroTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Protein: {}g | Carbs: {}g | Fat: {}g",
            self.protein, self.carbs, self.fat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros_add() {
        let total = Macros::new(10.0, 5.0, 2.0) + Macros::new(1.0, 2.0, 3.0);
        assert_eq!(total, Macros::new(11.0, 7.0, 5.0));
    }

    #[test]
    fn test_macros_scaled() {
        let scaled = Macros::new(20.0, 10.0, 4.0).scaled(1.5);
        assert_eq!(scaled, Macros::new(30.0, 15.0, 6.0));
    }

    #[test]
    fn test_macros_display() {
        let m = Macros::new(30.4, 15.6, 8.0);
        assert_eq!(format!("{}", m), "Protein: 16g | Carbs: 30g | Fat: 8g");
    }

    #[test]
    fn test_macro_targets_display() {
        let t = MacroTargets {
            protein: 140,
            carbs: 250,
            fat: 70,
        };
        assert_eq!(format!("{}", t), "Protein: 140g | Carbs: 250g | Fat: 70g");
    }
}
