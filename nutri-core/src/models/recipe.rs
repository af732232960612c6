use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::macros::Macros;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeNutrition {
    pub calories: u32,
    pub macros: Macros,
    pub servings: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutrition: RecipeNutrition,
    pub is_favorite: bool,
}

impl Recipe {
    pub fn new(title: impl Into<String>, nutrition: RecipeNutrition) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            nutrition,
            is_favorite: false,
        }
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_instructions(mut self, instructions: Vec<String>) -> Self {
        self.instructions = instructions;
        self
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let star = if self.is_favorite { " *" } else { "" };
        writeln!(f, "{}{}", self.title, star)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;
        writeln!(
            f,
            "{} kcal | {} | Servings: {}",
            self.nutrition.calories, self.nutrition.macros, self.nutrition.servings
        )?;

        if !self.ingredients.is_empty() {
            writeln!(f, "\nIngredients:")?;
            for ingredient in &self.ingredients {
                writeln!(f, "  - {}", ingredient)?;
            }
        }

        if !self.instructions.is_empty() {
            writeln!(f, "\nInstructions:")?;
            for (i, step) in self.instructions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, step)?;
            }
        }

        Ok(())
    }
}
