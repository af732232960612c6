use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::macros::Macros;
use super::meal_type::MealType;
use super::portion::PortionUnit;
use crate::metrics::{finite_or, round_half_up};

/// A logged food. Immutable once created; corrections are a remove + add.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub portion: String,
    pub quantity: f64,
    pub calories: u32,
    pub macros: Macros,
    pub meal_type: MealType,
    pub timestamp: DateTime<Utc>,
}

/// Nutrition of 100 g of a food, the reference amount portions are scaled from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ReferenceNutrition {
    pub calories: f64,
    pub macros: Macros,
}

impl FoodItem {
    pub fn new(
        name: impl Into<String>,
        calories: u32,
        macros: Macros,
        meal_type: MealType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            portion: "1 serving".to_string(),
            quantity: 1.0,
            calories,
            macros,
            meal_type,
            timestamp: Utc::now(),
        }
    }

    /// Builds a food entry by scaling per-100 g reference values to a portion.
    ///
    /// Calories and each macro are rounded to whole units. A quantity that is
    /// not a positive finite number counts as 1; non-finite reference values
    /// count as 0.
    pub fn from_reference(
        name: impl Into<String>,
        reference: ReferenceNutrition,
        quantity: f64,
        unit: PortionUnit,
        meal_type: MealType,
    ) -> Self {
        let quantity = if quantity.is_finite() && quantity > 0.0 {
            quantity
        } else {
            1.0
        };
        let factor = quantity * unit.grams_equivalent() / 100.0;
        let round = |v: f64| round_half_up(finite_or(v, 0.0) * factor).max(0.0);

        let macros = Macros::new(
            round(reference.macros.carbs),
            round(reference.macros.protein),
            round(reference.macros.fat),
        );
        let calories = round(reference.calories) as u32;

        Self::new(name, calories, macros, meal_type)
            .with_portion(format!("{} {}", quantity, unit.label()), quantity)
    }

    pub fn with_portion(mut self, portion: impl Into<String>, quantity: f64) -> Self {
        self.portion = portion.into();
        self.quantity = quantity;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} kcal [{}]",
            self.name, self.portion, self.calories, self.macros
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> ReferenceNutrition {
        ReferenceNutrition {
            calories: 130.0,
            macros: Macros::new(28.0, 2.7, 0.3),
        }
    }

    #[test]
    fn test_food_item_new() {
        let food = FoodItem::new("Apple", 95, Macros::new(25.0, 0.5, 0.3), MealType::Snack);
        assert_eq!(food.name, "Apple");
        assert_eq!(food.calories, 95);
        assert_eq!(food.quantity, 1.0);
        assert_eq!(food.meal_type, MealType::Snack);
    }

    #[test]
    fn test_from_reference_grams() {
        let food = FoodItem::from_reference("Rice", rice(), 150.0, PortionUnit::Gram, MealType::Lunch);
        assert_eq!(food.calories, 195);
        assert_eq!(food.macros.carbs, 42.0);
        assert_eq!(food.macros.protein, 4.0);
        assert_eq!(food.macros.fat, 0.0);
        assert_eq!(food.portion, "150 grams (g)");
        assert_eq!(food.quantity, 150.0);
    }

    #[test]
    fn test_from_reference_cup() {
        let food = FoodItem::from_reference("Rice", rice(), 1.0, PortionUnit::Cup, MealType::Dinner);
        // 240 g
        assert_eq!(food.calories, 312);
        assert_eq!(food.portion, "1 cup");
    }

    #[test]
    fn test_from_reference_bad_quantity_defaults_to_one() {
        let food = FoodItem::from_reference("Rice", rice(), f64::NAN, PortionUnit::Unit, MealType::Lunch);
        assert_eq!(food.quantity, 1.0);
        assert_eq!(food.calories, 130);

        let food = FoodItem::from_reference("Rice", rice(), -3.0, PortionUnit::Unit, MealType::Lunch);
        assert_eq!(food.quantity, 1.0);
    }

    #[test]
    fn test_from_reference_non_finite_values_are_zero() {
        let reference = ReferenceNutrition {
            calories: f64::INFINITY,
            macros: Macros::new(f64::NAN, 10.0, 1.0),
        };
        let food = FoodItem::from_reference("Odd", reference, 100.0, PortionUnit::Gram, MealType::Snack);
        assert_eq!(food.calories, 0);
        assert_eq!(food.macros.carbs, 0.0);
        assert_eq!(food.macros.protein, 10.0);
    }

    #[test]
    fn test_food_item_json_roundtrip() {
        let food = FoodItem::new("Bread", 80, Macros::new(15.0, 3.0, 1.0), MealType::Breakfast);
        let json = serde_json::to_string(&food).unwrap();
        let parsed: FoodItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, food);
    }
}
