use clap::{Args, Subcommand};

use super::{parse_date_or_today, parse_id, AppSession, CommandResult, OutputFormat};
use nutri_core::{FoodItem, Macros, MealType, PortionUnit, ReferenceNutrition};

#[derive(Args)]
pub struct FoodCommand {
    #[command(subcommand)]
    pub command: FoodSubcommand,
}

#[derive(Subcommand)]
pub enum FoodSubcommand {
    /// Log a food from its nutrition per 100 g
    Add {
        #[arg(long)]
        name: String,

        /// kcal per 100 g
        #[arg(long)]
        calories: f64,

        /// Protein per 100 g
        #[arg(long, default_value = "0")]
        protein: f64,

        /// Carbs per 100 g
        #[arg(long, default_value = "0")]
        carbs: f64,

        /// Fat per 100 g
        #[arg(long, default_value = "0")]
        fat: f64,

        /// Meal (breakfast, lunch, snack, dinner)
        #[arg(long, short)]
        meal: String,

        /// Portion quantity
        #[arg(long, short, default_value = "100")]
        quantity: f64,

        /// Portion unit (gram, milliliter, unit, tablespoon, teaspoon, cup, glass, slice, piece)
        #[arg(long, short, default_value = "gram")]
        unit: String,
    },

    /// Remove a logged food
    Remove {
        /// Food ID (UUID)
        id: String,
    },

    /// List foods logged on a day
    List {
        /// Only this meal
        #[arg(long, short)]
        meal: Option<String>,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl FoodCommand {
    pub fn run(&self, session: &mut AppSession) -> CommandResult {
        match &self.command {
            FoodSubcommand::Add {
                name,
                calories,
                protein,
                carbs,
                fat,
                meal,
                quantity,
                unit,
            } => {
                let meal: MealType = meal.parse()?;
                let unit: PortionUnit = unit.parse()?;
                let reference = ReferenceNutrition {
                    calories: *calories,
                    macros: Macros::new(*carbs, *protein, *fat),
                };
                let food = FoodItem::from_reference(name.trim(), reference, *quantity, unit, meal);
                println!("Logged {}", food);

                let food_id = food.id;
                let action_id = session.add_food(food)?;
                println!();
                println!("Food ID:   {}", food_id);
                println!("Action ID: {}", action_id);
                Ok(())
            }

            FoodSubcommand::Remove { id } => {
                let id = parse_id(id, "food")?;
                if session.remove_food(id)? {
                    println!("Removed food {}", id);
                } else {
                    println!("No food with ID {}", id);
                }
                Ok(())
            }

            FoodSubcommand::List { meal, date, format } => {
                let session: &AppSession = session;
                let date = parse_date_or_today(date.as_deref())?;
                let meals = match meal {
                    Some(m) => vec![m.parse::<MealType>()?],
                    None => MealType::ALL.to_vec(),
                };

                match format {
                    OutputFormat::Json => {
                        let foods: Vec<&FoodItem> = meals
                            .iter()
                            .flat_map(|m| session.foods_by_meal(*m, date))
                            .collect();
                        println!("{}", serde_json::to_string_pretty(&foods)?);
                    }
                    OutputFormat::Text => {
                        let mut total = 0u32;
                        let mut count = 0usize;
                        for meal in meals {
                            let foods = session.foods_by_meal(meal, date);
                            if foods.is_empty() {
                                continue;
                            }
                            println!("{}", meal.label());
                            println!("{}", "-".repeat(60));
                            for food in foods {
                                total = total.saturating_add(food.calories);
                                count += 1;
                                println!("  {}", food);
                                println!("    {}", food.id);
                            }
                            println!();
                        }
                        if count == 0 {
                            println!("No foods logged on {}", date);
                        } else {
                            println!("Total: {} food(s), {} kcal", count, total);
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
