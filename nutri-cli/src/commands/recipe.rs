use clap::{Args, Subcommand};

use super::{parse_id, AppSession, CommandResult, OutputFormat};
use nutri_core::{Macros, Recipe, RecipeNutrition};

#[derive(Args)]
pub struct RecipeCommand {
    #[command(subcommand)]
    pub command: RecipeSubcommand,
}

#[derive(Subcommand)]
pub enum RecipeSubcommand {
    /// Save a recipe
    Save {
        #[arg(long)]
        title: String,

        /// kcal per serving
        #[arg(long)]
        calories: u32,

        #[arg(long, default_value = "0")]
        protein: f64,

        #[arg(long, default_value = "0")]
        carbs: f64,

        #[arg(long, default_value = "0")]
        fat: f64,

        #[arg(long, default_value = "1")]
        servings: u32,

        /// Ingredient (can be repeated)
        #[arg(long = "ingredient", value_name = "INGREDIENT")]
        ingredients: Vec<String>,

        /// Instruction step (can be repeated, in order)
        #[arg(long = "step", value_name = "STEP")]
        steps: Vec<String>,

        /// Mark as favourite right away
        #[arg(long)]
        favorite: bool,
    },

    /// Toggle a recipe's favourite flag
    Favorite {
        /// Recipe ID (UUID)
        id: String,
    },

    /// List saved recipes
    List {
        /// Only favourites
        #[arg(long)]
        favorites: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl RecipeCommand {
    pub fn run(&self, session: &mut AppSession) -> CommandResult {
        match &self.command {
            RecipeSubcommand::Save {
                title,
                calories,
                protein,
                carbs,
                fat,
                servings,
                ingredients,
                steps,
                favorite,
            } => {
                let title = title.trim();
                if title.is_empty() {
                    return Err("Recipe title cannot be empty".into());
                }
                let mut recipe = Recipe::new(
                    title,
                    RecipeNutrition {
                        calories: *calories,
                        macros: Macros::new(*carbs, *protein, *fat),
                        servings: (*servings).max(1),
                    },
                )
                .with_ingredients(ingredients.clone())
                .with_instructions(steps.clone());
                recipe.is_favorite = *favorite;

                let id = session.save_recipe(recipe)?;
                println!("Saved recipe '{}'", title);
                println!();
                println!("Recipe ID: {}", id);
                Ok(())
            }

            RecipeSubcommand::Favorite { id } => {
                let id = parse_id(id, "recipe")?;
                match session.toggle_favorite_recipe(id)? {
                    Some(true) => println!("Added recipe {} to favourites", id),
                    Some(false) => println!("Removed recipe {} from favourites", id),
                    None => println!("No recipe with ID {}", id),
                }
                Ok(())
            }

            RecipeSubcommand::List { favorites, format } => {
                let recipes: Vec<&Recipe> = if *favorites {
                    session.favorite_recipes()
                } else {
                    session.recipes().iter().collect()
                };

                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recipes)?),
                    OutputFormat::Text => {
                        if recipes.is_empty() {
                            println!("No recipes found");
                            return Ok(());
                        }
                        for recipe in &recipes {
                            print!("{}", recipe);
                            println!("ID: {}", recipe.id);
                            println!();
                        }
                        println!("Total: {} recipe(s)", recipes.len());
                    }
                }
                Ok(())
            }
        }
    }
}
