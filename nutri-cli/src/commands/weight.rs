use clap::{Args, Subcommand};

use super::{AppSession, CommandResult, OutputFormat};

#[derive(Args)]
pub struct WeightCommand {
    #[command(subcommand)]
    pub command: WeightSubcommand,
}

#[derive(Subcommand)]
pub enum WeightSubcommand {
    /// Record today's weight
    Add {
        /// Weight in kg
        weight: f64,
    },

    /// Show recorded weights
    History {
        /// Show only the last N entries
        #[arg(long, short)]
        limit: Option<usize>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl WeightCommand {
    pub fn run(&self, session: &mut AppSession) -> CommandResult {
        match &self.command {
            WeightSubcommand::Add { weight } => {
                let previous = session.current_weight();
                let entry = session.add_weight_entry(*weight)?;

                print!("Recorded {:.1} kg", entry.weight);
                match previous {
                    Some(prev) => println!(" ({:+.1} kg)", entry.weight - prev),
                    None => println!(),
                }
                if let Some(profile) = session.profile() {
                    println!(
                        "Daily targets: {} kcal | {} | Water: {:.1} L",
                        profile.daily_calories(),
                        profile.daily_macros(),
                        profile.daily_water_goal()
                    );
                }
                Ok(())
            }

            WeightSubcommand::History { limit, format } => {
                let history = session.weight_history();
                let start = limit.map_or(0, |n| history.len().saturating_sub(n));
                let shown = &history[start..];

                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(shown)?),
                    OutputFormat::Text => {
                        if shown.is_empty() {
                            println!("No weight entries recorded");
                            return Ok(());
                        }
                        for entry in shown.iter().rev() {
                            println!(
                                "{}  {:.1} kg",
                                entry.date.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
                                entry.weight
                            );
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
