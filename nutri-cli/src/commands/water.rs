use clap::Args;

use super::{AppSession, CommandResult};
use nutri_core::WaterAmount;

/// Log water intake
#[derive(Args)]
pub struct WaterCommand {
    /// Amount, in liters unless --ml is given
    amount: f64,

    /// Read the amount as milliliters
    #[arg(long)]
    ml: bool,

    /// What was drunk (defaults to "water")
    #[arg(long, short)]
    source: Option<String>,
}

impl WaterCommand {
    pub fn run(&self, session: &mut AppSession) -> CommandResult {
        let amount = if self.ml {
            WaterAmount::Milliliters(self.amount)
        } else {
            WaterAmount::Liters(self.amount)
        };

        let action_id = session.add_water(amount, self.source.as_deref())?;
        let progress = session.today_progress();

        println!("Logged {:.2} L", amount.liters());
        match session.profile() {
            Some(profile) => println!(
                "Today: {:.2} / {:.1} L ({:.0}%)",
                progress.water_consumed,
                profile.daily_water_goal(),
                progress.water_percent(profile.daily_water_goal())
            ),
            None => println!("Today: {:.2} L", progress.water_consumed),
        }
        println!();
        println!("Action ID: {}", action_id);
        Ok(())
    }
}
