use clap::Args;

use super::{parse_date_or_today, AppSession, CommandResult, OutputFormat};
use nutri_core::{DailyProgress, UserProfile};

/// Show the day's totals against the daily targets
#[derive(Args)]
pub struct ProgressCommand {
    /// Date (YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    date: Option<String>,

    /// Show the seven days ending at the date
    #[arg(long, short)]
    week: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl ProgressCommand {
    pub fn run(&self, session: &AppSession) -> CommandResult {
        let date = parse_date_or_today(self.date.as_deref())?;

        if self.week {
            let days = session.week_progress(date);
            match self.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&days)?),
                OutputFormat::Text => {
                    println!(
                        "{:<12}{:>10}{:>10}{:>10}{:>10}",
                        "Date", "Eaten", "Burned", "Net", "Water"
                    );
                    println!("{}", "-".repeat(52));
                    for day in &days {
                        println!(
                            "{:<12}{:>10}{:>10}{:>10}{:>9.2}L",
                            day.date.to_string(),
                            day.calories_consumed,
                            day.calories_burned,
                            day.net_calories(),
                            day.water_consumed
                        );
                    }
                }
            }
            return Ok(());
        }

        let progress = session.progress_on(date);
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&progress)?),
            OutputFormat::Text => print_progress(&progress, session.profile()),
        }
        Ok(())
    }
}

/// Net intake against the calorie target; the percentage is of net calories.
fn net_calories_line(progress: &DailyProgress, daily_calories: i32) -> String {
    format!(
        "Net calories:    {} / {} kcal ({:.0}%)",
        progress.net_calories(),
        daily_calories,
        progress.calories_percent(daily_calories)
    )
}

fn print_progress(progress: &DailyProgress, profile: Option<&UserProfile>) {
    println!("Progress for {}", progress.date);
    println!("{}", "=".repeat(60));

    let Some(profile) = profile else {
        println!("Calories eaten:  {} kcal", progress.calories_consumed);
        println!("Calories burned: {} kcal", progress.calories_burned);
        println!("Macros:          {}", progress.macros);
        println!("Water:           {:.2} L", progress.water_consumed);
        println!("Workouts:        {}", progress.workouts_completed);
        return;
    };

    let macros = profile.daily_macros();
    let percents = progress.macro_percents(macros);
    println!("Calories eaten:  {} kcal", progress.calories_consumed);
    println!("Calories burned: {} kcal", progress.calories_burned);
    println!("{}", net_calories_line(progress, profile.daily_calories()));
    println!(
        "Protein:         {:.0} / {} g ({:.0}%)",
        progress.macros.protein, macros.protein, percents.protein
    );
    println!(
        "Carbs:           {:.0} / {} g ({:.0}%)",
        progress.macros.carbs, macros.carbs, percents.carbs
    );
    println!(
        "Fat:             {:.0} / {} g ({:.0}%)",
        progress.macros.fat, macros.fat, percents.fat
    );
    println!(
        "Water:           {:.2} / {:.1} L ({:.0}%)",
        progress.water_consumed,
        profile.daily_water_goal(),
        progress.water_percent(profile.daily_water_goal())
    );
    println!("Workouts:        {}", progress.workouts_completed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nutri_core::Macros;

    fn day_with(consumed: u32, burned: u32) -> DailyProgress {
        DailyProgress {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            calories_consumed: consumed,
            calories_burned: burned,
            macros: Macros::new(0.0, 0.0, 0.0),
            water_consumed: 0.0,
            workouts_completed: usize::from(burned > 0),
        }
    }

    #[test]
    fn test_net_calories_line_after_workout() {
        let line = net_calories_line(&day_with(1500, 300), 2000);
        assert_eq!(line, "Net calories:    1200 / 2000 kcal (60%)");
    }

    #[test]
    fn test_net_calories_line_without_workout() {
        let line = net_calories_line(&day_with(500, 0), 2000);
        assert_eq!(line, "Net calories:    500 / 2000 kcal (25%)");
    }
}
