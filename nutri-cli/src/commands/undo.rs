use clap::Args;

use super::{parse_id, AppSession, CommandResult, OutputFormat};
use nutri_core::Action;

/// Undo a logged food, water or workout
#[derive(Args)]
pub struct UndoCommand {
    /// Action ID (UUID), defaults to the most recent action
    action_id: Option<String>,
}

impl UndoCommand {
    pub fn run(&self, session: &mut AppSession) -> CommandResult {
        let action_id = match &self.action_id {
            Some(id) => parse_id(id, "action")?,
            None => match session.actions().last() {
                Some(action) => action.id,
                None => {
                    println!("Nothing to undo");
                    return Ok(());
                }
            },
        };

        let description = session
            .actions()
            .iter()
            .find(|a| a.id == action_id)
            .map(|a| a.entry.to_string());
        if session.undo(action_id)? {
            println!("Undone: {}", description.unwrap_or_default());
        } else {
            println!("No action with ID {}", action_id);
        }
        Ok(())
    }
}

/// List recent actions, newest first
#[derive(Args)]
pub struct ActionsCommand {
    #[arg(long, short, default_value = "10")]
    limit: usize,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl ActionsCommand {
    pub fn run(&self, session: &AppSession) -> CommandResult {
        let actions = session.recent_actions(self.limit);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&actions)?),
            OutputFormat::Text => {
                if actions.is_empty() {
                    println!("No actions recorded");
                    return Ok(());
                }
                for action in actions {
                    print_action(action);
                }
            }
        }
        Ok(())
    }
}

fn print_action(action: &Action) {
    println!(
        "{}  {}",
        action.timestamp.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
        action.entry
    );
    println!("    {}", action.id);
}
