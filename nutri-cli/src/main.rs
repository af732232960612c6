use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{
    ActionsCommand, AppSession, ConfigCommand, FoodCommand, ProfileCommand, ProgressCommand,
    RecipeCommand, UndoCommand, WaterCommand, WeightCommand, WorkoutCommand,
};
use config::Config;
use nutri_core::{FileStore, Session};

#[derive(Parser)]
#[command(name = "nutri")]
#[command(version)]
#[command(about = "Track meals, water, weight and workouts against daily targets", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, show and update the profile and daily targets
    Profile(ProfileCommand),

    /// Log, remove and list foods
    Food(FoodCommand),

    /// Log water intake
    Water(WaterCommand),

    /// Record and review body weight
    Weight(WeightCommand),

    /// Log workouts and browse the exercise catalogue
    Workout(WorkoutCommand),

    /// Save and favourite recipes
    Recipe(RecipeCommand),

    /// Undo a logged food, water or workout
    Undo(UndoCommand),

    /// List recent actions
    Actions(ActionsCommand),

    /// Show daily or weekly progress
    Progress(ProgressCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Save config path for init command
    let cli_config_path = cli.config.clone();

    let config = Config::load(cli.config)?;
    init_logging(&config);

    execute_command(&cli.command, &config, cli_config_path)
}

fn init_logging(config: &Config) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_session(config: &Config) -> Result<AppSession, nutri_core::Error> {
    tracing::debug!("Opening data in {}", config.data_dir.value.display());
    Session::open(FileStore::new(config.data_dir.value.clone()))
}

fn execute_command(
    command: &Option<Commands>,
    config: &Config,
    cli_config_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Some(Commands::Profile(cmd)) => cmd.run(&mut open_session(config)?),
        Some(Commands::Food(cmd)) => cmd.run(&mut open_session(config)?),
        Some(Commands::Water(cmd)) => cmd.run(&mut open_session(config)?),
        Some(Commands::Weight(cmd)) => cmd.run(&mut open_session(config)?),
        Some(Commands::Workout(cmd)) => cmd.run(&mut open_session(config)?),
        Some(Commands::Recipe(cmd)) => cmd.run(&mut open_session(config)?),
        Some(Commands::Undo(cmd)) => cmd.run(&mut open_session(config)?),
        Some(Commands::Actions(cmd)) => cmd.run(&open_session(config)?),
        Some(Commands::Progress(cmd)) => cmd.run(&open_session(config)?),
        Some(Commands::Config(cmd)) => cmd.run(config, cli_config_path),
        None => {
            println!("Use --help to see available commands");
            Ok(())
        }
    }
}
