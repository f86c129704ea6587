//! rosterctl - menu-driven employee roster management over SQLite
//!
//! Run with no arguments for the interactive menu. The subcommands cover the
//! scriptable surface:
//! - `view` lists departments, roles, or employees (human or JSON)
//! - `budget` totals the salary committed to one department
//! - `doctor` reports store location, size, and row counts

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use rosterctl_core::Database;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod menu;
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "rosterctl",
    author,
    version,
    about = "Manage departments, roles, and employees from the command line",
    long_about = "Menu-driven employee roster management over SQLite. Run without a \
                  subcommand for the interactive menu; use the subcommands for \
                  scriptable listings and diagnostics."
)]
struct Cli {
    /// Path to the roster database (created on first use)
    #[arg(long, env = "ROSTERCTL_DB", global = true)]
    db: Option<PathBuf>,

    /// Suppress the banner and decorative output (for script consumption)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List departments, roles, or employees without entering the menu
    View(commands::view::ViewArgs),
    /// Show the total salary budget for one department
    Budget(commands::budget::BudgetArgs),
    /// Store diagnostics: location, size, and row counts
    Doctor,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    // Initialize UI quiet mode from flag, env var, and TTY detection
    ui::init_quiet_mode(cli.quiet);

    let db_path = config::resolve_db_path(cli.db)?;
    let db = Database::open(db_path.clone())
        .with_context(|| format!("failed to open roster store at {}", db_path.display()))?;
    debug!("using store at {}", db_path.display());

    match cli.command {
        Some(Commands::View(args)) => commands::run_view(&db, args)?,
        Some(Commands::Budget(args)) => commands::run_budget(&db, args)?,
        Some(Commands::Doctor) => commands::run_doctor(&db)?,
        None => menu::run_menu(&db)?,
    }
    Ok(())
}
