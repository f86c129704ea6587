//! Command implementations for the rosterctl CLI

pub mod budget;
pub mod doctor;
pub mod view;

// Re-export main dispatcher functions for flat access from main.rs
pub use budget::run_budget;
pub use doctor::run_doctor;
pub use view::run_view;

use clap::ValueEnum;

/// Output format shared by the non-interactive commands
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    #[default]
    Human,
    /// JSON output (for piping to jq)
    Json,
}
