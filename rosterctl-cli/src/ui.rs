//! Output helpers for the rosterctl CLI
//!
//! # Quiet Mode
//!
//! The banner is suppressed when:
//! - `--quiet` flag is passed
//! - `ROSTERCTL_QUIET=1` environment variable is set
//! - stdout is not a TTY (piped output)
//!
//! Tables and result lines always print; they are the data.

use std::io::IsTerminal;
use std::sync::OnceLock;

/// Global quiet mode state
static QUIET_MODE: OnceLock<bool> = OnceLock::new();

/// Initialize quiet mode from flags and environment
///
/// Call this once at startup with the --quiet flag value.
pub fn init_quiet_mode(quiet_flag: bool) {
    let is_quiet = quiet_flag
        || std::env::var("ROSTERCTL_QUIET")
            .map(|v| v == "1")
            .unwrap_or(false)
        || !std::io::stdout().is_terminal();

    QUIET_MODE.set(is_quiet).ok();
}

/// Check if we're in quiet mode
pub fn is_quiet() -> bool {
    *QUIET_MODE.get().unwrap_or(&false)
}

pub fn banner() {
    if is_quiet() {
        return;
    }
    println!();
    println!("===============================");
    println!("        ROSTER MANAGER         ");
    println!("===============================");
    println!();
}

/// Print rows as fixed-width columns with a header rule.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w))
        .collect();
    println!("{}", header.join("  "));

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", rule.join("  "));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect();
        println!("{}", cells.join("  "));
    }
}
