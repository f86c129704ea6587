//! Department budget command

use anyhow::Result;
use clap::Parser;
use rosterctl_core::Database;

use super::OutputFormat;

#[derive(Parser, Debug)]
pub struct BudgetArgs {
    /// Department id (see `rosterctl view departments`)
    pub department_id: i64,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

pub fn run_budget(db: &Database, args: BudgetArgs) -> Result<()> {
    let budget = db.department_budget(args.department_id)?;

    match args.format {
        // None serializes as null, keeping "no data" distinct from zero
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&budget)?),
        OutputFormat::Human => match budget {
            Some(budget) => println!(
                "Total utilized budget for {}: {:.2}",
                budget.department, budget.total_budget
            ),
            None => println!(
                "Department {} has no employees; no budget to report.",
                args.department_id
            ),
        },
    }
    Ok(())
}
