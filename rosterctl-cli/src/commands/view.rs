//! Non-interactive listings

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rosterctl_core::Database;

use super::OutputFormat;
use crate::ui;

#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// Which roster table to list
    #[arg(value_enum)]
    pub target: ViewTarget,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ViewTarget {
    Departments,
    Roles,
    Employees,
}

pub fn run_view(db: &Database, args: ViewArgs) -> Result<()> {
    match args.target {
        ViewTarget::Departments => {
            let departments = db.list_departments()?;
            match args.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&departments)?)
                }
                OutputFormat::Human => {
                    if departments.is_empty() {
                        println!("No departments yet.");
                        return Ok(());
                    }
                    let rows: Vec<Vec<String>> = departments
                        .iter()
                        .map(|d| vec![d.id.to_string(), d.name.clone()])
                        .collect();
                    ui::print_table(&["ID", "Name"], &rows);
                }
            }
        }
        ViewTarget::Roles => {
            let roles = db.list_roles()?;
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&roles)?),
                OutputFormat::Human => {
                    if roles.is_empty() {
                        println!("No roles yet.");
                        return Ok(());
                    }
                    let rows: Vec<Vec<String>> = roles
                        .iter()
                        .map(|r| {
                            vec![
                                r.id.to_string(),
                                r.title.clone(),
                                r.department.clone(),
                                format!("{:.2}", r.salary),
                            ]
                        })
                        .collect();
                    ui::print_table(&["ID", "Title", "Department", "Salary"], &rows);
                }
            }
        }
        ViewTarget::Employees => {
            let employees = db.list_employees()?;
            match args.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&employees)?)
                }
                OutputFormat::Human => {
                    if employees.is_empty() {
                        println!("The roster has no employees yet.");
                        return Ok(());
                    }
                    let rows: Vec<Vec<String>> = employees
                        .iter()
                        .map(|e| {
                            vec![
                                e.id.to_string(),
                                e.first_name.clone(),
                                e.last_name.clone(),
                                e.title.clone(),
                                e.department.clone(),
                                format!("{:.2}", e.salary),
                                e.manager.clone().unwrap_or_default(),
                            ]
                        })
                        .collect();
                    ui::print_table(
                        &["ID", "First Name", "Last Name", "Title", "Department", "Salary", "Manager"],
                        &rows,
                    );
                }
            }
        }
    }
    Ok(())
}
