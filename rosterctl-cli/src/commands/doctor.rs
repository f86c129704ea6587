//! Store diagnostics

use anyhow::Result;
use rosterctl_core::Database;

pub fn run_doctor(db: &Database) -> Result<()> {
    println!("Store: {}", db.path().display());
    match db.size_bytes() {
        Some(bytes) => println!("Size: {bytes} bytes"),
        None => println!("Size: unavailable"),
    }

    let counts = db.counts()?;
    println!("Departments: {}", counts.departments);
    println!("Roles: {}", counts.roles);
    println!("Employees: {}", counts.employees);
    Ok(())
}
