//! Interactive menu loop
//!
//! The no-subcommand mode: a Select over every roster action, looping until
//! Exit. Each action prompts for its inputs with selection lists drawn from
//! the store, runs the operation, and prints a table or a result line.
//! Errors are reported and the loop continues; Esc backs out of any prompt.

use std::fmt;

use anyhow::Result;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, InquireError, Select, Text};
use rosterctl_core::{Database, SelectionItem};

use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    UpdateEmployeeManager,
    ViewByManager,
    ViewByDepartment,
    DeleteDepartment,
    DeleteRole,
    DeleteEmployee,
    ViewBudget,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 15] = [
        MenuAction::ViewDepartments,
        MenuAction::ViewRoles,
        MenuAction::ViewEmployees,
        MenuAction::AddDepartment,
        MenuAction::AddRole,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::UpdateEmployeeManager,
        MenuAction::ViewByManager,
        MenuAction::ViewByDepartment,
        MenuAction::DeleteDepartment,
        MenuAction::DeleteRole,
        MenuAction::DeleteEmployee,
        MenuAction::ViewBudget,
        MenuAction::Exit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::ViewDepartments => "View all departments",
            MenuAction::ViewRoles => "View all roles",
            MenuAction::ViewEmployees => "View all employees",
            MenuAction::AddDepartment => "Add a department",
            MenuAction::AddRole => "Add a role",
            MenuAction::AddEmployee => "Add an employee",
            MenuAction::UpdateEmployeeRole => "Update an employee role",
            MenuAction::UpdateEmployeeManager => "Update employee manager",
            MenuAction::ViewByManager => "View employees by manager",
            MenuAction::ViewByDepartment => "View employees by department",
            MenuAction::DeleteDepartment => "Delete department",
            MenuAction::DeleteRole => "Delete role",
            MenuAction::DeleteEmployee => "Delete employee",
            MenuAction::ViewBudget => "View department budget",
            MenuAction::Exit => "Exit",
        };
        f.write_str(label)
    }
}

/// A selection entry rendered as "label (#id)"
struct Pick(SelectionItem);

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.0.label, self.0.id)
    }
}

/// Manager selection entry; the sentinel keeps "no manager" choosable
enum ManagerChoice {
    Unmanaged,
    Employee(SelectionItem),
}

impl fmt::Display for ManagerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagerChoice::Unmanaged => f.write_str("None"),
            ManagerChoice::Employee(item) => write!(f, "{} (#{})", item.label, item.id),
        }
    }
}

pub fn run_menu(db: &Database) -> Result<()> {
    ui::banner();

    loop {
        let action = match Select::new("What would you like to do?", MenuAction::ALL.to_vec())
            .with_page_size(MenuAction::ALL.len())
            .prompt()
        {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        if action == MenuAction::Exit {
            break;
        }

        if let Err(err) = dispatch(db, action) {
            match err.downcast_ref::<InquireError>() {
                // Esc or Ctrl+C inside an action backs out to the menu
                Some(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {}
                _ => eprintln!("Error: {err}"),
            }
        }
        println!();
    }

    println!("Thanks for keeping the roster tidy. Goodbye!");
    Ok(())
}

fn dispatch(db: &Database, action: MenuAction) -> Result<()> {
    match action {
        MenuAction::ViewDepartments => view_departments(db),
        MenuAction::ViewRoles => view_roles(db),
        MenuAction::ViewEmployees => view_employees(db),
        MenuAction::AddDepartment => add_department(db),
        MenuAction::AddRole => add_role(db),
        MenuAction::AddEmployee => add_employee(db),
        MenuAction::UpdateEmployeeRole => update_employee_role(db),
        MenuAction::UpdateEmployeeManager => update_employee_manager(db),
        MenuAction::ViewByManager => view_by_manager(db),
        MenuAction::ViewByDepartment => view_by_department(db),
        MenuAction::DeleteDepartment => delete_department(db),
        MenuAction::DeleteRole => delete_role(db),
        MenuAction::DeleteEmployee => delete_employee(db),
        MenuAction::ViewBudget => view_budget(db),
        MenuAction::Exit => Ok(()),
    }
}

// ============================================================================
// Views
// ============================================================================

fn view_departments(db: &Database) -> Result<()> {
    let departments = db.list_departments()?;
    if departments.is_empty() {
        println!("No departments yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = departments
        .iter()
        .map(|d| vec![d.id.to_string(), d.name.clone()])
        .collect();
    ui::print_table(&["ID", "Name"], &rows);
    Ok(())
}

fn view_roles(db: &Database) -> Result<()> {
    let roles = db.list_roles()?;
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
    Ok(())
}

fn view_employees(db: &Database) -> Result<()> {
    let employees = db.list_employees()?;
    if employees.is_empty() {
        println!("The roster has no employees yet.");
        return Ok(());
    }

    print_employee_table(&employees);
    Ok(())
}

fn view_by_manager(db: &Database) -> Result<()> {
    let Some(manager) = pick_employee(db, "Whose direct reports?")? else {
        return Ok(());
    };

    let reports = db.employees_by_manager(manager.id)?;
    if reports.is_empty() {
        println!("{} has no direct reports.", manager.label);
        return Ok(());
    }
    print_employee_table(&reports);
    Ok(())
}

fn view_by_department(db: &Database) -> Result<()> {
    let Some(department) = pick_department(db, "Which department?")? else {
        return Ok(());
    };

    let members = db.employees_by_department(department.id)?;
    if members.is_empty() {
        println!("{} has no employees.", department.label);
        return Ok(());
    }
    print_employee_table(&members);
    Ok(())
}

fn view_budget(db: &Database) -> Result<()> {
    let Some(department) = pick_department(db, "Which department's budget?")? else {
        return Ok(());
    };

    match db.department_budget(department.id)? {
        Some(budget) => println!(
            "Total utilized budget for {}: {:.2}",
            budget.department, budget.total_budget
        ),
        None => println!("{} has no employees; no budget to report.", department.label),
    }
    Ok(())
}

// ============================================================================
// Adds
// ============================================================================

fn add_department(db: &Database) -> Result<()> {
    let name = Text::new("Department name:")
        .with_validator(required)
        .prompt()?;

    let department = db.add_department(name.trim())?;
    println!("Added department {} (id {}).", department.name, department.id);
    Ok(())
}

fn add_role(db: &Database) -> Result<()> {
    let Some(department) = pick_department(db, "Department for the role:")? else {
        return Ok(());
    };

    let title = Text::new("Role title:").with_validator(required).prompt()?;
    let salary = CustomType::<f64>::new("Salary:")
        .with_error_message("Please enter a number")
        .with_help_message("Annual salary, must be positive")
        .prompt()?;

    let role = db.add_role(title.trim(), salary, department.id)?;
    println!("Added role {} (id {}).", role.title, role.id);
    Ok(())
}

fn add_employee(db: &Database) -> Result<()> {
    let Some(role) = pick_role(db, "Role for the new employee:")? else {
        return Ok(());
    };

    let first_name = Text::new("First name:").with_validator(required).prompt()?;
    let last_name = Text::new("Last name:").with_validator(required).prompt()?;

    let mut options = vec![ManagerChoice::Unmanaged];
    options.extend(
        db.employees_for_selection()?
            .into_iter()
            .map(ManagerChoice::Employee),
    );
    let manager_id = match Select::new("Manager:", options).prompt()? {
        ManagerChoice::Unmanaged => None,
        ManagerChoice::Employee(item) => Some(item.id),
    };

    let employee = db.add_employee(first_name.trim(), last_name.trim(), role.id, manager_id)?;
    println!(
        "Added {} {} to the roster (id {}).",
        employee.first_name, employee.last_name, employee.id
    );
    Ok(())
}

// ============================================================================
// Updates
// ============================================================================

fn update_employee_role(db: &Database) -> Result<()> {
    let Some(employee) = pick_employee(db, "Which employee?")? else {
        return Ok(());
    };
    let Some(role) = pick_role(db, "New role:")? else {
        return Ok(());
    };

    db.update_employee_role(employee.id, role.id)?;
    println!("{} now holds {}.", employee.label, role.label);
    Ok(())
}

fn update_employee_manager(db: &Database) -> Result<()> {
    let Some(employee) = pick_employee(db, "Which employee?")? else {
        return Ok(());
    };

    // Self never appears; the store would reject it as a one-step loop anyway
    let mut options = vec![ManagerChoice::Unmanaged];
    options.extend(
        db.employees_for_selection()?
            .into_iter()
            .filter(|candidate| candidate.id != employee.id)
            .map(ManagerChoice::Employee),
    );
    let choice = Select::new("New manager:", options).prompt()?;

    match choice {
        ManagerChoice::Unmanaged => {
            db.update_employee_manager(employee.id, None)?;
            println!("{} no longer has a manager.", employee.label);
        }
        ManagerChoice::Employee(manager) => {
            db.update_employee_manager(employee.id, Some(manager.id))?;
            println!("{} now reports to {}.", employee.label, manager.label);
        }
    }
    Ok(())
}

// ============================================================================
// Deletes
// ============================================================================

fn delete_department(db: &Database) -> Result<()> {
    let Some(department) = pick_department(db, "Delete which department?")? else {
        return Ok(());
    };

    let confirmed = Confirm::new(&format!("Delete {}?", department.label))
        .with_default(false)
        .with_help_message("Its roles and their employees are deleted with it")
        .prompt()?;
    if !confirmed {
        println!("Nothing deleted.");
        return Ok(());
    }

    let deleted = db.delete_department(department.id)?;
    println!("Deleted department {} and everything under it.", deleted.name);
    Ok(())
}

fn delete_role(db: &Database) -> Result<()> {
    let Some(role) = pick_role(db, "Delete which role?")? else {
        return Ok(());
    };

    let confirmed = Confirm::new(&format!("Delete {}?", role.label))
        .with_default(false)
        .with_help_message("Employees holding this role are deleted with it")
        .prompt()?;
    if !confirmed {
        println!("Nothing deleted.");
        return Ok(());
    }

    let deleted = db.delete_role(role.id)?;
    println!("Deleted role {}.", deleted.title);
    Ok(())
}

fn delete_employee(db: &Database) -> Result<()> {
    let Some(employee) = pick_employee(db, "Delete which employee?")? else {
        return Ok(());
    };

    let confirmed = Confirm::new(&format!("Delete {}?", employee.label))
        .with_default(false)
        .with_help_message("Their reports keep their jobs, with no manager assigned")
        .prompt()?;
    if !confirmed {
        println!("Nothing deleted.");
        return Ok(());
    }

    let deleted = db.delete_employee(employee.id)?;
    println!("Deleted {} {}.", deleted.first_name, deleted.last_name);
    Ok(())
}

// ============================================================================
// Prompt helpers
// ============================================================================

fn required(input: &str) -> Result<Validation, inquire::CustomUserError> {
    if input.trim().is_empty() {
        Ok(Validation::Invalid("A value is required".into()))
    } else {
        Ok(Validation::Valid)
    }
}

fn pick_department(db: &Database, prompt: &str) -> Result<Option<SelectionItem>> {
    let departments = db.departments_for_selection()?;
    if departments.is_empty() {
        println!("No departments yet; add one first.");
        return Ok(None);
    }
    let pick = Select::new(prompt, departments.into_iter().map(Pick).collect()).prompt()?;
    Ok(Some(pick.0))
}

fn pick_role(db: &Database, prompt: &str) -> Result<Option<SelectionItem>> {
    let roles = db.roles_for_selection()?;
    if roles.is_empty() {
        println!("No roles yet; add one first.");
        return Ok(None);
    }
    let pick = Select::new(prompt, roles.into_iter().map(Pick).collect()).prompt()?;
    Ok(Some(pick.0))
}

fn pick_employee(db: &Database, prompt: &str) -> Result<Option<SelectionItem>> {
    let employees = db.employees_for_selection()?;
    if employees.is_empty() {
        println!("The roster has no employees yet.");
        return Ok(None);
    }
    let pick = Select::new(prompt, employees.into_iter().map(Pick).collect()).prompt()?;
    Ok(Some(pick.0))
}

fn print_employee_table(employees: &[rosterctl_core::EmployeeOverview]) {
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
