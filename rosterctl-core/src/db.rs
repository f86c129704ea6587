//! SQLite access layer for the roster store
//!
//! Uses rusqlite with an idempotent schema applied on open. Referential
//! integrity lives in the store: department deletes cascade through roles to
//! employees, role deletes cascade to employees, and deleting a manager sets
//! their reports' `manager_id` to NULL. The one rule SQLite cannot express,
//! manager-graph acyclicity, is checked here before any manager update.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension, ToSql};
use tracing::debug;

use crate::error::{Result, RosterError};
use crate::models::*;

/// Thread-safe store wrapper
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

/// Shared join chain for every employee listing: role and department via
/// inner joins, manager name via a self join that may miss.
const EMPLOYEE_SELECT: &str = r#"
    SELECT e.id, e.first_name, e.last_name, r.title, d.name, r.salary,
           m.first_name || ' ' || m.last_name AS manager
    FROM employee e
    JOIN role r ON e.role_id = r.id
    JOIN department d ON r.department_id = d.id
    LEFT JOIN employee m ON e.manager_id = m.id
"#;

impl Database {
    /// Open or create the store at the given path
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        };

        db.run_migrations()?;
        debug!("opened roster store at {}", db.path.display());
        Ok(db)
    }

    /// Open an in-memory store (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: PathBuf::from(":memory:"),
        };
        db.run_migrations()?;
        Ok(db)
    }

    /// Get the store file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get store file size in bytes
    pub fn size_bytes(&self) -> Option<u64> {
        std::fs::metadata(&self.path).ok().map(|m| m.len())
    }

    /// Apply schema and indexes; foreign keys are per-connection in SQLite
    /// and must be switched on before any data touches the tables.
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        conn.execute_batch(SCHEMA)?;
        conn.execute_batch(INDEXES)?;

        Ok(())
    }

    // ========================================================================
    // Departments
    // ========================================================================

    pub fn list_departments(&self) -> Result<Vec<Department>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, name FROM department ORDER BY id")?;

        let departments = stmt
            .query_map([], |row| {
                Ok(Department {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(departments)
    }

    pub fn add_department(&self, name: &str) -> Result<Department> {
        let conn = self.conn.lock().unwrap();
        conn.execute("INSERT INTO department (name) VALUES (?)", params![name])
            .map_err(RosterError::from_write)?;

        Ok(Department {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Delete a department and, through the store's cascade rules, every
    /// role in it and every employee holding one of those roles.
    pub fn delete_department(&self, id: i64) -> Result<Department> {
        let conn = self.conn.lock().unwrap();
        let department = conn
            .query_row(
                "SELECT id, name FROM department WHERE id = ?",
                params![id],
                |row| {
                    Ok(Department {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| RosterError::not_found("department", id))?;

        conn.execute("DELETE FROM department WHERE id = ?", params![id])?;
        debug!(
            "deleted department {} ({}) with its roles and employees",
            department.id, department.name
        );

        Ok(department)
    }

    /// Sum of role salaries over a department's employees.
    ///
    /// Returns `None` when the department has no employees, so callers can
    /// tell "empty" apart from a zero budget.
    pub fn department_budget(&self, department_id: i64) -> Result<Option<DepartmentBudget>> {
        let conn = self.conn.lock().unwrap();
        let budget = conn
            .query_row(
                r#"
                SELECT d.name, SUM(r.salary)
                FROM employee e
                JOIN role r ON e.role_id = r.id
                JOIN department d ON r.department_id = d.id
                WHERE d.id = ?
                GROUP BY d.name
                "#,
                params![department_id],
                |row| {
                    Ok(DepartmentBudget {
                        department: row.get(0)?,
                        total_budget: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(budget)
    }

    // ========================================================================
    // Roles
    // ========================================================================

    pub fn list_roles(&self) -> Result<Vec<RoleOverview>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            r#"
            SELECT r.id, r.title, d.name, r.salary
            FROM role r
            JOIN department d ON r.department_id = d.id
            ORDER BY r.id
            "#,
        )?;

        let roles = stmt
            .query_map([], |row| {
                Ok(RoleOverview {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    department: row.get(2)?,
                    salary: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(roles)
    }

    pub fn add_role(&self, title: &str, salary: f64, department_id: i64) -> Result<Role> {
        let conn = self.conn.lock().unwrap();
        if !exists(&conn, "department", department_id)? {
            return Err(RosterError::missing_reference("department", department_id));
        }

        conn.execute(
            "INSERT INTO role (title, salary, department_id) VALUES (?, ?, ?)",
            params![title, salary, department_id],
        )
        .map_err(RosterError::from_write)?;

        Ok(Role {
            id: conn.last_insert_rowid(),
            title: title.to_string(),
            salary,
            department_id,
        })
    }

    /// Delete a role and, through the store's cascade rule, every employee
    /// holding it. The owning department is untouched.
    pub fn delete_role(&self, id: i64) -> Result<Role> {
        let conn = self.conn.lock().unwrap();
        let role = conn
            .query_row(
                "SELECT id, title, salary, department_id FROM role WHERE id = ?",
                params![id],
                |row| {
                    Ok(Role {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        salary: row.get(2)?,
                        department_id: row.get(3)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| RosterError::not_found("role", id))?;

        conn.execute("DELETE FROM role WHERE id = ?", params![id])?;
        debug!("deleted role {} ({}) with its employees", role.id, role.title);

        Ok(role)
    }

    // ========================================================================
    // Employees
    // ========================================================================

    pub fn list_employees(&self) -> Result<Vec<EmployeeOverview>> {
        self.employees_where("", params![])
    }

    pub fn employees_by_manager(&self, manager_id: i64) -> Result<Vec<EmployeeOverview>> {
        self.employees_where("WHERE e.manager_id = ?", params![manager_id])
    }

    pub fn employees_by_department(&self, department_id: i64) -> Result<Vec<EmployeeOverview>> {
        self.employees_where("WHERE r.department_id = ?", params![department_id])
    }

    fn employees_where(&self, clause: &str, args: &[&dyn ToSql]) -> Result<Vec<EmployeeOverview>> {
        let conn = self.conn.lock().unwrap();
        let sql = format!("{EMPLOYEE_SELECT} {clause} ORDER BY e.id");
        let mut stmt = conn.prepare(&sql)?;

        let employees = stmt
            .query_map(args, |row| {
                Ok(EmployeeOverview {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    title: row.get(3)?,
                    department: row.get(4)?,
                    salary: row.get(5)?,
                    manager: row.get(6)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(employees)
    }

    pub fn add_employee(
        &self,
        first_name: &str,
        last_name: &str,
        role_id: i64,
        manager_id: Option<i64>,
    ) -> Result<Employee> {
        let conn = self.conn.lock().unwrap();
        if !exists(&conn, "role", role_id)? {
            return Err(RosterError::missing_reference("role", role_id));
        }
        if let Some(manager_id) = manager_id {
            if !exists(&conn, "employee", manager_id)? {
                return Err(RosterError::missing_reference("employee", manager_id));
            }
        }

        conn.execute(
            "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES (?, ?, ?, ?)",
            params![first_name, last_name, role_id, manager_id],
        )
        .map_err(RosterError::from_write)?;

        Ok(Employee {
            id: conn.last_insert_rowid(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role_id,
            manager_id,
        })
    }

    pub fn update_employee_role(&self, employee_id: i64, role_id: i64) -> Result<Employee> {
        let conn = self.conn.lock().unwrap();
        if !exists(&conn, "employee", employee_id)? {
            return Err(RosterError::not_found("employee", employee_id));
        }
        if !exists(&conn, "role", role_id)? {
            return Err(RosterError::missing_reference("role", role_id));
        }

        conn.execute(
            "UPDATE employee SET role_id = ? WHERE id = ?",
            params![role_id, employee_id],
        )
        .map_err(RosterError::from_write)?;

        get_employee(&conn, employee_id)?
            .ok_or_else(|| RosterError::not_found("employee", employee_id))
    }

    /// Reassign (or clear) an employee's manager.
    ///
    /// Rejects any assignment that would loop the management graph,
    /// self-assignment included.
    pub fn update_employee_manager(
        &self,
        employee_id: i64,
        manager_id: Option<i64>,
    ) -> Result<Employee> {
        let conn = self.conn.lock().unwrap();
        if !exists(&conn, "employee", employee_id)? {
            return Err(RosterError::not_found("employee", employee_id));
        }
        if let Some(manager_id) = manager_id {
            if !exists(&conn, "employee", manager_id)? {
                return Err(RosterError::missing_reference("employee", manager_id));
            }
            if creates_cycle(&conn, employee_id, manager_id)? {
                return Err(RosterError::manager_cycle(employee_id, manager_id));
            }
        }

        conn.execute(
            "UPDATE employee SET manager_id = ? WHERE id = ?",
            params![manager_id, employee_id],
        )
        .map_err(RosterError::from_write)?;

        get_employee(&conn, employee_id)?
            .ok_or_else(|| RosterError::not_found("employee", employee_id))
    }

    /// Delete an employee. Their reports survive with `manager_id` cleared
    /// by the store's SET NULL rule; deleting a manager never deletes reports.
    pub fn delete_employee(&self, id: i64) -> Result<Employee> {
        let conn = self.conn.lock().unwrap();
        let employee =
            get_employee(&conn, id)?.ok_or_else(|| RosterError::not_found("employee", id))?;

        conn.execute("DELETE FROM employee WHERE id = ?", params![id])?;
        debug!(
            "deleted employee {} ({} {}); reports keep their jobs unmanaged",
            employee.id, employee.first_name, employee.last_name
        );

        Ok(employee)
    }

    // ========================================================================
    // Selection lists
    // ========================================================================

    pub fn departments_for_selection(&self) -> Result<Vec<SelectionItem>> {
        self.selection("SELECT id, name FROM department ORDER BY name")
    }

    pub fn roles_for_selection(&self) -> Result<Vec<SelectionItem>> {
        self.selection("SELECT id, title FROM role ORDER BY title")
    }

    pub fn employees_for_selection(&self) -> Result<Vec<SelectionItem>> {
        self.selection(
            "SELECT id, first_name || ' ' || last_name AS name FROM employee ORDER BY name",
        )
    }

    fn selection(&self, sql: &str) -> Result<Vec<SelectionItem>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(sql)?;

        let items = stmt
            .query_map([], |row| {
                Ok(SelectionItem {
                    id: row.get(0)?,
                    label: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(items)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    pub fn counts(&self) -> Result<TableCounts> {
        let conn = self.conn.lock().unwrap();
        let count = |table: &str| -> rusqlite::Result<i64> {
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
        };

        Ok(TableCounts {
            departments: count("department")?,
            roles: count("role")?,
            employees: count("employee")?,
        })
    }
}

// ============================================================================
// Schema
// ============================================================================

const SCHEMA: &str = r#"
-- Department table: root of the hierarchy
CREATE TABLE IF NOT EXISTS department (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0)
);

-- Role table: owned by exactly one department
CREATE TABLE IF NOT EXISTS role (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(trim(title)) > 0),
    salary REAL NOT NULL CHECK (salary > 0),
    department_id INTEGER NOT NULL REFERENCES department(id) ON DELETE CASCADE
);

-- Employee table: role required, manager optional and never self
CREATE TABLE IF NOT EXISTS employee (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL CHECK (length(trim(first_name)) > 0),
    last_name TEXT NOT NULL CHECK (length(trim(last_name)) > 0),
    role_id INTEGER NOT NULL REFERENCES role(id) ON DELETE CASCADE,
    manager_id INTEGER REFERENCES employee(id) ON DELETE SET NULL,
    CHECK (manager_id IS NULL OR manager_id <> id)
);
"#;

const INDEXES: &str = r#"
-- Indexes for the join chains and cascade lookups
CREATE INDEX IF NOT EXISTS idx_role_department ON role(department_id);
CREATE INDEX IF NOT EXISTS idx_employee_role ON employee(role_id);
CREATE INDEX IF NOT EXISTS idx_employee_manager ON employee(manager_id);
"#;

// ============================================================================
// Helpers
// ============================================================================

fn exists(conn: &Connection, table: &str, id: i64) -> Result<bool> {
    let sql = format!("SELECT 1 FROM {table} WHERE id = ?");
    let found = conn
        .query_row(&sql, params![id], |_| Ok(()))
        .optional()?
        .is_some();
    Ok(found)
}

fn get_employee(conn: &Connection, id: i64) -> Result<Option<Employee>> {
    let employee = conn
        .query_row(
            "SELECT id, first_name, last_name, role_id, manager_id FROM employee WHERE id = ?",
            params![id],
            |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    role_id: row.get(3)?,
                    manager_id: row.get(4)?,
                })
            },
        )
        .optional()?;
    Ok(employee)
}

/// Walk the manager chain upward from `manager_id`; assigning it to
/// `employee_id` loops iff the walk reaches `employee_id`. The visited set
/// guards against pre-existing loops elsewhere in the data.
fn creates_cycle(conn: &Connection, employee_id: i64, manager_id: i64) -> Result<bool> {
    let mut seen = HashSet::new();
    let mut cursor = Some(manager_id);

    while let Some(current) = cursor {
        if current == employee_id {
            return Ok(true);
        }
        if !seen.insert(current) {
            return Ok(false);
        }
        cursor = conn
            .query_row(
                "SELECT manager_id FROM employee WHERE id = ?",
                params![current],
                |row| row.get::<_, Option<i64>>(0),
            )
            .optional()?
            .flatten();
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The Sales scenario: one department, one 50k role, Ann managing Bob.
    fn sales_fixture(db: &Database) -> (Department, Role, Employee, Employee) {
        let sales = db.add_department("Sales").unwrap();
        let rep = db.add_role("Rep", 50000.0, sales.id).unwrap();
        let ann = db.add_employee("Ann", "Lee", rep.id, None).unwrap();
        let bob = db.add_employee("Bob", "Cho", rep.id, Some(ann.id)).unwrap();
        (sales, rep, ann, bob)
    }

    #[test]
    fn test_department_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let created = db.add_department("Engineering").unwrap();

        let departments = db.list_departments().unwrap();
        let matches: Vec<_> = departments
            .iter()
            .filter(|d| d.name == "Engineering")
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, created.id);
    }

    #[test]
    fn test_duplicate_department_name_rejected() {
        let db = Database::open_in_memory().unwrap();
        db.add_department("Engineering").unwrap();

        let err = db.add_department("Engineering").unwrap_err();
        assert!(matches!(err, RosterError::Constraint { .. }));
        assert_eq!(db.counts().unwrap().departments, 1);
    }

    #[test]
    fn test_blank_department_name_rejected() {
        let db = Database::open_in_memory().unwrap();
        let err = db.add_department("   ").unwrap_err();
        assert!(matches!(err, RosterError::Constraint { .. }));
    }

    #[test]
    fn test_add_role_requires_department() {
        let db = Database::open_in_memory().unwrap();
        let err = db.add_role("Ghost", 1000.0, 99).unwrap_err();
        assert!(matches!(
            err,
            RosterError::MissingReference {
                entity: "department",
                id: 99
            }
        ));
    }

    #[test]
    fn test_add_role_rejects_non_positive_salary() {
        let db = Database::open_in_memory().unwrap();
        let (sales, _, _, _) = sales_fixture(&db);

        let err = db.add_role("X", -5.0, sales.id).unwrap_err();
        assert!(matches!(err, RosterError::Constraint { .. }));
        assert_eq!(db.counts().unwrap().roles, 1);

        let err = db.add_role("Y", 0.0, sales.id).unwrap_err();
        assert!(matches!(err, RosterError::Constraint { .. }));
        assert_eq!(db.counts().unwrap().roles, 1);
    }

    #[test]
    fn test_list_roles_includes_department_name() {
        let db = Database::open_in_memory().unwrap();
        let (_, rep, _, _) = sales_fixture(&db);

        let roles = db.list_roles().unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].id, rep.id);
        assert_eq!(roles[0].title, "Rep");
        assert_eq!(roles[0].department, "Sales");
        assert_eq!(roles[0].salary, 50000.0);
    }

    #[test]
    fn test_list_employees_resolves_manager_names() {
        let db = Database::open_in_memory().unwrap();
        let (_, _, ann, bob) = sales_fixture(&db);

        let employees = db.list_employees().unwrap();
        assert_eq!(employees.len(), 2);

        let ann_row = employees.iter().find(|e| e.id == ann.id).unwrap();
        assert_eq!(ann_row.manager, None);
        assert_eq!(ann_row.department, "Sales");

        let bob_row = employees.iter().find(|e| e.id == bob.id).unwrap();
        assert_eq!(bob_row.manager.as_deref(), Some("Ann Lee"));
        assert_eq!(bob_row.title, "Rep");
    }

    #[test]
    fn test_add_employee_requires_role_and_manager() {
        let db = Database::open_in_memory().unwrap();
        let (_, rep, _, _) = sales_fixture(&db);

        let err = db.add_employee("No", "Role", 99, None).unwrap_err();
        assert!(matches!(
            err,
            RosterError::MissingReference { entity: "role", .. }
        ));

        let err = db.add_employee("No", "Boss", rep.id, Some(99)).unwrap_err();
        assert!(matches!(
            err,
            RosterError::MissingReference {
                entity: "employee",
                id: 99
            }
        ));
    }

    #[test]
    fn test_update_employee_role() {
        let db = Database::open_in_memory().unwrap();
        let (sales, _, _, bob) = sales_fixture(&db);
        let lead = db.add_role("Lead", 70000.0, sales.id).unwrap();

        let updated = db.update_employee_role(bob.id, lead.id).unwrap();
        assert_eq!(updated.role_id, lead.id);

        let err = db.update_employee_role(99, lead.id).unwrap_err();
        assert!(matches!(
            err,
            RosterError::NotFound {
                entity: "employee",
                id: 99
            }
        ));

        let err = db.update_employee_role(bob.id, 99).unwrap_err();
        assert!(matches!(
            err,
            RosterError::MissingReference { entity: "role", .. }
        ));
    }

    #[test]
    fn test_update_employee_manager() {
        let db = Database::open_in_memory().unwrap();
        let (_, rep, ann, bob) = sales_fixture(&db);
        let cat = db.add_employee("Cat", "Doe", rep.id, None).unwrap();

        let updated = db.update_employee_manager(cat.id, Some(ann.id)).unwrap();
        assert_eq!(updated.manager_id, Some(ann.id));

        let cleared = db.update_employee_manager(bob.id, None).unwrap();
        assert_eq!(cleared.manager_id, None);

        let err = db.update_employee_manager(bob.id, Some(99)).unwrap_err();
        assert!(matches!(
            err,
            RosterError::MissingReference {
                entity: "employee",
                id: 99
            }
        ));
    }

    #[test]
    fn test_manager_self_assignment_rejected() {
        let db = Database::open_in_memory().unwrap();
        let (_, _, ann, _) = sales_fixture(&db);

        let err = db.update_employee_manager(ann.id, Some(ann.id)).unwrap_err();
        assert!(matches!(err, RosterError::ManagerCycle { .. }));

        // Nothing was written
        let employees = db.list_employees().unwrap();
        let ann_row = employees.iter().find(|e| e.id == ann.id).unwrap();
        assert_eq!(ann_row.manager, None);
    }

    #[test]
    fn test_manager_cycle_rejected() {
        let db = Database::open_in_memory().unwrap();
        let (_, rep, ann, bob) = sales_fixture(&db);
        // ann <- bob <- carl; pointing ann at carl would close the loop
        let carl = db.add_employee("Carl", "Ngo", rep.id, Some(bob.id)).unwrap();

        let err = db.update_employee_manager(ann.id, Some(carl.id)).unwrap_err();
        assert!(matches!(
            err,
            RosterError::ManagerCycle {
                employee_id,
                manager_id
            } if employee_id == ann.id && manager_id == carl.id
        ));

        // A sideways move stays legal
        db.update_employee_manager(carl.id, Some(ann.id)).unwrap();
    }

    #[test]
    fn test_employees_by_manager_scenario() {
        let db = Database::open_in_memory().unwrap();
        let (_, _, ann, bob) = sales_fixture(&db);

        let reports = db.employees_by_manager(ann.id).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, bob.id);
        assert_eq!(reports[0].first_name, "Bob");
        assert_eq!(reports[0].last_name, "Cho");

        assert!(db.employees_by_manager(bob.id).unwrap().is_empty());
    }

    #[test]
    fn test_employees_by_department() {
        let db = Database::open_in_memory().unwrap();
        let (sales, _, _, _) = sales_fixture(&db);
        let ops = db.add_department("Operations").unwrap();

        let members = db.employees_by_department(sales.id).unwrap();
        assert_eq!(members.len(), 2);
        assert!(db.employees_by_department(ops.id).unwrap().is_empty());
    }

    #[test]
    fn test_department_budget() {
        let db = Database::open_in_memory().unwrap();
        let (sales, _, _, _) = sales_fixture(&db);

        let budget = db.department_budget(sales.id).unwrap().unwrap();
        assert_eq!(budget.department, "Sales");
        assert_eq!(budget.total_budget, 100000.0);

        // A department with roles but no employees reports no data, not zero
        let ops = db.add_department("Operations").unwrap();
        db.add_role("Clerk", 30000.0, ops.id).unwrap();
        assert!(db.department_budget(ops.id).unwrap().is_none());

        assert!(db.department_budget(99).unwrap().is_none());
    }

    #[test]
    fn test_delete_department_cascades() {
        let db = Database::open_in_memory().unwrap();
        let (sales, _, _, _) = sales_fixture(&db);
        let ops = db.add_department("Operations").unwrap();
        let clerk = db.add_role("Clerk", 30000.0, ops.id).unwrap();
        db.add_employee("Dee", "Park", clerk.id, None).unwrap();

        let deleted = db.delete_department(sales.id).unwrap();
        assert_eq!(deleted.name, "Sales");

        // Sales roles and employees are gone; Operations is untouched
        let counts = db.counts().unwrap();
        assert_eq!(counts.departments, 1);
        assert_eq!(counts.roles, 1);
        assert_eq!(counts.employees, 1);
        assert!(db.list_roles().unwrap().iter().all(|r| r.department == "Operations"));
    }

    #[test]
    fn test_delete_role_cascades_employees_only() {
        let db = Database::open_in_memory().unwrap();
        let (_, rep, _, _) = sales_fixture(&db);

        let deleted = db.delete_role(rep.id).unwrap();
        assert_eq!(deleted.title, "Rep");

        let counts = db.counts().unwrap();
        assert_eq!(counts.employees, 0);
        assert_eq!(counts.departments, 1);
    }

    #[test]
    fn test_delete_employee_clears_reports() {
        let db = Database::open_in_memory().unwrap();
        let (_, _, ann, bob) = sales_fixture(&db);

        let deleted = db.delete_employee(ann.id).unwrap();
        assert_eq!(deleted.first_name, "Ann");

        // Bob survives, now unmanaged
        let employees = db.list_employees().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, bob.id);
        assert_eq!(employees[0].manager, None);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let db = Database::open_in_memory().unwrap();

        assert!(matches!(
            db.delete_department(99).unwrap_err(),
            RosterError::NotFound { entity: "department", .. }
        ));
        assert!(matches!(
            db.delete_role(99).unwrap_err(),
            RosterError::NotFound { entity: "role", .. }
        ));
        assert!(matches!(
            db.delete_employee(99).unwrap_err(),
            RosterError::NotFound { entity: "employee", .. }
        ));
    }

    #[test]
    fn test_selection_lists_ordered_by_label() {
        let db = Database::open_in_memory().unwrap();
        let (sales, rep, _, _) = sales_fixture(&db);
        db.add_department("Engineering").unwrap();
        db.add_role("Analyst", 60000.0, sales.id).unwrap();
        db.add_employee("Zoe", "Abe", rep.id, None).unwrap();

        let departments = db.departments_for_selection().unwrap();
        let labels: Vec<_> = departments.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Engineering", "Sales"]);

        let roles = db.roles_for_selection().unwrap();
        let labels: Vec<_> = roles.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Analyst", "Rep"]);

        let employees = db.employees_for_selection().unwrap();
        let labels: Vec<_> = employees.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Ann Lee", "Bob Cho", "Zoe Abe"]);
    }

    #[test]
    fn test_counts() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.counts().unwrap().departments, 0);

        sales_fixture(&db);
        let counts = db.counts().unwrap();
        assert_eq!(counts.departments, 1);
        assert_eq!(counts.roles, 1);
        assert_eq!(counts.employees, 2);
    }
}
