//! Row and projection models for the roster store

use serde::{Deserialize, Serialize};

// ============================================================================
// Departments
// ============================================================================

/// A department row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// Total salary committed to one department's employees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentBudget {
    pub department: String,
    pub total_budget: f64,
}

// ============================================================================
// Roles
// ============================================================================

/// A role row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

/// A role joined with its department name (for listing)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleOverview {
    pub id: i64,
    pub title: String,
    pub department: String,
    pub salary: f64,
}

// ============================================================================
// Employees
// ============================================================================

/// An employee row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

/// An employee joined with role, department, and manager name.
///
/// `manager` is `None` for employees at the top of their chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeOverview {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: String,
    pub salary: f64,
    pub manager: Option<String>,
}

// ============================================================================
// Presentation support
// ============================================================================

/// An `{id, label}` pair for building choice menus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionItem {
    pub id: i64,
    pub label: String,
}

/// Row counts per table (diagnostics)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableCounts {
    pub departments: i64,
    pub roles: i64,
    pub employees: i64,
}
