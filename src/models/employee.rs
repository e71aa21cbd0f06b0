//! Employee model and related types.
//!
//! This module defines the Employee struct and Role enum for representing
//! workers in the payroll register, together with the salary rule and the
//! console display form.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of roles an employee can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A people or project manager.
    Manager,
    /// A software developer.
    Developer,
    /// An intern on a fixed engagement.
    Intern,
}

impl Role {
    /// Returns the canonical capitalized label, as stored in the roster file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Developer => "Developer",
            Role::Intern => "Intern",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name one of the three roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized role '{input}'")]
pub struct ParseRoleError {
    /// The string that failed to match a role.
    pub input: String,
}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Matches case-insensitively, so `"manager"`, `"Manager"`, and
    /// `"MANAGER"` all parse to [`Role::Manager`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("manager") {
            Ok(Role::Manager)
        } else if s.eq_ignore_ascii_case("developer") {
            Ok(Role::Developer)
        } else if s.eq_ignore_ascii_case("intern") {
            Ok(Role::Intern)
        } else {
            Err(ParseRoleError {
                input: s.to_string(),
            })
        }
    }
}

/// Represents one employee on the roster.
///
/// All fields are validated at interactive input time; construction itself
/// has no failure modes, and records loaded from disk are not re-validated.
///
/// # Examples
///
/// ```
/// use payroll_register::models::{Employee, Role};
/// use rust_decimal::Decimal;
///
/// let alice = Employee::new(
///     "Alice",
///     1,
///     Role::Manager,
///     Decimal::from(5000),
///     Decimal::from(500),
///     Decimal::from(200),
/// );
/// assert_eq!(alice.salary(), Decimal::from(5300));
/// assert_eq!(
///     alice.to_string(),
///     "ID: 1, Name: Alice, Role: Manager, Salary: 5300.00"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// User-supplied identifier; neither uniqueness nor sign is enforced.
    pub id: i64,
    /// The employee's name (letters and spaces only).
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// Base pay before allowances and deductions.
    pub basic_pay: Decimal,
    /// Additional pay on top of basic pay.
    pub allowances: Decimal,
    /// Amounts withheld from pay.
    pub deductions: Decimal,
}

impl Employee {
    /// Creates an employee from pre-validated field values.
    pub fn new(
        name: impl Into<String>,
        id: i64,
        role: Role,
        basic_pay: Decimal,
        allowances: Decimal,
        deductions: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            basic_pay,
            allowances,
            deductions,
        }
    }

    /// Computes the salary: basic pay plus allowances minus deductions.
    ///
    /// The arithmetic is exact decimal math with no rounding and no
    /// clamping; the result can be negative. Rounding to two places
    /// happens only at the display boundary.
    pub fn salary(&self) -> Decimal {
        self.basic_pay + self.allowances - self.deductions
    }
}

impl fmt::Display for Employee {
    /// Renders the console display form, with the salary at two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Role: {}, Salary: {:.2}",
            self.id,
            self.name,
            self.role,
            self.salary()
        )
    }
}
