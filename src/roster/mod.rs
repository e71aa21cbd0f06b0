//! The in-memory roster of employees.
//!
//! The [`Roster`] is an ordered collection held for the process lifetime.
//! It is mutated only by the foreground menu loop and overwritten
//! wholesale on save, so it carries no locking and no removal operations.

use rust_decimal::Decimal;

use crate::models::Employee;

/// An ordered, in-memory collection of employees.
///
/// Insertion order is preserved for iteration and persistence, and
/// duplicate ids are accepted without complaint.
///
/// # Examples
///
/// ```
/// use payroll_register::models::{Employee, Role};
/// use payroll_register::roster::Roster;
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// roster.add(Employee::new(
///     "Alice",
///     1,
///     Role::Manager,
///     Decimal::from(5000),
///     Decimal::from(500),
///     Decimal::from(200),
/// ));
/// assert_eq!(roster.len(), 1);
/// assert_eq!(roster.total(), Decimal::from(5300));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee to the end of the roster.
    pub fn add(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Returns a read-only view of the roster in insertion order.
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Sums the salary of every employee on the roster.
    ///
    /// Returns [`Decimal::ZERO`] for an empty roster.
    pub fn total(&self) -> Decimal {
        self.employees
            .iter()
            .map(Employee::salary)
            .sum()
    }

    /// Returns the number of employees on the roster.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl FromIterator<Employee> for Roster {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter.into_iter().collect(),
        }
    }
}
