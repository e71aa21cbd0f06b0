//! Pure validators for interactive console input.
//!
//! Each validator maps one raw console line to a typed value or a
//! [`PayrollError::InvalidField`] carrying the exact message printed
//! before the field reprompts. Keeping the rules here as plain functions
//! leaves the menu loop a thin reprompt driver and lets the rules be
//! exercised without simulating a console.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Role;

/// A recognized top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Collect a new employee and append it to the roster.
    AddEmployee,
    /// Print every employee in insertion order.
    DisplayEmployees,
    /// Print the summed salary of the whole roster.
    TotalPayroll,
    /// Save the roster and leave the loop.
    Exit,
}

/// Parses a menu selection from the literal choices `1` through `4`.
///
/// Anything else, including padded or empty input, is unrecognized and
/// returns `None`; the menu reprompts.
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input {
        "1" => Some(MenuChoice::AddEmployee),
        "2" => Some(MenuChoice::DisplayEmployees),
        "3" => Some(MenuChoice::TotalPayroll),
        "4" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Validates an employee name.
///
/// The name is trimmed, must be non-empty, and every character must be a
/// letter or a space.
pub fn validate_name(input: &str) -> PayrollResult<String> {
    let name = input.trim();
    if !name.is_empty() && name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        Ok(name.to_string())
    } else {
        Err(PayrollError::InvalidField {
            field: "name",
            message: "Invalid input! Name should only contain alphabets and spaces.".to_string(),
        })
    }
}

/// Parses an employee id.
///
/// Any integer is accepted, negative and duplicate values included.
pub fn parse_id(input: &str) -> PayrollResult<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| PayrollError::InvalidField {
            field: "id",
            message: "Invalid input! ID must be a number.".to_string(),
        })
}

/// Parses a role, matching case-insensitively against the three variants.
pub fn parse_role(input: &str) -> PayrollResult<Role> {
    Role::from_str(input.trim()).map_err(|_| PayrollError::InvalidField {
        field: "role",
        message: "Invalid role! Please enter Manager, Developer, or Intern.".to_string(),
    })
}

/// Parses a non-negative pay amount.
///
/// `label` is the display name of the field (`Basic Pay`, `Allowances`,
/// or `Deductions`) and appears in the rejection message.
pub fn parse_amount(label: &'static str, input: &str) -> PayrollResult<Decimal> {
    let reject = || PayrollError::InvalidField {
        field: label,
        message: format!("Invalid input! {label} must be a non-negative number."),
    };

    let amount = Decimal::from_str(input.trim()).map_err(|_| reject())?;
    if amount < Decimal::ZERO {
        return Err(reject());
    }
    Ok(amount)
}
