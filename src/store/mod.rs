//! Flat-file persistence for the roster.
//!
//! This module provides the [`RosterStore`] type, the load/save boundary
//! between the in-memory roster and its plain text file. One record per
//! line, comma-delimited, fixed field order:
//!
//! ```text
//! id,name,role,basicPay,allowances,deductions
//! ```
//!
//! Pay fields are written in their default decimal textual form; nothing
//! is rounded or padded on save. Roles are stored as the capitalized
//! literals `Manager`/`Developer`/`Intern` and matched case-insensitively
//! on load.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, Role};
use crate::roster::Roster;

/// Persistence adapter between the roster and its flat text file.
///
/// The store owns the file path; the handle itself is opened only for the
/// duration of each call and closed on every path out, so a failed save
/// never leaves the file open.
///
/// # Example
///
/// ```no_run
/// use payroll_register::roster::Roster;
/// use payroll_register::store::RosterStore;
///
/// let store = RosterStore::new("employees.txt");
/// let roster = store.load()?;
/// store.save(&roster)?;
/// # Ok::<(), payroll_register::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    /// Creates a store over the given roster file path.
    ///
    /// The path does not need to exist yet; loading a missing file yields
    /// an empty roster and the file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the roster file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the roster file with one line per employee, in roster
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Io`] if the file cannot be created or
    /// written.
    pub fn save(&self, roster: &Roster) -> PayrollResult<()> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);

        for employee in roster.all() {
            writeln!(
                writer,
                "{},{},{},{},{},{}",
                employee.id,
                employee.name,
                employee.role,
                employee.basic_pay,
                employee.allowances,
                employee.deductions
            )
            .map_err(|e| self.io_error(e))?;
        }
        writer.flush().map_err(|e| self.io_error(e))?;

        info!(
            records = roster.len(),
            path = %self.path.display(),
            "saved roster"
        );
        Ok(())
    }

    /// Reads the roster file back into an ordered roster.
    ///
    /// A missing file is not an error; it yields an empty roster. Lines
    /// whose role does not match one of the three known roles are dropped
    /// without surfacing an error, and lines that cannot be parsed at all
    /// (wrong field count, non-numeric id or pay field) are skipped with a
    /// warning rather than aborting the load.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Io`] if the file exists but cannot be read.
    pub fn load(&self) -> PayrollResult<Roster> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no roster file, starting empty");
            return Ok(Roster::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;

        let mut roster = Roster::new();
        for (index, line) in content.lines().enumerate() {
            match parse_record(line, index + 1) {
                Ok(Some(employee)) => roster.add(employee),
                Ok(None) => {
                    debug!(line = index + 1, "dropping record with unrecognized role");
                }
                Err(error) => {
                    warn!(path = %self.path.display(), "skipping record: {error}");
                }
            }
        }

        info!(
            records = roster.len(),
            path = %self.path.display(),
            "loaded roster"
        );
        Ok(roster)
    }

    fn io_error(&self, source: std::io::Error) -> PayrollError {
        PayrollError::Io {
            path: self.path.display().to_string(),
            message: source.to_string(),
        }
    }
}

/// Parses one persisted roster line.
///
/// Returns `Ok(None)` for a line whose fields all parse but whose role is
/// not one of the three known roles; such records are dropped silently,
/// matching the roster file's historical handling. `line_number` is
/// 1-based and appears in the error for unparseable lines.
///
/// # Errors
///
/// Returns [`PayrollError::MalformedRecord`] when the line does not split
/// into exactly six fields or a numeric field fails to parse.
pub fn parse_record(line: &str, line_number: usize) -> PayrollResult<Option<Employee>> {
    let fields: Vec<&str> = line.split(',').collect();
    let &[id, name, role, basic_pay, allowances, deductions] = fields.as_slice() else {
        return Err(malformed(
            line_number,
            format!(
                "expected 6 comma-separated fields, found {}",
                fields.len()
            ),
        ));
    };

    let id: i64 = id
        .parse()
        .map_err(|_| malformed(line_number, format!("invalid id '{id}'")))?;
    let basic_pay = parse_pay_field(basic_pay, "basic pay", line_number)?;
    let allowances = parse_pay_field(allowances, "allowances", line_number)?;
    let deductions = parse_pay_field(deductions, "deductions", line_number)?;

    let Ok(role) = Role::from_str(role) else {
        return Ok(None);
    };

    Ok(Some(Employee::new(
        name.to_string(),
        id,
        role,
        basic_pay,
        allowances,
        deductions,
    )))
}

fn parse_pay_field(value: &str, field: &str, line_number: usize) -> PayrollResult<Decimal> {
    Decimal::from_str(value)
        .map_err(|_| malformed(line_number, format!("invalid {field} '{value}'")))
}

fn malformed(line: usize, message: String) -> PayrollError {
    PayrollError::MalformedRecord { line, message }
}
