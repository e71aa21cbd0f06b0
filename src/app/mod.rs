//! The interactive console menu loop.
//!
//! [`App`] is the explicit application state: the roster, the persistence
//! store, and two generic I/O endpoints. Production wiring is locked
//! stdin and stdout; the same loop runs over in-memory buffers, which is
//! how the end-to-end tests drive it.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::input::{self, MenuChoice};
use crate::models::Employee;
use crate::roster::Roster;
use crate::store::RosterStore;

/// The interactive payroll application.
///
/// Created by loading the persisted roster, then driven by [`App::run`]
/// until the user exits. The roster is written back exactly once, on the
/// way out.
pub struct App<R, W> {
    roster: Roster,
    store: RosterStore,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates the application by loading the persisted roster.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Io`] if the roster file exists but cannot
    /// be read. A missing file starts an empty session.
    pub fn new(store: RosterStore, reader: R, writer: W) -> PayrollResult<Self> {
        let roster = store.load()?;
        Ok(Self {
            roster,
            store,
            reader,
            writer,
        })
    }

    /// Returns a read-only view of the current roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Runs the menu loop until the user picks Exit or input ends.
    ///
    /// End of input at any prompt abandons whatever was in flight and
    /// leaves through the same save path as an explicit Exit, so a
    /// scripted or disconnected session never loses the roster.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Console`] if console I/O fails and
    /// [`PayrollError::Io`] if the final save fails.
    pub fn run(mut self) -> PayrollResult<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            match input::parse_menu_choice(&choice) {
                Some(MenuChoice::AddEmployee) => {
                    if !self.add_employee()? {
                        break;
                    }
                }
                Some(MenuChoice::DisplayEmployees) => self.display_employees()?,
                Some(MenuChoice::TotalPayroll) => self.total_payroll()?,
                Some(MenuChoice::Exit) => break,
                None => self.say("Invalid choice! Try again.")?,
            }
        }

        info!(records = self.roster.len(), "session ending, saving roster");
        self.store.save(&self.roster)
    }

    fn show_menu(&mut self) -> PayrollResult<()> {
        self.say("")?;
        self.say("Employee Payroll System")?;
        self.say("1. Add Employee")?;
        self.say("2. Display Employees")?;
        self.say("3. Calculate Total Payroll")?;
        self.say("4. Exit")?;
        self.prompt("Enter your choice: ")
    }

    /// Collects the six employee fields, each behind its own retry loop.
    ///
    /// Returns `Ok(false)` when input ended before the employee was
    /// complete; nothing is appended in that case.
    fn add_employee(&mut self) -> PayrollResult<bool> {
        let Some(name) = self.prompt_field("Enter Name: ", input::validate_name)? else {
            return Ok(false);
        };
        let Some(id) = self.prompt_field("Enter ID: ", input::parse_id)? else {
            return Ok(false);
        };
        let Some(role) =
            self.prompt_field("Enter Role (Manager/Developer/Intern): ", input::parse_role)?
        else {
            return Ok(false);
        };
        let Some(basic_pay) = self.prompt_field("Enter Basic Pay: ", |line| {
            input::parse_amount("Basic Pay", line)
        })?
        else {
            return Ok(false);
        };
        let Some(allowances) = self.prompt_field("Enter Allowances: ", |line| {
            input::parse_amount("Allowances", line)
        })?
        else {
            return Ok(false);
        };
        let Some(deductions) = self.prompt_field("Enter Deductions: ", |line| {
            input::parse_amount("Deductions", line)
        })?
        else {
            return Ok(false);
        };

        let employee = Employee::new(name, id, role, basic_pay, allowances, deductions);
        info!(id = employee.id, role = %employee.role, "employee added");
        self.roster.add(employee);
        self.say("Employee added successfully!")?;
        Ok(true)
    }

    fn display_employees(&mut self) -> PayrollResult<()> {
        if self.roster.is_empty() {
            return self.say("No employees found.");
        }

        self.say("")?;
        self.say("Employee List:")?;
        for employee in self.roster.all() {
            writeln!(&mut self.writer, "{employee}").map_err(console_error)?;
        }
        Ok(())
    }

    fn total_payroll(&mut self) -> PayrollResult<()> {
        let total = self.roster.total();
        self.say(&format!("Total Payroll: {total:.2}"))
    }

    /// Prompts repeatedly until `parse` accepts the input.
    ///
    /// Rejections print the validator's message and reprompt the same
    /// field. Returns `Ok(None)` when input ends before a value arrives.
    fn prompt_field<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> PayrollResult<T>,
    ) -> PayrollResult<Option<T>> {
        loop {
            self.prompt(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(error) => self.say(&error.to_string())?,
            }
        }
    }

    fn say(&mut self, text: &str) -> PayrollResult<()> {
        writeln!(self.writer, "{text}").map_err(console_error)
    }

    /// Writes a prompt with no trailing newline and flushes it so the
    /// text is visible before the blocking read.
    fn prompt(&mut self, text: &str) -> PayrollResult<()> {
        write!(self.writer, "{text}")
            .and_then(|_| self.writer.flush())
            .map_err(console_error)
    }

    /// Reads one line, stripping the trailing newline.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> PayrollResult<Option<String>> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line).map_err(console_error)?;
        if bytes == 0 {
            debug!("console input ended");
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

fn console_error(source: std::io::Error) -> PayrollError {
    PayrollError::Console {
        message: source.to_string(),
    }
}
