//! Binary entry point for the payroll register console.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use payroll_register::app::App;
use payroll_register::error::PayrollResult;
use payroll_register::store::RosterStore;

/// The roster file, kept under the historical name in the working
/// directory.
const ROSTER_PATH: &str = "employees.txt";

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> PayrollResult<()> {
    let stdin = io::stdin();
    let app = App::new(RosterStore::new(ROSTER_PATH), stdin.lock(), io::stdout())?;
    app.run()
}
