//! Interactive hostel management console.
//!
//! # Responsibility
//! - Read `HOSTEL_*` configuration, start file logging and build the facility.
//! - Hand the facility to a menu session over stdin/stdout.
//!
//! # Exit codes
//! - `0` on Exit or end of input.
//! - `1` when the terminal streams fail.
//! - `2` on invalid configuration.

mod menu;
mod render;
mod session;

use hostel_core::{init_logging, Facility, HostelConfig};
use log::error;
use session::Session;
use std::io;
use std::process::ExitCode;

const BANNER: &str = "\t\t\t----------------------------------------
\t\t\t|                                      |
\t\t\t|       Hostel management system       |
\t\t\t|                                      |
\t\t\t----------------------------------------";

fn main() -> ExitCode {
    let config = match HostelConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::from(2);
        }
    };

    // Stdout belongs to the menu, so log output only ever goes to files.
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let mut facility = match Facility::from_config(&config) {
        Ok(facility) => facility,
        Err(err) => {
            eprintln!("failed to seed demo data: {err}");
            return ExitCode::from(2);
        }
    };

    println!("{BANNER}");
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock());
    match session.run(&mut facility) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=session_end module=cli status=error error={}", err);
            eprintln!("terminal I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}
