//! # Rental Desk Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Read configuration from the environment
//! 3. Load the demo fleet
//! 4. Read commands from stdin until `quit` or end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match rental_desk::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rental-desk: {err}");
            ExitCode::FAILURE
        }
    }
}
