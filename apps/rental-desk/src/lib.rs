//! # Rental Desk Library
//!
//! Operator console for the rental desk. Reads one command per line from
//! stdin and prints the reply on stdout.
//!
//! ## Module Organization
//! ```text
//! rental_desk/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── commands.rs     ◄─── Command parsing and execution
//! └── error.rs        ◄─── Error type printed to the operator
//! ```

pub mod commands;
pub mod error;

use std::io::{self, BufRead, Write};

use rental_engine::{seed, RentalConfig, RentalSystem};
use tracing::{info, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::{Command, Reply};
use error::DeskError;

/// Runs the desk until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Desk Startup                                      │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO, rental crates at DEBUG; override with RUST_LOG     │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • RENTAL_INSURANCE_FEE, RENTAL_CURRENCY_SYMBOL,                     │
/// │       RENTAL_CUSTOMER_PREFIX                                            │
/// │                                                                         │
/// │  3. Load Fleet ───────────────────────────────────────────────────────► │
/// │     • Demo fleet, every car available                                   │
/// │                                                                         │
/// │  4. Command Loop ─────────────────────────────────────────────────────► │
/// │     • Errors are printed and the loop continues                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), DeskError> {
    init_tracing();

    info!("Starting rental desk");

    let config = RentalConfig::from_env();
    let fleet = seed::demo_fleet()?;
    info!(cars = fleet.len(), ?config, "Fleet loaded");

    let desk = RentalSystem::new(fleet, config);
    serve(&desk, io::stdin().lock(), io::stdout().lock())
}

/// The command loop, over any line source and sink.
pub fn serve(
    desk: &RentalSystem,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), DeskError> {
    writeln!(output, "Rental desk ready. Type `help` for commands.")?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&mut output)?;
            continue;
        }

        match Command::parse(&line).and_then(|command| commands::execute(desk, command)) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Text(text)) => writeln!(output, "{text}")?,
            Err(err) => writeln!(output, "error: {err}")?,
        }
        prompt(&mut output)?;
    }

    info!("Rental desk closed");
    Ok(())
}

fn prompt(output: &mut impl Write) -> io::Result<()> {
    write!(output, "rental> ")?;
    output.flush()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rental_engine=trace` - Trace the booking engine only
/// - Default: [`DEFAULT_LOG_FILTER`]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    log_subscriber(filter).init();
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,rental_engine=debug,rental_desk=debug";

/// Formatting subscriber on stderr. The filter alone decides which levels
/// pass; no max level is layered on top of it.
fn log_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn session(script: &str) -> String {
        let desk = RentalSystem::new(seed::demo_fleet().unwrap(), RentalConfig::default());
        let mut out = Vec::new();
        serve(&desk, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let out = session("return C999\nreturn C001\nquit\nreturn C002\n");
        assert!(out.contains("error: [NotFound] Car not found: C999"));
        assert!(out.contains("Car C001 was not rented"));
        assert!(!out.contains("C002"));
    }

    #[test]
    fn test_end_of_input_closes_the_desk() {
        let out = session("\nconfig");
        assert!(out.contains("insurance per day: $10.00"));
    }

    #[test]
    fn test_error_filter_silences_debug() {
        let debug_on = tracing::subscriber::with_default(
            log_subscriber(EnvFilter::new("error")),
            || tracing::enabled!(Level::DEBUG),
        );
        assert!(!debug_on);
    }

    #[test]
    fn test_default_filter_stops_at_debug() {
        let (debug_on, trace_on) = tracing::subscriber::with_default(
            log_subscriber(EnvFilter::new(DEFAULT_LOG_FILTER)),
            || (tracing::enabled!(Level::DEBUG), tracing::enabled!(Level::TRACE)),
        );
        assert!(debug_on);
        assert!(!trace_on);
    }
}
