//! # Desk Commands
//!
//! One line of operator input becomes one [`Command`], which runs against the
//! [`RentalSystem`] and produces one [`Reply`].
//!
//! ## Booking Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Walk-in Booking at the Desk                          │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │   list   │────►│  quote   │────►│   rent   │────►│  return  │       │
//! │  │ (browse) │     │ (price)  │     │ (commit) │     │ (close)  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                                          │                              │
//! │                           customer fields after `|`                    │
//! │                           name | contact | license                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Customer fields are separated by `|` so names may contain spaces:
//!
//! ```text
//! rent C001 2024-01-01 2024-01-05 yes | Asha Rao | 555-0101 | DL-7781
//! ```

use std::fmt::Write as _;

use rental_core::{CarRow, NewCustomer, PriceQuote, Rental};
use rental_engine::{RentalConfig, RentalSystem};
use tracing::debug;

use crate::error::DeskError;

/// Command syntax, in the order `help` prints it.
const COMMANDS: &[(&str, &str, &str)] = &[
    ("list", "list [json]", "available cars"),
    ("quote", "quote <car-id> <start> <end> [yes|no]", "price a rental without booking"),
    (
        "rent",
        "rent <car-id> <start> <end> <yes|no> | <name> | <contact> | <license>",
        "register a walk-in customer and rent them a car",
    ),
    ("return", "return <car-id>", "close the active rental of a car"),
    ("customers", "customers", "registered customers"),
    ("history", "history", "every rental, oldest first"),
    ("active", "active", "rentals not yet returned"),
    ("config", "config", "current desk settings"),
    ("help", "help", "this list"),
    ("quit", "quit", "leave the desk"),
];

// =============================================================================
// Command
// =============================================================================

/// A parsed operator command.
#[derive(Debug, Clone)]
pub enum Command {
    List {
        json: bool,
    },
    Quote {
        car_id: String,
        start: String,
        end: String,
        insured: bool,
    },
    Rent {
        car_id: String,
        start: String,
        end: String,
        insured: bool,
        customer: NewCustomer,
    },
    Return {
        car_id: String,
    },
    Customers,
    History,
    Active,
    Config,
    Help,
    Quit,
}

/// What the desk prints back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// ## Errors
    /// `Usage` for unknown verbs and wrong argument counts. Field contents
    /// (blank names, malformed dates) are left to the engine.
    pub fn parse(line: &str) -> Result<Self, DeskError> {
        let (head, customer) = match line.split_once('|') {
            Some((head, rest)) => (head, Some(rest)),
            None => (line, None),
        };
        let mut words = head.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        if customer.is_some() && verb != "rent" {
            return Err(usage_for(&verb));
        }

        let command = match (verb.as_str(), args.as_slice()) {
            ("list", []) => Command::List { json: false },
            ("list", ["json"]) => Command::List { json: true },
            ("quote", [car_id, start, end]) => Command::Quote {
                car_id: car_id.to_string(),
                start: start.to_string(),
                end: end.to_string(),
                insured: false,
            },
            ("quote", [car_id, start, end, flag]) => Command::Quote {
                car_id: car_id.to_string(),
                start: start.to_string(),
                end: end.to_string(),
                insured: parse_flag(flag)?,
            },
            ("rent", [car_id, start, end, flag]) => Command::Rent {
                car_id: car_id.to_string(),
                start: start.to_string(),
                end: end.to_string(),
                insured: parse_flag(flag)?,
                customer: parse_customer(customer)?,
            },
            ("return", [car_id]) => Command::Return {
                car_id: car_id.to_string(),
            },
            ("customers", []) => Command::Customers,
            ("history", []) => Command::History,
            ("active", []) => Command::Active,
            ("config", []) => Command::Config,
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (verb, _) => return Err(usage_for(verb)),
        };
        Ok(command)
    }
}

fn usage_for(verb: &str) -> DeskError {
    match COMMANDS.iter().find(|(name, _, _)| *name == verb) {
        Some((_, syntax, _)) => DeskError::usage(format!("usage: {syntax}")),
        None => DeskError::usage(format!("unknown command `{verb}`, type `help` for a list")),
    }
}

fn parse_flag(flag: &str) -> Result<bool, DeskError> {
    match flag.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "insured" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        other => Err(DeskError::usage(format!("insurance must be yes or no, got `{other}`"))),
    }
}

fn parse_customer(fields: Option<&str>) -> Result<NewCustomer, DeskError> {
    let fields: Vec<&str> = fields.unwrap_or_default().split('|').map(str::trim).collect();
    match fields.as_slice() {
        [name, contact, license] => Ok(NewCustomer::new(*name, *contact, *license)),
        _ => Err(usage_for("rent")),
    }
}

// =============================================================================
// Execution
// =============================================================================

/// Runs a command against the desk.
pub fn execute(desk: &RentalSystem, command: Command) -> Result<Reply, DeskError> {
    debug!(?command, "Executing desk command");
    let config = desk.config();

    let text = match command {
        Command::List { json: true } => serde_json::to_string_pretty(&desk.list_available_cars())?,
        Command::List { json: false } => car_table(config, &desk.list_available_cars()),
        Command::Quote {
            car_id,
            start,
            end,
            insured,
        } => {
            let quote = desk.quote_rental(&car_id, &start, &end, insured)?;
            format!("{car_id}: {}", quote_summary(config, &quote))
        }
        Command::Rent {
            car_id,
            start,
            end,
            insured,
            customer,
        } => {
            let booking = desk.book_walk_in(&customer, &car_id, &start, &end, insured)?;
            format!(
                "Registered {} ({})\nRented {} to {} from {} to {}: {}",
                booking.customer.id,
                booking.customer.name,
                booking.rental.car_id(),
                booking.customer.id,
                booking.rental.start_date(),
                booking.rental.end_date(),
                quote_summary(config, booking.rental.quote()),
            )
        }
        Command::Return { car_id } => desk.return_car(&car_id)?.message(),
        Command::Customers => {
            let customers = desk.list_customers();
            if customers.is_empty() {
                "No customers registered.".to_string()
            } else {
                customers
                    .iter()
                    .map(|c| {
                        format!(
                            "{:<8} {:<24} {:<14} {}",
                            c.id.as_str(),
                            c.name,
                            c.contact_number,
                            c.license_number
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::History => rental_table(config, &desk.rental_history(), "No rentals yet."),
        Command::Active => rental_table(config, &desk.active_rentals(), "No active rentals."),
        Command::Config => format!(
            "insurance per day: {}\ncurrency symbol:   {}\ncustomer prefix:   {}",
            config.format_currency(config.insurance_fee_per_day),
            config.currency_symbol,
            config.customer_id_prefix,
        ),
        Command::Help => help_text(),
        Command::Quit => return Ok(Reply::Quit),
    };
    Ok(Reply::Text(text))
}

// =============================================================================
// Formatting
// =============================================================================

fn car_table(config: &RentalConfig, rows: &[CarRow]) -> String {
    if rows.is_empty() {
        return "No cars available.".to_string();
    }

    let mut out = format!(
        "{:<6} {:<28} {:<13} {:<9} {:<10} {:>5} {:>10}",
        "ID", "Car", "Type", "Fuel", "Gearbox", "Seats", "Per day"
    );
    for row in rows {
        let _ = write!(
            out,
            "\n{:<6} {:<28} {:<13} {:<9} {:<10} {:>5} {:>10}",
            row.car_id.as_str(),
            format!("{} {}", row.brand, row.model),
            row.vehicle_type,
            row.fuel_type.to_string(),
            row.transmission.to_string(),
            row.seats,
            config.format_currency(row.price_per_day),
        );
    }
    out
}

fn rental_table(config: &RentalConfig, rentals: &[Rental], empty: &str) -> String {
    if rentals.is_empty() {
        return empty.to_string();
    }

    rentals
        .iter()
        .map(|rental| {
            format!(
                "{} {:<6} {:<8} {} → {} {:<8} {:<9} {:>10}",
                rental.id(),
                rental.car_id().as_str(),
                rental.customer_id().as_str(),
                rental.start_date(),
                rental.end_date(),
                rental.status().to_string(),
                if rental.insured() { "insured" } else { "uninsured" },
                config.format_currency(rental.total_price()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote_summary(config: &RentalConfig, quote: &PriceQuote) -> String {
    let mut out = format!(
        "{} day(s) at {} = {}",
        quote.billable_days,
        config.format_currency(quote.price_per_day),
        config.format_currency(quote.base_price),
    );
    if quote.insured {
        let _ = write!(out, " + insurance {}", config.format_currency(quote.insurance_price));
    }
    let _ = write!(out, ", total {}", config.format_currency(quote.total));
    out
}

fn help_text() -> String {
    COMMANDS
        .iter()
        .map(|(_, syntax, about)| format!("  {syntax:<72} {about}"))
        .collect::<Vec<_>>()
        .join("\n")
}
