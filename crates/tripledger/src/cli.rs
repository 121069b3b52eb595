//! Command-line interface definition.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tripledger_core::Budget;

/// AI-assisted travel planner with a local trip ledger.
#[derive(Debug, Parser)]
#[command(name = "tripledger", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a trip plan and save it to the ledger.
    Plan(PlanArgs),
    /// List saved trip plans, most recent first.
    Trips,
    /// Show one saved trip plan in full.
    Show {
        /// Trip plan id, as printed by `trips`.
        id: String,
    },
    /// Delete a saved trip plan.
    Delete {
        /// Trip plan id, as printed by `trips`.
        id: String,
    },
    /// Log in to the planning service.
    Login(CredentialArgs),
    /// Register a new account with the planning service.
    Register(CredentialArgs),
    /// Log out and forget the mirrored session.
    Logout,
    /// Show the currently signed-in user.
    Whoami,
    /// Manage travel memories (map pins).
    Memories {
        #[command(subcommand)]
        command: MemoryCommand,
    },
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Origin city.
    #[arg(long)]
    pub from: String,
    /// Destination city or region.
    #[arg(long)]
    pub to: String,
    /// Departure date, YYYY-MM-DD.
    #[arg(long)]
    pub departure: NaiveDate,
    /// Return date, YYYY-MM-DD.
    #[arg(long = "return")]
    pub return_date: NaiveDate,
    /// Number of travelers.
    #[arg(long, default_value_t = 1)]
    pub travelers: u32,
    /// Budget tier: budget, mid-range or luxury.
    #[arg(long, default_value = "mid-range")]
    pub budget: Budget,
    /// Build a sample plan locally instead of calling the backend.
    #[arg(long)]
    pub offline: bool,
}

#[derive(Debug, Args)]
pub struct CredentialArgs {
    /// Account email address.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Subcommand)]
pub enum MemoryCommand {
    /// Pin a new memory at the given coordinates.
    Add(MemoryAddArgs),
    /// List pinned memories.
    List,
    /// Remove a pinned memory.
    Remove {
        /// Memory id, as printed by `memories list`.
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct MemoryAddArgs {
    /// Longitude of the pin.
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,
    /// Latitude of the pin.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    /// Short title.
    #[arg(long)]
    pub title: String,
    /// Longer description.
    #[arg(long, default_value = "")]
    pub description: String,
    /// When the memory happened, free text.
    #[arg(long, default_value = "")]
    pub date: String,
}
