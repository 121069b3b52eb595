//! `TripLedger` - AI-assisted travel planner for the terminal
//!
//! Built on `tripledger-core`; plans are generated by a remote planning
//! service and kept in a local JSON ledger.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod render;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command, MemoryCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripledger=debug,tripledger_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    info!("starting tripledger");

    match cli.command {
        Command::Plan(args) => commands::plan::run(args).await,
        Command::Trips => commands::trips::list(),
        Command::Show { id } => commands::trips::show(&id),
        Command::Delete { id } => commands::trips::delete(&id),
        Command::Login(args) => commands::auth::login(args).await,
        Command::Register(args) => commands::auth::register(args).await,
        Command::Logout => commands::auth::logout(),
        Command::Whoami => commands::auth::whoami(),
        Command::Memories { command } => match command {
            MemoryCommand::Add(args) => commands::memories::add(args),
            MemoryCommand::List => commands::memories::list(),
            MemoryCommand::Remove { id } => commands::memories::remove(&id),
        },
    }
}
