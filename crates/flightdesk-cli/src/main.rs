//! Flightdesk CLI Application
//!
//! Interactive admin console for flight records. All persistence goes through
//! `flightdesk-core`; this binary wires the database, the console streams and
//! the session loop together.

mod args;
mod console;
mod session;
mod workflows;

use std::io;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use console::Console;
use flightdesk_core::DatabaseBuilder;
use log::info;
use session::Session;

fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, seed_demo } = Args::parse();

    let mut database = DatabaseBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open flight database")?;

    if seed_demo
        && database
            .seed_demo_reference_data()
            .context("Failed to seed demo reference data")?
    {
        info!("Demo reference data added");
    }

    info!("Flightdesk started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(database, Console::new(stdin.lock(), stdout.lock()))
        .run()
        .context("Console session failed")?;

    info!("Flightdesk stopped");
    Ok(())
}
