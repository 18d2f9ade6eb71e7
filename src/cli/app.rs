//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;

use super::output::{Output, OutputFormat};
use super::session::Session;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "book")]
#[command(author, version, about = "Contact book with phone numbers and upcoming birthdays")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Reference date for birthday calculations (YYYY-MM-DD, defaults to today)
    #[arg(long, env = "CONTACT_BOOK_TODAY")]
    pub today: Option<NaiveDate>,

    /// Path to a configuration file
    #[arg(long, env = "CONTACT_BOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start with sample contacts
    #[arg(long)]
    pub demo: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Contact book starting");

    let config = Config::load(cli.config.as_deref())?;
    output.verbose_ctx(
        "config",
        &format!("Birthday window: {} days", config.birthdays.window_days),
    );

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let mut session = Session::new(today, &config);

    if cli.demo {
        session.seed_demo()?;
        output.verbose_ctx(
            "demo",
            &format!("Seeded {} sample contacts", session.directory().len()),
        );
    }

    session.run(io::stdin().lock(), &output)?;

    output.verbose("Session completed successfully");
    Ok(())
}
