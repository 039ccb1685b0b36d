//! HealthDash library root.
//! Exposes the CLI parser, the high-level run() function, the record store
//! and the CSV export pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use cli::session;
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Signup => cli::commands::signup::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),

        // Everything below acts on the logged-in user's records.
        Commands::Add { .. } => {
            let user = session::login(cli, cfg)?;
            cli::commands::add::handle(&cli.command, cfg, &user)
        }
        Commands::List { .. } => {
            let user = session::login(cli, cfg)?;
            cli::commands::list::handle(&cli.command, cfg, &user)
        }
        Commands::Del { .. } => {
            let user = session::login(cli, cfg)?;
            cli::commands::del::handle(&cli.command, cfg, &user)
        }
        Commands::Progress => {
            let user = session::login(cli, cfg)?;
            cli::commands::progress::handle(cfg, &user)
        }
        Commands::Export { .. } => {
            let user = session::login(cli, cfg)?;
            cli::commands::export::handle(&cli.command, cfg, &user)
        }
        Commands::Remind { .. } => {
            let user = session::login(cli, cfg)?;
            cli::commands::remind::handle(&cli.command, cfg, &user)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
