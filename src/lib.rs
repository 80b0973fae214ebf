//! pcdeath library root.
//! Exposes the checklist store, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod i18n;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Group { .. } => cli::commands::group::handle(&cli.command, cfg),
        Commands::Item { .. } => cli::commands::item::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Move { .. } => cli::commands::mv::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Lang { .. } => cli::commands::lang::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line database override
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(Some(custom_db))
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
