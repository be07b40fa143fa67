//! rtracker library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (API client, grid/event logic, session, configuration).

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `RTRACKER_LOG=debug`.
pub const ENV_LOG: &str = "RTRACKER_LOG";

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Login { .. } | Commands::Signup { .. } => {
            cli::commands::auth::handle(&cli.command, cfg).await
        }
        Commands::Logout => cli::commands::auth::logout(cfg),
        Commands::Whoami => cli::commands::auth::whoami(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Habits { .. } => cli::commands::habits::handle(&cli.command, cfg).await,
        Commands::Events { .. } => cli::commands::events::handle(&cli.command, cfg).await,
        Commands::Tasks { .. } => cli::commands::tasks::handle(&cli.command, cfg).await,
        Commands::Projects { .. } => cli::commands::projects::handle(&cli.command, cfg).await,
        Commands::Users { .. } => cli::commands::users::handle(&cli.command, cfg).await,
    }
}

/// Diagnostics to stderr, filtered by `RTRACKER_LOG` (default: warn).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // configuration is loaded once, then command-line overrides apply
    let mut cfg = Config::load()?;
    if let Some(api) = &cli.api {
        cfg.api_base = api.clone();
    }
    if let Some(session) = &cli.session {
        cfg.session_file = session.clone();
    }

    dispatch(&cli, &cfg).await
}
