//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `trophy_core` linkage.
//! - Print the seeded collection in its canonical display format.
//!
//! Set `TROPHY_LOG_DIR` (and optionally `TROPHY_LOG_LEVEL`) to write core
//! logs while the probe runs.

use std::process::ExitCode;
use trophy_core::{
    init_logging_from_config, InMemoryTrophyRepository, LoggingConfig, TrophyListQuery,
    TrophyRepository,
};

fn main() -> ExitCode {
    if let Err(err) = init_logging_from_env() {
        eprintln!("trophy_cli logging error={err}");
        return ExitCode::FAILURE;
    }

    println!("trophy_core ping={}", trophy_core::ping());
    println!("trophy_core version={}", trophy_core::core_version());

    let repo = match InMemoryTrophyRepository::try_new() {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("event=cli_seed module=cli status=error error={err}");
            eprintln!("trophy_cli seed error={err}");
            return ExitCode::FAILURE;
        }
    };
    for trophy in repo.list_trophies(&TrophyListQuery::default()) {
        println!("{trophy}");
    }

    ExitCode::SUCCESS
}

/// Logging stays off unless `TROPHY_LOG_DIR` is set.
fn init_logging_from_env() -> Result<(), String> {
    match LoggingConfig::from_env()? {
        Some(config) => init_logging_from_config(&config),
        None => Ok(()),
    }
}
