//! Core domain logic for the trophy store.
//! This crate is the single source of truth for trophy invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingConfig,
};
pub use model::trophy::{
    validate_competition, validate_year, Trophy, TrophyId, TrophyValidationError, MAX_YEAR,
    MIN_COMPETITION_CHARS, MIN_YEAR,
};
pub use repo::trophy_repo::{
    seed_trophies, InMemoryTrophyRepository, RepoError, RepoResult, TrophyListQuery,
    TrophyRepository, TrophySortKey,
};
pub use service::trophy_service::TrophyService;

/// Minimal health-check API for smoke probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
