//! Trophy domain model.
//!
//! # Responsibility
//! - Define the canonical trophy record held by repositories.
//! - Enforce field rules at every assignment, including construction.
//!
//! # Invariants
//! - `competition` trims to at least `MIN_COMPETITION_CHARS` characters.
//! - `year` lies within `MIN_YEAR..=MAX_YEAR`.
//! - A `Trophy` value is never observable with an invalid field; the only
//!   writer paths are `new`, `set_competition`, `set_year` and `apply_fields`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier assigned to a trophy by its owning repository.
pub type TrophyId = i32;

/// Earliest accepted trophy year (inclusive).
pub const MIN_YEAR: i32 = 1970;
/// Latest accepted trophy year (inclusive).
pub const MAX_YEAR: i32 = 2025;
/// Minimum competition length, counted after trimming surrounding whitespace.
pub const MIN_COMPETITION_CHARS: usize = 3;

/// Field validation errors for `Trophy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrophyValidationError {
    /// Competition name is blank or too short. Carries the reason.
    InvalidCompetition(String),
    /// Year is outside `MIN_YEAR..=MAX_YEAR`. Carries the rejected value.
    InvalidYear(i32),
}

impl Display for TrophyValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCompetition(reason) => write!(f, "invalid competition: {reason}"),
            Self::InvalidYear(year) => write!(
                f,
                "invalid year: {year} is outside {MIN_YEAR}..={MAX_YEAR}"
            ),
        }
    }
}

impl Error for TrophyValidationError {}

/// Checks a competition name without assigning it.
pub fn validate_competition(value: &str) -> Result<(), TrophyValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrophyValidationError::InvalidCompetition(
            "competition name cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().count() < MIN_COMPETITION_CHARS {
        return Err(TrophyValidationError::InvalidCompetition(format!(
            "competition name must be at least {MIN_COMPETITION_CHARS} characters, got `{trimmed}`"
        )));
    }
    Ok(())
}

/// Checks a year without assigning it.
pub fn validate_year(value: i32) -> Result<(), TrophyValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
        return Err(TrophyValidationError::InvalidYear(value));
    }
    Ok(())
}

/// Trophy record won in one competition season.
///
/// Fields are private so that every write goes through validation. The `id`
/// passed to [`Trophy::new`] is informational: repositories overwrite it on
/// insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrophyRecord")]
pub struct Trophy {
    id: TrophyId,
    competition: String,
    year: i32,
}

/// Unvalidated wire shape; converted through `Trophy::new`.
#[derive(Deserialize)]
struct TrophyRecord {
    id: TrophyId,
    competition: String,
    year: i32,
}

impl TryFrom<TrophyRecord> for Trophy {
    type Error = TrophyValidationError;

    fn try_from(record: TrophyRecord) -> Result<Self, Self::Error> {
        Trophy::new(record.id, record.competition, record.year)
    }
}

impl Trophy {
    /// Creates a validated trophy.
    ///
    /// # Errors
    /// - `InvalidCompetition` when `competition` is blank or trims to fewer
    ///   than `MIN_COMPETITION_CHARS` characters.
    /// - `InvalidYear` when `year` is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(
        id: TrophyId,
        competition: impl Into<String>,
        year: i32,
    ) -> Result<Self, TrophyValidationError> {
        let competition = competition.into();
        validate_competition(&competition)?;
        validate_year(year)?;
        Ok(Self {
            id,
            competition,
            year,
        })
    }

    pub fn id(&self) -> TrophyId {
        self.id
    }

    pub fn competition(&self) -> &str {
        &self.competition
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Replaces the competition name. The stored value keeps its original
    /// whitespace; only the length rule looks at the trimmed form.
    pub fn set_competition(
        &mut self,
        value: impl Into<String>,
    ) -> Result<(), TrophyValidationError> {
        let value = value.into();
        validate_competition(&value)?;
        self.competition = value;
        Ok(())
    }

    pub fn set_year(&mut self, value: i32) -> Result<(), TrophyValidationError> {
        validate_year(value)?;
        self.year = value;
        Ok(())
    }

    /// Replaces both mutable fields, or neither when either value is invalid.
    pub fn apply_fields(
        &mut self,
        competition: &str,
        year: i32,
    ) -> Result<(), TrophyValidationError> {
        validate_competition(competition)?;
        validate_year(year)?;
        self.competition = competition.to_string();
        self.year = year;
        Ok(())
    }

    /// Re-checks both fields against current rules.
    pub fn validate(&self) -> Result<(), TrophyValidationError> {
        validate_competition(&self.competition)?;
        validate_year(self.year)
    }

    /// Identity is owned by the repository, not by callers.
    pub(crate) fn assign_id(&mut self, id: TrophyId) {
        self.id = id;
    }
}

impl Display for Trophy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "id: {}, Competition: {}, Year: {}",
            self.id, self.competition, self.year
        )
    }
}
