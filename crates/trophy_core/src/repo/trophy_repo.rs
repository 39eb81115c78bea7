//! Trophy repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over an ordered, in-process trophy collection.
//! - Own identity assignment; callers never choose stored ids.
//!
//! # Invariants
//! - Stored trophies have pairwise-distinct ids.
//! - `next_id` is greater than every id this instance has ever assigned, so
//!   ids are never reused after removal.
//! - Failed writes leave the collection untouched.
//! - Reads return owned copies, never views into storage.

use crate::model::trophy::{Trophy, TrophyId, TrophyValidationError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Starter records inserted by `InMemoryTrophyRepository::try_new`, in order.
const SEED_TROPHIES: [(&str, i32); 5] = [
    ("Champions League", 2020),
    ("La Liga", 2021),
    ("Premier League", 2022),
    ("Serie A", 2023),
    ("Bundesliga", 2024),
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for trophy write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(TrophyValidationError),
    /// A required trophy argument was absent. Carries the parameter name.
    NullArgument(&'static str),
    /// A trophy with the caller-supplied id is already stored.
    DuplicateId(TrophyId),
    NotFound(TrophyId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NullArgument(name) => write!(f, "argument `{name}` cannot be null"),
            Self::DuplicateId(id) => write!(f, "a trophy with id {id} already exists"),
            Self::NotFound(id) => write!(f, "no trophy found with id {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NullArgument(_) => None,
            Self::DuplicateId(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<TrophyValidationError> for RepoError {
    fn from(value: TrophyValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrophySortKey {
    /// Ordinal, case-sensitive ascending by competition name.
    Competition,
    /// Ascending by year.
    Year,
}

impl TrophySortKey {
    /// Parses the query-string form (`competition` or `year`).
    ///
    /// Matching is exact. Any other value returns `None`, which callers treat
    /// as "keep insertion order".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "competition" => Some(Self::Competition),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Competition => "competition",
            Self::Year => "year",
        }
    }
}

/// Query options for listing trophies.
///
/// The default query returns every trophy in insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrophyListQuery {
    /// Keep only trophies won in this exact year.
    pub year: Option<i32>,
    /// Stable sort applied to the filtered subset.
    pub sort_by: Option<TrophySortKey>,
}

/// Repository interface for trophy CRUD operations.
pub trait TrophyRepository {
    /// Returns filtered then sorted copies of stored trophies.
    fn list_trophies(&self, query: &TrophyListQuery) -> Vec<Trophy>;
    /// Returns the trophy with `id`, or `None` when absent.
    fn get_trophy(&self, id: TrophyId) -> Option<Trophy>;
    /// Stores `trophy` under a freshly assigned id and returns the stored copy.
    fn add_trophy(&mut self, trophy: Option<Trophy>) -> RepoResult<Trophy>;
    /// Removes and returns the trophy with `id`, or `None` when absent.
    fn remove_trophy(&mut self, id: TrophyId) -> Option<Trophy>;
    /// Copies competition/year from `replacement` onto the stored trophy `id`.
    fn update_trophy(&mut self, id: TrophyId, replacement: Option<Trophy>)
        -> RepoResult<Trophy>;
}

/// Returns the starter trophies with caller ids 1 through 5.
pub fn seed_trophies() -> Result<Vec<Trophy>, TrophyValidationError> {
    SEED_TROPHIES
        .iter()
        .zip(1..)
        .map(|(&(competition, year), id)| Trophy::new(id, competition, year))
        .collect()
}

/// Vec-backed trophy repository preserving insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryTrophyRepository {
    trophies: Vec<Trophy>,
    next_id: TrophyId,
}

impl InMemoryTrophyRepository {
    /// Constructs a repository holding the five starter trophies.
    ///
    /// Seeds go through `add_trophy`, so they receive ids 1 through 5.
    pub fn try_new() -> RepoResult<Self> {
        let mut repo = Self::empty();
        for trophy in seed_trophies()? {
            repo.add_trophy(Some(trophy))?;
        }
        info!(
            "event=repo_seed module=repo status=ok count={}",
            repo.trophies.len()
        );
        Ok(repo)
    }

    /// Constructs an empty repository whose first assigned id is 1.
    pub fn empty() -> Self {
        Self {
            trophies: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.trophies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trophies.is_empty()
    }

    fn position(&self, id: TrophyId) -> Option<usize> {
        self.trophies.iter().position(|trophy| trophy.id() == id)
    }
}

impl TrophyRepository for InMemoryTrophyRepository {
    fn list_trophies(&self, query: &TrophyListQuery) -> Vec<Trophy> {
        let mut result: Vec<Trophy> = self
            .trophies
            .iter()
            .filter(|trophy| query.year.map_or(true, |year| trophy.year() == year))
            .cloned()
            .collect();

        // `sort_by` is stable: ties keep insertion order.
        match query.sort_by {
            Some(TrophySortKey::Competition) => {
                result.sort_by(|a, b| a.competition().cmp(b.competition()))
            }
            Some(TrophySortKey::Year) => result.sort_by_key(Trophy::year),
            None => {}
        }

        result
    }

    fn get_trophy(&self, id: TrophyId) -> Option<Trophy> {
        self.trophies.iter().find(|trophy| trophy.id() == id).cloned()
    }

    fn add_trophy(&mut self, trophy: Option<Trophy>) -> RepoResult<Trophy> {
        let Some(mut trophy) = trophy else {
            warn!("event=trophy_add module=repo status=rejected error_code=null_argument");
            return Err(RepoError::NullArgument("trophy"));
        };

        // Checked against the caller id before it is overwritten below.
        if self.position(trophy.id()).is_some() {
            warn!(
                "event=trophy_add module=repo status=rejected error_code=duplicate_id id={}",
                trophy.id()
            );
            return Err(RepoError::DuplicateId(trophy.id()));
        }
        trophy.validate()?;

        let id = self.next_id;
        self.next_id += 1;
        trophy.assign_id(id);
        self.trophies.push(trophy.clone());

        info!("event=trophy_add module=repo status=ok id={id}");
        Ok(trophy)
    }

    fn remove_trophy(&mut self, id: TrophyId) -> Option<Trophy> {
        let index = self.position(id)?;
        let removed = self.trophies.remove(index);
        info!("event=trophy_remove module=repo status=ok id={id}");
        Some(removed)
    }

    fn update_trophy(
        &mut self,
        id: TrophyId,
        replacement: Option<Trophy>,
    ) -> RepoResult<Trophy> {
        let Some(index) = self.position(id) else {
            warn!(
                "event=trophy_update module=repo status=rejected error_code=not_found id={id}"
            );
            return Err(RepoError::NotFound(id));
        };
        let Some(replacement) = replacement else {
            warn!(
                "event=trophy_update module=repo status=rejected error_code=null_argument id={id}"
            );
            return Err(RepoError::NullArgument("replacement"));
        };

        let existing = &mut self.trophies[index];
        existing.apply_fields(replacement.competition(), replacement.year())?;

        info!("event=trophy_update module=repo status=ok id={id}");
        Ok(existing.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        seed_trophies, InMemoryTrophyRepository, RepoError, TrophyListQuery, TrophyRepository,
        TrophySortKey,
    };
    use crate::model::trophy::Trophy;

    #[test]
    fn sort_key_parse_is_exact() {
        assert_eq!(
            TrophySortKey::parse("competition"),
            Some(TrophySortKey::Competition)
        );
        assert_eq!(TrophySortKey::parse("year"), Some(TrophySortKey::Year));
        assert_eq!(TrophySortKey::parse("Year"), None);
        assert_eq!(TrophySortKey::parse(" year"), None);
        assert_eq!(TrophySortKey::parse(""), None);
        assert_eq!(TrophySortKey::Competition.as_str(), "competition");
    }

    #[test]
    fn seed_trophies_carry_caller_ids_in_order() {
        let seeds = seed_trophies().expect("seed data is valid");
        let ids: Vec<_> = seeds.iter().map(Trophy::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_repository_starts_counter_at_one() {
        let mut repo = InMemoryTrophyRepository::empty();
        assert!(repo.is_empty());

        let trophy = Trophy::new(77, "Copa del Rey", 2023).expect("valid trophy");
        let stored = repo.add_trophy(Some(trophy)).expect("add succeeds");
        assert_eq!(stored.id(), 1);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn list_returns_copies_not_storage() {
        let repo = InMemoryTrophyRepository::try_new().expect("seeded repo");
        let mut listed = repo.list_trophies(&TrophyListQuery::default());
        listed.clear();
        assert_eq!(repo.len(), 5);
    }

    #[test]
    fn update_checks_existence_before_argument() {
        let mut repo = InMemoryTrophyRepository::try_new().expect("seeded repo");
        let err = repo
            .update_trophy(999, None)
            .expect_err("missing id must fail first");
        assert_eq!(err, RepoError::NotFound(999));
    }
}
