//! Trophy use-case service.
//!
//! # Responsibility
//! - Provide field-level create/update entry points for core callers.
//! - Delegate storage and identity to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/identity contracts.
//! - Service layer remains storage-agnostic.

use crate::model::trophy::{Trophy, TrophyId};
use crate::repo::trophy_repo::{RepoResult, TrophyListQuery, TrophyRepository, TrophySortKey};

/// Placeholder id for new trophies; the repository replaces it on insert.
const UNASSIGNED_ID: TrophyId = 0;

/// Use-case service wrapper for trophy CRUD operations.
pub struct TrophyService<R: TrophyRepository> {
    repo: R,
}

impl<R: TrophyRepository> TrophyService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the wrapped repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates the fields and stores a new trophy.
    ///
    /// # Contract
    /// - Returns `RepoError::Validation` without touching storage when either
    ///   field is invalid.
    /// - Returns the stored trophy carrying its assigned id.
    pub fn create_trophy(
        &mut self,
        competition: impl Into<String>,
        year: i32,
    ) -> RepoResult<Trophy> {
        let trophy = Trophy::new(UNASSIGNED_ID, competition, year)?;
        self.repo.add_trophy(Some(trophy))
    }

    /// Lists trophies using filter and sort options.
    pub fn list_trophies(&self, query: &TrophyListQuery) -> Vec<Trophy> {
        self.repo.list_trophies(query)
    }

    /// Lists trophies with a string sort key (`competition` or `year`).
    ///
    /// Unknown sort names keep insertion order.
    pub fn list_by_sort_name(&self, year: Option<i32>, sort_by: Option<&str>) -> Vec<Trophy> {
        let query = TrophyListQuery {
            year,
            sort_by: sort_by.and_then(TrophySortKey::parse),
        };
        self.repo.list_trophies(&query)
    }

    pub fn get_trophy(&self, id: TrophyId) -> Option<Trophy> {
        self.repo.get_trophy(id)
    }

    /// Replaces competition/year of an existing trophy.
    ///
    /// Invalid fields fail before the repository is consulted, so the
    /// not-found check only runs for well-formed input.
    pub fn update_trophy(
        &mut self,
        id: TrophyId,
        competition: impl Into<String>,
        year: i32,
    ) -> RepoResult<Trophy> {
        let replacement = Trophy::new(UNASSIGNED_ID, competition, year)?;
        self.repo.update_trophy(id, Some(replacement))
    }

    pub fn remove_trophy(&mut self, id: TrophyId) -> Option<Trophy> {
        self.repo.remove_trophy(id)
    }
}
