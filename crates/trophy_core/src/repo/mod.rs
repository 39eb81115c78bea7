//! Repository layer abstractions and implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep collection and identity details away from service orchestration.
//!
//! # Invariants
//! - Repository writes must go through `Trophy` validation before mutation.
//! - Expected absence is `None`; misuse is a `RepoError`.

pub mod trophy_repo;
