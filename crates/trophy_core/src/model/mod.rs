//! Trophy domain model.
//!
//! # Responsibility
//! - Define the validated record type stored by repositories.
//!
//! # Invariants
//! - Model values validate on every write; invalid state is unrepresentable
//!   from outside this module.

pub mod trophy;
