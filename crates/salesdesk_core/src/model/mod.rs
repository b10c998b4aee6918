//! Domain model for departments and sellers.
//!
//! # Responsibility
//! - Define the entity shapes persisted by the DAO layer.
//! - Expose identity semantics shared by every entity kind.
//!
//! # Invariants
//! - An entity without identity is transient (never stored).
//! - Identity is assigned by the store exactly once and never changes.

pub mod department;
pub mod entity;
pub mod seller;
