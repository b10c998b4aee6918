//! Entity use-case services.
//!
//! # Responsibility
//! - Own the insert-vs-update decision for every entity kind.
//! - Keep form/list layers decoupled from DAO details.

pub mod entity_service;
