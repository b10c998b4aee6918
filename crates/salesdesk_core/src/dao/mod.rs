//! Data access layer: one DAO per entity kind.
//!
//! # Responsibility
//! - Define the shared `insert/update/delete_by_id/find_by_id/find_all`
//!   capability for every entity kind.
//! - Isolate SQL details from service/business orchestration.
//! - Translate SQLite failures into the semantic error taxonomy.
//!
//! # Invariants
//! - DAOs carry no business rules and never validate form input.
//! - Referential/uniqueness violations surface as `DaoError::Integrity`,
//!   never as a generic storage error.
//! - Errors are never swallowed; every failure reaches the caller once.

use crate::db::DbError;
use crate::model::entity::{Entity, EntityId, EntityKind};
use rusqlite::ffi;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_dao;
pub mod factory;
pub mod seller_dao;

pub type DaoResult<T> = Result<T, DaoError>;

/// Semantic persistence error shared by all DAOs.
#[derive(Debug)]
pub enum DaoError {
    /// Update/delete target row does not exist.
    NotFound { kind: EntityKind, id: EntityId },
    /// Foreign-key, unique or primary-key constraint rejected the write.
    Integrity { kind: EntityKind, message: String },
    /// Connectivity, other constraint or unexpected store failure.
    Storage(DbError),
    /// Caller passed an entity in the wrong lifecycle state, or a stored row
    /// could not be decoded.
    InvalidData(String),
}

impl DaoError {
    /// Returns whether this is a referential/uniqueness violation.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for DaoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Integrity { kind, message } => {
                write!(f, "integrity violation on {kind}: {message}")
            }
            Self::Storage(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid data: {message}"),
        }
    }
}

impl Error for DaoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for DaoError {
    fn from(value: DbError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for DaoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(DbError::Sqlite(value))
    }
}

/// Storage capability implemented once per entity kind.
pub trait Dao {
    type Entity: Entity;

    /// Inserts a transient entity and returns the store-assigned identity.
    ///
    /// The caller is responsible for writing the identity back.
    fn insert(&self, entity: &Self::Entity) -> DaoResult<EntityId>;

    /// Overwrites every mutable attribute of an existing row.
    fn update(&self, entity: &Self::Entity) -> DaoResult<()>;

    fn delete_by_id(&self, id: EntityId) -> DaoResult<()>;

    fn find_by_id(&self, id: EntityId) -> DaoResult<Option<Self::Entity>>;

    fn find_all(&self) -> DaoResult<Vec<Self::Entity>>;
}

const FOREIGN_KEY_FAILED_MESSAGE: &str = "FOREIGN KEY constraint failed";

/// Maps a write failure to `Integrity` when a relational constraint fired.
///
/// CHECK and NOT NULL violations stay `Storage`: they mean the caller bypassed
/// an input constraint, not that another row is in the way.
pub(crate) fn classify_write_error(kind: EntityKind, err: rusqlite::Error) -> DaoError {
    if let rusqlite::Error::SqliteFailure(failure, message) = &err {
        // SQLite reports RESTRICT actions through the trigger code.
        let restrict_violation = failure.extended_code == ffi::SQLITE_CONSTRAINT_TRIGGER
            && message.as_deref() == Some(FOREIGN_KEY_FAILED_MESSAGE);
        if restrict_violation
            || matches!(
                failure.extended_code,
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY
                    | ffi::SQLITE_CONSTRAINT_UNIQUE
                    | ffi::SQLITE_CONSTRAINT_PRIMARYKEY
            )
        {
            return DaoError::Integrity {
                kind,
                message: message.clone().unwrap_or_else(|| failure.to_string()),
            };
        }
    }
    DaoError::Storage(DbError::Sqlite(err))
}

pub(crate) fn require_transient<E: Entity>(entity: &E) -> DaoResult<()> {
    match entity.id() {
        None => Ok(()),
        Some(id) => Err(DaoError::InvalidData(format!(
            "cannot insert {} with existing id {id}",
            E::KIND
        ))),
    }
}

pub(crate) fn require_id<E: Entity>(entity: &E) -> DaoResult<EntityId> {
    entity.id().ok_or_else(|| {
        DaoError::InvalidData(format!("cannot update {} without id", E::KIND))
    })
}
