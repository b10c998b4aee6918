//! DAO factory over the shared store handle.
//!
//! # Responsibility
//! - Resolve the DAO implementation for an entity kind.
//! - Wire every DAO to the one connection owned by [`Store`].
//!
//! # Invariants
//! - Factory calls never open a connection of their own; the store opens its
//!   single connection lazily on the first call and reuses it afterwards.
//! - The factory does not read configuration.

use super::department_dao::SqliteDepartmentDao;
use super::seller_dao::SqliteSellerDao;
use super::{Dao, DaoResult};
use crate::db::Store;
use crate::model::entity::{EntityId, EntityKind};

/// DAO resolved by entity-kind tag.
pub enum KindDao<'conn> {
    Department(SqliteDepartmentDao<'conn>),
    Seller(SqliteSellerDao<'conn>),
}

impl KindDao<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Department(_) => EntityKind::Department,
            Self::Seller(_) => EntityKind::Seller,
        }
    }

    /// Kind-agnostic delete, used where only the tag and id are known.
    pub fn delete_by_id(&self, id: EntityId) -> DaoResult<()> {
        match self {
            Self::Department(dao) => dao.delete_by_id(id),
            Self::Seller(dao) => dao.delete_by_id(id),
        }
    }

    /// Returns whether a row with this id exists for the resolved kind.
    pub fn exists(&self, id: EntityId) -> DaoResult<bool> {
        match self {
            Self::Department(dao) => Ok(dao.find_by_id(id)?.is_some()),
            Self::Seller(dao) => Ok(dao.find_by_id(id)?.is_some()),
        }
    }
}

pub struct DaoFactory<'store> {
    store: &'store Store,
}

impl<'store> DaoFactory<'store> {
    pub fn new(store: &'store Store) -> Self {
        Self { store }
    }

    pub fn department_dao(&self) -> DaoResult<SqliteDepartmentDao<'store>> {
        Ok(SqliteDepartmentDao::new(self.store.connection()?))
    }

    pub fn seller_dao(&self) -> DaoResult<SqliteSellerDao<'store>> {
        Ok(SqliteSellerDao::new(self.store.connection()?))
    }

    pub fn dao_for(&self, kind: EntityKind) -> DaoResult<KindDao<'store>> {
        match kind {
            EntityKind::Department => self.department_dao().map(KindDao::Department),
            EntityKind::Seller => self.seller_dao().map(KindDao::Seller),
        }
    }
}
