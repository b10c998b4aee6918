//! Generic entity service over one DAO.
//!
//! # Responsibility
//! - `save_or_update`: insert transient entities and write back the assigned
//!   identity; update persisted ones.
//! - `remove`: delete by identity, surfacing integrity failures unchanged.
//!
//! # Invariants
//! - No validation happens here; callers validate form input first.
//! - The service is a stateless facade and holds no entity instances.
//! - Errors are propagated, never suppressed.

use crate::dao::department_dao::SqliteDepartmentDao;
use crate::dao::seller_dao::SqliteSellerDao;
use crate::dao::{Dao, DaoError};
use crate::model::entity::{Entity, EntityId, EntityKind};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    /// Caller broke a usage contract (e.g. asked to remove nothing).
    IllegalState(&'static str),
    /// Entity was never stored, so there is no row to act on.
    NotPersisted(EntityKind),
    Dao(DaoError),
}

impl ServiceError {
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Dao(err) if err.is_integrity())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Dao(err) if err.is_not_found())
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalState(details) => write!(f, "illegal state: {details}"),
            Self::NotPersisted(kind) => write!(f, "{kind} has not been saved yet"),
            Self::Dao(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dao(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DaoError> for ServiceError {
    fn from(value: DaoError) -> Self {
        Self::Dao(value)
    }
}

/// Service facade for one entity kind.
pub struct EntityService<D: Dao> {
    dao: D,
}

pub type DepartmentService<'conn> = EntityService<SqliteDepartmentDao<'conn>>;
pub type SellerService<'conn> = EntityService<SqliteSellerDao<'conn>>;

impl<D: Dao> EntityService<D> {
    pub fn new(dao: D) -> Self {
        Self { dao }
    }

    /// Returns every entity in DAO-defined order.
    pub fn find_all(&self) -> ServiceResult<Vec<D::Entity>> {
        Ok(self.dao.find_all()?)
    }

    pub fn find_by_id(&self, id: EntityId) -> ServiceResult<Option<D::Entity>> {
        Ok(self.dao.find_by_id(id)?)
    }

    /// Inserts a transient entity or updates a persisted one.
    ///
    /// On insert the store-assigned identity is written back onto `entity`.
    /// The identity of a persisted entity is never touched.
    pub fn save_or_update(&self, entity: &mut D::Entity) -> ServiceResult<()> {
        let kind = <D::Entity as Entity>::KIND;
        match entity.id() {
            None => {
                let id = self.dao.insert(entity).inspect_err(|err| {
                    warn!("event=entity_save module=service kind={kind} action=insert status=error error={err}");
                })?;
                entity.set_id(id);
                info!("event=entity_save module=service kind={kind} action=insert status=ok id={id}");
            }
            Some(id) => {
                self.dao.update(entity).inspect_err(|err| {
                    warn!("event=entity_save module=service kind={kind} action=update status=error id={id} error={err}");
                })?;
                info!("event=entity_save module=service kind={kind} action=update status=ok id={id}");
            }
        }
        Ok(())
    }

    /// Removes a persisted entity by identity.
    ///
    /// # Errors
    /// - `IllegalState` when `entity` is `None`.
    /// - `NotPersisted` when the entity has no identity yet.
    /// - `Dao(Integrity)` when other rows still reference it.
    pub fn remove(&self, entity: Option<&D::Entity>) -> ServiceResult<()> {
        let kind = <D::Entity as Entity>::KIND;
        let entity = entity.ok_or(ServiceError::IllegalState("entity to remove was none"))?;
        let id = entity.id().ok_or(ServiceError::NotPersisted(kind))?;

        self.dao.delete_by_id(id).inspect_err(|err| {
            warn!("event=entity_remove module=service kind={kind} status=error id={id} error={err}");
        })?;
        info!("event=entity_remove module=service kind={kind} status=ok id={id}");
        Ok(())
    }
}
