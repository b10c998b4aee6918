//! Entity list view controller.

use crate::dao::Dao;
use crate::notify::{DataChangeListener, ListenerResult};
use crate::service::entity_service::{EntityService, ServiceError, ServiceResult};
use log::{debug, warn};
use std::cell::{Ref, RefCell};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-facing message for removals blocked by dependent rows.
pub const REFERENCED_MESSAGE: &str = "cannot remove: referenced by other records";

#[derive(Debug)]
pub enum RemoveError {
    /// Other records still point at the entity.
    Referenced(ServiceError),
    Failed(ServiceError),
}

impl Display for RemoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Referenced(_) => f.write_str(REFERENCED_MESSAGE),
            Self::Failed(err) => write!(f, "error removing object: {err}"),
        }
    }
}

impl Error for RemoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Referenced(err) | Self::Failed(err) => Some(err),
        }
    }
}

impl From<ServiceError> for RemoveError {
    fn from(value: ServiceError) -> Self {
        if value.is_integrity() {
            Self::Referenced(value)
        } else {
            Self::Failed(value)
        }
    }
}

/// Cached list of all entities of one kind.
pub struct EntityListView<'a, D: Dao> {
    service: &'a EntityService<D>,
    rows: RefCell<Vec<D::Entity>>,
}

impl<'a, D: Dao> EntityListView<'a, D> {
    /// Creates an empty view; call [`Self::refresh`] to load rows.
    pub fn new(service: &'a EntityService<D>) -> Self {
        Self {
            service,
            rows: RefCell::new(Vec::new()),
        }
    }

    /// Re-queries all rows and returns the new row count.
    ///
    /// Fails with `IllegalState`, leaving the cached rows unchanged, while a
    /// `Ref` from [`Self::rows`] is still held.
    pub fn refresh(&self) -> ServiceResult<usize> {
        let rows = self.service.find_all()?;
        let count = rows.len();
        let mut cached = self.rows.try_borrow_mut().map_err(|_| {
            warn!("event=list_refresh module=view status=error error_code=rows_borrowed");
            ServiceError::IllegalState("list rows are still borrowed during refresh")
        })?;
        *cached = rows;
        debug!("event=list_refresh module=view status=ok rows={count}");
        Ok(count)
    }

    pub fn rows(&self) -> Ref<'_, Vec<D::Entity>> {
        self.rows.borrow()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    /// Cloned snapshot of the cached rows; holds no borrow.
    pub fn snapshot(&self) -> Vec<D::Entity>
    where
        D::Entity: Clone,
    {
        self.rows.borrow().clone()
    }

    /// Removes `entity` and refreshes the rows.
    ///
    /// Rows are left untouched when the removal fails.
    pub fn remove(&self, entity: &D::Entity) -> Result<(), RemoveError> {
        self.service.remove(Some(entity))?;
        self.refresh()?;
        Ok(())
    }
}

impl<D: Dao> DataChangeListener for EntityListView<'_, D> {
    fn on_data_changed(&self) -> ListenerResult {
        self.refresh()?;
        Ok(())
    }
}
