//! Entity edit form controller.

use crate::dao::Dao;
use crate::notify::{ChangeNotifier, DataChangeListener};
use crate::service::entity_service::{EntityService, ServiceError};
use crate::validation::{FormValidator, ValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

#[derive(Debug)]
pub enum FormError {
    /// Field errors to render inline; nothing was saved.
    Validation(ValidationError),
    /// Saving failed in the service/DAO layer.
    Service(ServiceError),
    /// Saved, but a change listener failed afterwards.
    Listener(Box<dyn Error>),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Service(err) => write!(f, "error saving: {err}"),
            Self::Listener(err) => write!(f, "change listener failed: {err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Service(err) => Some(err),
            Self::Listener(err) => Some(err.as_ref()),
        }
    }
}

impl From<ValidationError> for FormError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ServiceError> for FormError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

/// Form controller for one open edit dialog.
///
/// Listener registrations live exactly as long as the form.
pub struct EntityForm<'a, D: Dao> {
    entity: D::Entity,
    service: &'a EntityService<D>,
    listeners: ChangeNotifier<'a>,
}

impl<'a, D: Dao> EntityForm<'a, D> {
    /// Opens a form for `entity`; a transient entity means "new record".
    pub fn new(entity: D::Entity, service: &'a EntityService<D>) -> Self {
        Self {
            entity,
            service,
            listeners: ChangeNotifier::new(),
        }
    }

    pub fn entity(&self) -> &D::Entity {
        &self.entity
    }

    pub fn subscribe_data_change_listener(&mut self, listener: Rc<dyn DataChangeListener + 'a>) {
        self.listeners.subscribe(listener);
    }

    /// Validates `input`, saves it, then notifies listeners.
    ///
    /// The service is not called when validation fails, and listeners only
    /// fire after a successful save.
    pub fn submit<F>(&mut self, input: &F) -> Result<&D::Entity, FormError>
    where
        F: FormValidator<Entity = D::Entity>,
    {
        let mut entity = input.validate()?;
        self.service.save_or_update(&mut entity)?;
        self.entity = entity;
        self.listeners
            .notify_all()
            .map_err(FormError::Listener)?;
        Ok(&self.entity)
    }
}
