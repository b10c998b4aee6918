//! Core persistence, validation and change-notification logic for SalesDesk.
//! This crate is the single source of truth for department/seller invariants.

pub mod config;
pub mod dao;
pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod service;
pub mod validation;
pub mod view;

pub use config::{AppConfig, ConfigError, LoggingConfig, StoreConfig};
pub use dao::department_dao::SqliteDepartmentDao;
pub use dao::factory::{DaoFactory, KindDao};
pub use dao::seller_dao::SqliteSellerDao;
pub use dao::{Dao, DaoError, DaoResult};
pub use db::{DbError, DbResult, Store};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::department::Department;
pub use model::entity::{Entity, EntityId, EntityKind};
pub use model::seller::Seller;
pub use notify::{ChangeNotifier, DataChangeListener, ListenerResult};
pub use service::entity_service::{
    DepartmentService, EntityService, SellerService, ServiceError, ServiceResult,
};
pub use validation::{
    validate_department, validate_seller, DepartmentForm, FormValidator, SellerForm,
    ValidationError,
};
pub use view::{EntityForm, EntityListView, FormError, RemoveError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
