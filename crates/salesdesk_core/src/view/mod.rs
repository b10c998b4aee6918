//! Headless form and list controllers.
//!
//! # Responsibility
//! - Drive the validate → save → notify flow a dialog form performs.
//! - Keep list rows in sync with the store by re-querying on change.
//!
//! Rendering is left to the embedding UI; these types only hold state.

pub mod form;
pub mod list;

pub use form::{EntityForm, FormError};
pub use list::{EntityListView, RemoveError, REFERENCED_MESSAGE};
