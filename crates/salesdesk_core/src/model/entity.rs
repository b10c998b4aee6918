//! Identity contract shared by all persisted entity kinds.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned identity, unique within one entity kind.
pub type EntityId = i64;

/// Closed set of entity kinds managed by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Department,
    Seller,
}

impl EntityKind {
    /// Stable lowercase name, also the backing table name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Seller => "seller",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity accessors used by the service layer to branch insert vs update.
pub trait Entity {
    const KIND: EntityKind;

    fn id(&self) -> Option<EntityId>;

    /// Writes back the identity assigned by the store after insert.
    fn set_id(&mut self, id: EntityId);

    fn is_transient(&self) -> bool {
        self.id().is_none()
    }
}
