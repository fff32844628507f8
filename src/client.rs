//! Client references shared by tasks and sessions.
//!
//! Client records themselves are managed outside this crate; tasks and
//! sessions only carry the identifier and the display name captured when
//! the record was written.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a client record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Creates a new random client identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a client identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to a client together with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientRef {
    id: ClientId,
    name: String,
}

impl ClientRef {
    /// Creates a client reference. Surrounding whitespace in the name is
    /// trimmed.
    #[must_use]
    pub fn new(id: ClientId, name: impl Into<String>) -> Self {
        let raw: String = name.into();
        Self {
            id,
            name: raw.trim().to_owned(),
        }
    }

    /// Returns the client identifier.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the client display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
