//! Catalog record identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, stable identifier of a catalog record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct MediaId(Uuid);

impl MediaId {
    /// Generate a fresh random identifier.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Lower-case hex form without hyphens, used for storage paths.
    pub fn simple(&self) -> String {
        self.0.simple().to_string()
    }
}

impl From<MediaId> for Uuid {
    fn from(id: MediaId) -> Self {
        id.0
    }
}

impl std::str::FromStr for MediaId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
