//! Entity identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Globally unique identifier for any graph entity or trace object
///
/// Generated ids have the form `<prefix>_<uuid-v7 hex>`, so they sort
/// chronologically within a prefix and are never reused. Ids loaded from a
/// snapshot are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh id with the given prefix
    ///
    /// # Examples
    ///
    /// ```
    /// use logos_domain::EntityId;
    ///
    /// let id = EntityId::generate("claim");
    /// assert!(id.as_str().starts_with("claim_"));
    /// ```
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}_{}", prefix, uuid::Uuid::now_v7().simple()))
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix of a generated id (the part before the first underscore)
    pub fn prefix(&self) -> Option<&str> {
        self.0.split_once('_').map(|(prefix, _)| prefix)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
