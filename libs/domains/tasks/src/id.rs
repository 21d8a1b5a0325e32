//! Task identifier value type.
//!
//! Tasks are addressed by the store's native `ObjectId`, which travels over
//! the wire as a 24-character lowercase hex string. [`TaskId`] models both
//! representations with explicit conversions so a malformed caller-supplied
//! id is rejected here and never reaches the store driver.

use mongodb::bson::Bson;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error produced when a wire string is not a well-formed task id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid task id '{0}': expected a 24-character hex string")]
pub struct InvalidTaskId(pub String);

/// Unique identifier of a task document.
///
/// Serializes as the native `ObjectId` for storage; use [`TaskId::to_hex`]
/// (or `Display`) for the wire form and [`TaskId::parse`] to decode it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(ObjectId);

impl TaskId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Decode the wire string form.
    ///
    /// Fails with [`InvalidTaskId`] on wrong length or non-hex characters.
    pub fn parse(s: &str) -> Result<Self, InvalidTaskId> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidTaskId(s.to_string()))
    }

    /// Encode to the wire string form (24-character lowercase hex).
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// The store's native identifier value.
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl FromStr for TaskId {
    type Err = InvalidTaskId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ObjectId> for TaskId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<TaskId> for Bson {
    fn from(id: TaskId) -> Self {
        Bson::ObjectId(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let id = TaskId::new();
        let parsed = TaskId::parse(&id.to_hex()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_display_matches_hex() {
        let id = TaskId::new();
        assert_eq!(id.to_string(), id.to_hex());
        assert_eq!(id.to_hex().len(), 24);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(TaskId::parse("abc123").is_err());
        assert!(TaskId::parse("68b1f0a2c3d4e5f6a7b8c9d0ff").is_err());
        assert!(TaskId::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        // Right length, wrong charset
        assert!(TaskId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert!(TaskId::parse("not-a-valid-id-but-24-ch").is_err());
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = TaskId::parse("bogus").unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_from_str() {
        let id = TaskId::new();
        let parsed: TaskId = id.to_hex().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
