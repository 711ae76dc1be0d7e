//! Typed identifier newtype for stations.
//!
//! Station ids are short codes assigned by the backend (`SS001`, `SS002`, …),
//! so the newtype wraps a `String` rather than generating anything locally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a [`Station`](crate::station::Station).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Wrap an existing backend-assigned code.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for StationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::EmptyStationId);
        }
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = StationId::new("SS001");
        let text = id.to_string();
        let parsed: StationId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = StationId::new("SS016");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"SS016\"");
        let parsed: StationId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_empty_id() {
        let result = StationId::from_str("");
        assert_eq!(result, Err(ValidationError::EmptyStationId));
    }

    #[test]
    fn should_order_ids_lexicographically() {
        let a = StationId::new("SS001");
        let b = StationId::new("SS002");
        assert!(a < b);
    }
}
