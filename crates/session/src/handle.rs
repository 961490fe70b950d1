//! Opaque carriers for what the client agent hands back.
//!
//! The starter never looks inside the session or a resource; both are JSON
//! blobs whose schema belongs to the agent and the FHIR server respectively.

use serde::{Deserialize, Serialize};

/// An authenticated-connection object returned by the launch handshake.
///
/// A `SessionHandle` is only ever constructed from the complete JSON payload
/// the connector received, so it is either absent or fully formed; there is
/// no partially-built state. The view stores it verbatim and renders its
/// compact serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHandle(serde_json::Value);

impl SessionHandle {
    /// Borrow the underlying JSON value.
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consume the handle, returning the underlying JSON value.
    pub fn into_json(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for SessionHandle {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for SessionHandle {
    /// Compact JSON, exactly as the view renders it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A FHIR resource fetched through an established session.
///
/// Declared for the view's second state slot; the starter never populates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource(serde_json::Value);

impl Resource {
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Resource {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
