//! Opaque identifiers for views, scopes and live container instances.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one presenter-owning view, unique within its scope.
///
/// Generated once per logical view and persisted into restorable state;
/// the token itself carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(String);

impl ViewId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a container scope.
///
/// Assigned when a container is first tracked and stable across any number
/// of transient recreations, as long as the host round-trips it through
/// restorable state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeId(String);

impl ScopeId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of one *live* container instance, chosen by the host.
///
/// Unlike [`ScopeId`] this is never persisted: a recreated container is a
/// new instance with a new key, which then inherits the old scope via the
/// restored scope id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerKey(u64);

impl ContainerKey {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ViewId::generate(), ViewId::generate());
        assert_ne!(ScopeId::generate(), ScopeId::generate());
    }

    #[test]
    fn view_id_round_trips_through_json() {
        let id = ViewId::generate();
        let encoded = serde_json::to_string(&id).unwrap();
        let decoded: ViewId = serde_json::from_str(&encoded).unwrap();
        assert_eq!(id, decoded);
    }
}
