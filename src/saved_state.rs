//! Restorable-state payload carried across container recreation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::{ScopeId, ViewId};

#[derive(Debug, Error)]
pub enum SavedStateError {
    #[error("failed to decode saved state: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two opaque identifiers a container must round-trip through its
/// restorable state: which view the presenter belongs to, and which scope
/// the view's container owned. Either may be absent (fresh launch, or a
/// delegate whose policy never retains).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub view_id: Option<ViewId>,
    pub scope_id: Option<ScopeId>,
}

impl SavedState {
    pub fn new(view_id: Option<ViewId>, scope_id: Option<ScopeId>) -> Self {
        Self { view_id, scope_id }
    }

    /// Serialize into the opaque string the host stores.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("saved state serialization cannot fail")
    }

    /// Parse a payload previously produced by [`encode`].
    ///
    /// [`encode`]: SavedState::encode
    pub fn decode(payload: &str) -> Result<Self, SavedStateError> {
        Ok(serde_json::from_str(payload)?)
    }
}
