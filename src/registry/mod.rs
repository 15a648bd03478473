//! Presenter retention across container recreation.
//!
//! Each presenter-owning view gets a unique [`ViewId`]; presenters are
//! cached under that id inside a scope tied to the hosting container. The
//! scope identifier round-trips through the container's restorable state,
//! so a recreated container (rotation, theme change) finds the scope, and
//! the presenters in it, exactly where the destroyed instance left them.
//! A permanent teardown purges the scope instead.
//!
//! The registry is an explicit handle, not a process-wide singleton: create
//! one, hand clones to every delegate, and call [`PresenterRegistry::reset`]
//! between test cases.

mod cache;
mod host;
mod ids;
mod manager;

pub use cache::{PresenterToken, ScopeCache};
pub use host::{ContainerEvent, HostLifecycle};
pub use ids::{ContainerKey, ScopeId, ViewId};
pub use manager::PresenterRegistry;
