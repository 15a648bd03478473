//! Host-lifecycle glue for one presenter-owning container.
//!
//! A [`ContainerDelegate`] sits between a host container (screen, widget,
//! anything with create/attach/detach/teardown callbacks) and the core: the
//! host forwards its lifecycle moments, the delegate decides whether to
//! recover the presenter from the registry or build a fresh one, when to
//! attach and detach the view, and (via the retention policy) whether a
//! teardown destroys the presenter or leaves it registered for the next
//! incarnation.
//!
//! Container-level events (created/destroyed) are the host's own duty: it
//! announces them on its [`HostLifecycle`] so the registry can manage scope
//! adoption and purging. The delegate only drives the per-view presenter.
//!
//! [`HostLifecycle`]: crate::registry::HostLifecycle

mod callback;
mod container;

pub use callback::{DelegateCallback, HostContainer};
pub use container::ContainerDelegate;
