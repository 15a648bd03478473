//! Container lifecycle notifications from the host environment.

use crate::relay::{EventSource, PublishRelay, Subscription};

use super::ids::{ContainerKey, ScopeId};

/// What the host must report about its containers.
///
/// The registry only ever consumes two signals: "a container came up
/// (possibly restoring an earlier scope)" and "a container went away
/// (transiently or for good)".
#[derive(Debug, Clone)]
pub enum ContainerEvent {
    Created {
        key: ContainerKey,
        /// Scope id recovered from the container's restorable state, if the
        /// container is a recreation of an earlier instance.
        restored_scope: Option<ScopeId>,
    },
    Destroyed {
        key: ContainerKey,
        /// True when the destruction is part of a destroy-and-recreate
        /// cycle (e.g. rotation) rather than a real teardown.
        transient: bool,
    },
}

/// The host side of the lifecycle seam.
///
/// Host glue owns one of these and calls [`announce`] from its container
/// callbacks; the registry subscribes while it has live scopes to watch.
///
/// [`announce`]: HostLifecycle::announce
#[derive(Clone, Default)]
pub struct HostLifecycle {
    events: PublishRelay<ContainerEvent>,
}

impl HostLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn announce(&self, event: ContainerEvent) {
        tracing::trace!(?event, "container lifecycle event");
        self.events.emit(event);
    }

    /// Number of currently registered observers. With a single registry
    /// this is 0 or 1, no matter how many scopes that registry holds.
    pub fn observer_count(&self) -> usize {
        self.events.subscriber_count()
    }

    pub(crate) fn subscribe(
        &self,
        observer: impl FnMut(ContainerEvent) + 'static,
    ) -> Subscription {
        self.events.subscribe(observer)
    }
}
