//! Lifecycle phase transitions for a presenter.

/// Where a presenter is in its attach/detach lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Constructed, never attached. Business logic is not wired yet.
    Fresh,
    /// Wired, with a live view bound.
    Attached,
    /// Wired, but the view is temporarily gone (e.g. recreation in flight).
    Detached,
    /// Torn down. Re-attaching is technically possible (it rewires from
    /// scratch) but unsupported for production use.
    Destroyed,
}

/// Lifecycle inputs, dispatched by [`MviPresenter`].
///
/// [`MviPresenter`]: super::MviPresenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleEvent {
    Attach,
    Detach,
    Destroy,
}

impl LifecyclePhase {
    /// Pure transition function. Side effects (wiring, binding, disposal)
    /// are applied by the presenter around the dispatch call.
    pub(crate) fn apply(self, event: LifecycleEvent) -> Self {
        match event {
            LifecycleEvent::Attach => Self::Attached,

            LifecycleEvent::Detach => match self {
                Self::Attached => Self::Detached,
                other => other,
            },

            LifecycleEvent::Destroy => Self::Destroyed,
        }
    }

    /// True when the next attach must run the one-time wiring step.
    pub(crate) fn needs_wiring(self) -> bool {
        matches!(self, Self::Fresh | Self::Destroyed)
    }
}
