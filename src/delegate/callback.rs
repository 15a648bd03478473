//! Capability traits a host must implement for its containers.

use std::rc::Rc;

use crate::presenter::MviPresenter;
use crate::registry::ContainerKey;

/// What the delegate needs from the view side of a container.
pub trait DelegateCallback<V: 'static, VS: Clone + 'static> {
    /// The live view object to attach. Called at attach time, so a
    /// recreated container hands out its new view instance.
    fn mvi_view(&self) -> Rc<V>;

    /// Build a fresh presenter. Called once per logical presenter
    /// lifetime, never when a stored presenter is recovered from the
    /// registry.
    fn create_presenter(&self) -> Rc<MviPresenter<V, VS>>;

    /// Notified around an attach that will replay a previously rendered
    /// state, letting the view suppress animations or analytics for
    /// restored renders.
    fn set_restoring_view_state(&self, restoring: bool) {
        let _ = restoring;
    }
}

/// What the delegate needs to know about the hosting container itself.
///
/// These must be answered honestly from the host's real lifecycle state;
/// in particular [`is_reachable_via_history`] is a declared capability, not
/// something this crate can infer.
///
/// [`is_reachable_via_history`]: HostContainer::is_reachable_via_history
pub trait HostContainer {
    /// Identity of this live container instance. Stable for the instance's
    /// lifetime, never persisted.
    fn container_key(&self) -> ContainerKey;

    /// A destroy-and-recreate cycle is in flight.
    fn is_changing_configurations(&self) -> bool;

    /// The container is finishing permanently.
    fn is_finishing(&self) -> bool;

    /// The view remains reachable through back-navigation.
    fn is_reachable_via_history(&self) -> bool;

    /// The view is being removed from its parent.
    fn is_being_removed(&self) -> bool;
}
