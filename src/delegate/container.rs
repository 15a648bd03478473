//! The delegate driving one presenter through its container's lifecycle.

use std::rc::Rc;

use crate::presenter::MviPresenter;
use crate::registry::{HostLifecycle, PresenterRegistry, PresenterToken};
use crate::retention::{RetentionPolicy, TeardownSignals};
use crate::saved_state::SavedState;

use super::callback::{DelegateCallback, HostContainer};

/// Per-container presenter orchestration.
///
/// The host calls the `on_container_*` methods from the matching lifecycle
/// callbacks, in the natural order: create, then attach, then any number of
/// detach/attach pairs, then detach and teardown. Persist-state may happen
/// any time after create.
pub struct ContainerDelegate<V, VS, C, H>
where
    V: 'static,
    VS: Clone + 'static,
    C: DelegateCallback<V, VS>,
    H: HostContainer,
{
    callback: Rc<C>,
    container: Rc<H>,
    registry: PresenterRegistry,
    host: HostLifecycle,
    policy: RetentionPolicy,
    token: Option<PresenterToken<V, VS>>,
    presenter: Option<Rc<MviPresenter<V, VS>>>,
    restoring_view_state: bool,
}

impl<V, VS, C, H> ContainerDelegate<V, VS, C, H>
where
    V: 'static,
    VS: Clone + 'static,
    C: DelegateCallback<V, VS>,
    H: HostContainer,
{
    pub fn new(
        callback: Rc<C>,
        container: Rc<H>,
        registry: PresenterRegistry,
        host: HostLifecycle,
        policy: RetentionPolicy,
    ) -> Self {
        Self {
            callback,
            container,
            registry,
            host,
            policy,
            token: None,
            presenter: None,
            restoring_view_state: false,
        }
    }

    /// The presenter currently driven by this delegate, once created.
    pub fn presenter(&self) -> Option<&Rc<MviPresenter<V, VS>>> {
        self.presenter.as_ref()
    }

    /// Recover the stored presenter for a restored view id, or build a
    /// fresh one.
    ///
    /// A restored id that misses the registry is the process-death case:
    /// restorable state survived, the in-memory store did not. That is
    /// normal and falls back to the factory.
    pub fn on_container_create(&mut self, saved: Option<&SavedState>) {
        let key = self.container.container_key();

        if self.policy.retains_anything() {
            if let Some(view_id) = saved.and_then(|state| state.view_id.clone()) {
                let token = PresenterToken::for_view_id(view_id);
                if let Some(stored) = self.registry.presenter(key, &token) {
                    tracing::debug!(view = %token.view_id(), "presenter reused from registry");
                    self.token = Some(token);
                    self.presenter = Some(stored);
                    self.restoring_view_state = true;
                    return;
                }
                tracing::debug!(
                    view = %token.view_id(),
                    "restored view id not in registry (process death); creating presenter"
                );
            }
        }

        let presenter = self.callback.create_presenter();
        if self.policy.retains_anything() {
            let token = PresenterToken::generate();
            self.registry
                .put_presenter(&self.host, key, &token, Rc::clone(&presenter));
            tracing::debug!(view = %token.view_id(), "presenter created and registered");
            self.token = Some(token);
        } else {
            tracing::debug!("presenter created unregistered; policy never retains");
        }
        self.presenter = Some(presenter);
    }

    /// Attach the container's current view to the presenter.
    ///
    /// # Panics
    ///
    /// Panics when called before [`on_container_create`].
    ///
    /// [`on_container_create`]: ContainerDelegate::on_container_create
    pub fn on_container_attach(&mut self) {
        let presenter = self
            .presenter
            .as_ref()
            .expect("on_container_create must run before the view attaches");

        if self.restoring_view_state {
            self.callback.set_restoring_view_state(true);
        }
        presenter.attach_view(self.callback.mvi_view());
        if self.restoring_view_state {
            self.callback.set_restoring_view_state(false);
        }
    }

    /// Detach the view, leaving the presenter's pipelines running.
    pub fn on_container_detach(&mut self) {
        if let Some(presenter) = &self.presenter {
            presenter.detach_view();
            // Whatever attaches next renders a state that was already
            // shown once.
            self.restoring_view_state = true;
        }
    }

    /// Consult the retention policy; destroy and evict unless the
    /// presenter is to survive this teardown. Returns the decision.
    pub fn on_container_teardown(&mut self) -> bool {
        let signals = TeardownSignals {
            changing_configurations: self.container.is_changing_configurations(),
            finishing: self.container.is_finishing(),
            on_history: self.container.is_reachable_via_history(),
            being_removed: self.container.is_being_removed(),
        };
        let retain = self.policy.should_retain(signals);

        if !retain {
            if let Some(presenter) = &self.presenter {
                presenter.destroy();
            }
            if let Some(token) = &self.token {
                self.registry
                    .remove(self.container.container_key(), token.view_id());
            }
            tracing::debug!(?signals, "presenter destroyed and evicted");
        } else {
            tracing::debug!(?signals, "presenter retained");
        }

        retain
    }

    /// The identifiers to write into the container's restorable state.
    pub fn on_container_persist_state(&self) -> SavedState {
        SavedState::new(
            self.token.as_ref().map(|token| token.view_id().clone()),
            self.registry.scope_id_for(self.container.container_key()),
        )
    }
}
