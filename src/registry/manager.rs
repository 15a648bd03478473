//! The registry proper: scope bookkeeping plus observer management.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::presenter::MviPresenter;
use crate::relay::Subscription;

use super::cache::{PresenterToken, ScopeCache};
use super::host::{ContainerEvent, HostLifecycle};
use super::ids::{ContainerKey, ScopeId, ViewId};

/// Keeps presenters alive while their containers are transiently gone.
///
/// The registry is a cheap `Clone` handle; all clones share one store. It
/// watches the host's [`ContainerEvent`]s only while it has something to
/// protect: the observer is registered when the first container is tracked
/// and unregistered once the last scope is purged, so an idle registry
/// costs the host nothing.
///
/// Everything here runs on the owner thread; the handle is `!Send` and the
/// maps need no locking.
#[derive(Clone, Default)]
pub struct PresenterRegistry {
    inner: Rc<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    container_scopes: RefCell<HashMap<ContainerKey, ScopeId>>,
    scopes: RefCell<HashMap<ScopeId, ScopeCache>>,
    host_subscription: RefCell<Option<Subscription>>,
}

impl PresenterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a presenter under `token` in the scope of `container`,
    /// creating the scope (and, for the first container overall, the host
    /// observer) on demand.
    pub fn put_presenter<V: 'static, VS: Clone + 'static>(
        &self,
        host: &HostLifecycle,
        container: ContainerKey,
        token: &PresenterToken<V, VS>,
        presenter: Rc<MviPresenter<V, VS>>,
    ) {
        let scope_id = self.get_or_create_scope(host, container);
        let mut scopes = self.inner.scopes.borrow_mut();
        let cache = scopes.entry(scope_id).or_default();
        cache.put_presenter(token, presenter);
    }

    /// Look up a stored presenter. `None` is a normal outcome: a first
    /// launch, or a persisted id that outlived the in-memory store
    /// (process death).
    pub fn presenter<V: 'static, VS: Clone + 'static>(
        &self,
        container: ContainerKey,
        token: &PresenterToken<V, VS>,
    ) -> Option<Rc<MviPresenter<V, VS>>> {
        let scope_id = self.scope_id_for(container)?;
        self.inner.scopes.borrow().get(&scope_id)?.presenter(token)
    }

    /// Store a view-state snapshot next to the presenter slot.
    pub fn put_view_state<V: 'static, VS: Clone + 'static>(
        &self,
        host: &HostLifecycle,
        container: ContainerKey,
        token: &PresenterToken<V, VS>,
        state: VS,
    ) {
        let scope_id = self.get_or_create_scope(host, container);
        let mut scopes = self.inner.scopes.borrow_mut();
        let cache = scopes.entry(scope_id).or_default();
        cache.put_view_state(token, state);
    }

    pub fn view_state<V: 'static, VS: Clone + 'static>(
        &self,
        container: ContainerKey,
        token: &PresenterToken<V, VS>,
    ) -> Option<VS> {
        let scope_id = self.scope_id_for(container)?;
        self.inner.scopes.borrow().get(&scope_id)?.view_state(token)
    }

    /// Evict one view's presenter and snapshot. Does nothing if the scope
    /// or the slot never existed.
    pub fn remove(&self, container: ContainerKey, view_id: &ViewId) {
        let Some(scope_id) = self.scope_id_for(container) else {
            return;
        };
        if let Some(cache) = self.inner.scopes.borrow_mut().get_mut(&scope_id) {
            cache.remove(view_id);
        }
    }

    /// The scope id currently bound to a live container, for persisting
    /// into its restorable state.
    pub fn scope_id_for(&self, container: ContainerKey) -> Option<ScopeId> {
        self.inner.container_scopes.borrow().get(&container).cloned()
    }

    pub fn scope_count(&self) -> usize {
        self.inner.scopes.borrow().len()
    }

    /// Drop every scope, binding and observer registration. For test
    /// harnesses that share one registry across cases.
    pub fn reset(&self) {
        self.inner.container_scopes.borrow_mut().clear();
        for cache in self.inner.scopes.borrow_mut().values_mut() {
            cache.clear();
        }
        self.inner.scopes.borrow_mut().clear();
        if let Some(subscription) = self.inner.host_subscription.borrow_mut().take() {
            subscription.dispose();
        }
    }

    fn get_or_create_scope(&self, host: &HostLifecycle, container: ContainerKey) -> ScopeId {
        let scope_id = {
            let mut bindings = self.inner.container_scopes.borrow_mut();
            match bindings.get(&container) {
                Some(existing) => existing.clone(),
                None => {
                    let created = ScopeId::generate();
                    bindings.insert(container, created.clone());
                    tracing::debug!(%container, scope = %created, "scope created");
                    created
                }
            }
        };

        let mut subscription = self.inner.host_subscription.borrow_mut();
        if subscription.is_none() {
            let weak = Rc::downgrade(&self.inner);
            *subscription = Some(host.subscribe(move |event| {
                if let Some(inner) = weak.upgrade() {
                    RegistryInner::handle_event(&inner, event);
                }
            }));
            tracing::debug!("registered host lifecycle observer");
        }

        scope_id
    }
}

impl RegistryInner {
    fn handle_event(inner: &Rc<Self>, event: ContainerEvent) {
        match event {
            ContainerEvent::Created { key, restored_scope } => {
                if let Some(scope_id) = restored_scope {
                    // The recreated container inherits the scope of the
                    // instance it replaces.
                    tracing::debug!(%key, scope = %scope_id, "container adopted restored scope");
                    inner.container_scopes.borrow_mut().insert(key, scope_id);
                }
            }

            ContainerEvent::Destroyed { key, transient } => {
                let scope_id = inner.container_scopes.borrow_mut().remove(&key);

                if transient {
                    // The cache stays; a recreated container will pick the
                    // scope back up via its restored id.
                    return;
                }

                if let Some(scope_id) = scope_id {
                    let purged = {
                        let mut scopes = inner.scopes.borrow_mut();
                        match scopes.remove(&scope_id) {
                            Some(mut cache) => {
                                cache.clear();
                                Some(scopes.is_empty())
                            }
                            None => None,
                        }
                    };

                    if let Some(now_empty) = purged {
                        tracing::debug!(%key, scope = %scope_id, "scope purged");
                        if now_empty {
                            if let Some(subscription) =
                                inner.host_subscription.borrow_mut().take()
                            {
                                subscription.dispose();
                            }
                            tracing::debug!("unregistered host lifecycle observer");
                        }
                    }
                }
            }
        }
    }
}
