//! Per-scope presenter cache with type-safe retrieval.

use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::presenter::MviPresenter;

use super::ids::ViewId;

/// Typed key for one cache slot.
///
/// A token is minted when a presenter is first stored (or rebuilt from a
/// persisted [`ViewId`] after recreation) and carries the presenter's type,
/// so retrieval needs no caller-side casts. Looking a token up against a
/// slot that holds a different type (possible only with a stale persisted
/// id) behaves like any other miss and returns `None`.
pub struct PresenterToken<V, VS: Clone + 'static> {
    view_id: ViewId,
    _type: PhantomData<fn() -> (V, VS)>,
}

impl<V, VS: Clone + 'static> Clone for PresenterToken<V, VS> {
    fn clone(&self) -> Self {
        Self {
            view_id: self.view_id.clone(),
            _type: PhantomData,
        }
    }
}

impl<V, VS: Clone + 'static> PresenterToken<V, VS> {
    /// Mint a token with a freshly generated view id.
    pub fn generate() -> Self {
        Self::for_view_id(ViewId::generate())
    }

    /// Rebuild the token for a view id recovered from restorable state.
    pub fn for_view_id(view_id: ViewId) -> Self {
        Self {
            view_id,
            _type: PhantomData,
        }
    }

    pub fn view_id(&self) -> &ViewId {
        &self.view_id
    }
}

#[derive(Default)]
struct Slot {
    presenter: Option<Rc<dyn Any>>,
    view_state: Option<Box<dyn Any>>,
}

/// The view-id keyed cache held by one container scope.
///
/// Next to the presenter itself, a slot can hold a snapshot of the last
/// view state, for hosts that want to seed a rebuilt presenter after
/// process death.
#[derive(Default)]
pub struct ScopeCache {
    slots: HashMap<ViewId, Slot>,
}

impl ScopeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_presenter<V: 'static, VS: Clone + 'static>(
        &mut self,
        token: &PresenterToken<V, VS>,
        presenter: Rc<MviPresenter<V, VS>>,
    ) {
        let slot = self.slots.entry(token.view_id.clone()).or_default();
        slot.presenter = Some(presenter);
    }

    pub fn presenter<V: 'static, VS: Clone + 'static>(
        &self,
        token: &PresenterToken<V, VS>,
    ) -> Option<Rc<MviPresenter<V, VS>>> {
        let stored = self.slots.get(&token.view_id)?.presenter.clone()?;
        stored.downcast::<MviPresenter<V, VS>>().ok()
    }

    pub fn put_view_state<V: 'static, VS: Clone + 'static>(
        &mut self,
        token: &PresenterToken<V, VS>,
        state: VS,
    ) {
        let slot = self.slots.entry(token.view_id.clone()).or_default();
        slot.view_state = Some(Box::new(state));
    }

    pub fn view_state<V: 'static, VS: Clone + 'static>(
        &self,
        token: &PresenterToken<V, VS>,
    ) -> Option<VS> {
        let stored = self.slots.get(&token.view_id)?.view_state.as_ref()?;
        stored.downcast_ref::<VS>().cloned()
    }

    /// Drop the presenter and view-state snapshot for one view. A miss is
    /// fine; there is nothing to undo.
    pub fn remove(&mut self, view_id: &ViewId) {
        self.slots.remove(view_id);
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
