//! The base presenter: lifecycle dispatch around the relay engine.

use std::cell::RefCell;
use std::rc::Rc;

use crate::relay::BehaviorRelay;

use super::engine::{IntentScope, RelayEngine};
use super::phase::{LifecycleEvent, LifecyclePhase};

/// Business-logic hooks supplied when constructing an [`MviPresenter`].
///
/// [`bind_intents`] runs exactly once, on the first attach: declare intents
/// via [`IntentScope::intent`], build pipelines on the returned streams and
/// publish the resulting state stream via [`IntentScope::publish_view_state`].
/// [`unbind_intents`] is the symmetric counterpart, run on destroy: the
/// place to release anything the pipelines acquired.
///
/// [`bind_intents`]: PresenterLogic::bind_intents
/// [`unbind_intents`]: PresenterLogic::unbind_intents
pub trait PresenterLogic<V: 'static, VS: Clone + 'static>: 'static {
    fn bind_intents(&mut self, scope: &mut IntentScope<'_, V, VS>);

    fn unbind_intents(&mut self) {}
}

/// A presenter that relays intents from, and view state to, a replaceable
/// view instance.
///
/// The presenter decouples the lifetime of its business-logic pipelines
/// from the lifetime of any concrete view: [`detach_view`] pauses delivery
/// without unsubscribing the pipelines, and a later [`attach_view`] (with
/// the same or a different view object) resumes them, replaying the latest
/// view state synchronously. Only [`destroy`] tears the pipelines down.
///
/// All methods take `&self`; state lives behind interior mutability and the
/// type is `!Send`, pinning every transition to the thread that owns it.
///
/// Do not reuse a presenter after [`destroy`]: re-attaching rewires from
/// scratch and the stale latest state of the previous life is re-emitted to
/// the new view.
///
/// [`attach_view`]: MviPresenter::attach_view
/// [`detach_view`]: MviPresenter::detach_view
/// [`destroy`]: MviPresenter::destroy
pub struct MviPresenter<V: 'static, VS: Clone + 'static> {
    inner: RefCell<Inner<V, VS>>,
}

struct Inner<V: 'static, VS: Clone + 'static> {
    phase: LifecyclePhase,
    engine: RelayEngine<V, VS>,
    logic: Box<dyn PresenterLogic<V, VS>>,
}

impl<V: 'static, VS: Clone + 'static> MviPresenter<V, VS> {
    pub fn new(logic: impl PresenterLogic<V, VS>) -> Self {
        Self::build(None, logic)
    }

    /// A presenter whose view-state relay starts out holding `initial`, so
    /// the very first attach already has something to render.
    pub fn with_initial_state(initial: VS, logic: impl PresenterLogic<V, VS>) -> Self {
        Self::build(Some(initial), logic)
    }

    fn build(initial: Option<VS>, logic: impl PresenterLogic<V, VS>) -> Self {
        Self {
            inner: RefCell::new(Inner {
                phase: LifecyclePhase::Fresh,
                engine: RelayEngine::new(initial),
                logic: Box::new(logic),
            }),
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.inner.borrow().phase
    }

    /// The view-state stream, latest value included.
    ///
    /// Primarily for tests and for sibling components that want to observe
    /// this presenter's state; it carries exactly the values the view
    /// renders.
    pub fn view_state_stream(&self) -> BehaviorRelay<VS> {
        self.inner.borrow().engine.view_state_relay()
    }

    /// Bind a live view.
    ///
    /// On the first attach (and after a destroy) this first runs the
    /// one-time wiring step. Attaching while already attached replaces the
    /// previous view binding. Entering the bound state replays the latest
    /// view state to `view` synchronously, before this call returns.
    pub fn attach_view(&self, view: Rc<V>) {
        let mut inner = self.inner.borrow_mut();
        let wire = inner.phase.needs_wiring();

        if wire {
            let Inner { engine, logic, .. } = &mut *inner;
            let mut scope = engine.scope();
            logic.bind_intents(&mut scope);
        } else if inner.phase == LifecyclePhase::Attached {
            inner.engine.unbind_from_view();
        }

        inner.engine.bind_to_view(&view);
        let from = inner.phase;
        inner.phase = from.apply(LifecycleEvent::Attach);
        tracing::debug!(?from, wired = wire, "view attached");
    }

    /// Unbind the current view, keeping all business-logic subscriptions.
    ///
    /// View state produced while detached accumulates as "latest" and is
    /// replayed on the next attach; view intents have nowhere to come from
    /// and are simply absent. Calling this while already detached is a
    /// no-op.
    pub fn detach_view(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.phase == LifecyclePhase::Attached {
            inner.engine.unbind_from_view();
        }
        let from = inner.phase;
        inner.phase = from.apply(LifecycleEvent::Detach);
        tracing::debug!(?from, "view detached");
    }

    /// Tear the presenter down: cancel the view-state source subscription,
    /// run the unbind hook and forget all declared wiring. Idempotent.
    pub fn destroy(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.phase == LifecyclePhase::Destroyed {
            return;
        }

        if inner.phase == LifecyclePhase::Attached {
            inner.engine.unbind_from_view();
        }
        inner.engine.dispose_source();
        inner.logic.unbind_intents();
        inner.engine.reset();

        let from = inner.phase;
        inner.phase = from.apply(LifecycleEvent::Destroy);
        tracing::debug!(?from, "presenter destroyed");
    }
}
