mod common;

use std::cell::Cell;
use std::rc::Rc;

use mvikit::{IntentScope, LifecyclePhase, MviPresenter, PresenterLogic, PublishRelay};

/// Logic that only counts its hook invocations.
struct CountingLogic {
    binds: Rc<Cell<u32>>,
    unbinds: Rc<Cell<u32>>,
}

impl PresenterLogic<(), u32> for CountingLogic {
    fn bind_intents(&mut self, _scope: &mut IntentScope<'_, (), u32>) {
        self.binds.set(self.binds.get() + 1);
    }

    fn unbind_intents(&mut self) {
        self.unbinds.set(self.unbinds.get() + 1);
    }
}

fn counting_presenter() -> (MviPresenter<(), u32>, Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let binds = Rc::new(Cell::new(0));
    let unbinds = Rc::new(Cell::new(0));
    let presenter = MviPresenter::new(CountingLogic {
        binds: Rc::clone(&binds),
        unbinds: Rc::clone(&unbinds),
    });
    (presenter, binds, unbinds)
}

#[test]
fn bind_and_unbind_run_once_across_reattach_cycles() {
    common::init_tracing();
    let (presenter, binds, unbinds) = counting_presenter();
    let view = Rc::new(());

    presenter.attach_view(Rc::clone(&view));
    presenter.detach_view();
    presenter.attach_view(Rc::clone(&view));
    presenter.detach_view();
    presenter.attach_view(Rc::clone(&view));
    presenter.detach_view();
    presenter.destroy();

    assert_eq!(binds.get(), 1);
    assert_eq!(unbinds.get(), 1);
}

#[test]
fn destroy_resets_wiring_for_the_next_attach() {
    common::init_tracing();
    let (presenter, binds, unbinds) = counting_presenter();
    let view = Rc::new(());

    presenter.attach_view(Rc::clone(&view));
    presenter.detach_view();
    presenter.destroy();
    presenter.attach_view(Rc::clone(&view));
    presenter.detach_view();
    presenter.attach_view(Rc::clone(&view));
    presenter.detach_view();
    presenter.destroy();

    assert_eq!(binds.get(), 2);
    assert_eq!(unbinds.get(), 2);
}

#[test]
fn destroy_is_idempotent() {
    common::init_tracing();
    let (presenter, binds, unbinds) = counting_presenter();

    presenter.attach_view(Rc::new(()));
    presenter.detach_view();
    presenter.destroy();
    presenter.destroy();

    assert_eq!(binds.get(), 1);
    assert_eq!(unbinds.get(), 1);
    assert_eq!(presenter.phase(), LifecyclePhase::Destroyed);
}

#[test]
fn phases_follow_the_lifecycle() {
    common::init_tracing();
    let (presenter, _, _) = counting_presenter();
    assert_eq!(presenter.phase(), LifecyclePhase::Fresh);

    presenter.attach_view(Rc::new(()));
    assert_eq!(presenter.phase(), LifecyclePhase::Attached);

    presenter.detach_view();
    assert_eq!(presenter.phase(), LifecyclePhase::Detached);

    presenter.destroy();
    assert_eq!(presenter.phase(), LifecyclePhase::Destroyed);
}

#[test]
fn detach_before_any_attach_is_a_noop() {
    common::init_tracing();
    let (presenter, binds, _) = counting_presenter();

    presenter.detach_view();
    assert_eq!(presenter.phase(), LifecyclePhase::Fresh);
    assert_eq!(binds.get(), 0);
}

/// Detaching twice must look exactly like detaching once: the view still
/// gets the latest state exactly once on reattach.
#[test]
fn repeated_detach_matches_single_detach() {
    common::init_tracing();

    struct RenderCounting {
        source: PublishRelay<u32>,
    }

    impl PresenterLogic<Cell<u32>, u32> for RenderCounting {
        fn bind_intents(&mut self, scope: &mut IntentScope<'_, Cell<u32>, u32>) {
            scope.publish_view_state(self.source.clone(), |view, _state| {
                view.set(view.get() + 1);
            });
        }
    }

    let source = PublishRelay::new();
    let presenter = MviPresenter::new(RenderCounting {
        source: source.clone(),
    });
    let renders: Rc<Cell<u32>> = Rc::new(Cell::new(0));

    presenter.attach_view(Rc::clone(&renders));
    source.emit(1);
    assert_eq!(renders.get(), 1);

    presenter.detach_view();
    presenter.detach_view();
    source.emit(2);
    assert_eq!(renders.get(), 1);

    presenter.attach_view(Rc::clone(&renders));
    assert_eq!(renders.get(), 2);
}
