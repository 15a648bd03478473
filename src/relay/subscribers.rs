//! Shared subscriber bookkeeping for the multicast relays.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::subscription::Subscription;

struct Subscriber<T: 'static> {
    callback: RefCell<Box<dyn FnMut(T)>>,
    active: Cell<bool>,
}

/// Multicast subscriber list with synchronous delivery.
///
/// Emission iterates over a snapshot of the list, so subscribers added or
/// disposed from inside a callback take effect for the *next* emission; a
/// subscriber disposed mid-emission is skipped via its liveness flag.
pub(crate) struct SubscriberList<T: 'static> {
    entries: RefCell<Vec<Rc<Subscriber<T>>>>,
}

impl<T: 'static> SubscriberList<T> {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            entries: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn add(self: &Rc<Self>, callback: impl FnMut(T) + 'static) -> Subscription {
        let entry = Rc::new(Subscriber {
            callback: RefCell::new(Box::new(callback)),
            active: Cell::new(true),
        });
        self.entries.borrow_mut().push(Rc::clone(&entry));

        let list = Rc::downgrade(self);
        let target = Rc::downgrade(&entry);
        Subscription::new(move || {
            if let Some(entry) = target.upgrade() {
                entry.active.set(false);
            }
            if let Some(list) = list.upgrade() {
                list.entries.borrow_mut().retain(|entry| entry.active.get());
            }
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.active.get())
            .count()
    }
}

impl<T: Clone + 'static> SubscriberList<T> {
    pub(crate) fn emit(&self, value: T) {
        // Snapshot releases the list borrow before any callback runs, so
        // callbacks may subscribe or dispose without tripping the RefCell.
        let snapshot: Vec<Rc<Subscriber<T>>> = self.entries.borrow().iter().cloned().collect();
        for entry in snapshot {
            if entry.active.get() {
                (entry.callback.borrow_mut())(value.clone());
            }
        }
    }
}
