//! Multicast relay that replays the latest value.

use std::cell::RefCell;
use std::rc::Rc;

use super::source::EventSource;
use super::subscribers::SubscriberList;
use super::subscription::Subscription;

/// Always-open multicast relay that remembers the most recent value and
/// replays it synchronously to every new subscriber.
///
/// This is the bridge between business logic and the view: whenever a view
/// (re-)attaches, subscribing its render callback here immediately delivers
/// the last known state, before any newly produced value.
pub struct BehaviorRelay<T: 'static> {
    inner: Rc<BehaviorInner<T>>,
}

struct BehaviorInner<T: 'static> {
    latest: RefCell<Option<T>>,
    subscribers: Rc<SubscriberList<T>>,
}

impl<T: 'static> Clone for BehaviorRelay<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for BehaviorRelay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> BehaviorRelay<T> {
    /// An empty relay: subscribers get nothing until the first emission.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(BehaviorInner {
                latest: RefCell::new(None),
                subscribers: SubscriberList::new(),
            }),
        }
    }

    /// A relay seeded with an initial value, replayed like any other.
    pub fn with_initial(value: T) -> Self {
        Self {
            inner: Rc::new(BehaviorInner {
                latest: RefCell::new(Some(value)),
                subscribers: SubscriberList::new(),
            }),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }

    pub fn has_subscribers(&self) -> bool {
        self.inner.subscribers.len() > 0
    }
}

impl<T: Clone + 'static> BehaviorRelay<T> {
    /// Record `value` as the latest and deliver it synchronously to every
    /// live subscriber.
    pub fn emit(&self, value: T) {
        *self.inner.latest.borrow_mut() = Some(value.clone());
        self.inner.subscribers.emit(value);
    }

    /// The most recent value, if any was ever emitted.
    pub fn latest(&self) -> Option<T> {
        self.inner.latest.borrow().clone()
    }
}

impl<T: Clone + 'static> EventSource<T> for BehaviorRelay<T> {
    fn subscribe(&self, mut observer: impl FnMut(T) + 'static) -> Subscription {
        let latest = self.inner.latest.borrow().clone();
        if let Some(value) = latest {
            observer(value);
        }
        self.inner.subscribers.add(observer)
    }
}
