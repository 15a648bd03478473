//! Multicast relay without replay.

use std::rc::Rc;

use super::source::EventSource;
use super::subscribers::SubscriberList;
use super::subscription::Subscription;

/// Always-open multicast relay. Values reach the subscribers present at the
/// moment of emission; late subscribers see nothing retroactively.
pub struct PublishRelay<T: 'static> {
    subscribers: Rc<SubscriberList<T>>,
}

impl<T: 'static> Clone for PublishRelay<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<T: 'static> Default for PublishRelay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> PublishRelay<T> {
    pub fn new() -> Self {
        Self {
            subscribers: SubscriberList::new(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn has_subscribers(&self) -> bool {
        self.subscribers.len() > 0
    }
}

impl<T: Clone + 'static> PublishRelay<T> {
    /// Deliver `value` synchronously to every live subscriber.
    pub fn emit(&self, value: T) {
        self.subscribers.emit(value);
    }
}

impl<T: Clone + 'static> EventSource<T> for PublishRelay<T> {
    fn subscribe(&self, observer: impl FnMut(T) + 'static) -> Subscription {
        self.subscribers.add(observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn collector() -> (Rc<RefCell<Vec<u32>>>, impl FnMut(u32) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn delivers_to_all_subscribers_in_order() {
        let relay = PublishRelay::new();
        let (seen_a, sink_a) = collector();
        let (seen_b, sink_b) = collector();
        let sub_a = relay.subscribe(sink_a);
        let sub_b = relay.subscribe(sink_b);

        relay.emit(1);
        relay.emit(2);

        assert_eq!(*seen_a.borrow(), vec![1, 2]);
        assert_eq!(*seen_b.borrow(), vec![1, 2]);
        sub_a.dispose();
        sub_b.dispose();
    }

    #[test]
    fn no_replay_for_late_subscribers() {
        let relay = PublishRelay::new();
        relay.emit(1);

        let (seen, sink) = collector();
        let sub = relay.subscribe(sink);
        relay.emit(2);

        assert_eq!(*seen.borrow(), vec![2]);
        sub.dispose();
    }

    #[test]
    fn emit_without_subscribers_is_dropped() {
        let relay = PublishRelay::new();
        relay.emit(42);
        assert!(!relay.has_subscribers());
    }

    #[test]
    fn disposed_subscriber_stops_receiving() {
        let relay = PublishRelay::new();
        let (seen, sink) = collector();
        let sub = relay.subscribe(sink);

        relay.emit(1);
        sub.dispose();
        relay.emit(2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(relay.subscriber_count(), 0);
    }

    #[test]
    fn subscribe_during_emit_sees_next_emission_only() {
        let relay: PublishRelay<u32> = PublishRelay::new();
        let (seen, _) = collector();

        let inner_relay = relay.clone();
        let inner_seen = Rc::clone(&seen);
        relay
            .subscribe(move |_| {
                let sink = Rc::clone(&inner_seen);
                inner_relay
                    .subscribe(move |value| sink.borrow_mut().push(value))
                    .forget();
            })
            .forget();

        relay.emit(1);
        assert!(seen.borrow().is_empty());

        relay.emit(2);
        assert_eq!(*seen.borrow(), vec![2]);
    }
}
