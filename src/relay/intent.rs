//! Single-consumer relay for declared view intents.

use std::cell::RefCell;
use std::rc::Rc;

use super::source::EventSource;
use super::subscription::Subscription;

/// The stream handed back by a presenter's intent declaration.
///
/// Exactly one business-logic consumer may subscribe. The presenter forwards
/// view events into the stream only while a view is bound, so events arriving
/// while detached are dropped at the source, never buffered here.
///
/// Intent events are user input: they must always have somewhere to go.
/// Forwarding into a stream nobody consumes is a wiring bug, not a runtime
/// condition, and fails loudly.
pub struct IntentStream<T: 'static> {
    inner: Rc<IntentInner<T>>,
}

struct IntentInner<T: 'static> {
    consumer: RefCell<Option<Box<dyn FnMut(T)>>>,
}

impl<T: 'static> Clone for IntentStream<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> IntentStream<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(IntentInner {
                consumer: RefCell::new(None),
            }),
        }
    }

    pub fn has_subscriber(&self) -> bool {
        self.inner.consumer.borrow().is_some()
    }

    /// Forward one view event to the consumer.
    ///
    /// # Panics
    ///
    /// Panics if no consumer is subscribed: a declared intent that emits
    /// before (or without) being consumed in `bind_intents` violates the
    /// intent contract.
    pub(crate) fn accept(&self, value: T) {
        let mut slot = self.inner.consumer.borrow_mut();
        match slot.as_mut() {
            Some(consumer) => consumer(value),
            None => panic!(
                "intent event emitted but nothing consumes the declared intent; \
                 subscribe to the stream returned by intent() inside bind_intents"
            ),
        }
    }
}

impl<T: 'static> EventSource<T> for IntentStream<T> {
    /// # Panics
    ///
    /// Panics if the stream already has a consumer. Declare a second intent
    /// instead of sharing one stream between two pipelines.
    fn subscribe(&self, observer: impl FnMut(T) + 'static) -> Subscription {
        {
            let mut slot = self.inner.consumer.borrow_mut();
            if slot.is_some() {
                panic!("intent stream already has a consumer; it supports exactly one");
            }
            *slot = Some(Box::new(observer));
        }

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.consumer.borrow_mut().take();
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn forwards_to_the_single_consumer() {
        let stream = IntentStream::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = stream.subscribe(move |value: u32| sink.borrow_mut().push(value));

        stream.accept(1);
        stream.accept(2);

        assert_eq!(*seen.borrow(), vec![1, 2]);
        sub.dispose();
        assert!(!stream.has_subscriber());
    }

    #[test]
    #[should_panic(expected = "nothing consumes the declared intent")]
    fn accept_without_consumer_panics() {
        let stream = IntentStream::new();
        stream.accept(1);
    }

    #[test]
    #[should_panic(expected = "exactly one")]
    fn second_subscribe_panics() {
        let stream: IntentStream<u32> = IntentStream::new();
        stream.subscribe(|_| {}).forget();
        let _ = stream.subscribe(|_| {});
    }

    #[test]
    fn resubscribe_after_dispose_is_allowed() {
        let stream: IntentStream<u32> = IntentStream::new();
        stream.subscribe(|_| {}).dispose();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = stream.subscribe(move |value| sink.borrow_mut().push(value));
        stream.accept(7);

        assert_eq!(*seen.borrow(), vec![7]);
        sub.dispose();
    }
}
