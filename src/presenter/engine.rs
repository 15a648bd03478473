//! The relay engine: declared intents and the view-state bridge.

use std::rc::Rc;

use crate::relay::{BehaviorRelay, EventSource, IntentStream, Subscription, SubscriptionSet};

/// Wiring context handed to [`PresenterLogic::bind_intents`].
///
/// Everything declared here outlives the view: the returned intent streams
/// and the published view-state pipeline stay subscribed across any number
/// of detach/attach cycles, until the presenter is destroyed.
///
/// [`PresenterLogic::bind_intents`]: super::PresenterLogic::bind_intents
pub struct IntentScope<'a, V: 'static, VS: Clone + 'static> {
    engine: &'a mut RelayEngine<V, VS>,
}

impl<V: 'static, VS: Clone + 'static> IntentScope<'_, V, VS> {
    /// Declare a view intent.
    ///
    /// `binder` is invoked on every attach with the live view and must
    /// return the view's event stream for this intent. Events are forwarded
    /// into the returned [`IntentStream`] while a view is bound; while
    /// detached, nothing feeds the stream, so view events are dropped, not
    /// queued. Subscribe the returned stream to business logic right here;
    /// it is valid before any view ever attaches.
    pub fn intent<I, S, B>(&mut self, binder: B) -> IntentStream<I>
    where
        I: 'static,
        S: EventSource<I>,
        B: Fn(&V) -> S + 'static,
    {
        self.engine.intent(binder)
    }

    /// Publish `source` as the presenter's view-state stream.
    ///
    /// The engine subscribes to `source` immediately and keeps that
    /// subscription until the presenter is destroyed; every value lands in
    /// the internal latest-value relay. `consumer` renders a value into
    /// whichever view is currently bound.
    ///
    /// # Panics
    ///
    /// Panics when called a second time within one wiring span: a presenter
    /// has exactly one view-state stream. Merge upstream instead.
    pub fn publish_view_state<S, C>(&mut self, source: S, consumer: C)
    where
        S: EventSource<VS>,
        C: Fn(&V, VS) + 'static,
    {
        self.engine.publish_view_state(source, consumer);
    }
}

type ViewStateConsumer<V, VS> = Rc<dyn Fn(&V, VS)>;

/// Owns the relays and every subscription the presenter manages.
///
/// Subscriptions fall in two tiers with different lifetimes:
/// view-bound ones (intent-to-view, consumer-to-relay) die on detach;
/// the business-logic source subscription dies only on destroy.
pub(crate) struct RelayEngine<V: 'static, VS: Clone + 'static> {
    view_state_relay: BehaviorRelay<VS>,
    view_state_consumer: Option<ViewStateConsumer<V, VS>>,
    publish_called: bool,
    intent_binders: Vec<Box<dyn Fn(&V) -> Subscription>>,
    intent_subscriptions: SubscriptionSet,
    consumer_subscription: Option<Subscription>,
    source_subscription: Option<Subscription>,
}

impl<V: 'static, VS: Clone + 'static> RelayEngine<V, VS> {
    pub(crate) fn new(initial_state: Option<VS>) -> Self {
        let view_state_relay = match initial_state {
            Some(state) => BehaviorRelay::with_initial(state),
            None => BehaviorRelay::new(),
        };
        Self {
            view_state_relay,
            view_state_consumer: None,
            publish_called: false,
            intent_binders: Vec::new(),
            intent_subscriptions: SubscriptionSet::new(),
            consumer_subscription: None,
            source_subscription: None,
        }
    }

    pub(crate) fn scope(&mut self) -> IntentScope<'_, V, VS> {
        IntentScope { engine: self }
    }

    pub(crate) fn view_state_relay(&self) -> BehaviorRelay<VS> {
        self.view_state_relay.clone()
    }

    fn intent<I, S, B>(&mut self, binder: B) -> IntentStream<I>
    where
        I: 'static,
        S: EventSource<I>,
        B: Fn(&V) -> S + 'static,
    {
        let stream = IntentStream::new();
        let forward = stream.clone();
        self.intent_binders.push(Box::new(move |view: &V| {
            let relay = forward.clone();
            binder(view).subscribe(move |event| relay.accept(event))
        }));
        stream
    }

    fn publish_view_state<S, C>(&mut self, source: S, consumer: C)
    where
        S: EventSource<VS>,
        C: Fn(&V, VS) + 'static,
    {
        if self.publish_called {
            panic!("publish_view_state() may only be called once per wiring");
        }
        self.publish_called = true;
        self.view_state_consumer = Some(Rc::new(consumer));

        let relay = self.view_state_relay.clone();
        self.source_subscription = Some(source.subscribe(move |state| relay.emit(state)));
    }

    /// Connect the engine to a live view.
    ///
    /// Order matters: the view-state consumer subscribes first so that an
    /// intent emitting eagerly during its own binding renders through a
    /// consumer that is already connected. Subscribing the consumer also
    /// replays the latest buffered state synchronously.
    pub(crate) fn bind_to_view(&mut self, view: &Rc<V>) {
        if let Some(consumer) = &self.view_state_consumer {
            let consumer = Rc::clone(consumer);
            let view = Rc::clone(view);
            self.consumer_subscription = Some(
                self.view_state_relay
                    .subscribe(move |state| (consumer.as_ref())(view.as_ref(), state)),
            );
        }

        for binder in &self.intent_binders {
            self.intent_subscriptions.insert(binder(view.as_ref()));
        }
    }

    /// Disconnect from the view without touching the business-logic tier.
    pub(crate) fn unbind_from_view(&mut self) {
        if let Some(subscription) = self.consumer_subscription.take() {
            subscription.dispose();
        }
        self.intent_subscriptions.clear();
    }

    /// Permanently stop feeding the view-state relay.
    pub(crate) fn dispose_source(&mut self) {
        if let Some(subscription) = self.source_subscription.take() {
            subscription.dispose();
        }
    }

    /// Forget all declared wiring so a later attach starts from scratch.
    /// The view-state relay (and its latest value) deliberately survives.
    pub(crate) fn reset(&mut self) {
        self.intent_binders.clear();
        self.view_state_consumer = None;
        self.publish_called = false;
    }
}
