//! Subscription handles returned by [`EventSource::subscribe`].
//!
//! [`EventSource::subscribe`]: crate::relay::EventSource::subscribe

/// Cancellation handle for a single subscription.
///
/// Dropping the handle cancels the subscription (RAII). Call [`forget`] to
/// deliberately keep the registration alive without holding the handle,
/// typical for business-logic subscriptions made once in `bind_intents`
/// that must outlive the binding call.
///
/// [`forget`]: Subscription::forget
#[must_use = "dropping a subscription cancels it; call forget() to keep it alive"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription that is already terminated. Cancelling it does nothing.
    ///
    /// Useful for sources that deliver everything synchronously during
    /// `subscribe` and have nothing left to cancel afterwards.
    pub fn empty() -> Self {
        Self { cancel: None }
    }

    /// Cancel the subscription now.
    pub fn dispose(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Keep the subscription alive forever, discarding the handle.
    pub fn forget(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// A bag of subscriptions cancelled together.
///
/// Mirrors the "one clear() call detaches everything view-bound" pattern:
/// the presenter collects every intent-to-view subscription here and clears
/// the set on detach.
#[derive(Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Cancel and drop every subscription in the set.
    pub fn clear(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            subscription.dispose();
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
