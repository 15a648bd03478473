//! The subscription seam between producers and consumers.

use super::subscription::Subscription;

/// A push-based stream of values.
///
/// Subscribing registers a callback and returns a [`Subscription`] that
/// cancels exactly that registration. A source may deliver values
/// synchronously from inside `subscribe` (an eager source); the returned
/// handle then only covers whatever remains live afterwards.
///
/// There is deliberately no error or completion channel: streams wired into
/// a presenter never terminate and never fail. A pipeline that needs to
/// surface failures to the user models them as values of its state type.
pub trait EventSource<T> {
    fn subscribe(&self, observer: impl FnMut(T) + 'static) -> Subscription;
}
