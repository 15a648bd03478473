//! Single-threaded relay primitives.
//!
//! Relays are always-open, push-based conduits that decouple producers from
//! the lifetime of any one consumer. They are the backbone of the presenter
//! layer: business logic subscribes to relays instead of to the view itself,
//! so a view can come and go without tearing the logic down.
//!
//! ```text
//! view intents ──→ IntentStream ──→ business logic
//!                                        │
//! view render ←── BehaviorRelay ←────────┘
//! ```
//!
//! All relays are `Clone` handles over `Rc`-shared state and are therefore
//! `!Send`: every emission and every subscription happens on the one thread
//! that owns the UI state. Delivery is synchronous; `emit` returns after
//! every live subscriber has observed the value.
//!
//! Re-entrancy: subscribing or disposing while an emission is in flight is
//! supported. Emitting into a relay from inside one of its own subscribers
//! is not, and panics on the interior borrow.

mod behavior;
mod intent;
mod publish;
mod source;
mod subscribers;
mod subscription;

pub use behavior::BehaviorRelay;
pub use intent::IntentStream;
pub use publish::PublishRelay;
pub use source::EventSource;
pub use subscription::{Subscription, SubscriptionSet};
