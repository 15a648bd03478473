//! Presenter retention and view binding for Model-View-Intent UIs.
//!
//! The crate keeps a presenter's business-logic pipelines alive while its
//! view is torn down and rebuilt (rotation, navigation, recreation), with
//! exactly-once wiring and exactly-once teardown of that logic.
//!
//! # Architecture
//!
//! ```text
//!              ┌────────────── ContainerDelegate ──────────────┐
//!              │ create / attach / detach / teardown / persist │
//!              ▼                                               ▼
//!        MviPresenter ◄───────── recover/store ───────► PresenterRegistry
//!              │                                               │
//!     IntentStream / BehaviorRelay                     scope per container,
//!     (pipelines survive detach)                       purged on real teardown
//! ```
//!
//! - [`presenter`]: the relay engine and lifecycle state machine. Views
//!   come and go; declared intents and the published view-state stream do
//!   not.
//! - [`registry`]: container-scoped presenter cache, keyed by opaque
//!   identifiers that round-trip through restorable state.
//! - [`retention`]: the policy deciding "transient recreation" versus
//!   "gone for good".
//! - [`delegate`]: glue that turns host lifecycle callbacks into the right
//!   sequence of core calls.
//!
//! Everything is single-threaded by construction: the types are `!Send`
//! and every transition happens synchronously on the owner thread.
//! Pipelines may do work elsewhere, but must marshal results back before
//! emitting into a relay.

pub mod delegate;
pub mod presenter;
pub mod registry;
pub mod relay;
pub mod retention;
pub mod saved_state;

pub use delegate::{ContainerDelegate, DelegateCallback, HostContainer};
pub use presenter::{IntentScope, LifecyclePhase, MviPresenter, PresenterLogic};
pub use registry::{
    ContainerEvent, ContainerKey, HostLifecycle, PresenterRegistry, PresenterToken, ScopeId,
    ViewId,
};
pub use relay::{BehaviorRelay, EventSource, IntentStream, PublishRelay, Subscription};
pub use retention::{RetentionPolicy, TeardownSignals};
pub use saved_state::{SavedState, SavedStateError};
