//! Presenter layer: intent/state wiring plus the attach/detach lifecycle.
//!
//! A presenter owns long-lived business-logic pipelines and survives the
//! view that created it. The view attaches, detaches and re-attaches (a
//! different instance after recreation is fine); the pipelines are wired
//! exactly once per presenter lifetime and keep running in between.
//!
//! ```text
//! attach_view ──→ bind_intents (first attach only)
//!       │                │
//!       │          intent() / publish_view_state()
//!       ▼                ▼
//!  view streams ──→ IntentStream ──→ business logic ──→ BehaviorRelay ──→ render
//! ```

mod base;
mod engine;
mod phase;

pub use base::{MviPresenter, PresenterLogic};
pub use engine::IntentScope;
pub use phase::LifecyclePhase;
