//! Shared helpers for the integration suites.

#![allow(dead_code)]

use std::sync::Once;

use mvikit::{EventSource, Subscription};

/// Route crate logs through the test harness. Safe to call from every test.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Source that delivers a fixed sequence synchronously, at subscribe time.
///
/// Models view intents that fire the instant they are wired up (an input
/// field reporting its current text, a toggle reporting its state).
pub struct EagerSource<T> {
    values: Vec<T>,
}

impl<T> EagerSource<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T: Clone + 'static> EventSource<T> for EagerSource<T> {
    fn subscribe(&self, mut observer: impl FnMut(T) + 'static) -> Subscription {
        for value in &self.values {
            observer(value.clone());
        }
        Subscription::empty()
    }
}
