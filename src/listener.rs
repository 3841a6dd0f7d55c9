//! Change listeners.
//!
//! The rendering layer (and anything else that needs to react to
//! navigation) subscribes a [`NavigationListener`] to a
//! [`TabNavigator`](crate::TabNavigator). After every state-changing
//! operation the navigator calls each listener once per published event,
//! in subscription order, together with the navigator's new revision.
//!
//! Listeners run while the navigator is mutably borrowed, so they observe
//! events rather than re-reading the navigator. A listener that needs the
//! full state typically schedules a re-render, and the render pass reads the
//! navigator afterwards.
//!
//! | Approach | When to use |
//! |----------|-------------|
//! | Implement [`NavigationListener`] | Named listener with its own state |
//! | [`listener_fn`] | Quick one-off from a closure |
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use tab_navigator::{listener_fn, NavigationEvent, TabNavigator};
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let sink = log.clone();
//!
//! let mut nav: TabNavigator<&str> = TabNavigator::new();
//! nav.subscribe(listener_fn(move |event: &NavigationEvent<&'static str>, revision| {
//!     sink.lock().unwrap().push((revision, format!("{event:?}")));
//! }));
//! nav.configure(["home"]);
//! nav.push("detail");
//!
//! assert_eq!(log.lock().unwrap().len(), 2);
//! ```

use crate::{NavigationEvent, Screen};
use std::fmt;

/// Receives every event a navigator publishes.
pub trait NavigationListener<S: Screen>: Send + Sync + 'static {
    /// Called once per event, after the operation that produced it has been
    /// fully applied. `revision` is the navigator's revision after the change.
    fn on_event(&self, event: &NavigationEvent<S>, revision: u64);

    /// Listener name for debugging.
    fn name(&self) -> &'static str {
        "NavigationListener"
    }
}

/// Create a listener from a closure.
pub const fn listener_fn<S, F>(f: F) -> FnListener<F>
where
    S: Screen,
    F: Fn(&NavigationEvent<S>, u64) + Send + Sync + 'static,
{
    FnListener { f }
}

/// Listener created from a closure via [`listener_fn`].
pub struct FnListener<F> {
    f: F,
}

impl<S, F> NavigationListener<S> for FnListener<F>
where
    S: Screen,
    F: Fn(&NavigationEvent<S>, u64) + Send + Sync + 'static,
{
    fn on_event(&self, event: &NavigationEvent<S>, revision: u64) {
        (self.f)(event, revision);
    }

    fn name(&self) -> &'static str {
        "FnListener"
    }
}

/// Handle returned by [`TabNavigator::subscribe`](crate::TabNavigator::subscribe),
/// used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription-{}", self.0)
    }
}
