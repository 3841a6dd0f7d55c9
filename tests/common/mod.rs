//! Test utilities for navigator integration tests
//!
//! Provides fixtures, an event recorder, and logging setup.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tab_navigator::*;

/// Screens used throughout the integration tests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TestScreen {
    List,
    Detail(u32),
    Edit(u32),
    Settings(&'static str),
}

/// Opaque sheet payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestSheet {
    Compose,
    Share(u32),
}

pub type TestNavigator = TabNavigator<TestScreen, TestSheet>;

/// Shared event log filled by [`record_events`]
pub type EventLog = Arc<Mutex<Vec<NavigationEvent<TestScreen>>>>;

/// Route navigator log lines to the test harness output (filter with `RUST_LOG`)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Navigator configured with `home` and `settings`, `home` active
pub fn home_and_settings() -> TestNavigator {
    init_logging();
    let mut nav = TestNavigator::new();
    nav.configure(["home", "settings"]);
    nav
}

/// Navigator with the given config, configured with `home` and `settings`
pub fn home_and_settings_with(config: NavigatorConfig) -> TestNavigator {
    init_logging();
    let mut nav = TestNavigator::with_config(config);
    nav.configure(["home", "settings"]);
    nav
}

/// Subscribe a listener that appends every event to the returned log
pub fn record_events(nav: &mut TestNavigator) -> EventLog {
    let log: EventLog = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    nav.subscribe(listener_fn(move |event: &NavigationEvent<TestScreen>, _| {
        sink.lock().unwrap().push(event.clone());
    }));
    log
}

/// Count events in `log` matching `predicate`
pub fn count_events(log: &EventLog, predicate: impl Fn(&NavigationEvent<TestScreen>) -> bool) -> usize {
    log.lock().unwrap().iter().filter(|e| predicate(e)).count()
}

/// Assert the stack of `tab` equals `expected`, bottom to top
pub fn assert_stack(nav: &TestNavigator, tab: &str, expected: &[TestScreen]) {
    let stack = nav.stack(tab);
    assert!(stack.is_some(), "Tab '{}' is not configured", tab);
    assert_eq!(
        stack.unwrap().as_slice(),
        expected,
        "Stack of tab '{}' has wrong contents",
        tab
    );
}
