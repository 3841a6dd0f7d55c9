//! GPUI binding.
//!
//! Wraps a [`TabNavigator`] in a GPUI entity so views can observe it the
//! usual GPUI way:
//!
//! - [`NavigationModel`] — the entity state. It re-emits every
//!   [`NavigationEvent`] the navigator publishes through `cx.emit` and calls
//!   `cx.notify()` once per changing operation, so `cx.observe` and
//!   `cx.subscribe` both work.
//! - [`NavigatorHandle`] — a cheap, cloneable handle to the entity with the
//!   navigator's write surface taking `&mut App`.
//!
//! The handle is created explicitly at the composition root and passed to
//! the views that need it. No GPUI global is involved, so several
//! independent navigators (one per window, or per test) can coexist.
//!
//! # Example
//!
//! ```ignore
//! use tab_navigator::{NavigatorHandle, TabNavigator};
//!
//! let mut nav: TabNavigator<AppScreen, SheetContent> = TabNavigator::new();
//! nav.configure(["home", "search", "profile"]);
//! let handle = NavigatorHandle::new(cx, nav);
//!
//! cx.subscribe(handle.entity(), |_, event, _cx| {
//!     println!("navigation changed: {event:?}");
//! })
//! .detach();
//!
//! handle.push(cx, AppScreen::Detail(42));
//! ```

use crate::{
    listener_fn, AlertRequest, DeepLink, InstanceId, LinkOutcome, NavigationEvent,
    PresentationKind, Screen, TabNavigator,
};
use gpui::{App, AppContext, Context, Entity, EventEmitter};
use std::sync::{Arc, Mutex, PoisonError};

// ============================================================================
// NavigationModel
// ============================================================================

/// Entity state holding a navigator and relaying its events to GPUI.
pub struct NavigationModel<S: Screen, P: 'static = ()> {
    navigator: TabNavigator<S, P>,
    /// Events published by the navigator since the last relay.
    pending: Arc<Mutex<Vec<NavigationEvent<S>>>>,
}

impl<S: Screen, P: 'static> NavigationModel<S, P> {
    /// Take ownership of `navigator` and start collecting its events.
    pub fn new(mut navigator: TabNavigator<S, P>) -> Self {
        let pending = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&pending);
        navigator.subscribe(listener_fn(move |event: &NavigationEvent<S>, _| {
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
        }));
        Self { navigator, pending }
    }

    /// Read-only access to the navigator.
    pub fn navigator(&self) -> &TabNavigator<S, P> {
        &self.navigator
    }

    /// Mutate the navigator, then emit whatever it published and notify
    /// observers if anything changed.
    pub fn update_navigator<R>(
        &mut self,
        cx: &mut Context<'_, Self>,
        f: impl FnOnce(&mut TabNavigator<S, P>) -> R,
    ) -> R {
        let result = f(&mut self.navigator);
        let events = std::mem::take(
            &mut *self
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        if !events.is_empty() {
            for event in events {
                cx.emit(event);
            }
            cx.notify();
        }
        result
    }
}

impl<S: Screen, P: 'static> EventEmitter<NavigationEvent<S>> for NavigationModel<S, P> {}

// ============================================================================
// NavigatorHandle
// ============================================================================

/// Handle to a [`NavigationModel`] entity.
///
/// Every write method runs inside `Entity::update`, so each call emits its
/// events and notifies observers before returning.
pub struct NavigatorHandle<S: Screen, P: 'static = ()> {
    entity: Entity<NavigationModel<S, P>>,
}

impl<S: Screen, P: 'static> Clone for NavigatorHandle<S, P> {
    fn clone(&self) -> Self {
        Self {
            entity: self.entity.clone(),
        }
    }
}

impl<S: Screen, P: 'static> NavigatorHandle<S, P> {
    /// Move `navigator` into a new entity.
    pub fn new(cx: &mut App, navigator: TabNavigator<S, P>) -> Self {
        Self {
            entity: cx.new(|_| NavigationModel::new(navigator)),
        }
    }

    /// The underlying entity, for `cx.observe` / `cx.subscribe`.
    pub fn entity(&self) -> &Entity<NavigationModel<S, P>> {
        &self.entity
    }

    /// Read the navigator.
    pub fn read<'a>(&self, cx: &'a App) -> &'a TabNavigator<S, P> {
        self.entity.read(cx).navigator()
    }

    /// Run an arbitrary mutation against the navigator.
    pub fn update<R>(&self, cx: &mut App, f: impl FnOnce(&mut TabNavigator<S, P>) -> R) -> R {
        self.entity
            .update(cx, |model, cx| model.update_navigator(cx, f))
    }

    /// See [`TabNavigator::push`].
    pub fn push(&self, cx: &mut App, screen: S) {
        self.update(cx, |nav| nav.push(screen));
    }

    /// See [`TabNavigator::pop`].
    pub fn pop(&self, cx: &mut App) {
        self.update(cx, |nav| nav.pop());
    }

    /// See [`TabNavigator::pop_to_root`].
    pub fn pop_to_root(&self, cx: &mut App) {
        self.update(cx, |nav| nav.pop_to_root());
    }

    /// See [`TabNavigator::deep_link`].
    pub fn deep_link(&self, cx: &mut App, screens: impl IntoIterator<Item = S>) {
        self.update(cx, |nav| nav.deep_link(screens));
    }

    /// See [`TabNavigator::switch_tab`].
    pub fn switch_tab(&self, cx: &mut App, tab: &str) {
        self.update(cx, |nav| nav.switch_tab(tab));
    }

    /// See [`TabNavigator::select_tab`].
    pub fn select_tab(&self, cx: &mut App, tab: &str) {
        self.update(cx, |nav| nav.select_tab(tab));
    }

    /// See [`TabNavigator::present`].
    pub fn present(&self, cx: &mut App, kind: PresentationKind, content: P) -> InstanceId {
        self.update(cx, |nav| nav.present(kind, content))
    }

    /// See [`TabNavigator::dismiss`].
    pub fn dismiss(&self, cx: &mut App, kind: PresentationKind) -> Option<P> {
        self.update(cx, |nav| nav.dismiss(kind))
    }

    /// See [`TabNavigator::show_alert`].
    pub fn show_alert(
        &self,
        cx: &mut App,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> InstanceId {
        self.update(cx, |nav| nav.show_alert(title, message))
    }

    /// See [`TabNavigator::dismiss_alert`].
    pub fn dismiss_alert(&self, cx: &mut App) -> Option<AlertRequest> {
        self.update(cx, |nav| nav.dismiss_alert())
    }

    /// Forward an incoming link (e.g. from `Application::on_open_urls`).
    pub fn open_link(&self, cx: &mut App, link: impl Into<DeepLink>) -> LinkOutcome {
        let link = link.into();
        self.update(cx, |nav| nav.open_link(link))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    type Nav = TabNavigator<&'static str, &'static str>;

    fn handle_with_events(
        cx: &mut TestAppContext,
    ) -> (
        NavigatorHandle<&'static str, &'static str>,
        Arc<Mutex<Vec<NavigationEvent<&'static str>>>>,
    ) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let handle = cx.update(|cx| {
            let mut nav = Nav::new();
            nav.configure(["home", "settings"]);
            let handle = NavigatorHandle::new(cx, nav);
            cx.subscribe(
                handle.entity(),
                move |_, event: &NavigationEvent<&'static str>, _| {
                    sink.lock().unwrap().push(event.clone());
                },
            )
            .detach();
            handle
        });
        (handle, events)
    }

    #[gpui::test]
    fn test_push_emits_event(cx: &mut TestAppContext) {
        let (handle, events) = handle_with_events(cx);

        cx.update(|cx| handle.push(cx, "detail"));

        assert_eq!(cx.read(|cx| handle.read(cx).depth()), 1);
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            NavigationEvent::Pushed { screen: "detail", .. }
        ));
    }

    #[gpui::test]
    fn test_noop_emits_nothing(cx: &mut TestAppContext) {
        let (handle, events) = handle_with_events(cx);

        cx.update(|cx| {
            handle.pop(cx);
            handle.switch_tab(cx, "home");
            handle.dismiss(cx, PresentationKind::Sheet);
        });

        assert!(events.lock().unwrap().is_empty());
    }

    #[gpui::test]
    fn test_switch_tab_dismisses_sheet(cx: &mut TestAppContext) {
        let (handle, events) = handle_with_events(cx);

        cx.update(|cx| {
            handle.present(cx, PresentationKind::Sheet, "compose");
            handle.switch_tab(cx, "settings");
        });

        assert!(cx.read(|cx| handle.read(cx).sheet().is_none()));
        assert_eq!(events.lock().unwrap().len(), 3);
    }

    #[gpui::test]
    fn test_dismiss_alert_returns_request(cx: &mut TestAppContext) {
        let (handle, events) = handle_with_events(cx);

        let id = cx.update(|cx| handle.show_alert(cx, "Saved", "Draft stored"));
        let alert = cx.update(|cx| handle.dismiss_alert(cx)).unwrap();
        assert_eq!(alert.id(), id);
        assert_eq!(alert.title(), "Saved");

        assert!(cx.update(|cx| handle.dismiss_alert(cx)).is_none());
        assert_eq!(events.lock().unwrap().len(), 2);
    }

    #[gpui::test]
    fn test_open_link(cx: &mut TestAppContext) {
        let (handle, _events) = handle_with_events(cx);

        cx.update(|cx| {
            handle.update(cx, |nav| {
                nav.set_link_handler(|nav, link| {
                    nav.deep_link(link.path_segments().iter().map(|_| "step"));
                    Ok(())
                });
            });
        });

        let outcome = cx.update(|cx| handle.open_link(cx, "app://home/a/b"));
        assert!(outcome.is_handled());
        assert_eq!(cx.read(|cx| handle.read(cx).depth()), 2);
    }
}
