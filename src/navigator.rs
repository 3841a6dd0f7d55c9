//! The navigation controller.
//!
//! [`TabNavigator`] is the single source of truth a rendering layer draws
//! from. It owns:
//!
//! - one [`NavigationStack`] per configured tab and the active tab id,
//! - three independent [`PresentationSlot`]s (sheet, full-screen, popup),
//! - at most one pending [`AlertRequest`],
//! - the subscribed [`NavigationListener`]s and the optional deep-link handler.
//!
//! Every operation is synchronous and total. Requests that refer to state
//! that does not exist (pushing before `configure`, switching to an unknown
//! tab) are ignored with a warning instead of failing, and requests that
//! would not change anything (popping an empty stack, dismissing an empty
//! slot, switching to the active tab) are silent no-ops.
//!
//! The navigator is an ordinary value. The host creates it at its
//! composition root and passes it (or a handle to it) to whoever needs it;
//! there is no global instance.
//!
//! # Example
//!
//! ```
//! use tab_navigator::TabNavigator;
//!
//! let mut nav: TabNavigator<&str, &str> = TabNavigator::new();
//! nav.configure(["home", "settings"]);
//! assert_eq!(nav.active_tab().unwrap(), "home");
//!
//! nav.push("detail");
//! nav.present_sheet("compose");
//!
//! nav.switch_tab("settings");
//! assert!(nav.sheet().is_none());
//!
//! nav.switch_tab("home");
//! assert_eq!(nav.active_stack().unwrap().as_slice(), &["detail"]);
//! ```

use crate::{
    debug_log, error_log, info_log, trace_log, warn_log, AlertRequest, DeepLink, InstanceId,
    LinkOutcome, NavigationError, NavigationEvent, NavigationListener, NavigationStack,
    NavigatorConfig, Presentation, PresentationKind, PresentationSlot, ReselectBehavior, Screen,
    SubscriptionId, Tab, TabId,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Handler invoked with every incoming deep link.
///
/// The handler interprets the link and drives the navigator through its
/// regular operations (`switch_tab`, `deep_link`, `push`, ...).
pub type LinkHandler<S, P> =
    Arc<dyn Fn(&mut TabNavigator<S, P>, &DeepLink) -> Result<(), NavigationError> + Send + Sync>;

/// Navigation state for a tabbed, stack-based UI.
///
/// `S` is the screen identifier type pushed onto stacks. `P` is the opaque
/// payload stored in presentation slots; the navigator never inspects it.
pub struct TabNavigator<S: Screen, P = ()> {
    config: NavigatorConfig,
    /// Configured tabs in configuration order.
    tabs: Vec<Tab>,
    stacks: HashMap<TabId, NavigationStack<S>>,
    active: Option<TabId>,
    sheet: PresentationSlot<P>,
    full_screen: PresentationSlot<P>,
    popup: PresentationSlot<P>,
    alert: Option<AlertRequest>,
    listeners: Vec<(SubscriptionId, Arc<dyn NavigationListener<S>>)>,
    next_subscription: u64,
    link_handler: Option<LinkHandler<S, P>>,
    /// Bumped once per state-changing operation.
    revision: u64,
}

impl<S: Screen, P> TabNavigator<S, P> {
    /// Create an unconfigured navigator with the default policies.
    pub fn new() -> Self {
        Self::with_config(NavigatorConfig::default())
    }

    /// Create an unconfigured navigator with the given policies.
    pub fn with_config(config: NavigatorConfig) -> Self {
        Self {
            config,
            tabs: Vec::new(),
            stacks: HashMap::new(),
            active: None,
            sheet: PresentationSlot::new(),
            full_screen: PresentationSlot::new(),
            popup: PresentationSlot::new(),
            alert: None,
            listeners: Vec::new(),
            next_subscription: 0,
            link_handler: None,
            revision: 0,
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Register tabs, in display order.
    ///
    /// Creates an empty stack for every tab id not seen before. Stacks of
    /// tabs that are already configured are left untouched, so calling this
    /// again with a recomputed tab list never loses navigation history.
    /// A repeated id refreshes that tab's title and icon.
    ///
    /// If no tab is active yet, the first tab of `tabs` becomes active. An
    /// empty `tabs` changes nothing.
    pub fn configure<I>(&mut self, tabs: I)
    where
        I: IntoIterator,
        I::Item: Into<Tab>,
    {
        let mut added = Vec::new();
        let mut first = None;
        let mut metadata_changed = false;

        for tab in tabs.into_iter().map(Into::into) {
            if first.is_none() {
                first = Some(tab.id.clone());
            }

            if let Some(existing) = self.tabs.iter_mut().find(|t| t.id == tab.id) {
                if *existing != tab {
                    *existing = tab;
                    metadata_changed = true;
                }
                continue;
            }

            self.stacks.insert(tab.id.clone(), NavigationStack::new());
            added.push(tab.id.clone());
            self.tabs.push(tab);
        }

        let mut activated = false;
        if self.active.is_none() {
            if let Some(first) = first {
                self.active = Some(first);
                activated = true;
            }
        }

        if added.is_empty() && !activated && !metadata_changed {
            trace_log!("configure: tab set unchanged");
            return;
        }

        info_log!(
            "Configured tabs: {} new, {} total, active {:?}",
            added.len(),
            self.tabs.len(),
            self.active
        );
        let active = self.active.clone();
        self.commit(vec![NavigationEvent::TabsConfigured { added, active }]);
    }

    /// Replace the runtime policies. Takes effect from the next operation.
    pub fn set_config(&mut self, config: NavigatorConfig) {
        self.config = config;
    }

    /// Current runtime policies.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    // ========================================================================
    // Read surface
    // ========================================================================

    /// `true` once at least one tab has been configured.
    pub fn is_configured(&self) -> bool {
        self.active.is_some()
    }

    /// Currently selected tab, `None` before configuration.
    pub fn active_tab(&self) -> Option<&TabId> {
        self.active.as_ref()
    }

    /// Configured tabs in configuration order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Descriptor of a configured tab.
    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// `true` if `id` is a configured tab.
    pub fn has_tab(&self, id: &str) -> bool {
        self.stacks.contains_key(id)
    }

    /// Stack of a configured tab.
    pub fn stack(&self, tab: &str) -> Option<&NavigationStack<S>> {
        self.stacks.get(tab)
    }

    /// Stack of the active tab.
    pub fn active_stack(&self) -> Option<&NavigationStack<S>> {
        self.stacks.get(self.active.as_ref()?)
    }

    /// Top screen of the active tab.
    pub fn top(&self) -> Option<&S> {
        self.active_stack()?.top()
    }

    /// Depth of the active tab's stack (0 at root or before configuration).
    pub fn depth(&self) -> usize {
        self.active_stack().map_or(0, NavigationStack::depth)
    }

    /// `true` when the active tab has something to pop.
    pub fn can_go_back(&self) -> bool {
        self.active_stack()
            .is_some_and(NavigationStack::can_go_back)
    }

    /// Current occupant of a presentation slot.
    pub fn presentation(&self, kind: PresentationKind) -> Option<&Presentation<P>> {
        self.slot(kind).current()
    }

    /// Current sheet.
    pub fn sheet(&self) -> Option<&Presentation<P>> {
        self.sheet.current()
    }

    /// Current full-screen cover.
    pub fn full_screen(&self) -> Option<&Presentation<P>> {
        self.full_screen.current()
    }

    /// Current popup.
    pub fn popup(&self) -> Option<&Presentation<P>> {
        self.popup.current()
    }

    /// Pending alert.
    pub fn alert(&self) -> Option<&AlertRequest> {
        self.alert.as_ref()
    }

    /// Revision counter, incremented once per state-changing operation.
    ///
    /// Hosts that poll instead of subscribing can compare revisions to
    /// detect changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========================================================================
    // Stack mutation
    // ========================================================================

    /// Push a screen onto the active tab's stack.
    pub fn push(&mut self, screen: S) {
        let Some((tab, stack)) = self.active_stack_mut() else {
            warn_log!("push({:?}) ignored: no active tab", screen);
            return;
        };
        stack.push(screen.clone());
        trace_log!("Pushed {:?} on '{}' (depth {})", screen, tab, stack.depth());
        self.commit(vec![NavigationEvent::Pushed { tab, screen }]);
    }

    /// Pop the top screen of the active tab. No-op at root.
    pub fn pop(&mut self) {
        let Some((tab, stack)) = self.active_stack_mut() else {
            warn_log!("pop() ignored: no active tab");
            return;
        };
        let Some(screen) = stack.pop() else {
            trace_log!("pop() on '{}' ignored: already at root", tab);
            return;
        };
        trace_log!("Popped {:?} from '{}' (depth {})", screen, tab, stack.depth());
        self.commit(vec![NavigationEvent::Popped { tab, screen }]);
    }

    /// Clear the active tab's stack back to root.
    pub fn pop_to_root(&mut self) {
        match self.active.clone() {
            Some(tab) => self.pop_to_root_of(tab.as_str()),
            None => {
                warn_log!("pop_to_root() ignored: no active tab");
            }
        }
    }

    /// Clear the given tab's stack back to root.
    ///
    /// Unknown tabs are ignored.
    pub fn pop_to_root_of(&mut self, tab: &str) {
        if let Some(event) = self.reset_stack(tab) {
            self.commit(vec![event]);
        }
    }

    /// Replace the active tab's entire stack with `screens`, bottom to top.
    ///
    /// This is how a link or notification jumps straight to a target screen,
    /// with optional intermediate screens for back navigation.
    pub fn deep_link(&mut self, screens: impl IntoIterator<Item = S>) {
        let Some((tab, stack)) = self.active_stack_mut() else {
            warn_log!("deep_link() ignored: no active tab");
            return;
        };
        let previous = stack.replace(screens);
        if previous.as_slice() == stack.as_slice() {
            trace_log!("deep_link() on '{}' left the stack unchanged", tab);
            return;
        }
        let depth = stack.depth();
        debug_log!("Deep-linked '{}' to depth {}", tab, depth);
        self.commit(vec![NavigationEvent::StackReplaced { tab, depth }]);
    }

    /// Swap the active tab's top screen for `screen`. No-op at root.
    pub fn replace_top(&mut self, screen: S) {
        let Some((tab, stack)) = self.active_stack_mut() else {
            warn_log!("replace_top({:?}) ignored: no active tab", screen);
            return;
        };
        match stack.replace_top(screen) {
            Some(old) if stack.top() != Some(&old) => {
                let depth = stack.depth();
                trace_log!("Replaced top of '{}': {:?}", tab, old);
                self.commit(vec![NavigationEvent::StackReplaced { tab, depth }]);
            }
            Some(_) => {}
            None => {
                trace_log!("replace_top() on '{}' ignored: at root", tab);
            }
        }
    }

    // ========================================================================
    // Tab switching
    // ========================================================================

    /// Make `tab` the active tab.
    ///
    /// Switching to the already active tab does nothing at all, so UI
    /// bindings that write the selection back redundantly never re-trigger
    /// the policy steps. Otherwise the configured
    /// [`TabSwitchPolicy`](crate::TabSwitchPolicy) is applied (by default:
    /// dismiss the sheet, keep every stack) and the tab becomes active.
    /// Unknown tabs are ignored.
    pub fn switch_tab(&mut self, tab: &str) {
        if self.active.as_ref().is_some_and(|active| active == tab) {
            trace_log!("switch_tab('{}') ignored: already active", tab);
            return;
        }
        let Some(to) = self.tab(tab).map(|t| t.id.clone()) else {
            warn_log!("switch_tab('{}') ignored: unknown tab", tab);
            return;
        };

        let policy = self.config.tab_switch;
        let mut events = Vec::new();

        for kind in PresentationKind::ALL {
            if policy.dismisses(kind) {
                if let Some(event) = self.clear_slot(kind) {
                    events.push(event);
                }
            }
        }

        if policy.reset_origin {
            if let Some(from) = self.active.clone() {
                events.extend(self.reset_stack(from.as_str()));
            }
        }

        if policy.reset_destination {
            events.extend(self.reset_stack(tab));
        }

        let from = self.active.replace(to.clone());
        debug_log!("Switched tab {:?} -> '{}'", from, to);
        events.push(NavigationEvent::TabSwitched { from, to });
        self.commit(events);
    }

    /// Handle a tap on a tab item.
    ///
    /// Tapping an inactive tab switches to it. Tapping the active tab applies
    /// the configured [`ReselectBehavior`].
    pub fn select_tab(&mut self, tab: &str) {
        let reselected = self.active.as_ref().is_some_and(|active| active == tab);
        if !reselected {
            self.switch_tab(tab);
            return;
        }

        match self.config.reselect {
            ReselectBehavior::PopToRoot => {
                debug_log!("Reselected '{}': popping to root", tab);
                self.pop_to_root_of(tab);
            }
            ReselectBehavior::Ignore => {
                trace_log!("Reselected '{}': ignored", tab);
            }
        }
    }

    // ========================================================================
    // Presentation slots
    // ========================================================================

    /// Present `content` in the slot of the given kind, replacing any
    /// occupant. Returns the new instance id.
    pub fn present(&mut self, kind: PresentationKind, content: P) -> InstanceId {
        let (id, replaced) = self.slot_mut(kind).replace(content);
        let replaced = replaced.map(|previous| previous.id());
        debug_log!("Presented {} {} (replacing {:?})", kind, id, replaced);
        self.commit(vec![NavigationEvent::Presented { kind, id, replaced }]);
        id
    }

    /// Clear the slot of the given kind, returning its payload.
    ///
    /// Dismissing an empty slot is a no-op.
    pub fn dismiss(&mut self, kind: PresentationKind) -> Option<P> {
        let presentation = self.slot_mut(kind).dismiss()?;
        let id = presentation.id();
        debug_log!("Dismissed {} {}", kind, id);
        self.commit(vec![NavigationEvent::Dismissed { kind, id }]);
        Some(presentation.into_content())
    }

    /// Present a modal sheet.
    pub fn present_sheet(&mut self, content: P) -> InstanceId {
        self.present(PresentationKind::Sheet, content)
    }

    /// Present a full-screen cover.
    pub fn present_full_screen(&mut self, content: P) -> InstanceId {
        self.present(PresentationKind::FullScreen, content)
    }

    /// Present a popup.
    pub fn present_popup(&mut self, content: P) -> InstanceId {
        self.present(PresentationKind::Popup, content)
    }

    /// Dismiss the sheet.
    pub fn dismiss_sheet(&mut self) -> Option<P> {
        self.dismiss(PresentationKind::Sheet)
    }

    /// Dismiss the full-screen cover.
    pub fn dismiss_full_screen(&mut self) -> Option<P> {
        self.dismiss(PresentationKind::FullScreen)
    }

    /// Dismiss the popup.
    pub fn dismiss_popup(&mut self) -> Option<P> {
        self.dismiss(PresentationKind::Popup)
    }

    // ========================================================================
    // Alerts
    // ========================================================================

    /// Show an alert with an `"OK"` button. The last request wins.
    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) -> InstanceId {
        self.present_alert(AlertRequest::new(title, message))
    }

    /// Show an alert with a custom button label.
    pub fn show_alert_with_button(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        button: impl Into<String>,
    ) -> InstanceId {
        self.present_alert(AlertRequest::new(title, message).with_button(button))
    }

    /// Make `alert` the pending alert, overwriting any previous one.
    pub fn present_alert(&mut self, alert: AlertRequest) -> InstanceId {
        let id = alert.id();
        debug_log!("Showing alert {} '{}'", id, alert.title());
        let replaced = self.alert.replace(alert).map(|previous| previous.id());
        self.commit(vec![NavigationEvent::AlertShown { id, replaced }]);
        id
    }

    /// Clear the pending alert once the user acknowledged it.
    pub fn dismiss_alert(&mut self) -> Option<AlertRequest> {
        let alert = self.alert.take()?;
        let id = alert.id();
        debug_log!("Dismissed alert {}", id);
        self.commit(vec![NavigationEvent::AlertDismissed { id }]);
        Some(alert)
    }

    // ========================================================================
    // Observation
    // ========================================================================

    /// Subscribe a listener to every future change.
    pub fn subscribe<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: NavigationListener<S>,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        debug_log!("Listener '{}' subscribed as {}", listener.name(), id);
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        before != self.listeners.len()
    }

    /// Number of subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ========================================================================
    // Deep-link ingress
    // ========================================================================

    /// Register the handler that receives incoming links, replacing any
    /// previous one.
    pub fn set_link_handler<F>(&mut self, handler: F)
    where
        F: Fn(&mut TabNavigator<S, P>, &DeepLink) -> Result<(), NavigationError>
            + Send
            + Sync
            + 'static,
    {
        self.link_handler = Some(Arc::new(handler));
    }

    /// Remove the link handler.
    pub fn clear_link_handler(&mut self) {
        self.link_handler = None;
    }

    /// `true` if a link handler is registered.
    pub fn has_link_handler(&self) -> bool {
        self.link_handler.is_some()
    }

    /// Forward an incoming link to the registered handler.
    ///
    /// The link is passed through untouched; interpreting it is entirely up
    /// to the handler.
    pub fn open_link(&mut self, link: impl Into<DeepLink>) -> LinkOutcome {
        let link = link.into();
        let Some(handler) = self.link_handler.clone() else {
            debug_log!("No link handler registered for '{}'", link);
            return LinkOutcome::Unhandled;
        };

        debug_log!("Dispatching link '{}'", link);
        match handler(self, &link) {
            Ok(()) => LinkOutcome::Handled,
            Err(err) => {
                error_log!("Link handler failed for '{}': {}", link, err);
                LinkOutcome::Failed(err)
            }
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn active_stack_mut(&mut self) -> Option<(TabId, &mut NavigationStack<S>)> {
        let tab = self.active.clone()?;
        let stack = self.stacks.get_mut(&tab)?;
        Some((tab, stack))
    }

    /// Clear a tab's stack, returning the event if anything was removed.
    fn reset_stack(&mut self, tab: &str) -> Option<NavigationEvent<S>> {
        let Some(stack) = self.stacks.get_mut(tab) else {
            warn_log!("pop_to_root('{}') ignored: unknown tab", tab);
            return None;
        };
        let removed = stack.pop_to_root();
        if removed == 0 {
            return None;
        }
        debug_log!("Popped '{}' to root ({} removed)", tab, removed);
        Some(NavigationEvent::PoppedToRoot {
            tab: TabId::from(tab),
            removed,
        })
    }

    fn clear_slot(&mut self, kind: PresentationKind) -> Option<NavigationEvent<S>> {
        let presentation = self.slot_mut(kind).dismiss()?;
        debug_log!("Dismissed {} {} on tab switch", kind, presentation.id());
        Some(NavigationEvent::Dismissed {
            kind,
            id: presentation.id(),
        })
    }

    fn slot(&self, kind: PresentationKind) -> &PresentationSlot<P> {
        match kind {
            PresentationKind::Sheet => &self.sheet,
            PresentationKind::FullScreen => &self.full_screen,
            PresentationKind::Popup => &self.popup,
        }
    }

    fn slot_mut(&mut self, kind: PresentationKind) -> &mut PresentationSlot<P> {
        match kind {
            PresentationKind::Sheet => &mut self.sheet,
            PresentationKind::FullScreen => &mut self.full_screen,
            PresentationKind::Popup => &mut self.popup,
        }
    }

    /// Bump the revision and publish `events` to every listener, in order.
    ///
    /// Callers apply the whole operation before committing.
    fn commit(&mut self, events: Vec<NavigationEvent<S>>) {
        if events.is_empty() {
            return;
        }
        self.revision += 1;
        for event in &events {
            for (_, listener) in &self.listeners {
                trace_log!("Listener '{}' <- {:?}", listener.name(), event);
                listener.on_event(event, self.revision);
            }
        }
    }
}

impl<S: Screen, P> Default for TabNavigator<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Screen, P> fmt::Debug for TabNavigator<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabNavigator")
            .field("config", &self.config)
            .field("tabs", &self.tabs)
            .field("active", &self.active)
            .field("stacks", &self.stacks)
            .field("sheet", &self.sheet.id())
            .field("full_screen", &self.full_screen.id())
            .field("popup", &self.popup.id())
            .field("alert", &self.alert)
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
