//! Change notifications published by the navigator.

use crate::{InstanceId, PresentationKind, Screen, TabId};

/// Direction a stack change moves the visible content.
///
/// Rendering layers use it to pick a forward or backward transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// A screen was pushed.
    Forward,
    /// One or more screens were removed.
    Back,
    /// The stack was swapped wholesale or its top replaced.
    Replace,
}

/// One observable state change.
///
/// Every operation that changes state publishes one or more events, after
/// the whole operation has been applied. Operations that change nothing
/// publish nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent<S> {
    /// `configure` added tabs or selected the initial tab.
    TabsConfigured {
        /// Tabs that were not known before, in configuration order.
        added: Vec<TabId>,
        /// Active tab after configuration.
        active: Option<TabId>,
    },

    /// The active tab changed.
    TabSwitched {
        /// Previously active tab (`None` only before configuration).
        from: Option<TabId>,
        /// Newly active tab.
        to: TabId,
    },

    /// A screen was pushed onto a tab's stack.
    Pushed {
        /// Tab whose stack grew.
        tab: TabId,
        /// The pushed screen.
        screen: S,
    },

    /// The top screen of a tab's stack was removed.
    Popped {
        /// Tab whose stack shrank.
        tab: TabId,
        /// The removed screen.
        screen: S,
    },

    /// A tab's stack was cleared back to root.
    PoppedToRoot {
        /// Tab that was reset.
        tab: TabId,
        /// Number of screens removed.
        removed: usize,
    },

    /// A tab's stack was replaced (deep link or top replacement).
    StackReplaced {
        /// Tab whose stack was replaced.
        tab: TabId,
        /// Depth of the new stack.
        depth: usize,
    },

    /// Content was presented into an overlay slot.
    Presented {
        /// Slot that received the content.
        kind: PresentationKind,
        /// Id of the new presentation.
        id: InstanceId,
        /// Id of the occupant it replaced, if the slot was occupied.
        replaced: Option<InstanceId>,
    },

    /// An overlay slot was cleared.
    Dismissed {
        /// Slot that was cleared.
        kind: PresentationKind,
        /// Id of the presentation that was removed.
        id: InstanceId,
    },

    /// An alert became pending.
    AlertShown {
        /// Id of the new alert.
        id: InstanceId,
        /// Id of the pending alert it overwrote, if any.
        replaced: Option<InstanceId>,
    },

    /// The pending alert was acknowledged.
    AlertDismissed {
        /// Id of the cleared alert.
        id: InstanceId,
    },
}

impl<S: Screen> NavigationEvent<S> {
    /// Tab the event concerns, for stack and tab events.
    pub fn tab(&self) -> Option<&TabId> {
        match self {
            Self::TabSwitched { to, .. } => Some(to),
            Self::Pushed { tab, .. }
            | Self::Popped { tab, .. }
            | Self::PoppedToRoot { tab, .. }
            | Self::StackReplaced { tab, .. } => Some(tab),
            _ => None,
        }
    }

    /// Transition direction, for stack events.
    pub fn direction(&self) -> Option<NavigationDirection> {
        match self {
            Self::Pushed { .. } => Some(NavigationDirection::Forward),
            Self::Popped { .. } | Self::PoppedToRoot { .. } => Some(NavigationDirection::Back),
            Self::StackReplaced { .. } => Some(NavigationDirection::Replace),
            _ => None,
        }
    }

    /// `true` for events that change an overlay slot or the alert.
    pub fn is_presentation(&self) -> bool {
        matches!(
            self,
            Self::Presented { .. }
                | Self::Dismissed { .. }
                | Self::AlertShown { .. }
                | Self::AlertDismissed { .. }
        )
    }
}
