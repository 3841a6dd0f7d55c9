//! Navigator configuration.
//!
//! Tab switching is where UI navigation libraries disagree most: some never
//! touch stacks on a switch, some pop the destination tab to root, some also
//! dismiss open sheets. Rather than baking one answer in, the navigator
//! takes a [`TabSwitchPolicy`]. The default, [`TabSwitchPolicy::preserve`],
//! dismisses the active sheet and leaves every stack alone.
//!
//! # Example
//!
//! ```
//! use tab_navigator::{NavigatorConfig, ReselectBehavior, TabSwitchPolicy};
//!
//! let config = NavigatorConfig::new()
//!     .tab_switch(TabSwitchPolicy::preserve().reset_destination_on_enter(true))
//!     .reselect(ReselectBehavior::Ignore);
//!
//! assert!(config.tab_switch.reset_destination);
//! assert!(config.tab_switch.dismiss_sheet);
//! ```

use crate::PresentationKind;

/// What a tab switch does besides changing the active tab.
///
/// None of these steps run when the requested tab is already active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSwitchPolicy {
    /// Dismiss the sheet slot.
    pub dismiss_sheet: bool,
    /// Dismiss the full-screen slot.
    pub dismiss_full_screen: bool,
    /// Dismiss the popup slot.
    pub dismiss_popup: bool,
    /// Pop the destination tab to root on entry.
    pub reset_destination: bool,
    /// Pop the tab being left to root.
    pub reset_origin: bool,
}

impl TabSwitchPolicy {
    /// Dismiss the sheet, keep every stack. This is the default.
    pub const fn preserve() -> Self {
        Self {
            dismiss_sheet: true,
            dismiss_full_screen: false,
            dismiss_popup: false,
            reset_destination: false,
            reset_origin: false,
        }
    }

    /// Dismiss the sheet and pop the destination tab to root on entry.
    pub const fn reset_destination() -> Self {
        Self {
            dismiss_sheet: true,
            dismiss_full_screen: false,
            dismiss_popup: false,
            reset_destination: true,
            reset_origin: false,
        }
    }

    /// Change the active tab and nothing else.
    pub const fn never_reset() -> Self {
        Self {
            dismiss_sheet: false,
            dismiss_full_screen: false,
            dismiss_popup: false,
            reset_destination: false,
            reset_origin: false,
        }
    }

    /// Set whether the sheet is dismissed.
    pub fn dismiss_sheet_on_switch(mut self, enabled: bool) -> Self {
        self.dismiss_sheet = enabled;
        self
    }

    /// Set whether the full-screen cover is dismissed.
    pub fn dismiss_full_screen_on_switch(mut self, enabled: bool) -> Self {
        self.dismiss_full_screen = enabled;
        self
    }

    /// Set whether the popup is dismissed.
    pub fn dismiss_popup_on_switch(mut self, enabled: bool) -> Self {
        self.dismiss_popup = enabled;
        self
    }

    /// Set whether the destination tab is popped to root on entry.
    pub fn reset_destination_on_enter(mut self, enabled: bool) -> Self {
        self.reset_destination = enabled;
        self
    }

    /// Set whether the tab being left is popped to root.
    pub fn reset_origin_on_leave(mut self, enabled: bool) -> Self {
        self.reset_origin = enabled;
        self
    }

    /// Whether a switch dismisses the slot of the given kind.
    pub fn dismisses(&self, kind: PresentationKind) -> bool {
        match kind {
            PresentationKind::Sheet => self.dismiss_sheet,
            PresentationKind::FullScreen => self.dismiss_full_screen,
            PresentationKind::Popup => self.dismiss_popup,
        }
    }
}

impl Default for TabSwitchPolicy {
    fn default() -> Self {
        Self::preserve()
    }
}

/// What [`TabNavigator::select_tab`](crate::TabNavigator::select_tab) does
/// when the user taps the tab that is already active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReselectBehavior {
    /// Pop the active tab back to root.
    #[default]
    PopToRoot,
    /// Do nothing.
    Ignore,
}

/// Runtime configuration for a [`TabNavigator`](crate::TabNavigator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigatorConfig {
    /// Side effects of switching tabs.
    pub tab_switch: TabSwitchPolicy,
    /// Reaction to re-selecting the active tab.
    pub reselect: ReselectBehavior,
}

impl NavigatorConfig {
    /// Configuration with the default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tab switch policy.
    pub fn tab_switch(mut self, policy: TabSwitchPolicy) -> Self {
        self.tab_switch = policy;
        self
    }

    /// Set the reselect behavior.
    pub fn reselect(mut self, behavior: ReselectBehavior) -> Self {
        self.reselect = behavior;
        self
    }
}
