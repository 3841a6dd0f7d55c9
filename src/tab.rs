//! Tab identifiers and tab descriptors.

use std::borrow::Borrow;
use std::fmt;

/// String-like key identifying one configured tab.
///
/// Tab ids are unique within a navigator and never renamed once configured.
///
/// # Example
///
/// ```
/// use tab_navigator::TabId;
///
/// let id = TabId::from("home");
/// assert_eq!(id, "home");
/// assert_eq!(id.as_str(), "home");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(String);

impl TabId {
    /// Create a tab id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TabId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TabId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TabId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for TabId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TabId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Descriptor for one tab: its id plus the label and icon a tab bar shows.
///
/// Only the id takes part in navigation. Title and icon are carried for the
/// rendering layer and are never interpreted.
///
/// # Example
///
/// ```
/// use tab_navigator::Tab;
///
/// let tab = Tab::new("home").title("Home").icon("house");
/// assert_eq!(tab.id, "home");
/// assert_eq!(tab.title.as_deref(), Some("Home"));
/// assert_eq!(tab.icon.as_deref(), Some("house"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Unique tab id.
    pub id: TabId,
    /// Label shown in the tab bar.
    pub title: Option<String>,
    /// Icon name shown in the tab bar.
    pub icon: Option<String>,
}

impl Tab {
    /// Create a tab with no title or icon.
    pub fn new(id: impl Into<TabId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            icon: None,
        }
    }

    /// Set the tab bar label.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the tab bar icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl From<TabId> for Tab {
    fn from(id: TabId) -> Self {
        Self::new(id)
    }
}

impl From<&str> for Tab {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Tab {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_tab_id_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(TabId::from("home"), 1);

        assert_eq!(map.get("home"), Some(&1));
        assert_eq!(map.get("settings"), None);
    }

    #[test]
    fn test_tab_id_display() {
        assert_eq!(TabId::new("profile").to_string(), "profile");
    }

    #[test]
    fn test_tab_from_str_has_no_metadata() {
        let tab = Tab::from("search");
        assert_eq!(tab.id, "search");
        assert!(tab.title.is_none());
        assert!(tab.icon.is_none());
    }
}
