//! Per-tab navigation stack.

use crate::Screen;

/// Ordered history of screens pushed within one tab.
///
/// The stack is LIFO. An empty stack is the *root* state: nothing pushed,
/// the tab shows its root content. Depth is never negative, so popping an
/// empty stack is a no-op.
///
/// # Example
///
/// ```
/// use tab_navigator::NavigationStack;
///
/// let mut stack = NavigationStack::new();
/// stack.push("list");
/// stack.push("detail");
/// assert_eq!(stack.top(), Some(&"detail"));
///
/// assert_eq!(stack.pop(), Some("detail"));
/// assert_eq!(stack.depth(), 1);
///
/// stack.pop_to_root();
/// assert!(stack.is_root());
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack<S> {
    screens: Vec<S>,
}

impl<S: Screen> NavigationStack<S> {
    /// Create an empty (root) stack.
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
        }
    }

    /// Create a stack from screens ordered bottom to top.
    pub fn from_screens(screens: impl IntoIterator<Item = S>) -> Self {
        Self {
            screens: screens.into_iter().collect(),
        }
    }

    /// Push a screen on top of the stack.
    pub fn push(&mut self, screen: S) {
        self.screens.push(screen);
    }

    /// Remove and return the top screen, or `None` if the stack is at root.
    pub fn pop(&mut self) -> Option<S> {
        self.screens.pop()
    }

    /// Clear the stack back to root, returning how many screens were removed.
    pub fn pop_to_root(&mut self) -> usize {
        let removed = self.screens.len();
        self.screens.clear();
        removed
    }

    /// Replace the whole stack, returning the previous contents.
    pub fn replace(&mut self, screens: impl IntoIterator<Item = S>) -> Vec<S> {
        std::mem::replace(&mut self.screens, screens.into_iter().collect())
    }

    /// Swap the top screen for `screen`, returning the old top.
    ///
    /// Does nothing and returns `None` when the stack is at root.
    pub fn replace_top(&mut self, screen: S) -> Option<S> {
        let top = self.screens.last_mut()?;
        Some(std::mem::replace(top, screen))
    }

    /// The screen currently on top, if any.
    pub fn top(&self) -> Option<&S> {
        self.screens.last()
    }

    /// Number of pushed screens.
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    /// `true` when nothing is pushed.
    pub fn is_root(&self) -> bool {
        self.screens.is_empty()
    }

    /// `true` when a back navigation would change what is shown.
    pub fn can_go_back(&self) -> bool {
        !self.screens.is_empty()
    }

    /// `true` if `screen` appears anywhere in the stack.
    pub fn contains(&self, screen: &S) -> bool {
        self.screens.contains(screen)
    }

    /// Screens ordered bottom to top.
    pub fn as_slice(&self) -> &[S] {
        &self.screens
    }

    /// Iterate over screens bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.screens.iter()
    }
}

impl<S: Screen> Default for NavigationStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: Screen> IntoIterator for &'a NavigationStack<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Screen> FromIterator<S> for NavigationStack<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_screens(iter)
    }
}
