//! Screen identifiers.

use std::fmt::Debug;
use std::hash::Hash;

/// A navigable destination inside a tab's stack.
///
/// Any cloneable, comparable, hashable value qualifies: an app-defined
/// `enum`, a `String`, an integer id. The navigator only compares, clones,
/// and stores screens; what a screen *renders* is decided by the
/// rendering layer.
///
/// This trait is blanket-implemented, so it never needs to be implemented
/// by hand.
///
/// # Example
///
/// ```
/// use tab_navigator::Screen;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum AppScreen {
///     Detail(u32),
///     Settings,
/// }
///
/// fn assert_screen<S: Screen>() {}
/// assert_screen::<AppScreen>();
/// assert_screen::<String>();
/// ```
pub trait Screen: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Screen for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
