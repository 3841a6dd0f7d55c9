//! Presentation slots for sheets, full-screen covers, and popups.
//!
//! Each slot holds at most one [`Presentation`]. Presenting into an occupied
//! slot replaces the occupant; nothing is queued. The occupant's
//! [`InstanceId`] and payload live in one `Option`, so a slot is either
//! fully occupied or fully empty and an observer can never see one half of
//! a presentation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of instance ids. Starts at 1 so that 0 never appears.
static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Token distinguishing one presentation event from another.
///
/// Ids are freshly generated for every presentation and alert, are unique
/// across all navigators in the process, and increase monotonically.
/// Presenting identical content twice therefore yields two different ids,
/// which lets a rendering layer that watches ids re-show the overlay.
///
/// # Example
///
/// ```
/// use tab_navigator::InstanceId;
///
/// let a = InstanceId::next();
/// let b = InstanceId::next();
/// assert_ne!(a, b);
/// assert!(b > a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Generate a fresh id.
    pub fn next() -> Self {
        Self(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value, e.g. for use as a UI element key.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which overlay slot a presentation occupies.
///
/// The three slots are independent: a sheet, a full-screen cover, and a
/// popup can all be active at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresentationKind {
    /// Modal sheet, visually tied to the tab it was presented over.
    Sheet,
    /// Full-screen cover.
    FullScreen,
    /// Lightweight popup.
    Popup,
}

impl PresentationKind {
    /// All kinds, in slot order.
    pub const ALL: [PresentationKind; 3] = [Self::Sheet, Self::FullScreen, Self::Popup];
}

impl fmt::Display for PresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sheet => write!(f, "sheet"),
            Self::FullScreen => write!(f, "full-screen"),
            Self::Popup => write!(f, "popup"),
        }
    }
}

/// The occupant of a slot: an instance id plus the caller's payload.
///
/// The payload is opaque. The navigator stores it and hands it back; it is
/// typically a view handle, a builder closure, or an app-defined enum the
/// rendering layer knows how to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation<P> {
    id: InstanceId,
    content: P,
}

impl<P> Presentation<P> {
    /// Wrap `content` with a freshly generated id.
    pub fn new(content: P) -> Self {
        Self {
            id: InstanceId::next(),
            content,
        }
    }

    /// Id of this presentation event.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The caller's payload.
    pub fn content(&self) -> &P {
        &self.content
    }

    /// Consume the presentation, returning the payload.
    pub fn into_content(self) -> P {
        self.content
    }
}

/// Single-occupancy holder for one overlay kind.
///
/// # Example
///
/// ```
/// use tab_navigator::PresentationSlot;
///
/// let mut slot = PresentationSlot::new();
/// let first = slot.present("share");
/// let second = slot.present("share");
/// assert_ne!(first, second);
///
/// assert!(slot.dismiss().is_some());
/// assert!(slot.dismiss().is_none());
/// assert!(slot.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PresentationSlot<P> {
    occupant: Option<Presentation<P>>,
}

impl<P> PresentationSlot<P> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self { occupant: None }
    }

    /// Present `content`, replacing any current occupant.
    ///
    /// Returns the new instance id.
    pub fn present(&mut self, content: P) -> InstanceId {
        self.replace(content).0
    }

    /// Present `content`, returning the new id and the replaced occupant.
    pub fn replace(&mut self, content: P) -> (InstanceId, Option<Presentation<P>>) {
        let presentation = Presentation::new(content);
        let id = presentation.id();
        (id, self.occupant.replace(presentation))
    }

    /// Clear the slot, returning the occupant if there was one.
    pub fn dismiss(&mut self) -> Option<Presentation<P>> {
        self.occupant.take()
    }

    /// Current occupant.
    pub fn current(&self) -> Option<&Presentation<P>> {
        self.occupant.as_ref()
    }

    /// Id of the current occupant.
    pub fn id(&self) -> Option<InstanceId> {
        self.occupant.as_ref().map(Presentation::id)
    }

    /// `true` when nothing is presented.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

impl<P> Default for PresentationSlot<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_replaces_occupant() {
        let mut slot = PresentationSlot::new();
        let first = slot.present("a");
        let (second, replaced) = slot.replace("b");

        assert_ne!(first, second);
        let replaced = replaced.map(|p| (p.id(), p.into_content()));
        assert_eq!(replaced, Some((first, "a")));
        assert_eq!(slot.current().map(|p| *p.content()), Some("b"));
        assert_eq!(slot.id(), Some(second));
    }

    #[test]
    fn test_identical_content_gets_distinct_ids() {
        let mut slot = PresentationSlot::new();
        let first = slot.present(42);
        let second = slot.present(42);
        assert_ne!(first, second);
        assert_eq!(slot.id(), Some(second));
    }

    #[test]
    fn test_dismiss_clears_id_and_payload_together() {
        let mut slot = PresentationSlot::new();
        slot.present("a");

        let dismissed = slot.dismiss();
        assert!(dismissed.is_some());
        assert!(slot.current().is_none());
        assert!(slot.id().is_none());

        assert!(slot.dismiss().is_none());
        assert!(slot.is_empty());
    }

    #[test]
    fn test_instance_ids_increase() {
        let ids: Vec<_> = (0..5).map(|_| InstanceId::next()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PresentationKind::Sheet.to_string(), "sheet");
        assert_eq!(PresentationKind::FullScreen.to_string(), "full-screen");
        assert_eq!(PresentationKind::Popup.to_string(), "popup");
    }
}
