//! One-shot modal alert requests.

use crate::InstanceId;

/// Label used when no confirmation button label is given.
pub const DEFAULT_ALERT_BUTTON: &str = "OK";

/// A modal confirmation dialog waiting to be shown.
///
/// At most one alert is pending per navigator; a new request overwrites the
/// previous one. The navigator never clears an alert on its own; the
/// rendering layer calls
/// [`TabNavigator::dismiss_alert`](crate::TabNavigator::dismiss_alert) once
/// the user taps the button.
///
/// # Example
///
/// ```
/// use tab_navigator::AlertRequest;
///
/// let alert = AlertRequest::new("Saved", "Your changes were saved.");
/// assert_eq!(alert.button(), "OK");
///
/// let alert = AlertRequest::new("Offline", "Check your connection.").with_button("Retry");
/// assert_eq!(alert.button(), "Retry");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    id: InstanceId,
    title: String,
    message: String,
    button: String,
}

impl AlertRequest {
    /// Create an alert with the default `"OK"` button.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: InstanceId::next(),
            title: title.into(),
            message: message.into(),
            button: DEFAULT_ALERT_BUTTON.to_string(),
        }
    }

    /// Set the confirmation button label.
    pub fn with_button(mut self, button: impl Into<String>) -> Self {
        self.button = button.into();
        self
    }

    /// Id distinguishing this request from any other, even one with the same text.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Dialog title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Dialog body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Confirmation button label.
    pub fn button(&self) -> &str {
        &self.button
    }
}
