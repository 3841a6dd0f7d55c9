//! # tab-navigator
//!
//! Navigation state for tabbed, stack-based user interfaces.
//!
//! A [`TabNavigator`] is the single source of truth a rendering layer draws
//! from: which tab is active, each tab's stack of screens, and the transient
//! overlays on top (sheet, full-screen cover, popup, alert). The rendering
//! layer reads that state, subscribes to change events, and translates user
//! input (tab taps, back gestures, dismiss gestures) into navigator calls.
//! Rendering, animation and gesture handling stay outside this crate.
//!
//! ## Quick start
//!
//! ```
//! use tab_navigator::{Tab, TabNavigator};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum Screen {
//!     Order(u32),
//!     Receipt(u32),
//! }
//!
//! let mut nav: TabNavigator<Screen, &str> = TabNavigator::new();
//! nav.configure([
//!     Tab::new("orders").title("Orders").icon("list"),
//!     Tab::new("account").title("Account").icon("person"),
//! ]);
//!
//! nav.push(Screen::Order(7));
//! nav.push(Screen::Receipt(7));
//! assert_eq!(nav.depth(), 2);
//!
//! nav.pop();
//! assert_eq!(nav.top(), Some(&Screen::Order(7)));
//!
//! let sheet = nav.present_sheet("share");
//! assert_eq!(nav.sheet().unwrap().id(), sheet);
//! ```
//!
//! ## Features
//!
//! | Feature        | Default | Description                                   |
//! |----------------|---------|-----------------------------------------------|
//! | `log`          | yes     | Log through the `log` crate                   |
//! | `tracing`      | no      | Log through the `tracing` crate               |
//! | `gpui`         | no      | GPUI entity binding ([`context`])             |
//! | `test-support` | no      | Enables GPUI's test context for the binding   |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod alert;
pub mod config;
#[cfg(feature = "gpui")]
pub mod context;
pub mod error;
pub mod event;
pub mod link;
pub mod listener;
pub mod logging;
pub mod navigator;
pub mod presentation;
pub mod screen;
pub mod stack;
pub mod tab;

pub use alert::{AlertRequest, DEFAULT_ALERT_BUTTON};
pub use config::{NavigatorConfig, ReselectBehavior, TabSwitchPolicy};
#[cfg(feature = "gpui")]
pub use context::{NavigationModel, NavigatorHandle};
pub use error::{LinkOutcome, NavigationError};
pub use event::{NavigationDirection, NavigationEvent};
pub use link::{DeepLink, QueryParams};
pub use listener::{listener_fn, FnListener, NavigationListener, SubscriptionId};
pub use navigator::{LinkHandler, TabNavigator};
pub use presentation::{InstanceId, Presentation, PresentationKind, PresentationSlot};
pub use screen::Screen;
pub use stack::NavigationStack;
pub use tab::{Tab, TabId};
