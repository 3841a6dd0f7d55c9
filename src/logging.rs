//! Logging facade.
//!
//! The navigator never talks to a logging backend directly. Every log line
//! goes through one of the macros below, which forward to the
//! [`log`](https://docs.rs/log) crate or the
//! [`tracing`](https://docs.rs/tracing) crate depending on the enabled
//! feature. Enable at most one of the two.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! All lines are emitted under the `tab_navigator` target, so hosts can
//! filter them with e.g. `RUST_LOG=tab_navigator=debug`.
//!
//! Level conventions used throughout the crate:
//!
//! - `trace_log!` — stack pushes and pops, listener dispatch.
//! - `debug_log!` — tab switches, presentations, dismissals, alerts.
//! - `info_log!` — tab configuration.
//! - `warn_log!` — requests that were ignored because the state they refer
//!   to does not exist (unconfigured navigator, unknown tab).
//! - `error_log!` — a deep-link handler reported a failure.

/// Emit a **trace**-level log line under the `tab_navigator` target.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "tab_navigator", $($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!(target: "tab_navigator", $($arg)*);
    };
}

/// Emit a **debug**-level log line under the `tab_navigator` target.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(target: "tab_navigator", $($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!(target: "tab_navigator", $($arg)*);
    };
}

/// Emit an **info**-level log line under the `tab_navigator` target.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!(target: "tab_navigator", $($arg)*);
        #[cfg(feature = "log")]
        ::log::info!(target: "tab_navigator", $($arg)*);
    };
}

/// Emit a **warn**-level log line under the `tab_navigator` target.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(target: "tab_navigator", $($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!(target: "tab_navigator", $($arg)*);
    };
}

/// Emit an **error**-level log line under the `tab_navigator` target.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!(target: "tab_navigator", $($arg)*);
        #[cfg(feature = "log")]
        ::log::error!(target: "tab_navigator", $($arg)*);
    };
}
