//! # dashboard-helpers
//!
//! Presentation helpers shared by the review-meeting dashboard pages: date
//! formatting, status labels, toast notifications, button busy states, and
//! session-backed auth checks.
//!
//! Browser facilities (document, `sessionStorage`, navigation, timers) are
//! reached through the traits in [`host`], so every helper runs unchanged
//! against the in-memory hosts used by tests and server rendering.

pub mod config;
pub mod consts;
pub mod error;
pub mod helpers;
pub mod host;
pub mod util;

pub use config::HelpersConfig;
pub use error::SessionError;
pub use helpers::UiHelpers;

/// Install the console logger and panic hook.
///
/// Browser builds only; elsewhere this is a no-op so callers can invoke it
/// unconditionally from their entry point.
pub fn init_logging() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
