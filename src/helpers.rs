//! Page-facing bundle of hosts and config.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page scripts build one `UiHelpers` on load (usually
//! [`UiHelpers::from_window`]) and call the helpers as methods instead of
//! threading hosts and config through every call.

#[cfg(test)]
#[path = "helpers_test.rs"]
mod helpers_test;

use serde::de::DeserializeOwned;

use crate::config::HelpersConfig;
use crate::error::SessionError;
use crate::host::{Document, Navigator, Scheduler, SessionStore};
use crate::util::auth;
use crate::util::loading;
use crate::util::session;
use crate::util::toast::{self, AlertKind};

pub struct UiHelpers<S, D, N, T> {
    store: S,
    document: D,
    navigator: N,
    scheduler: T,
    config: HelpersConfig,
}

impl<S, D, N, T> UiHelpers<S, D, N, T> {
    pub fn new(store: S, document: D, navigator: N, scheduler: T) -> Self {
        Self { store, document, navigator, scheduler, config: HelpersConfig::default() }
    }

    #[must_use]
    pub fn with_config(mut self, config: HelpersConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &HelpersConfig {
        &self.config
    }
}

impl<S, D, N, T> UiHelpers<S, D, N, T>
where
    D: Document + Clone + 'static,
    D::Element: 'static,
    T: Scheduler,
{
    pub fn show_alert(&self, message: &str, kind: AlertKind) {
        toast::show_alert(&self.document, &self.scheduler, &self.config.alert, message, kind);
    }

    pub fn show_error(&self, message: &str) {
        self.show_alert(message, AlertKind::Error);
    }

    pub fn show_success(&self, message: &str) {
        self.show_alert(message, AlertKind::Success);
    }
}

impl<S, D, N, T> UiHelpers<S, D, N, T>
where
    D: Document,
{
    pub fn set_loading(&self, element_id: &str, is_loading: bool) {
        loading::set_loading(&self.document, element_id, is_loading, &self.config.loading_label);
    }
}

impl<S, D, N, T> UiHelpers<S, D, N, T>
where
    S: SessionStore,
{
    pub fn get_token(&self) -> Option<String> {
        session::get_token(&self.store, &self.config.session)
    }

    /// # Errors
    ///
    /// See [`session::get_user_data`].
    pub fn get_user_data<U: DeserializeOwned>(&self) -> Result<Option<U>, SessionError> {
        session::get_user_data(&self.store, &self.config.session)
    }

    /// # Errors
    ///
    /// See [`auth::is_authenticated`].
    pub fn is_authenticated(&self) -> Result<bool, SessionError> {
        auth::is_authenticated(&self.store, &self.config.session)
    }
}

impl<S, D, N, T> UiHelpers<S, D, N, T>
where
    S: SessionStore,
    N: Navigator,
{
    /// # Errors
    ///
    /// See [`auth::check_auth`].
    pub fn check_auth(&self) -> Result<bool, SessionError> {
        auth::check_auth(&self.store, &self.navigator, &self.config.session, &self.config.landing_path)
    }
}

#[cfg(feature = "hydrate")]
pub type BrowserHelpers = UiHelpers<
    crate::host::BrowserSessionStore,
    crate::host::BrowserDocument,
    crate::host::BrowserNavigator,
    crate::host::BrowserScheduler,
>;

#[cfg(feature = "hydrate")]
impl BrowserHelpers {
    /// Helpers bound to the current window. `None` outside a browser or when
    /// session storage is unavailable.
    pub fn from_window() -> Option<Self> {
        let store = crate::host::BrowserSessionStore::new()?;
        let document = crate::host::BrowserDocument::new()?;
        Some(Self::new(store, document, crate::host::BrowserNavigator, crate::host::BrowserScheduler))
    }
}
