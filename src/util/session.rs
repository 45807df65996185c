//! Readers for the login state in session storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the auth token and the user profile returned by
//! `/api/login`; these helpers only read them. An unset key is the normal
//! "not logged in" case and comes back as `None`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::SessionKeys;
use crate::consts::HR_ROLE;
use crate::error::SessionError;
use crate::host::SessionStore;

/// User profile as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub personal_nr: i64,
    pub rolle: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserData {
    /// HR staff see every meeting and the statistics page.
    #[must_use]
    pub fn is_hr(&self) -> bool {
        self.rolle == HR_ROLE
    }
}

/// The stored auth token, if any.
pub fn get_token<S>(store: &S, keys: &SessionKeys) -> Option<String>
where
    S: SessionStore + ?Sized,
{
    store.get_item(&keys.token_key)
}

/// The stored user profile, parsed as `T`.
///
/// An unset or empty entry is `Ok(None)`.
///
/// # Errors
///
/// Returns [`SessionError::CorruptUserData`] if the stored text does not
/// parse as `T`. Corrupt data is not treated as a logout.
pub fn get_user_data<T, S>(store: &S, keys: &SessionKeys) -> Result<Option<T>, SessionError>
where
    T: DeserializeOwned,
    S: SessionStore + ?Sized,
{
    let Some(raw) = store.get_item(&keys.user_data_key).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(user) => Ok(Some(user)),
        Err(e) => {
            leptos::logging::warn!("session key {} holds unreadable user data: {e}", keys.user_data_key);
            Err(SessionError::CorruptUserData(e))
        }
    }
}
