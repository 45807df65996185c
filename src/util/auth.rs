//! Auth gate for dashboard pages.
//!
//! [`is_authenticated`] only inspects session storage. [`check_auth`] adds
//! the redirect to the landing page for pages that gate on load.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use crate::config::SessionKeys;
use crate::error::SessionError;
use crate::host::{Navigator, SessionStore};
use crate::util::session::{get_token, get_user_data};

/// Whether both a token and user data are present.
///
/// Empty strings and falsy JSON (`null`, `false`, `0`, `""`) count as absent.
/// User data is not read when the token is missing.
///
/// # Errors
///
/// Propagates [`SessionError::CorruptUserData`].
pub fn is_authenticated<S>(store: &S, keys: &SessionKeys) -> Result<bool, SessionError>
where
    S: SessionStore + ?Sized,
{
    if !get_token(store, keys).is_some_and(|token| !token.is_empty()) {
        return Ok(false);
    }
    let user = get_user_data::<Value, _>(store, keys)?;
    Ok(user.as_ref().is_some_and(is_truthy))
}

/// [`is_authenticated`], redirecting to `landing_path` when it is `false`.
///
/// # Errors
///
/// Propagates [`SessionError::CorruptUserData`] without redirecting.
pub fn check_auth<S, N>(store: &S, navigator: &N, keys: &SessionKeys, landing_path: &str) -> Result<bool, SessionError>
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    if is_authenticated(store, keys)? {
        return Ok(true);
    }
    leptos::logging::warn!("no session credentials, redirecting to {landing_path}");
    navigator.redirect(landing_path);
    Ok(false)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
