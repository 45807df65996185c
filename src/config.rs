//! Helper configuration.
//!
//! DESIGN
//! ======
//! Every field defaults to the value in [`crate::consts`], so an empty JSON
//! object (or no config at all) reproduces the stock dashboard behavior.
//! Deployments that rename storage keys or relocate the landing page override
//! only what differs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ALERT_DISMISS_MS, ALERT_MIN_WIDTH, ALERT_RIGHT, ALERT_TOP, ALERT_Z_INDEX, LANDING_PATH, LOADING_LABEL, TOKEN_KEY,
    USER_DATA_KEY,
};

/// Storage keys for the two session values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionKeys {
    pub token_key: String,
    pub user_data_key: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self { token_key: TOKEN_KEY.to_owned(), user_data_key: USER_DATA_KEY.to_owned() }
    }
}

/// Placement and lifetime of toast notifications.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertStyle {
    pub dismiss_ms: u32,
    pub top: String,
    pub right: String,
    pub z_index: String,
    pub min_width: String,
}

impl Default for AlertStyle {
    fn default() -> Self {
        Self {
            dismiss_ms: ALERT_DISMISS_MS,
            top: ALERT_TOP.to_owned(),
            right: ALERT_RIGHT.to_owned(),
            z_index: ALERT_Z_INDEX.to_owned(),
            min_width: ALERT_MIN_WIDTH.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
    pub session: SessionKeys,
    pub landing_path: String,
    pub loading_label: String,
    pub alert: AlertStyle,
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            session: SessionKeys::default(),
            landing_path: LANDING_PATH.to_owned(),
            loading_label: LOADING_LABEL.to_owned(),
            alert: AlertStyle::default(),
        }
    }
}

impl HelpersConfig {
    /// Parse a config document; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `raw` is not a JSON object of the expected
    /// shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
