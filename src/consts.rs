//! Fixed names and values the dashboard pages agree on.

/// `sessionStorage` key holding the opaque auth token.
pub const TOKEN_KEY: &str = "app_token";
/// `sessionStorage` key holding the JSON user profile.
pub const USER_DATA_KEY: &str = "user_data";

/// Page unauthenticated visitors are sent to.
pub const LANDING_PATH: &str = "index.html";

/// Button text shown while a request is in flight.
pub const LOADING_LABEL: &str = "Laden...";
/// Attribute caching a button's text while it shows the loading label.
pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";

pub const ERROR_CLASS: &str = "error-message";
pub const SUCCESS_CLASS: &str = "success-message";

/// Delay before a toast removes itself.
pub const ALERT_DISMISS_MS: u32 = 5000;
pub const ALERT_TOP: &str = "20px";
pub const ALERT_RIGHT: &str = "20px";
pub const ALERT_Z_INDEX: &str = "9999";
pub const ALERT_MIN_WIDTH: &str = "300px";

/// Role name of HR staff in the user profile.
pub const HR_ROLE: &str = "HR";
