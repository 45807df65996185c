//! Error types surfaced by the session helpers.
//!
//! ERROR HANDLING
//! ==============
//! Missing session values are not errors; they come back as `None` and mean
//! "not logged in". Only stored data that cannot be read is reported here,
//! and it is handed to the caller rather than treated as a logout.

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("stored user data is not valid JSON: {0}")]
    CorruptUserData(#[from] serde_json::Error),
}

impl SessionError {
    /// Stable code for page scripts that report the failure.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CorruptUserData(_) => "E_CORRUPT_USER_DATA",
        }
    }
}
