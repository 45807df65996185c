//! Helpers called by the dashboard page scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `date` and `status` are pure text transforms. `toast` and `loading` give
//! user feedback through a [`crate::host::Document`]. `session` and `auth`
//! read the login state the login page left in session storage.

pub mod auth;
pub mod date;
pub mod loading;
pub mod session;
pub mod status;
pub mod toast;
