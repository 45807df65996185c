//! Browser capabilities the helpers depend on.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each capability is a small trait with two implementations: a `Browser*`
//! type backed by `web-sys` (hydrate feature) and an in-memory type used by
//! tests and server rendering. Helpers take the trait, never `web_sys`
//! directly.

pub mod document;
pub mod navigation;
pub mod storage;
pub mod timer;

pub use document::{Document, MemoryDocument, MemoryElement, MemoryNode};
pub use navigation::{Navigator, RecordingNavigator, RouterNavigator};
pub use storage::{MemorySessionStore, SessionStore};
pub use timer::{ManualScheduler, Scheduler};

#[cfg(feature = "hydrate")]
pub use document::BrowserDocument;
#[cfg(feature = "hydrate")]
pub use navigation::BrowserNavigator;
#[cfg(feature = "hydrate")]
pub use storage::BrowserSessionStore;
#[cfg(feature = "hydrate")]
pub use timer::BrowserScheduler;
