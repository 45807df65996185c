//! Transient toast notifications.
//!
//! A toast is a fixed overlay in the top-right corner that removes itself
//! after [`AlertStyle::dismiss_ms`]. Toasts are independent: concurrent calls
//! each add their own overlay, and none can be dismissed early.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::config::AlertStyle;
use crate::consts::{ERROR_CLASS, SUCCESS_CLASS};
use crate::host::{Document, Scheduler};

/// Toast flavor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
}

impl AlertKind {
    /// `"error"` selects [`AlertKind::Error`]; any other string is a success.
    #[must_use]
    pub fn from_kind(kind: &str) -> Self {
        if kind == "error" { Self::Error } else { Self::Success }
    }

    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Error => ERROR_CLASS,
            Self::Success => SUCCESS_CLASS,
        }
    }
}

/// Show `message` as a toast and schedule its removal.
pub fn show_alert<D, S>(document: &D, scheduler: &S, style: &AlertStyle, message: &str, kind: AlertKind)
where
    D: Document + Clone + 'static,
    D::Element: 'static,
    S: Scheduler + ?Sized,
{
    let Some(alert) = document.create_element("div") else {
        leptos::logging::warn!("toast not shown, element creation failed: {message}");
        return;
    };
    document.set_class_name(&alert, kind.class_name());
    document.set_text_content(&alert, message);
    document.set_style(&alert, "position", "fixed");
    document.set_style(&alert, "top", &style.top);
    document.set_style(&alert, "right", &style.right);
    document.set_style(&alert, "z-index", &style.z_index);
    document.set_style(&alert, "min-width", &style.min_width);
    document.append_to_body(&alert);

    let document = document.clone();
    scheduler.schedule(style.dismiss_ms, Box::new(move || document.remove(&alert)));
}
