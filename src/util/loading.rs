//! Busy state for buttons that trigger a request.
//!
//! The button's own text is cached in a `data-` attribute while the loading
//! label is shown, so the cache survives between calls without any state on
//! the Rust side. Repeated calls with the same flag are not guarded: entering
//! twice caches the loading label itself.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use crate::consts::ORIGINAL_TEXT_ATTR;
use crate::host::Document;

/// Disable element `element_id` and show `loading_label`, or restore it.
///
/// Does nothing if no element has that id. When leaving the loading state
/// without a cached text, the current text stays.
pub fn set_loading<D>(document: &D, element_id: &str, is_loading: bool, loading_label: &str)
where
    D: Document + ?Sized,
{
    let Some(element) = document.get_element_by_id(element_id) else {
        return;
    };
    document.set_disabled(&element, is_loading);
    if is_loading {
        let current = document.text_content(&element);
        document.set_attribute(&element, ORIGINAL_TEXT_ATTR, &current);
        document.set_text_content(&element, loading_label);
    } else if let Some(original) = document
        .get_attribute(&element, ORIGINAL_TEXT_ATTR)
        .filter(|text| !text.is_empty())
    {
        document.set_text_content(&element, &original);
    }
}
