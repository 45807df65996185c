//! Page navigation.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos_router::NavigateOptions;

pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Full page load through `window.location.href`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "hydrate")]
impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

/// Client-side navigation through a router `navigate` function, e.g. the one
/// returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn redirect(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Records redirect targets instead of navigating.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    redirects: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_owned());
    }
}
