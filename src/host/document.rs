//! DOM access for the feedback helpers.
//!
//! DESIGN
//! ======
//! The trait exposes only the handful of element operations the toast and
//! busy-state helpers perform. Elements are opaque handles owned by the
//! document implementation; `MemoryDocument` hands out indices into its own
//! node table so tests can inspect exactly what a helper did.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub trait Document {
    type Element: Clone;

    fn create_element(&self, tag: &str) -> Option<Self::Element>;
    /// Look up an element attached to the document.
    fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn append_to_body(&self, element: &Self::Element);
    /// Detach `element`. Already-detached elements are left alone.
    fn remove(&self, element: &Self::Element);

    fn set_class_name(&self, element: &Self::Element, class_name: &str);
    fn text_content(&self, element: &Self::Element) -> String;
    fn set_text_content(&self, element: &Self::Element, text: &str);
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);
    fn set_disabled(&self, element: &Self::Element, disabled: bool);
    fn get_attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);
}

/// `window.document`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

#[cfg(feature = "hydrate")]
impl BrowserDocument {
    pub fn new() -> Option<Self> {
        let document = web_sys::window().and_then(|w| w.document())?;
        Some(Self { document })
    }
}

#[cfg(feature = "hydrate")]
impl Document for BrowserDocument {
    type Element = web_sys::HtmlElement;

    fn create_element(&self, tag: &str) -> Option<Self::Element> {
        use wasm_bindgen::JsCast;

        self.document.create_element(tag).ok()?.dyn_into::<web_sys::HtmlElement>().ok()
    }

    fn get_element_by_id(&self, id: &str) -> Option<Self::Element> {
        use wasm_bindgen::JsCast;

        self.document.get_element_by_id(id)?.dyn_into::<web_sys::HtmlElement>().ok()
    }

    fn append_to_body(&self, element: &Self::Element) {
        if let Some(body) = self.document.body() {
            let _ = body.append_child(element);
        }
    }

    fn remove(&self, element: &Self::Element) {
        element.remove();
    }

    fn set_class_name(&self, element: &Self::Element, class_name: &str) {
        element.set_class_name(class_name);
    }

    fn text_content(&self, element: &Self::Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, element: &Self::Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_style(&self, element: &Self::Element, property: &str, value: &str) {
        let _ = element.style().set_property(property, value);
    }

    fn set_disabled(&self, element: &Self::Element, disabled: bool) {
        // `disabled` lives on button/input subclasses; set the property generically.
        let target: &wasm_bindgen::JsValue = element.as_ref();
        let _ = js_sys::Reflect::set(
            target,
            &wasm_bindgen::JsValue::from_str("disabled"),
            &wasm_bindgen::JsValue::from_bool(disabled),
        );
    }

    fn get_attribute(&self, element: &Self::Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) {
        let _ = element.set_attribute(name, value);
    }
}

/// Snapshot of one element in a [`MemoryDocument`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryNode {
    pub tag: String,
    pub class_name: String,
    pub text: String,
    pub disabled: bool,
    pub style: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
}

/// Handle to an element of a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemoryElement(usize);

#[derive(Debug, Default)]
struct Tree {
    nodes: Vec<MemoryNode>,
    body: Vec<usize>,
}

/// In-memory document with a flat body. Clones share the same tree.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element with `id` and `text` and attach it to the body.
    pub fn insert_element(&self, tag: &str, id: &str, text: &str) -> MemoryElement {
        let mut attributes = BTreeMap::new();
        attributes.insert("id".to_owned(), id.to_owned());
        let mut tree = self.tree.borrow_mut();
        tree.nodes.push(MemoryNode { tag: tag.to_owned(), text: text.to_owned(), attributes, ..MemoryNode::default() });
        let index = tree.nodes.len() - 1;
        tree.body.push(index);
        MemoryElement(index)
    }

    /// Attached elements in insertion order.
    pub fn body_children(&self) -> Vec<MemoryElement> {
        self.tree.borrow().body.iter().copied().map(MemoryElement).collect()
    }

    pub fn node(&self, element: MemoryElement) -> Option<MemoryNode> {
        self.tree.borrow().nodes.get(element.0).cloned()
    }

    pub fn is_attached(&self, element: MemoryElement) -> bool {
        self.tree.borrow().body.contains(&element.0)
    }

    fn with_node<R: Default>(&self, element: MemoryElement, f: impl FnOnce(&mut MemoryNode) -> R) -> R {
        self.tree.borrow_mut().nodes.get_mut(element.0).map(f).unwrap_or_default()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn create_element(&self, tag: &str) -> Option<Self::Element> {
        let mut tree = self.tree.borrow_mut();
        tree.nodes.push(MemoryNode { tag: tag.to_owned(), ..MemoryNode::default() });
        Some(MemoryElement(tree.nodes.len() - 1))
    }

    fn get_element_by_id(&self, id: &str) -> Option<Self::Element> {
        let tree = self.tree.borrow();
        tree.body
            .iter()
            .copied()
            .find(|&index| tree.nodes[index].attributes.get("id").map(String::as_str) == Some(id))
            .map(MemoryElement)
    }

    fn append_to_body(&self, element: &Self::Element) {
        let mut tree = self.tree.borrow_mut();
        if element.0 >= tree.nodes.len() {
            return;
        }
        // Appending an attached node moves it to the end, as in the DOM.
        tree.body.retain(|&index| index != element.0);
        tree.body.push(element.0);
    }

    fn remove(&self, element: &Self::Element) {
        self.tree.borrow_mut().body.retain(|&index| index != element.0);
    }

    fn set_class_name(&self, element: &Self::Element, class_name: &str) {
        self.with_node(*element, |node| node.class_name = class_name.to_owned());
    }

    fn text_content(&self, element: &Self::Element) -> String {
        self.with_node(*element, |node| node.text.clone())
    }

    fn set_text_content(&self, element: &Self::Element, text: &str) {
        self.with_node(*element, |node| node.text = text.to_owned());
    }

    fn set_style(&self, element: &Self::Element, property: &str, value: &str) {
        self.with_node(*element, |node| {
            node.style.insert(property.to_owned(), value.to_owned());
        });
    }

    fn set_disabled(&self, element: &Self::Element, disabled: bool) {
        self.with_node(*element, |node| node.disabled = disabled);
    }

    fn get_attribute(&self, element: &Self::Element, name: &str) -> Option<String> {
        self.with_node(*element, |node| node.attributes.get(name).cloned())
    }

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) {
        self.with_node(*element, |node| {
            node.attributes.insert(name.to_owned(), value.to_owned());
        });
    }
}
