//! Document tree model and the render surface seam.
//!
//! The engine never touches a real display. It reads and writes through
//! [`RenderSurface`]; [`Document`] is the in-memory tree the desktop shell
//! renders from and the tests inspect.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a renderable element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// How a scroll request should animate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Which edge of the target aligns with the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
}

/// Options for [`RenderSurface::scroll_into_view`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

/// A pending scroll the host has not executed yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: ElementId,
    pub options: ScrollOptions,
}

/// Read/write access to the rendered page.
///
/// Writes addressed to an unknown element are dropped; the page may be
/// missing optional markup and that is never an error.
pub trait RenderSurface {
    fn contains(&self, id: &ElementId) -> bool;

    fn attribute(&self, id: &ElementId, name: &str) -> Option<&str>;
    fn set_attribute(&mut self, id: &ElementId, name: &str, value: &str);

    fn style(&self, id: &ElementId, property: &str) -> Option<&str>;
    fn set_style(&mut self, id: &ElementId, property: &str, value: &str);

    fn text(&self, id: &ElementId) -> Option<&str>;
    fn set_text(&mut self, id: &ElementId, text: &str);

    /// Current value of a form control.
    fn value(&self, id: &ElementId) -> Option<&str>;
    fn set_value(&mut self, id: &ElementId, value: &str);

    fn has_class(&self, id: &ElementId, class: &str) -> bool;
    fn add_class(&mut self, id: &ElementId, class: &str);
    fn remove_class(&mut self, id: &ElementId, class: &str);
    /// Replaces the whole class list with a space separated string.
    fn set_class_name(&mut self, id: &ElementId, class_name: &str);

    fn scroll_into_view(&mut self, id: &ElementId, options: ScrollOptions);
}

/// A single renderable element.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Element {
    pub id: ElementId,
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub text: String,
    pub value: String,
}

impl Element {
    pub fn new(id: impl Into<ElementId>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        for c in class.split_whitespace() {
            if !self.classes.iter().any(|existing| existing == c) {
                self.classes.push(c.to_string());
            }
        }
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// In-memory document, elements kept in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    root: ElementId,
    elements: Vec<Element>,
    index: HashMap<ElementId, usize>,
    scroll_requests: Vec<ScrollRequest>,
}

impl Document {
    /// Creates a document whose root element is `root`.
    pub fn new(root: Element) -> Self {
        let mut doc = Self {
            root: root.id.clone(),
            ..Default::default()
        };
        doc.push(root);
        doc
    }

    pub fn root(&self) -> &ElementId {
        &self.root
    }

    /// Appends an element; an element with the same id is replaced in place.
    pub fn push(&mut self, element: Element) -> &mut Self {
        match self.index.get(&element.id) {
            Some(&pos) => {
                tracing::debug!(id = %element.id, "Replacing element with duplicate id");
                self.elements[pos] = element;
            }
            None => {
                self.index.insert(element.id.clone(), self.elements.len());
                self.elements.push(element);
            }
        }
        self
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.index.get(id).map(|&pos| &self.elements[pos])
    }

    fn element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        match self.index.get(id) {
            Some(&pos) => Some(&mut self.elements[pos]),
            None => {
                tracing::trace!(%id, "Write to unknown element ignored");
                None
            }
        }
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Ids of every element carrying `class`, in document order.
    pub fn ids_with_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.has_class(class))
            .map(|e| e.id.clone())
            .collect()
    }

    /// Ids of every element with tag `tag`, in document order.
    pub fn ids_with_tag(&self, tag: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.tag == tag)
            .map(|e| e.id.clone())
            .collect()
    }

    /// Inline style rendered as a CSS declaration list.
    pub fn style_string(&self, id: &ElementId) -> String {
        self.element(id)
            .map(|e| {
                e.style
                    .iter()
                    .map(|(k, v)| format!("{k}: {v};"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    /// Class list rendered as a space separated string.
    pub fn class_string(&self, id: &ElementId) -> String {
        self.element(id)
            .map(|e| e.classes.join(" "))
            .unwrap_or_default()
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    /// Drains the scroll requests for the host to execute.
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_requests)
    }
}

impl RenderSurface for Document {
    fn contains(&self, id: &ElementId) -> bool {
        self.index.contains_key(id)
    }

    fn attribute(&self, id: &ElementId, name: &str) -> Option<&str> {
        self.element(id)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    fn set_attribute(&mut self, id: &ElementId, name: &str, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn style(&self, id: &ElementId, property: &str) -> Option<&str> {
        self.element(id)
            .and_then(|e| e.style.get(property))
            .map(String::as_str)
    }

    fn set_style(&mut self, id: &ElementId, property: &str, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.style.insert(property.to_string(), value.to_string());
        }
    }

    fn text(&self, id: &ElementId) -> Option<&str> {
        self.element(id).map(|e| e.text.as_str())
    }

    fn set_text(&mut self, id: &ElementId, text: &str) {
        if let Some(e) = self.element_mut(id) {
            e.text = text.to_string();
        }
    }

    fn value(&self, id: &ElementId) -> Option<&str> {
        self.element(id).map(|e| e.value.as_str())
    }

    fn set_value(&mut self, id: &ElementId, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.value = value.to_string();
        }
    }

    fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    fn add_class(&mut self, id: &ElementId, class: &str) {
        if let Some(e) = self.element_mut(id) {
            if !e.has_class(class) {
                e.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, id: &ElementId, class: &str) {
        if let Some(e) = self.element_mut(id) {
            e.classes.retain(|c| c != class);
        }
    }

    fn set_class_name(&mut self, id: &ElementId, class_name: &str) {
        if let Some(e) = self.element_mut(id) {
            e.classes = class_name.split_whitespace().map(str::to_string).collect();
        }
    }

    fn scroll_into_view(&mut self, id: &ElementId, options: ScrollOptions) {
        if self.contains(id) {
            self.scroll_requests.push(ScrollRequest {
                target: id.clone(),
                options,
            });
        }
    }
}
