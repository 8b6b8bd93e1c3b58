//! In-memory element tree.
//!
//! Elements are stored in insertion order, which is also document order for
//! query results. Handles ([`ElementId`]) are stable for the life of the tree;
//! elements are never removed.

mod selector;

pub use selector::{Selector, SelectorError};

use std::collections::{BTreeMap, BTreeSet};

/// Opaque handle to an element in a [`Dom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A form element or container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub attrs: BTreeMap<String, String>,
    pub value: String,
    parent: Option<ElementId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// `#id` when the element has an id, `tag[index]` otherwise.
    pub fn label(&self, id: ElementId) -> String {
        match &self.id {
            Some(el_id) => format!("#{el_id}"),
            None => format!("{}[{}]", self.tag, id.0),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dom {
    elements: Vec<Element>,
}

impl Dom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `element` under `parent` (or at the top level) and returns its handle.
    ///
    /// A `parent` handle from another tree is treated as top level.
    pub fn append(&mut self, parent: Option<ElementId>, mut element: Element) -> ElementId {
        element.parent = parent.filter(|p| p.0 < self.elements.len());
        let id = ElementId(self.elements.len());
        self.elements.push(element);
        id
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// All elements with their handles, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, el)| (ElementId(i), el))
    }

    pub fn find_by_id(&self, id: &str) -> Option<ElementId> {
        self.iter()
            .find(|(_, el)| el.id.as_deref() == Some(id))
            .map(|(handle, _)| handle)
    }

    /// Every element matching `selector`, in document order.
    pub fn query_all(&self, selector: &Selector) -> Vec<ElementId> {
        self.iter()
            .filter(|(_, el)| selector.matches(el))
            .map(|(id, _)| id)
            .collect()
    }

    /// Descendants of `root` (excluding `root`) matching `selector`.
    pub fn query_within(&self, root: ElementId, selector: &Selector) -> Vec<ElementId> {
        self.iter()
            .filter(|(id, el)| *id != root && selector.matches(el) && self.is_descendant(*id, root))
            .map(|(id, _)| id)
            .collect()
    }

    /// Nearest of `id` and its ancestors that matches `selector`.
    pub fn closest(&self, id: ElementId, selector: &Selector) -> Option<ElementId> {
        let mut current = Some(id);
        while let Some(handle) = current {
            let el = self.get(handle)?;
            if selector.matches(el) {
                return Some(handle);
            }
            current = el.parent;
        }
        None
    }

    pub fn is_descendant(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut current = self.get(id).and_then(|el| el.parent);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.get(handle).and_then(|el| el.parent);
        }
        false
    }

    /// Value of the element, empty for an unknown handle.
    pub fn value(&self, id: ElementId) -> &str {
        self.get(id).map(|el| el.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        if let Some(el) = self.get_mut(id) {
            el.value = value.into();
        }
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id)?.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.classes.contains(class))
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.classes.remove(class);
        }
    }
}
