use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dom::element::{Element, ElementSpec};
use crate::submit::error::BindError;

/// Serializable page layout: the elements a form page is made of.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentFixture {
    pub elements: Vec<ElementSpec>,
}

impl DocumentFixture {
    /// Set the value of an input in the fixture, if present.
    pub fn with_value(mut self, id: &str, value: &str) -> Self {
        if let Some(el) = self.elements.iter_mut().find(|e| e.id == id) {
            el.value = value.to_string();
        }
        self
    }
}

/// Registry of element handles by id.
///
/// A `Document` is only consulted when a controller is bound; after that the
/// controller and renderer hold their own handles.
#[derive(Debug, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: &DocumentFixture) -> Self {
        let mut doc = Self::new();
        for spec in &fixture.elements {
            doc.insert(Element::new(spec.clone()));
        }
        doc
    }

    /// Insert (or replace) an element, returning its handle.
    pub fn insert(&mut self, element: Element) -> Element {
        self.elements.insert(element.id(), element.clone());
        element
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.elements.get(id).cloned()
    }

    /// Resolve an element that must exist for a binding to succeed.
    pub fn require(&self, id: &str) -> Result<Element, BindError> {
        self.element(id).ok_or_else(|| BindError::MissingElement {
            id: id.to_string(),
        })
    }
}
