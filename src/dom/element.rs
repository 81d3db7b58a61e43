use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Plain-data description of one element, used to build a `Document`
/// from a fixture file or a form's built-in layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ElementSpec {
    pub id: String,

    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub classes: Vec<String>,
}

impl ElementSpec {
    pub fn input(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn button(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            text: label.to_string(),
            ..Default::default()
        }
    }

    pub fn with_classes(mut self, classes: &[&str]) -> Self {
        self.classes = classes.iter().map(|c| c.to_string()).collect();
        self
    }
}

/// Shared handle to a single element.
///
/// Cloning the handle does not copy the element: every clone observes and
/// mutates the same state. Handles are resolved once when a controller is
/// bound and injected where needed.
#[derive(Debug, Clone)]
pub struct Element {
    inner: Rc<RefCell<ElementSpec>>,
}

impl Element {
    pub fn new(spec: ElementSpec) -> Self {
        Self {
            inner: Rc::new(RefCell::new(spec)),
        }
    }

    pub fn id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    pub fn value(&self) -> String {
        self.inner.borrow().value.clone()
    }

    pub fn set_value(&self, value: &str) {
        self.inner.borrow_mut().value = value.to_string();
    }

    /// Text content (button label, status text, ...).
    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    pub fn set_text(&self, text: &str) {
        self.inner.borrow_mut().text = text.to_string();
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.borrow().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.inner.borrow_mut().disabled = disabled;
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    pub fn add_class(&self, class: &str) {
        let mut state = self.inner.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&self, class: &str) {
        self.inner.borrow_mut().classes.retain(|c| c != class);
    }

    /// Replace the whole class list with a single class (or none when empty).
    pub fn set_class_name(&self, class: &str) {
        let mut state = self.inner.borrow_mut();
        state.classes.clear();
        if !class.is_empty() {
            state.classes.push(class.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let a = Element::new(ElementSpec::input("email"));
        let b = a.clone();
        b.set_value("user@example.com");
        assert_eq!(a.value(), "user@example.com");
    }

    #[test]
    fn add_class_is_deduplicated() {
        let el = Element::new(ElementSpec::input("card"));
        el.add_class("hidden");
        el.add_class("hidden");
        assert_eq!(el.classes(), vec!["hidden".to_string()]);
        el.remove_class("hidden");
        assert!(el.classes().is_empty());
    }

    #[test]
    fn set_class_name_replaces_everything() {
        let el = Element::new(ElementSpec::input("card").with_classes(&["safe", "big"]));
        el.set_class_name("dangerous");
        assert_eq!(el.classes(), vec!["dangerous".to_string()]);
        el.set_class_name("");
        assert!(el.classes().is_empty());
    }
}
