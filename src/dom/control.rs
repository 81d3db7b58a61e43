use tracing::debug;

use crate::dom::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Idle,
    InFlight,
}

/// The button that triggers a submission.
///
/// The button is disabled and shows the busy label iff it is `InFlight`.
#[derive(Debug, Clone)]
pub struct SubmitButton {
    element: Element,
    busy_label: String,
}

impl SubmitButton {
    pub fn new(element: Element, busy_label: &str) -> Self {
        Self {
            element,
            busy_label: busy_label.to_string(),
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn label(&self) -> String {
        self.element.text()
    }

    pub fn state(&self) -> ControlState {
        if self.element.is_disabled() {
            ControlState::InFlight
        } else {
            ControlState::Idle
        }
    }

    /// Disable the button and show the busy label.
    ///
    /// The returned guard puts back the label captured here and re-enables
    /// the button when it is dropped, including during a panic unwind.
    pub fn begin_in_flight(&self) -> InFlight {
        let idle_label = self.element.text();
        self.element.set_text(&self.busy_label);
        self.element.set_disabled(true);
        debug!(button = %self.element.id(), "control in flight");
        InFlight {
            element: self.element.clone(),
            idle_label,
        }
    }
}

/// Guard for the `InFlight` state of a `SubmitButton`.
#[must_use = "dropping the guard immediately restores the button"]
pub struct InFlight {
    element: Element,
    idle_label: String,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.element.set_text(&self.idle_label);
        self.element.set_disabled(false);
        debug!(button = %self.element.id(), "control idle");
    }
}

/// A user-initiated form submission.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the native submission (navigation to the form action).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::element::ElementSpec;

    #[test]
    fn guard_restores_label_and_enables() {
        let button = SubmitButton::new(
            Element::new(ElementSpec::button("login-button", "Login")),
            "Logging in...",
        );

        {
            let _guard = button.begin_in_flight();
            assert_eq!(button.state(), ControlState::InFlight);
            assert_eq!(button.label(), "Logging in...");
        }

        assert_eq!(button.state(), ControlState::Idle);
        assert_eq!(button.label(), "Login");
    }

    #[test]
    fn guard_restores_on_panic() {
        let button = SubmitButton::new(
            Element::new(ElementSpec::button("check-button", "Check URL")),
            "Checking...",
        );

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = button.begin_in_flight();
            panic!("render blew up");
        }));

        assert!(result.is_err());
        assert_eq!(button.state(), ControlState::Idle);
        assert_eq!(button.label(), "Check URL");
    }
}
