use std::rc::Rc;

use serde_json::Value;

use crate::dom::document::DocumentFixture;
use crate::dom::element::ElementSpec;
use crate::dom::host::{Navigator, Notifier};
use crate::submit::controller::{FormConfig, OutcomeRenderer};
use crate::submit::error::RenderError;
use crate::submit::outcome::SubmissionOutcome;
use crate::submit::request::{FieldSpec, PreflightCheck};

pub const MISMATCH_MESSAGE: &str = "Passwords do not match!";
pub const NETWORK_MESSAGE: &str = "Could not connect to the server.";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Account created";
pub const DEFAULT_LOGIN_PAGE: &str = "/login.html";

pub fn default_config() -> FormConfig {
    FormConfig {
        name: "signup".into(),
        endpoint: "/signup/".into(),
        fields: vec![
            FieldSpec::new("fullname", "fullname"),
            FieldSpec::new("email", "email"),
            FieldSpec::new("password", "password"),
            FieldSpec::local("confirm_password", "confirm-password"),
        ],
        preflight: Some(PreflightCheck::FieldsEqual {
            left: "password".into(),
            right: "confirm_password".into(),
            message: MISMATCH_MESSAGE.into(),
        }),
        button: "signup-button".into(),
        busy_label: "Signing up...".into(),
        fallback_detail: "An error occurred.".into(),
    }
}

pub fn page_fixture() -> DocumentFixture {
    DocumentFixture {
        elements: vec![
            ElementSpec::input("fullname"),
            ElementSpec::input("email"),
            ElementSpec::input("password"),
            ElementSpec::input("confirm-password"),
            ElementSpec::button("signup-button", "Sign Up"),
        ],
    }
}

/// Shows the server's `message`, then sends the user to the login page.
pub struct SignupRenderer {
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
    login_page: String,
}

impl SignupRenderer {
    pub fn new(notifier: Rc<dyn Notifier>, navigator: Rc<dyn Navigator>, login_page: &str) -> Self {
        Self {
            notifier,
            navigator,
            login_page: login_page.to_string(),
        }
    }
}

impl OutcomeRenderer for SignupRenderer {
    fn render(&self, outcome: &SubmissionOutcome) -> Result<(), RenderError> {
        match outcome {
            SubmissionOutcome::Success { payload, .. } => {
                let message = payload
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_SUCCESS_MESSAGE);
                self.notifier.notify(message);
                self.navigator.navigate(&self.login_page);
            }
            SubmissionOutcome::Rejected(rejection) => self.notifier.notify(&rejection.detail),
            SubmissionOutcome::NetworkFailure(_) => self.notifier.notify(NETWORK_MESSAGE),
        }
        Ok(())
    }
}
