use std::rc::Rc;

use crate::dom::document::DocumentFixture;
use crate::dom::element::ElementSpec;
use crate::dom::host::{Navigator, Notifier};
use crate::submit::controller::{FormConfig, OutcomeRenderer};
use crate::submit::error::RenderError;
use crate::submit::outcome::SubmissionOutcome;
use crate::submit::request::FieldSpec;

pub const SUCCESS_MESSAGE: &str = "Login successful!";
pub const NETWORK_MESSAGE: &str = "Could not connect to the server. Please ensure it is running.";
pub const DEFAULT_HOME: &str = "/";

pub fn default_config() -> FormConfig {
    FormConfig {
        name: "login".into(),
        endpoint: "/token".into(),
        fields: vec![
            FieldSpec::new("email", "email"),
            FieldSpec::new("password", "password"),
        ],
        preflight: None,
        button: "login-button".into(),
        busy_label: "Logging in...".into(),
        fallback_detail: "An unknown error occurred.".into(),
    }
}

pub fn page_fixture() -> DocumentFixture {
    DocumentFixture {
        elements: vec![
            ElementSpec::input("email"),
            ElementSpec::input("password"),
            ElementSpec::button("login-button", "Login"),
        ],
    }
}

/// Success only matters by status: confirm, then go home.
pub struct LoginRenderer {
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
    home: String,
}

impl LoginRenderer {
    pub fn new(notifier: Rc<dyn Notifier>, navigator: Rc<dyn Navigator>, home: &str) -> Self {
        Self {
            notifier,
            navigator,
            home: home.to_string(),
        }
    }
}

impl OutcomeRenderer for LoginRenderer {
    fn render(&self, outcome: &SubmissionOutcome) -> Result<(), RenderError> {
        match outcome {
            SubmissionOutcome::Success { .. } => {
                self.notifier.notify(SUCCESS_MESSAGE);
                self.navigator.navigate(&self.home);
            }
            SubmissionOutcome::Rejected(rejection) => self.notifier.notify(&rejection.detail),
            SubmissionOutcome::NetworkFailure(_) => self.notifier.notify(NETWORK_MESSAGE),
        }
        Ok(())
    }
}
