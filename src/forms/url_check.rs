use serde_json::Value;

use crate::dom::document::{Document, DocumentFixture};
use crate::dom::element::{Element, ElementSpec};
use crate::submit::controller::{FormConfig, OutcomeRenderer};
use crate::submit::error::{BindError, RenderError};
use crate::submit::outcome::SubmissionOutcome;
use crate::submit::request::FieldSpec;

pub const ERROR_STATUS: &str = "Error: Could not analyze URL";
pub const UNKNOWN_SCORE: &str = "N/A";
pub const DEFAULT_FAILURE_CLASS: &str = "dangerous";
pub const HIDDEN: &str = "hidden";

pub const RESULT_CONTAINER: &str = "result-container";
pub const RESULT_CARD: &str = "result-card";
pub const RESULT_STATUS: &str = "result-status";
pub const RISK_SCORE: &str = "risk-score";

pub fn default_config() -> FormConfig {
    FormConfig {
        name: "url-check".into(),
        endpoint: "/analyze-url/".into(),
        fields: vec![FieldSpec::new("url", "url-input")],
        preflight: None,
        button: "check-button".into(),
        busy_label: "Checking...".into(),
        fallback_detail: ERROR_STATUS.into(),
    }
}

pub fn page_fixture() -> DocumentFixture {
    DocumentFixture {
        elements: vec![
            ElementSpec::input("url-input"),
            ElementSpec::button("check-button", "Check URL"),
            ElementSpec::input(RESULT_CONTAINER).with_classes(&[HIDDEN]),
            ElementSpec::input(RESULT_CARD),
            ElementSpec::input(RESULT_STATUS),
            ElementSpec::input(RISK_SCORE),
        ],
    }
}

/// Renders the analysis verdict into the result panel.
pub struct UrlCheckRenderer {
    container: Element,
    card: Element,
    status: Element,
    score: Element,
    failure_class: String,
}

impl UrlCheckRenderer {
    pub fn new(
        container: Element,
        card: Element,
        status: Element,
        score: Element,
        failure_class: &str,
    ) -> Self {
        Self {
            container,
            card,
            status,
            score,
            failure_class: failure_class.to_string(),
        }
    }

    /// Resolve the panel elements from a document.
    pub fn bind(document: &Document, failure_class: &str) -> Result<Self, BindError> {
        Ok(Self::new(
            document.require(RESULT_CONTAINER)?,
            document.require(RESULT_CARD)?,
            document.require(RESULT_STATUS)?,
            document.require(RISK_SCORE)?,
            failure_class,
        ))
    }

    fn show(&self, status: &str, score: &str, class: &str) {
        self.status.set_text(status);
        self.score.set_text(score);
        self.card.set_class_name(class);
        self.container.remove_class(HIDDEN);
    }

    fn show_error(&self) {
        self.show(ERROR_STATUS, UNKNOWN_SCORE, &self.failure_class);
    }
}

impl OutcomeRenderer for UrlCheckRenderer {
    fn before_submit(&self) {
        self.container.add_class(HIDDEN);
    }

    fn render(&self, outcome: &SubmissionOutcome) -> Result<(), RenderError> {
        let payload = match outcome {
            SubmissionOutcome::Success { payload, .. } => payload,
            SubmissionOutcome::Rejected(_) | SubmissionOutcome::NetworkFailure(_) => {
                self.show_error();
                return Ok(());
            }
        };

        let (status, class) = match (
            payload.get("status").and_then(Value::as_str),
            payload.get("verdict_class").and_then(Value::as_str),
        ) {
            (Some(status), Some(class)) => (status, class),
            (None, _) => {
                self.show_error();
                return Err(RenderError::MissingField {
                    field: "status".into(),
                });
            }
            (_, None) => {
                self.show_error();
                return Err(RenderError::MissingField {
                    field: "verdict_class".into(),
                });
            }
        };

        self.show(status, &score_text(payload.get("risk_score")), class);
        Ok(())
    }
}

fn score_text(score: Option<&Value>) -> String {
    match score {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => UNKNOWN_SCORE.to_string(),
    }
}
