use std::rc::Rc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::dom::control::{SubmitButton, SubmitEvent};
use crate::dom::document::Document;
use crate::submit::error::{BindError, RenderError, TransportError};
use crate::submit::outcome::{Rejection, SubmissionOutcome};
use crate::submit::request::{BoundField, FieldSpec, PreflightCheck, SubmissionRequest};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::SubmissionTrace;
use crate::transport::http::{HttpReply, Transport};

/// Everything that distinguishes one form from another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    pub name: String,

    /// Relative path (resolved by the transport) or absolute URL
    pub endpoint: String,

    /// Fields to read, in body order
    pub fields: Vec<FieldSpec>,

    #[serde(default)]
    pub preflight: Option<PreflightCheck>,

    /// Id of the submit button
    pub button: String,

    pub busy_label: String,

    /// Shown when a failure reply carries no usable `detail`
    pub fallback_detail: String,
}

/// Applies an outcome to the page.
pub trait OutcomeRenderer {
    /// Called after the control goes in flight, before the request is sent.
    fn before_submit(&self) {}

    fn render(&self, outcome: &SubmissionOutcome) -> Result<(), RenderError>;
}

/// The generic submit-and-render handler, bound to one form.
pub struct FormSubmitController {
    config: FormConfig,
    fields: Vec<BoundField>,
    button: SubmitButton,
    renderer: Box<dyn OutcomeRenderer>,
    transport: Rc<dyn Transport>,
    tracer: Option<Rc<TraceLogger>>,
}

impl FormSubmitController {
    /// Resolve every element the form needs. Lookups happen here, once;
    /// submissions only touch the resolved handles.
    pub fn bind(
        config: FormConfig,
        document: &Document,
        renderer: Box<dyn OutcomeRenderer>,
        transport: Rc<dyn Transport>,
    ) -> Result<Self, BindError> {
        let fields = config
            .fields
            .iter()
            .map(|spec| -> Result<BoundField, BindError> {
                Ok(BoundField {
                    spec: spec.clone(),
                    element: document.require(&spec.element)?,
                })
            })
            .collect::<Result<Vec<_>, BindError>>()?;

        if let Some(check) = &config.preflight {
            for field in check.fields() {
                if !config.fields.iter().any(|f| f.name == field) {
                    return Err(BindError::UnknownField {
                        field: field.to_string(),
                        form: config.name.clone(),
                    });
                }
            }
        }

        let button = SubmitButton::new(document.require(&config.button)?, &config.busy_label);

        debug!(form = %config.name, fields = fields.len(), "bound controller");

        Ok(Self {
            config,
            fields,
            button,
            renderer,
            transport,
            tracer: None,
        })
    }

    pub fn with_tracer(mut self, tracer: Rc<TraceLogger>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Handle one submit event.
    ///
    /// Produces exactly one outcome and hands it to the renderer. The button
    /// is back to idle when this returns, whether the renderer succeeded,
    /// failed, or panicked. A render failure is returned after the button
    /// has been restored.
    pub fn handle_submit(
        &self,
        event: &mut SubmitEvent,
    ) -> Result<SubmissionOutcome, RenderError> {
        event.prevent_default();

        let started = Instant::now();
        let request = SubmissionRequest::capture(&self.fields);

        if let Some(check) = &self.config.preflight {
            if let Err(message) = check.check(&request) {
                info!(form = %self.config.name, "pre-flight check failed");
                let outcome = SubmissionOutcome::Rejected(Rejection::local(&message));
                self.record(&request, &outcome, started);
                return self.finish(outcome);
            }
        }

        let in_flight = self.button.begin_in_flight();
        self.renderer.before_submit();

        let outcome = self.exchange(&request);
        self.record(&request, &outcome, started);

        let rendered = self.finish(outcome);
        drop(in_flight);
        rendered
    }

    fn exchange(&self, request: &SubmissionRequest) -> SubmissionOutcome {
        match self.transport.post_json(&self.config.endpoint, &request.body()) {
            Ok(reply) => interpret_reply(&reply, &self.config.fallback_detail),
            Err(e) => {
                warn!(form = %self.config.name, error = %e, "request failed");
                SubmissionOutcome::NetworkFailure(e)
            }
        }
    }

    fn finish(&self, outcome: SubmissionOutcome) -> Result<SubmissionOutcome, RenderError> {
        match self.renderer.render(&outcome) {
            Ok(()) => Ok(outcome),
            Err(e) => {
                warn!(form = %self.config.name, error = %e, "render failed");
                Err(e)
            }
        }
    }

    fn record(&self, request: &SubmissionRequest, outcome: &SubmissionOutcome, started: Instant) {
        info!(form = %self.config.name, outcome = outcome.kind(), "submission complete");

        if let Some(tracer) = &self.tracer {
            let mut event = SubmissionTrace::now(&self.config.name, &self.config.endpoint)
                .with_fingerprint(&request.fingerprint())
                .with_outcome(outcome)
                .with_elapsed(started.elapsed().as_millis());
            if let SubmissionOutcome::NetworkFailure(e) = outcome {
                event = event.with_error(e);
            }
            tracer.append(&event);
        }
    }
}

/// Map a reply onto an outcome.
///
/// The body must be JSON whatever the status; an unparseable body is a
/// network failure. On a failure status the `detail` key is the reason,
/// with `fallback` used when it is absent, null or empty.
pub fn interpret_reply(reply: &HttpReply, fallback: &str) -> SubmissionOutcome {
    let payload: Value = match serde_json::from_str(&reply.body) {
        Ok(v) => v,
        Err(e) => {
            return SubmissionOutcome::NetworkFailure(TransportError::Body {
                context: format!("HTTP {} reply", reply.status),
                source: e,
            });
        }
    };

    if reply.is_success() {
        return SubmissionOutcome::Success {
            status: reply.status,
            payload,
        };
    }

    let detail = match payload.get("detail") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Null) | None => fallback.to_string(),
        Some(Value::String(_)) => fallback.to_string(),
        Some(other) => other.to_string(),
    };

    SubmissionOutcome::Rejected(Rejection::server(reply.status, &detail))
}
