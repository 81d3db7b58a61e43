//! Generic submit-and-render controller for JSON form endpoints.
//!
//! A form is described by a `FormConfig` (endpoint, fields, optional
//! pre-flight check) and an `OutcomeRenderer`. `FormSubmitController` reads
//! the fields, POSTs them once, classifies the reply as success, rejection or
//! network failure, and always returns the submit button to idle.

pub mod cli;
pub mod dom;
pub mod forms;
pub mod submit;
pub mod trace;
pub mod transport;

pub use forms::{FormKind, FormOverrides, Host, build_controller};
pub use submit::controller::{FormConfig, FormSubmitController, OutcomeRenderer};
pub use submit::outcome::{Rejection, RejectionOrigin, SubmissionOutcome};
pub use transport::http::{HttpReply, HttpTransport, Transport};
