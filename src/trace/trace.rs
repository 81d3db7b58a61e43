use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::submit::{error::TransportError, outcome::SubmissionOutcome};

/// One line of the submission trace log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionTrace {
    pub timestamp_ms: u128,

    pub form: String,
    pub endpoint: String,

    /// SHA-1 of the request body; field values are never written
    pub fingerprint: Option<String>,

    pub outcome: Option<String>,
    pub status: Option<u16>,

    pub elapsed_ms: Option<u128>,
    pub error: Option<String>,
}

impl SubmissionTrace {
    pub fn now(form: &str, endpoint: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            form: form.to_string(),
            endpoint: endpoint.to_string(),
            fingerprint: None,
            outcome: None,
            status: None,
            elapsed_ms: None,
            error: None,
        }
    }

    pub fn with_fingerprint(mut self, fingerprint: &str) -> Self {
        self.fingerprint = Some(fingerprint.to_string());
        self
    }

    pub fn with_outcome(mut self, outcome: &SubmissionOutcome) -> Self {
        self.outcome = Some(outcome.kind().to_string());
        self.status = outcome.status();
        self
    }

    pub fn with_elapsed(mut self, elapsed_ms: u128) -> Self {
        self.elapsed_ms = Some(elapsed_ms);
        self
    }

    pub fn with_error(mut self, error: &TransportError) -> Self {
        self.error = Some(error.to_string());
        self
    }
}
