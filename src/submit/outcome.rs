use serde_json::Value;

use crate::submit::error::TransportError;

/// Where a rejection came from.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionOrigin {
    /// A pre-flight check failed; no request was sent
    Local,

    /// The server answered with a failure status
    Server { status: u16 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Human-readable reason shown to the user
    pub detail: String,
    pub origin: RejectionOrigin,
}

impl Rejection {
    pub fn local(detail: &str) -> Self {
        Self {
            detail: detail.to_string(),
            origin: RejectionOrigin::Local,
        }
    }

    pub fn server(status: u16, detail: &str) -> Self {
        Self {
            detail: detail.to_string(),
            origin: RejectionOrigin::Server { status },
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self.origin, RejectionOrigin::Local)
    }
}

/// Result of one submission attempt. Exactly one is produced per submit.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Success status; parsed response body
    Success { status: u16, payload: Value },

    /// Local pre-flight failure or server failure status
    Rejected(Rejection),

    /// No interpretable reply
    NetworkFailure(TransportError),
}

impl SubmissionOutcome {
    /// Short label used in logs and traces.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success { .. } => "success",
            SubmissionOutcome::Rejected(r) if r.is_local() => "local_validation_failure",
            SubmissionOutcome::Rejected(_) => "server_rejected",
            SubmissionOutcome::NetworkFailure(_) => "network_failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            SubmissionOutcome::Success { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            SubmissionOutcome::Rejected(r) => Some(r),
            _ => None,
        }
    }

    /// HTTP status, when a reply was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionOutcome::Success { status, .. } => Some(*status),
            SubmissionOutcome::Rejected(Rejection {
                origin: RejectionOrigin::Server { status },
                ..
            }) => Some(*status),
            _ => None,
        }
    }
}
