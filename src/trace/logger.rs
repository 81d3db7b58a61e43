use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;

use tracing::warn;

use crate::trace::trace::SubmissionTrace;

/// Append-only JSONL log of submissions, one line per attempt.
///
/// A trace file that cannot be opened or written only costs the trace;
/// the submission itself always completes.
pub struct TraceLogger {
    path: Option<String>,
    file: Option<Mutex<File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                path: Some(path.to_string()),
                file: Some(Mutex::new(file)),
            },
            Err(e) => {
                warn!(path, error = %e, "trace file unavailable, submissions will not be traced");
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self {
            path: None,
            file: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Append one submission. Failures are logged and swallowed.
    pub fn append(&self, trace: &SubmissionTrace) {
        let Some(file) = &self.file else {
            return;
        };
        if let Err(e) = write_line(file, trace) {
            warn!(
                path = self.path().unwrap_or_default(),
                form = %trace.form,
                error = %e,
                "dropped submission trace"
            );
        }
    }
}

fn write_line(file: &Mutex<File>, trace: &SubmissionTrace) -> io::Result<()> {
    let mut line = serde_json::to_vec(trace)?;
    line.push(b'\n');

    let mut file = file
        .lock()
        .map_err(|_| io::Error::other("trace file lock poisoned"))?;
    // Whole record in a single write.
    file.write_all(&line)
}
