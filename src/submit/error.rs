use std::fmt;

/// Why a request never produced an interpretable reply.
#[derive(Debug)]
pub enum TransportError {
    /// Endpoint could not be resolved into a request URL
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    Client(reqwest::Error),

    /// reqwest failed to send the request or read the reply (DNS, refused, reset)
    Request(reqwest::Error),

    /// Collaborator could not be reached (used by non-HTTP transports)
    Unreachable(String),

    /// Reply body was not valid JSON
    Body { context: String, source: serde_json::Error },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::InvalidUrl { url, reason } => {
                write!(f, "Invalid endpoint URL '{}': {}", url, reason)
            }
            TransportError::Client(source) => write!(f, "HTTP client setup failed: {}", source),
            TransportError::Request(source) => write!(f, "Request failed: {}", source),
            TransportError::Unreachable(msg) => write!(f, "Server unreachable: {}", msg),
            TransportError::Body { context, source } => {
                write!(f, "Malformed response body ({}): {}", context, source)
            }
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Client(source) | TransportError::Request(source) => Some(source),
            TransportError::Body { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Request(e)
    }
}

/// A controller could not be wired to its page.
#[derive(Debug, Clone, PartialEq)]
pub enum BindError {
    /// No element with this id exists in the document
    MissingElement { id: String },

    /// A pre-flight check names a field the form does not read
    UnknownField { field: String, form: String },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::MissingElement { id } => write!(f, "Element '#{}' not found", id),
            BindError::UnknownField { field, form } => {
                write!(f, "Form '{}' has no field named '{}'", form, field)
            }
        }
    }
}

impl std::error::Error for BindError {}

/// The render callback failed to apply an outcome to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Success payload lacks a field the renderer needs
    MissingField { field: String },

    /// Host capability refused the update
    Host(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingField { field } => {
                write!(f, "Response payload has no '{}' field", field)
            }
            RenderError::Host(msg) => write!(f, "Host rejected update: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Config file exists but cannot be used.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, source: std::io::Error },
    Parse { path: String, source: serde_yaml::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Could not read config '{}': {}", path, source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Invalid config '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}
