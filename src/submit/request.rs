use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dom::element::Element;

/// One field a form reads at submit time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSpec {
    /// Key in the JSON request body
    pub name: String,

    /// Id of the input element holding the value
    pub element: String,

    /// False for fields only read for a pre-flight check (e.g. confirm password)
    #[serde(default = "default_true")]
    pub submit: bool,
}

fn default_true() -> bool {
    true
}

impl FieldSpec {
    pub fn new(name: &str, element: &str) -> Self {
        Self {
            name: name.to_string(),
            element: element.to_string(),
            submit: true,
        }
    }

    /// A field that is captured but never sent.
    pub fn local(name: &str, element: &str) -> Self {
        Self {
            submit: false,
            ..Self::new(name, element)
        }
    }
}

/// A `FieldSpec` with its element handle resolved.
#[derive(Debug, Clone)]
pub struct BoundField {
    pub spec: FieldSpec,
    pub element: Element,
}

/// Local validation performed before any network call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PreflightCheck {
    /// Two captured fields must hold identical values
    FieldsEqual {
        left: String,
        right: String,
        message: String,
    },
}

impl PreflightCheck {
    /// Returns the user-facing message when the check fails.
    pub fn check(&self, request: &SubmissionRequest) -> Result<(), String> {
        match self {
            PreflightCheck::FieldsEqual {
                left,
                right,
                message,
            } => {
                if request.get(left) == request.get(right) {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }
        }
    }

    /// Field names the check reads.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            PreflightCheck::FieldsEqual { left, right, .. } => vec![left.as_str(), right.as_str()],
        }
    }
}

/// Field values captured at submit time, in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    values: Vec<CapturedValue>,
}

#[derive(Debug, Clone, PartialEq)]
struct CapturedValue {
    name: String,
    value: String,
    submit: bool,
}

impl SubmissionRequest {
    /// Read every bound field's current value.
    pub fn capture(fields: &[BoundField]) -> Self {
        let values = fields
            .iter()
            .map(|f| CapturedValue {
                name: f.spec.name.clone(),
                value: f.element.value(),
                submit: f.spec.submit,
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }

    /// JSON object of the submitted fields, keys in field order.
    pub fn body(&self) -> Value {
        let map: Map<String, Value> = self
            .values
            .iter()
            .filter(|v| v.submit)
            .map(|v| (v.name.clone(), Value::String(v.value.clone())))
            .collect();
        Value::Object(map)
    }

    /// SHA-1 of the serialized body. Lets traces correlate identical
    /// submissions without recording field values.
    pub fn fingerprint(&self) -> String {
        text_fingerprint(&self.body().to_string())
    }
}

pub fn text_fingerprint(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
