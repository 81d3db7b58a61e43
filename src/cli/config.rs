use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::forms::{FormKind, FormOverrides};
use crate::submit::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "form-submit.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-submit",
    version,
    about = "Submit login, signup and URL-check forms against a JSON API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Server base URL that relative endpoints are resolved against
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to config file (default: form-submit.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append a JSONL trace line per submission to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill a form and submit it once
    Submit {
        /// Form to submit: login, signup or url-check
        #[arg(long)]
        form: String,

        /// Field value as name=value (repeatable)
        #[arg(short, long = "field")]
        fields: Vec<String>,
    },

    /// List configured forms
    Forms,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-submit.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub trace_path: Option<String>,

    #[serde(default)]
    pub forms: FormsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            trace_path: None,
            forms: FormsConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn overrides(&self, kind: FormKind) -> &FormOverrides {
        match kind {
            FormKind::Login => &self.forms.login,
            FormKind::Signup => &self.forms.signup,
            FormKind::UrlCheck => &self.forms.url_check,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormsConfig {
    #[serde(default)]
    pub login: FormOverrides,

    #[serde(default)]
    pub signup: FormOverrides,

    #[serde(default, alias = "url-check")]
    pub url_check: FormOverrides,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. A missing file means defaults; an
/// unreadable or malformed one is an error.
pub fn load_config(path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => parse_config(config_path, &content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Read {
            path: config_path.to_string(),
            source: e,
        }),
    }
}

pub fn parse_config(path: &str, content: &str) -> Result<AppConfig, ConfigError> {
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_string(),
        source: e,
    })
}

// ============================================================================
// Setting resolution (CLI > config file > defaults)
// ============================================================================

pub fn resolve_base_url(cli: Option<&str>, config: &AppConfig) -> String {
    cli.map(str::to_string)
        .unwrap_or_else(|| config.base_url.clone())
}

pub fn resolve_trace_path(cli: Option<&str>, config: &AppConfig) -> Option<String> {
    cli.map(str::to_string).or_else(|| config.trace_path.clone())
}
