use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::dom::document::{Document, DocumentFixture};
use crate::dom::host::{Navigator, Notifier};
use crate::submit::controller::{FormConfig, FormSubmitController, OutcomeRenderer};
use crate::submit::error::BindError;
use crate::transport::http::Transport;

pub mod login;
pub mod signup;
pub mod url_check;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
    UrlCheck,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::Login, FormKind::Signup, FormKind::UrlCheck];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "login" => Some(FormKind::Login),
            "signup" => Some(FormKind::Signup),
            "url-check" | "url_check" => Some(FormKind::UrlCheck),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Signup => "signup",
            FormKind::UrlCheck => "url-check",
        }
    }

    pub fn default_config(&self) -> FormConfig {
        match self {
            FormKind::Login => login::default_config(),
            FormKind::Signup => signup::default_config(),
            FormKind::UrlCheck => url_check::default_config(),
        }
    }

    /// Element layout of the form's page.
    pub fn page_fixture(&self) -> DocumentFixture {
        match self {
            FormKind::Login => login::page_fixture(),
            FormKind::Signup => signup::page_fixture(),
            FormKind::UrlCheck => url_check::page_fixture(),
        }
    }
}

/// Per-form settings from the config file. Unset values keep the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormOverrides {
    pub endpoint: Option<String>,
    pub busy_label: Option<String>,
    pub fallback_detail: Option<String>,

    /// Login: where to go after a successful login
    pub home: Option<String>,

    /// Signup: where to go after a successful signup
    pub login_page: Option<String>,

    /// URL check: card class shown when no verdict could be obtained
    pub failure_class: Option<String>,
}

impl FormOverrides {
    pub fn apply(&self, mut config: FormConfig) -> FormConfig {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(label) = &self.busy_label {
            config.busy_label = label.clone();
        }
        if let Some(detail) = &self.fallback_detail {
            config.fallback_detail = detail.clone();
        }
        config
    }
}

/// Host capabilities shared by every renderer.
#[derive(Clone)]
pub struct Host {
    pub notifier: Rc<dyn Notifier>,
    pub navigator: Rc<dyn Navigator>,
}

/// Build the renderer for a form kind.
pub fn build_renderer(
    kind: FormKind,
    overrides: &FormOverrides,
    document: &Document,
    host: &Host,
) -> Result<Box<dyn OutcomeRenderer>, BindError> {
    let renderer: Box<dyn OutcomeRenderer> = match kind {
        FormKind::Login => Box::new(login::LoginRenderer::new(
            host.notifier.clone(),
            host.navigator.clone(),
            overrides.home.as_deref().unwrap_or(login::DEFAULT_HOME),
        )),
        FormKind::Signup => Box::new(signup::SignupRenderer::new(
            host.notifier.clone(),
            host.navigator.clone(),
            overrides
                .login_page
                .as_deref()
                .unwrap_or(signup::DEFAULT_LOGIN_PAGE),
        )),
        FormKind::UrlCheck => Box::new(url_check::UrlCheckRenderer::bind(
            document,
            overrides
                .failure_class
                .as_deref()
                .unwrap_or(url_check::DEFAULT_FAILURE_CLASS),
        )?),
    };
    Ok(renderer)
}

/// Bind a ready-to-use controller for a form kind.
pub fn build_controller(
    kind: FormKind,
    overrides: &FormOverrides,
    document: &Document,
    host: &Host,
    transport: Rc<dyn Transport>,
) -> Result<FormSubmitController, BindError> {
    let config = overrides.apply(kind.default_config());
    let renderer = build_renderer(kind, overrides, document, host)?;
    FormSubmitController::bind(config, document, renderer, transport)
}
