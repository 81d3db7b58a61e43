use std::rc::Rc;

use tracing::{debug, info};

use crate::cli::config::AppConfig;
use crate::dom::control::SubmitEvent;
use crate::dom::document::{Document, DocumentFixture};
use crate::dom::host::{ConsoleNavigator, ConsoleNotifier};
use crate::forms::url_check::{RESULT_CARD, RESULT_STATUS, RISK_SCORE};
use crate::forms::{FormKind, Host, build_controller};
use crate::submit::controller::FormConfig;
use crate::trace::logger::TraceLogger;
use crate::transport::http::HttpTransport;

// ============================================================================
// submit subcommand
// ============================================================================

/// Submit one form and return whether the outcome was a success.
pub fn cmd_submit(
    form: &str,
    field_args: &[String],
    config: &AppConfig,
    base_url: &str,
    trace_path: Option<&str>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let kind = FormKind::from_name(form).ok_or_else(|| format!("Unknown form: {}", form))?;
    let overrides = config.overrides(kind);
    let form_config = overrides.apply(kind.default_config());

    let mut fixture = kind.page_fixture();
    for arg in field_args {
        let (name, value) = parse_field_arg(arg)?;
        fixture = fill_field(fixture, &form_config, &name, &value)?;
    }
    let document = Document::from_fixture(&fixture);

    info!(form = kind.name(), base_url, endpoint = %form_config.endpoint, "submitting");

    let host = Host {
        notifier: Rc::new(ConsoleNotifier),
        navigator: Rc::new(ConsoleNavigator),
    };
    let transport = Rc::new(HttpTransport::new(base_url)?);
    let mut controller = build_controller(kind, overrides, &document, &host, transport)?;
    if let Some(path) = trace_path {
        controller = controller.with_tracer(Rc::new(TraceLogger::new(path)));
    }

    let mut event = SubmitEvent::new();
    let outcome = controller.handle_submit(&mut event)?;
    debug!(outcome = outcome.kind(), "submit finished");

    if kind == FormKind::UrlCheck {
        print!("{}", format_result_panel(&document));
    }

    Ok(outcome.is_success())
}

/// Split a `name=value` argument. The value may itself contain `=`.
pub fn parse_field_arg(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("Expected name=value, got '{}'", arg)),
    }
}

/// Put a value into the input that backs the named field.
pub fn fill_field(
    fixture: DocumentFixture,
    config: &FormConfig,
    name: &str,
    value: &str,
) -> Result<DocumentFixture, String> {
    let field = config
        .fields
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| format!("Form '{}' has no field '{}'", config.name, name))?;
    Ok(fixture.with_value(&field.element, value))
}

/// Text rendering of the URL-check result panel.
pub fn format_result_panel(document: &Document) -> String {
    let text = |id: &str| document.element(id).map(|e| e.text()).unwrap_or_default();
    let class = document
        .element(RESULT_CARD)
        .map(|e| e.classes().join(" "))
        .unwrap_or_default();

    format!(
        "Status:     {}\nRisk score: {}\nVerdict:    {}\n",
        text(RESULT_STATUS),
        text(RISK_SCORE),
        class
    )
}

// ============================================================================
// forms subcommand
// ============================================================================

pub fn cmd_forms(config: &AppConfig) {
    print!("{}", format_forms(config));
}

/// One line per form: name, endpoint and submitted fields.
pub fn format_forms(config: &AppConfig) -> String {
    let mut out = format!("Base URL: {}\n", config.base_url);
    for kind in FormKind::ALL {
        let form = config.overrides(kind).apply(kind.default_config());
        let fields: Vec<&str> = form
            .fields
            .iter()
            .filter(|f| f.submit)
            .map(|f| f.name.as_str())
            .collect();
        let check = if form.preflight.is_some() { " (pre-flight)" } else { "" };
        out.push_str(&format!(
            "  {:<10} POST {:<16} {{{}}}{}\n",
            form.name,
            form.endpoint,
            fields.join(", "),
            check
        ));
    }
    out
}
