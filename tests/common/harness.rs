#![allow(dead_code)]

use std::rc::Rc;

use form_submit::dom::control::SubmitEvent;
use form_submit::dom::document::Document;
use form_submit::dom::host::{RecordingNavigator, RecordingNotifier};
use form_submit::forms::{FormKind, FormOverrides, Host, build_controller};
use form_submit::submit::controller::FormSubmitController;
use form_submit::submit::outcome::SubmissionOutcome;
use form_submit::transport::mock::MockTransport;

/// A bound form page with recording host capabilities and a scripted server.
pub struct Harness {
    pub document: Document,
    pub notifier: Rc<RecordingNotifier>,
    pub navigator: Rc<RecordingNavigator>,
    pub transport: Rc<MockTransport>,
    pub controller: FormSubmitController,
}

impl Harness {
    pub fn new(kind: FormKind, transport: MockTransport, values: &[(&str, &str)]) -> Self {
        Self::with_overrides(kind, &FormOverrides::default(), transport, values)
    }

    pub fn with_overrides(
        kind: FormKind,
        overrides: &FormOverrides,
        transport: MockTransport,
        values: &[(&str, &str)],
    ) -> Self {
        let document = Document::from_fixture(&kind.page_fixture());
        for (id, value) in values {
            document
                .element(id)
                .unwrap_or_else(|| panic!("no element #{}", id))
                .set_value(value);
        }

        let notifier = Rc::new(RecordingNotifier::new());
        let navigator = Rc::new(RecordingNavigator::new());
        let transport = Rc::new(transport);
        let host = Host {
            notifier: notifier.clone(),
            navigator: navigator.clone(),
        };

        let controller = build_controller(kind, overrides, &document, &host, transport.clone())
            .expect("default layout binds");

        Self {
            document,
            notifier,
            navigator,
            transport,
            controller,
        }
    }

    pub fn submit(&self) -> SubmissionOutcome {
        let mut event = SubmitEvent::new();
        let outcome = self.controller.handle_submit(&mut event).expect("render succeeds");
        assert!(event.default_prevented());
        outcome
    }

    pub fn text(&self, id: &str) -> String {
        self.document.element(id).expect("element exists").text()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.document.element(id).expect("element exists").has_class(class)
    }

    /// Button is enabled and labelled as before the submission.
    pub fn assert_button_idle(&self, label: &str) {
        let button = self.controller.button();
        assert!(!button.element().is_disabled(), "button still disabled");
        assert_eq!(button.label(), label);
    }
}

pub fn login_values() -> Vec<(&'static str, &'static str)> {
    vec![("email", "jane@example.com"), ("password", "hunter2")]
}

pub fn signup_values(
    password: &'static str,
    confirm: &'static str,
) -> Vec<(&'static str, &'static str)> {
    vec![
        ("fullname", "Jane Doe"),
        ("email", "jane@example.com"),
        ("password", password),
        ("confirm-password", confirm),
    ]
}
