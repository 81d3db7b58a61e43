mod common;

use form_submit::forms::{FormKind, FormOverrides};
use form_submit::forms::url_check::{RESULT_CARD, RESULT_CONTAINER, RESULT_STATUS, RISK_SCORE};
use form_submit::transport::http::HttpReply;
use form_submit::transport::mock::MockTransport;
use serde_json::json;

use crate::common::harness::{Harness, login_values, signup_values};

// ============================================================================
// Login
// ============================================================================

#[test]
fn login_success_navigates_home() {
    let h = Harness::new(
        FormKind::Login,
        MockTransport::replying(HttpReply::json(200, &json!({"message": "Login successful"}))),
        &login_values(),
    );

    let outcome = h.submit();

    assert!(outcome.is_success());
    assert_eq!(h.navigator.locations(), vec!["/".to_string()]);
    assert_eq!(h.notifier.messages(), vec!["Login successful!".to_string()]);
    h.assert_button_idle("Login");
}

#[test]
fn login_posts_email_and_password_to_token() {
    let h = Harness::new(
        FormKind::Login,
        MockTransport::replying(HttpReply::json(200, &json!({}))),
        &login_values(),
    );

    h.submit();

    let calls = h.transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/token");
    assert_eq!(
        calls[0].1.to_string(),
        r#"{"email":"jane@example.com","password":"hunter2"}"#
    );
}

#[test]
fn login_rejection_alerts_detail_without_navigation() {
    let h = Harness::new(
        FormKind::Login,
        MockTransport::replying(HttpReply::new(401, r#"{"detail":"Invalid credentials"}"#)),
        &login_values(),
    );

    let outcome = h.submit();

    assert_eq!(outcome.status(), Some(401));
    assert_eq!(h.notifier.messages(), vec!["Invalid credentials".to_string()]);
    assert!(h.navigator.locations().is_empty());
    h.assert_button_idle("Login");
}

#[test]
fn login_rejection_without_detail_uses_fallback() {
    let h = Harness::new(
        FormKind::Login,
        MockTransport::replying(HttpReply::new(500, "{}")),
        &login_values(),
    );

    h.submit();

    assert_eq!(h.notifier.last().as_deref(), Some("An unknown error occurred."));
}

#[test]
fn login_network_failure_asks_to_check_server() {
    let h = Harness::new(
        FormKind::Login,
        MockTransport::failing("connection refused"),
        &login_values(),
    );

    let outcome = h.submit();

    assert_eq!(outcome.kind(), "network_failure");
    assert_eq!(
        h.notifier.messages(),
        vec!["Could not connect to the server. Please ensure it is running.".to_string()]
    );
    assert!(h.navigator.locations().is_empty());
    h.assert_button_idle("Login");
}

#[test]
fn login_home_is_configurable() {
    let overrides = FormOverrides {
        home: Some("/index.html".into()),
        ..Default::default()
    };
    let h = Harness::with_overrides(
        FormKind::Login,
        &overrides,
        MockTransport::replying(HttpReply::json(200, &json!({}))),
        &login_values(),
    );

    h.submit();

    assert_eq!(h.navigator.current().as_deref(), Some("/index.html"));
}

// ============================================================================
// Signup
// ============================================================================

#[test]
fn signup_password_mismatch_sends_nothing() {
    for (password, confirm) in [("a", "b"), ("secret", "Secret"), ("pw", ""), ("", "pw")] {
        let h = Harness::new(
            FormKind::Signup,
            MockTransport::replying(HttpReply::json(200, &json!({"message": "Account created"}))),
            &signup_values(password, confirm),
        );

        let outcome = h.submit();

        assert_eq!(outcome.kind(), "local_validation_failure");
        assert_eq!(h.transport.call_count(), 0);
        assert_eq!(h.notifier.messages(), vec!["Passwords do not match!".to_string()]);
        assert!(h.navigator.locations().is_empty());
        h.assert_button_idle("Sign Up");
    }
}

#[test]
fn signup_success_alerts_message_and_goes_to_login() {
    let h = Harness::new(
        FormKind::Signup,
        MockTransport::replying(HttpReply::json(200, &json!({"message": "Account created"}))),
        &signup_values("pw", "pw"),
    );

    h.submit();

    assert_eq!(h.notifier.messages(), vec!["Account created".to_string()]);
    assert_eq!(h.navigator.locations(), vec!["/login.html".to_string()]);
    h.assert_button_idle("Sign Up");
}

#[test]
fn signup_body_omits_confirm_password() {
    let h = Harness::new(
        FormKind::Signup,
        MockTransport::replying(HttpReply::json(200, &json!({"message": "ok"}))),
        &signup_values("pw", "pw"),
    );

    h.submit();

    let calls = h.transport.calls();
    assert_eq!(calls[0].0, "/signup/");
    assert_eq!(
        calls[0].1,
        json!({"fullname": "Jane Doe", "email": "jane@example.com", "password": "pw"})
    );
}

#[test]
fn signup_duplicate_email_shows_server_detail() {
    let h = Harness::new(
        FormKind::Signup,
        MockTransport::replying(HttpReply::new(400, r#"{"detail":"Email already registered"}"#)),
        &signup_values("pw", "pw"),
    );

    h.submit();

    assert_eq!(h.notifier.messages(), vec!["Email already registered".to_string()]);
    assert!(h.navigator.locations().is_empty());
}

#[test]
fn signup_network_failure() {
    let h = Harness::new(
        FormKind::Signup,
        MockTransport::failing("dns error"),
        &signup_values("pw", "pw"),
    );

    h.submit();

    assert_eq!(h.notifier.messages(), vec!["Could not connect to the server.".to_string()]);
    h.assert_button_idle("Sign Up");
}

// ============================================================================
// URL check
// ============================================================================

#[test]
fn url_check_success_renders_verdict() {
    let h = Harness::new(
        FormKind::UrlCheck,
        MockTransport::replying(HttpReply::json(
            200,
            &json!({"status": "Safe", "risk_score": 2, "verdict_class": "safe"}),
        )),
        &[("url-input", "https://example.com")],
    );

    h.submit();

    assert!(!h.has_class(RESULT_CONTAINER, "hidden"));
    assert_eq!(h.text(RESULT_STATUS), "Safe");
    assert_eq!(h.text(RISK_SCORE), "2");
    assert!(h.has_class(RESULT_CARD, "safe"));
    assert!(h.notifier.messages().is_empty());
    h.assert_button_idle("Check URL");
}

#[test]
fn url_check_network_failure_renders_error_panel() {
    let h = Harness::new(
        FormKind::UrlCheck,
        MockTransport::failing("connection reset"),
        &[("url-input", "https://example.com")],
    );

    h.submit();

    assert!(!h.has_class(RESULT_CONTAINER, "hidden"));
    assert_eq!(h.text(RESULT_STATUS), "Error: Could not analyze URL");
    assert_eq!(h.text(RISK_SCORE), "N/A");
    assert!(h.has_class(RESULT_CARD, "dangerous"));
    h.assert_button_idle("Check URL");
}

#[test]
fn url_check_server_error_renders_error_panel() {
    let h = Harness::new(
        FormKind::UrlCheck,
        MockTransport::replying(HttpReply::new(500, r#"{"detail":"boom"}"#)),
        &[("url-input", "https://example.com")],
    );

    h.submit();

    assert_eq!(h.text(RESULT_STATUS), "Error: Could not analyze URL");
    assert!(h.has_class(RESULT_CARD, "dangerous"));
}

#[test]
fn url_check_failure_class_is_configurable() {
    let overrides = FormOverrides {
        failure_class: Some("unknown".into()),
        ..Default::default()
    };
    let h = Harness::with_overrides(
        FormKind::UrlCheck,
        &overrides,
        MockTransport::failing("timeout"),
        &[("url-input", "https://example.com")],
    );

    h.submit();

    assert!(h.has_class(RESULT_CARD, "unknown"));
    assert!(!h.has_class(RESULT_CARD, "dangerous"));
}

#[test]
fn url_check_replaces_previous_verdict_class() {
    let h = Harness::new(
        FormKind::UrlCheck,
        MockTransport::new()
            .then_reply(HttpReply::json(
                200,
                &json!({"status": "Dangerous", "risk_score": 85, "verdict_class": "dangerous"}),
            ))
            .then_reply(HttpReply::json(
                200,
                &json!({"status": "Suspicious", "risk_score": 40, "verdict_class": "suspicious"}),
            )),
        &[("url-input", "http://192.168.0.1/login")],
    );

    h.submit();
    assert!(h.has_class(RESULT_CARD, "dangerous"));

    h.submit();
    assert!(h.has_class(RESULT_CARD, "suspicious"));
    assert!(!h.has_class(RESULT_CARD, "dangerous"));
    assert_eq!(h.text(RISK_SCORE), "40");
}

#[test]
fn url_check_posts_url_field() {
    let h = Harness::new(
        FormKind::UrlCheck,
        MockTransport::replying(HttpReply::json(
            200,
            &json!({"status": "Safe", "risk_score": 0, "verdict_class": "safe"}),
        )),
        &[("url-input", "https://bit.ly/x")],
    );

    h.submit();

    let calls = h.transport.calls();
    assert_eq!(calls[0].0, "/analyze-url/");
    assert_eq!(calls[0].1, json!({"url": "https://bit.ly/x"}));
}

// ============================================================================
// Idle restoration, every form, every outcome
// ============================================================================

#[test]
fn every_form_restores_button_after_every_outcome() {
    let replies = || {
        vec![
            MockTransport::replying(HttpReply::json(
                200,
                &json!({
                    "message": "ok",
                    "status": "Safe",
                    "risk_score": 1,
                    "verdict_class": "safe"
                }),
            )),
            MockTransport::replying(HttpReply::new(400, r#"{"detail":"no"}"#)),
            MockTransport::failing("down"),
        ]
    };

    let cases: [(FormKind, Vec<(&str, &str)>, &str); 3] = [
        (FormKind::Login, login_values(), "Login"),
        (FormKind::Signup, signup_values("pw", "pw"), "Sign Up"),
        (FormKind::UrlCheck, vec![("url-input", "https://example.com")], "Check URL"),
    ];

    for (kind, values, label) in cases {
        for transport in replies() {
            let h = Harness::new(kind, transport, &values);
            h.submit();
            h.assert_button_idle(label);
            assert_eq!(h.transport.call_count(), 1);
        }
    }
}
