use std::cell::RefCell;

use tracing::info;

// ============================================================================
// Host capabilities: user notification and page navigation
// ============================================================================

/// Blocking user-facing message (an alert in a browser).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Page navigation after a successful submission.
pub trait Navigator {
    fn navigate(&self, location: &str);
}

/// Collects every notification, for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Collects every navigation target, for assertions.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    locations: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locations(&self) -> Vec<String> {
        self.locations.borrow().clone()
    }

    pub fn current(&self) -> Option<String> {
        self.locations.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.locations.borrow_mut().push(location.to_string());
    }
}

/// Prints notifications to stdout.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        info!(text = message, "notify");
        println!("{}", message);
    }
}

/// Navigation has no page to load on a terminal; it is reported instead.
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, location: &str) {
        info!(location, "navigate");
        println!("-> {}", location);
    }
}
