use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use crate::submit::error::TransportError;
use crate::transport::http::{HttpReply, Transport};

/// What a `MockTransport` answers with.
#[derive(Debug, Clone)]
pub enum Scripted {
    Reply(HttpReply),
    Fail(String),
}

impl Scripted {
    fn produce(&self) -> Result<HttpReply, TransportError> {
        match self {
            Scripted::Reply(reply) => Ok(reply.clone()),
            Scripted::Fail(msg) => Err(TransportError::Unreachable(msg.clone())),
        }
    }
}

/// Transport for testing without a server.
///
/// Answers from a FIFO script, then from the repeated answer if one is set.
/// Every call is recorded.
#[derive(Debug, Default)]
pub struct MockTransport {
    script: RefCell<VecDeque<Scripted>>,
    repeat: Option<Scripted>,
    calls: RefCell<Vec<(String, Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer with this reply.
    pub fn replying(reply: HttpReply) -> Self {
        Self {
            repeat: Some(Scripted::Reply(reply)),
            ..Self::default()
        }
    }

    /// Always fail as if the server were down.
    pub fn failing(message: &str) -> Self {
        Self {
            repeat: Some(Scripted::Fail(message.to_string())),
            ..Self::default()
        }
    }

    pub fn then_reply(self, reply: HttpReply) -> Self {
        self.script.borrow_mut().push_back(Scripted::Reply(reply));
        self
    }

    pub fn then_fail(self, message: &str) -> Self {
        self.script
            .borrow_mut()
            .push_back(Scripted::Fail(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Transport for MockTransport {
    fn post_json(&self, endpoint: &str, body: &Value) -> Result<HttpReply, TransportError> {
        self.calls
            .borrow_mut()
            .push((endpoint.to_string(), body.clone()));

        if let Some(next) = self.script.borrow_mut().pop_front() {
            return next.produce();
        }

        match &self.repeat {
            Some(answer) => answer.produce(),
            None => Err(TransportError::Unreachable("no scripted reply".into())),
        }
    }
}
