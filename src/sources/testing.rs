//! In-memory transport that replays canned responses.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::sources::{FetchError, HttpResponse, PageRequest, Transport};

enum Scripted {
    Response(HttpResponse),
    Failure(String),
}

#[derive(Default)]
pub(crate) struct ScriptedTransport {
    script: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<PageRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ok(self, body: serde_json::Value) -> Self {
        self.raw(200, &body.to_string())
    }

    pub(crate) fn status(self, status: u16) -> Self {
        self.raw(status, "")
    }

    pub(crate) fn raw(self, status: u16, body: &str) -> Self {
        self.script.borrow_mut().push_back(Scripted::Response(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.script
            .borrow_mut()
            .push_back(Scripted::Failure(message.to_string()));
        self
    }

    pub(crate) fn requests(&self) -> Vec<PageRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, request: &PageRequest) -> Result<HttpResponse, FetchError> {
        self.requests.borrow_mut().push(request.clone());
        match self.script.borrow_mut().pop_front() {
            Some(Scripted::Response(resp)) => Ok(resp),
            Some(Scripted::Failure(msg)) => Err(FetchError::Request(msg)),
            None => Err(FetchError::Request("no scripted response left".to_string())),
        }
    }
}
