//! Transport doubles for view-model tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;

use crate::api::{ApiRequest, ApiResponse, Transport};
use crate::errors::ApiError;

/// Stand-in for a browser `File`: just its name.
pub type FakeFile = &'static str;

/// Records every request and answers from a queue of canned replies.
#[derive(Default)]
pub struct MockTransport {
    pub requests: RefCell<Vec<ApiRequest<FakeFile>>>,
    replies: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(status: u16, body: &str) -> Self {
        let mock = Self::new();
        mock.push_reply(status, body);
        mock
    }

    pub fn failing() -> Self {
        let mock = Self::new();
        mock.push_failure();
        mock
    }

    pub fn push_reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn push_failure(&self) {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Network("connection refused".into())));
    }

    pub fn sent(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last(&self) -> Option<ApiRequest<FakeFile>> {
        self.requests.borrow().last().cloned()
    }
}

impl Transport for MockTransport {
    type File = FakeFile;

    async fn send(&self, request: ApiRequest<FakeFile>) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no reply queued".into())))
    }
}

/// Holds each request open until the test releases it, so replies can be
/// delivered in any order.
#[derive(Clone, Default)]
pub struct GatedTransport {
    gates: Rc<RefCell<Vec<Option<oneshot::Sender<Result<ApiResponse, ApiError>>>>>>,
}

impl GatedTransport {
    pub fn release(&self, index: usize, status: u16, body: &str) {
        let gate = self.gates.borrow_mut()[index].take();
        if let Some(tx) = gate {
            let _ = tx.send(Ok(ApiResponse::new(status, body)));
        }
    }

    pub fn opened(&self) -> usize {
        self.gates.borrow().len()
    }
}

impl Transport for GatedTransport {
    type File = FakeFile;

    async fn send(&self, _request: ApiRequest<FakeFile>) -> Result<ApiResponse, ApiError> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push(Some(tx));
        rx.await
            .unwrap_or_else(|_| Err(ApiError::Network("gate dropped".into())))
    }
}
