//! In-memory transport that records requests and replays scripted replies.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use gqlhook_core::{GraphqlClientError, PostRequest, Result, Transport};
use serde_json::Value;
use tokio::sync::oneshot;

enum Reply {
    Ready(Result<String>),
    Deferred(oneshot::Receiver<Result<String>>),
}

#[derive(Default)]
struct Script {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<PostRequest>>,
}

/// Transport double: replies are consumed in FIFO order, one per request.
///
/// A request with no scripted reply left fails as a transport error.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<Script>,
}

impl ScriptedTransport {
    /// Create a transport with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response body.
    pub fn reply_body(&self, body: impl Into<String>) -> &Self {
        self.push(Reply::Ready(Ok(body.into())))
    }

    /// Queue a JSON response body.
    pub fn reply_json(&self, body: &Value) -> &Self {
        self.reply_body(body.to_string())
    }

    /// Queue a transport failure.
    pub fn fail(&self, error: GraphqlClientError) -> &Self {
        self.push(Reply::Ready(Err(error)))
    }

    /// Queue a reply the test completes later.
    #[must_use]
    pub fn defer(&self) -> DeferredReply {
        let (sender, receiver) = oneshot::channel();
        self.push(Reply::Deferred(receiver));
        DeferredReply { sender }
    }

    /// Requests seen so far, in send order.
    #[must_use]
    pub fn requests(&self) -> Vec<PostRequest> {
        self.script.requests.borrow().clone()
    }

    /// Number of requests seen so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.script.requests.borrow().len()
    }

    /// Most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<PostRequest> {
        self.script.requests.borrow().last().cloned()
    }

    fn push(&self, reply: Reply) -> &Self {
        self.script.replies.borrow_mut().push_back(reply);
        self
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn post(&self, request: PostRequest) -> Result<String> {
        self.script.requests.borrow_mut().push(request);
        let reply = self.script.replies.borrow_mut().pop_front();
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Deferred(receiver)) => receiver.await.unwrap_or_else(|_| {
                Err(GraphqlClientError::transport("deferred reply dropped"))
            }),
            None => Err(GraphqlClientError::transport("no scripted reply")),
        }
    }
}

/// Handle for a reply queued with [`ScriptedTransport::defer`].
#[derive(Debug)]
pub struct DeferredReply {
    sender: oneshot::Sender<Result<String>>,
}

impl DeferredReply {
    /// Release the pending request with a response body.
    pub fn complete(self, body: impl Into<String>) {
        let _ = self.sender.send(Ok(body.into()));
    }

    /// Release the pending request with a transport failure.
    pub fn fail(self, error: GraphqlClientError) {
        let _ = self.sender.send(Err(error));
    }
}
