// In-crate transports for unit tests

use crate::error::TransportError;
use crate::http::{HttpReply, Transport};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::{mpsc, oneshot};
use url::Url;

pub fn discovery_url() -> Url {
    Url::parse("http://discovery.test/url").expect("static discovery URL")
}

/// Answers from a fixed URL → reply table; unknown URLs are unreachable.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<String, HttpReply>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, url: &str, reply: HttpReply) {
        self.replies
            .lock()
            .expect("replies lock")
            .insert(url.to_string(), reply);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<HttpReply, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .expect("replies lock")
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| TransportError::new(url.as_str(), "connection refused"))
    }
}

/// A request parked inside [`GatedTransport`] until the test answers it.
pub struct PendingRequest {
    pub url: Url,
    reply: oneshot::Sender<Result<HttpReply, TransportError>>,
}

impl PendingRequest {
    pub fn respond(self, reply: HttpReply) {
        let _ = self.reply.send(Ok(reply));
    }

    pub fn fail(self) {
        let url = self.url.to_string();
        let _ = self.reply.send(Err(TransportError::new(url, "connection reset")));
    }
}

/// Auto-answers the URLs registered with [`GatedTransport::auto_reply`] and parks
/// every other request, in issue order, on the returned receiver.
pub struct GatedTransport {
    auto: Mutex<HashMap<String, HttpReply>>,
    parked: mpsc::UnboundedSender<PendingRequest>,
}

impl GatedTransport {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PendingRequest>) {
        let (parked, pending) = mpsc::unbounded_channel();
        let transport = Self {
            auto: Mutex::new(HashMap::new()),
            parked,
        };
        (transport, pending)
    }

    pub fn auto_reply(&self, url: &str, reply: HttpReply) {
        self.auto
            .lock()
            .expect("auto lock")
            .insert(url.to_string(), reply);
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn get(&self, url: &Url) -> Result<HttpReply, TransportError> {
        let canned = self
            .auto
            .lock()
            .expect("auto lock")
            .get(url.as_str())
            .cloned();
        if let Some(reply) = canned {
            return Ok(reply);
        }

        let (reply, answer) = oneshot::channel();
        self.parked
            .send(PendingRequest {
                url: url.clone(),
                reply,
            })
            .map_err(|_| TransportError::new(url.as_str(), "test harness dropped"))?;

        answer
            .await
            .map_err(|_| TransportError::new(url.as_str(), "request abandoned"))?
    }
}
