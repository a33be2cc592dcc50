//! In-memory transport for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use venrate_types::{Transport, TransportError, TransportRequest, TransportResponse};

type Reply = Result<TransportResponse, TransportError>;

/// Transport that records every request and answers from a script.
///
/// Queued replies are consumed in order; once the queue is empty the
/// fallback reply (if any) is returned for every further request.
pub struct MockTransport {
    queue: Mutex<VecDeque<Reply>>,
    fallback: Option<Reply>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    /// A transport with nothing scripted; every request fails.
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request with HTTP 200 and `body`.
    pub fn with_body(body: impl Into<String>) -> Self {
        let mut mock = Self::new();
        mock.fallback = Some(Ok(TransportResponse {
            status: 200,
            body: body.into(),
        }));
        mock
    }

    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.queue.lock().unwrap().push_back(Ok(TransportResponse {
            status,
            body: body.into(),
        }));
    }

    pub fn push_error(&self, error: TransportError) {
        self.queue.lock().unwrap().push_back(Err(error));
    }

    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);

        let scripted = self.queue.lock().unwrap().pop_front();
        scripted
            .or_else(|| self.fallback.clone())
            .unwrap_or_else(|| {
                Err(TransportError::Request {
                    url,
                    message: "no mock response scripted".into(),
                })
            })
    }
}
