//! In-memory `HttpClient` that replays scripted responses.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use apiprobe_domain::{RequestSpec, ResponseSpec};

use crate::ports::{HttpClient, HttpClientError};

type Reply = Result<ResponseSpec, HttpClientError>;

pub struct ScriptedHttpClient {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RequestSpec>>,
}

impl ScriptedHttpClient {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in order.
    #[allow(clippy::unwrap_used)]
    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    #[allow(clippy::unwrap_used)]
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpClientError::Other("no scripted reply".to_string())));
        Box::pin(async move { reply })
    }
}
