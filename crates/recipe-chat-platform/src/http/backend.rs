//! HTTP adapter for the chat service.
//!
//! Implements both the history and the chat transport ports against the
//! service's JSON API. Uses browser `fetch()` via gloo-net for WASM
//! compatibility.

use std::future::Future;

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

use recipe_chat_core::ports::{ChatRequest, ChatTransportPort, HistoryPort};
use recipe_chat_types::{
    ChatError, Result,
    config::ChatConfig,
    history::ExchangeRecord,
    message::ChatReply,
};
use super::payload::{decode_chat_reply, decode_history};

/// Client for `GET /conversations/{user_id}` and `POST /chat`.
pub struct HttpBackend {
    base_url: String,
    timeout_ms: Option<u64>,
}

impl HttpBackend {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    /// The user id is percent-encoded as a single path segment.
    pub fn history_url(&self, user_id: &str) -> String {
        let segment = String::from(js_sys::encode_uri_component(user_id));
        format!("{}/conversations/{}", self.base_url, segment)
    }

    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }

    /// Run `fut`, failing with `ChatError::Timeout` if it outlives the
    /// configured deadline.
    async fn with_timeout<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        let Some(ms) = self.timeout_ms else {
            return fut.await;
        };
        let timer = TimeoutFuture::new(u32::try_from(ms).unwrap_or(u32::MAX));
        futures::pin_mut!(fut, timer);
        match future::select(fut, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ChatError::Timeout(ms)),
        }
    }
}

/// Turn a non-2xx response into `ChatError::Http`, otherwise read the body.
async fn read_body(response: Response) -> Result<String> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(ChatError::Http { status, body });
    }
    response
        .text()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))
}

#[async_trait(?Send)]
impl HistoryPort for HttpBackend {
    async fn load_history(&self, user_id: &str) -> Result<Vec<ExchangeRecord>> {
        let url = self.history_url(user_id);
        log::debug!("GET {}", url);

        let body = self
            .with_timeout(async {
                let response = Request::get(&url)
                    .send()
                    .await
                    .map_err(|e| ChatError::Network(e.to_string()))?;
                read_body(response).await
            })
            .await?;

        decode_history(&body)
    }
}

#[async_trait(?Send)]
impl ChatTransportPort for HttpBackend {
    async fn send_message(&self, req: &ChatRequest) -> Result<ChatReply> {
        let url = self.chat_url();
        log::debug!("POST {} ({} chars)", url, req.message.len());

        let body = self
            .with_timeout(async {
                let response = Request::post(&url)
                    .json(req)
                    .map_err(|e| ChatError::Network(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| ChatError::Network(e.to_string()))?;
                log::debug!("POST {} -> {}", url, response.status());
                read_body(response).await
            })
            .await?;

        decode_chat_reply(&body)
    }

    fn transport_name(&self) -> &str {
        "http"
    }
}
