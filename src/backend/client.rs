use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chat::ClassificationMetadata;
use crate::i18n::Language;

/// Server-issued token that correlates turns into one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of one outbound turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<ConversationId>,
}

/// Decoded reply. `response` is required; a body without it is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub conversation_id: Option<ConversationId>,
    #[serde(default)]
    pub metadata: Option<ClassificationMetadata>,
}

/// The classification and reply collaborator, invoked once per submitted turn.
#[async_trait]
pub trait ComplaintService: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

/// `ComplaintService` backed by the council chat HTTP API.
pub struct HttpComplaintClient {
    client: Client,
    endpoint: String,
}

impl HttpComplaintClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Uses a preconfigured `reqwest` client (proxy, timeouts, TLS settings).
    pub const fn with_client(endpoint: String, client: Client) -> Self {
        Self { client, endpoint }
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl ComplaintService for HttpComplaintClient {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = self.chat_url();

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        decode_response(&body)
    }
}

/// Decodes a reply body, failing if the required reply text is missing.
pub fn decode_response(body: &str) -> Result<ChatResponse> {
    serde_json::from_str(body).context("Malformed response from chat API")
}
