use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Serialize;
use tracing::{debug, error};

use crate::config::Settings;
use crate::error::{PipelineError, Result};

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

/// Seam between the generation pipeline and whatever supplies raw vendor
/// responses. The pipeline never sees transport details, only the body.
#[async_trait]
pub trait ChatVendor: Send + Sync {
    /// Send a system + user message pair and return the RAW response body.
    /// Envelope unwrapping is the pipeline's job, not the client's.
    async fn chat(&self, system: &str, user: &str) -> Result<String>;
}

pub struct DeepSeekClient {
    http: Client,
    settings: Settings,
}

impl DeepSeekClient {
    pub fn new(settings: Settings) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_millis(settings.connect_timeout_ms))
            .timeout(Duration::from_millis(settings.read_timeout_ms))
            .build()
            .map_err(|e| PipelineError::Network(e.to_string()))?;
        Ok(DeepSeekClient { http, settings })
    }
}

#[async_trait]
impl ChatVendor for DeepSeekClient {
    async fn chat(&self, system: &str, user: &str) -> Result<String> {
        let req = ChatRequest {
            model: &self.settings.deepseek_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: self.settings.max_tokens,
            temperature: 0.2,
            stream: false,
        };

        let url = format!("{}/chat/completions", self.settings.deepseek_api_base);
        debug!("\u{2192} DeepSeek request: model = {}", req.model);
        let res = self
            .http
            .post(&url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.settings.deepseek_api_key),
            )
            .json(&req)
            .send()
            .await
            .map_err(|e| {
                error!("network error to DeepSeek: {e}");
                PipelineError::Network(e.to_string())
            })?;

        let status = res.status();
        let bytes = res
            .bytes()
            .await
            .map_err(|e| PipelineError::Network(e.to_string()))?;
        debug!(
            status = %status,
            "\u{2190} body = {}",
            String::from_utf8_lossy(&bytes[..bytes.len().min(1024)])
        );

        if !status.is_success() {
            return Err(PipelineError::Http(status.as_u16()));
        }

        let body = String::from_utf8_lossy(&bytes).to_string();
        if body.trim().is_empty() {
            return Err(PipelineError::EmptyResponse);
        }
        Ok(body)
    }
}
