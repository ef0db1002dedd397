use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Generator;
use crate::error::GenerationError;

/// llama-server style HTTP backend (`POST /completion`).
#[derive(Clone)]
pub struct LLMService {
    client: Client,
    base_url: String,
    n_predict: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    stream: bool,
    n_predict: usize,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    content: String,
}

impl LLMService {
    pub fn new(base_url: &str, n_predict: usize, temperature: f32) -> Self {
        Self {
            // No request timeout: a slow backend stalls the trial, it does not fail it.
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            n_predict,
            temperature,
        }
    }
}

impl Generator for LLMService {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request_body = CompletionRequest {
            prompt,
            stream: false,
            n_predict: self.n_predict,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/completion", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::Status(response.status()));
        }

        let resp_json: CompletionResponse = response.json().await?;
        Ok(resp_json.content.trim().to_string())
    }
}
