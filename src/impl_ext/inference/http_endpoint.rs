use async_trait::async_trait;

use crate::errors::ReportError;

use super::{config::InferenceConfig, narrator::TextGenerationDatasource};

#[derive(serde_derive::Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f64,
    max_tokens: u32,
}

#[derive(serde_derive::Deserialize)]
struct GenerationResponse {
    text: String,
}

/// HTTP client for the text-generation endpoint: posts the prompt and
/// generation parameters as JSON and reads back `{"text": ...}`. Every
/// failure mode (network, auth, rate limit, malformed body) maps to
/// `ExternalService`, which the narrator converts into a local fallback.
pub struct HttpTextGenerationDatasource {
    client: reqwest::Client,
}

impl HttpTextGenerationDatasource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTextGenerationDatasource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerationDatasource for HttpTextGenerationDatasource {
    async fn generate(
        &self,
        config: &InferenceConfig,
        prompt: &str,
    ) -> Result<String, ReportError> {
        let response = self
            .client
            .post(&config.endpoint_url)
            .bearer_auth(&config.api_key)
            .json(&GenerationRequest {
                model: &config.model,
                prompt,
                temperature: config.temperature,
                max_tokens: config.max_tokens,
            })
            .send()
            .await
            .map_err(|e| ReportError::ExternalService {
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ReportError::ExternalService {
                details: format!("endpoint returned status {}", response.status()),
            });
        }

        let body: GenerationResponse =
            response
                .json()
                .await
                .map_err(|e| ReportError::ExternalService {
                    details: e.to_string(),
                })?;
        Ok(body.text)
    }
}
