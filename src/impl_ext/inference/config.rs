use crate::errors::ReportError;

/// Settings for the optional text-generation endpoint, passed explicitly at
/// call time (no ambient global). Typically loaded from a RON file kept next
/// to the deployment's other configuration.
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
pub struct InferenceConfig {
    pub endpoint_url: String,
    pub api_key: String,
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f64 {
    0.3
}

fn default_max_tokens() -> u32 {
    512
}

impl InferenceConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ReportError> {
        ron::from_str(s).map_err(|e| ReportError::InvalidConfig {
            details: e.to_string(),
        })
    }

    pub async fn from_file<P>(path: P) -> Result<Self, ReportError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(ReportError::Read)?;
        Self::from_ron_str(&contents)
    }
}
