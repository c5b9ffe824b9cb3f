//! Configuration file schema

use docquery_application::RetryPolicy;
use docquery_domain::{ModelRegistry, ModelSpec, PayloadShape};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration loaded from TOML
///
/// # Example
///
/// ```toml
/// [api]
/// base_url = "https://api-inference.huggingface.co/models/"
/// token_env = "HUGGINGFACEHUB_API_TOKEN"
///
/// [retry]
/// max_attempts = 3
/// backoff_secs = 10
///
/// [[models]]
/// key = "fb-bart"
/// endpoint = "facebook/bart-large-cnn"
/// shape = "raw-text"
///
/// [[models]]
/// key = "roberta"
/// endpoint = "deepset/roberta-base-squad2"
/// shape = "question-context"
/// question = "Who is mentioned in the document?"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api: FileApiConfig,
    pub retry: FileRetryConfig,
    /// Model table; empty means the built-in registry.
    pub models: Vec<FileModelConfig>,
}

impl FileConfig {
    /// Build the model registry this configuration describes.
    pub fn registry(&self) -> ModelRegistry {
        if self.models.is_empty() {
            return ModelRegistry::builtin();
        }
        ModelRegistry::new(self.models.iter().map(FileModelConfig::to_spec).collect())
    }
}

/// `[api]` section - where requests go and which env var holds the token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    pub base_url: String,
    pub token_env: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: crate::hf::DEFAULT_API_URL.to_string(),
            token_env: "HUGGINGFACEHUB_API_TOKEN".to_string(),
        }
    }
}

/// `[retry]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    pub max_attempts: u32,
    pub backoff_secs: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: RetryPolicy::DEFAULT_MAX_ATTEMPTS,
            backoff_secs: RetryPolicy::DEFAULT_BACKOFF.as_secs(),
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_secs(self.backoff_secs))
    }
}

/// One `[[models]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileModelConfig {
    pub key: String,
    pub endpoint: String,
    pub shape: PayloadShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl FileModelConfig {
    fn to_spec(&self) -> ModelSpec {
        let spec = ModelSpec::new(&self.key, &self.endpoint, self.shape);
        match &self.question {
            Some(q) => spec.with_question(q),
            None => spec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.api.base_url, crate::hf::DEFAULT_API_URL);
        assert_eq!(config.api.token_env, "HUGGINGFACEHUB_API_TOKEN");
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.backoff_secs, 10);
        assert!(config.models.is_empty());
    }

    #[test]
    fn test_empty_models_falls_back_to_builtin() {
        let registry = FileConfig::default().registry();
        assert!(registry.resolve("fb-bart").is_ok());
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "http://localhost:8080/models/"

[retry]
max_attempts = 5
backoff_secs = 0

[[models]]
key = "summarizer"
endpoint = "org/summarizer"
shape = "raw-text"

[[models]]
key = "qa"
endpoint = "org/qa"
shape = "question-context"
question = "Who is mentioned in the document?"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/models/");
        // token_env keeps its default when the key is omitted
        assert_eq!(config.api.token_env, "HUGGINGFACEHUB_API_TOKEN");
        assert_eq!(config.retry.to_policy().max_attempts, 5);

        let registry = config.registry();
        assert_eq!(registry.keys(), vec!["summarizer", "qa"]);
        assert_eq!(
            registry.resolve("qa").unwrap().question(),
            Some("Who is mentioned in the document?")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[retry]
max_attempts = 1
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.retry.max_attempts, 1);
        assert_eq!(config.retry.backoff_secs, 10);
    }
}
