//! Image provider trait and request types.
//!
//! Defines the interface the image model backend implements, plus the
//! factory that creates the provider from configuration.

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::GenerationError;
use crate::types::GeneratedImage;

/// Base64-encoded image attached to a refinement request.
#[derive(Debug, Clone)]
pub struct InlineImage {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g. "image/png")
    pub mime_type: String,
}

/// A single request to the image model.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    /// Natural-language instruction text
    pub prompt: String,
    /// Aspect ratio in the "W:H" form the API accepts
    pub aspect_ratio: String,
    /// Prior image to edit; `None` for initial generation
    pub input_image: Option<InlineImage>,
}

/// Trait the image model backend implements.
///
/// Uses `async_trait` because the provider is held as
/// `Box<dyn ImageProvider>` for dynamic dispatch.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Issue one request and return the normalized image.
    ///
    /// A single attempt: the core performs no retries, and a failure
    /// terminates the pending request.
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, GenerationError>;
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok()
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Create the provider described by the `[api]` config section.
pub fn provider_from_config(api: &ApiConfig) -> Result<Box<dyn ImageProvider>, GenerationError> {
    let api_key = resolve_env_var(&api.api_key).ok_or_else(|| GenerationError::Transport {
        message: "API key not set. Set GEMINI_API_KEY or api.api_key in the config.".to_string(),
        status_code: None,
    })?;
    let provider =
        super::gemini::GeminiProvider::new(&api.endpoint, &api_key, &api.model, api.timeout_ms)?;
    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_env_var() {
        // Non-reference strings pass through
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }

    #[test]
    fn test_provider_from_config_requires_key() {
        let api = ApiConfig {
            api_key: "${DEFINITELY_NOT_SET_XYZ_123}".to_string(),
            ..ApiConfig::default()
        };
        let err = match provider_from_config(&api) {
            Ok(_) => panic!("expected provider_from_config to fail without a key"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_provider_from_config_with_literal_key() {
        let api = ApiConfig {
            api_key: "literal-key".to_string(),
            ..ApiConfig::default()
        };
        let provider = provider_from_config(&api).unwrap();
        assert_eq!(provider.name(), "gemini");
    }
}
