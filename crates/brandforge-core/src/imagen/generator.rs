//! Generator façade over the image provider.
//!
//! Resolves the user's selections into instruction text and an aspect
//! ratio, issues exactly one request per call, and returns the normalized
//! image. Errors pass through untouched, so the caller keeps its previous
//! image until a new one fully succeeds.

use super::provider::{ImageProvider, ImageRequest, InlineImage};
use crate::catalog::Catalogs;
use crate::error::GenerationError;
use crate::prompt;
use crate::types::{GeneratedImage, GenerationConfig};

/// Aspect ratio used when the configured id matches no catalog entry.
/// The request field is mandatory on the wire, so unlike prompt text this
/// cannot simply be omitted.
const FALLBACK_ASPECT_RATIO: &str = "1:1";

/// Entry point for generation and refinement requests.
pub struct Generator {
    provider: Box<dyn ImageProvider>,
}

impl Generator {
    pub fn new(provider: Box<dyn ImageProvider>) -> Self {
        Self { provider }
    }

    /// Issue an initial generation request.
    pub async fn generate(
        &self,
        config: &GenerationConfig,
        catalogs: &Catalogs,
    ) -> Result<GeneratedImage, GenerationError> {
        let request = ImageRequest {
            prompt: prompt::generation_prompt(config, catalogs),
            aspect_ratio: resolve_aspect_ratio(config, catalogs),
            input_image: None,
        };

        tracing::info!(
            provider = self.provider.name(),
            graphic_type = %config.graphic_type_id,
            aspect_ratio = %request.aspect_ratio,
            "Generating image"
        );
        let image = self.provider.generate(&request).await?;
        tracing::info!(
            mime_type = %image.mime_type,
            encoded_len = image.data.len(),
            "Image generated"
        );
        Ok(image)
    }

    /// Request an edit of an existing image per the given instructions,
    /// preserving the originally selected style and palette.
    pub async fn refine(
        &self,
        current: &GeneratedImage,
        instructions: &str,
        config: &GenerationConfig,
        catalogs: &Catalogs,
    ) -> Result<GeneratedImage, GenerationError> {
        let request = ImageRequest {
            prompt: prompt::refinement_prompt(instructions, config, catalogs),
            aspect_ratio: resolve_aspect_ratio(config, catalogs),
            input_image: Some(InlineImage {
                data: current.data.clone(),
                mime_type: current.mime_type.clone(),
            }),
        };

        tracing::info!(
            provider = self.provider.name(),
            aspect_ratio = %request.aspect_ratio,
            "Refining image"
        );
        let image = self.provider.generate(&request).await?;
        tracing::info!(
            mime_type = %image.mime_type,
            encoded_len = image.data.len(),
            "Image refined"
        );
        Ok(image)
    }
}

fn resolve_aspect_ratio(config: &GenerationConfig, catalogs: &Catalogs) -> String {
    catalogs
        .aspect_ratio(&config.aspect_ratio_id)
        .map(|a| a.id.clone())
        .unwrap_or_else(|| FALLBACK_ASPECT_RATIO.to_string())
}
