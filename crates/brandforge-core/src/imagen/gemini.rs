//! Gemini image provider using the `generateContent` API.
//!
//! Sends the instruction text (plus the prior image for refinement) as
//! content parts and unpacks the reply into a normalized image result.
//!
//! The reply can legitimately take three shapes: an inline-data part with
//! image bytes, a text-only part where the model explains itself instead of
//! drawing, or no usable content at all. [`extract_image`] classifies the
//! first candidate into exactly one of those branches so callers can
//! distinguish all three.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::provider::{ImageProvider, ImageRequest};
use crate::error::GenerationError;
use crate::types::GeneratedImage;

/// MIME type assumed when an inline-data part does not declare one.
const DEFAULT_MIME_TYPE: &str = "image/png";

/// Gemini provider for image generation and editing.
pub struct GeminiProvider {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a provider with a client-level transport timeout.
    pub fn new(
        endpoint: &str,
        api_key: &str,
        model: &str,
        timeout_ms: u64,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| GenerationError::Transport {
                message: format!("Failed to build HTTP client: {e}"),
                status_code: None,
            })?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
        })
    }
}

// --- Request types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfigBody,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataBody,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataBody {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfigBody {
    response_modalities: Vec<String>,
    image_config: ImageConfigBody,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfigBody {
    aspect_ratio: String,
}

// --- Response types ---

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    mime_type: Option<String>,
    data: String,
}

/// What a candidate's content actually carried.
#[derive(Debug)]
enum ReplyPayload {
    /// Inline image data
    Image(InlineData),
    /// Text-only reply: the model explained itself instead of drawing
    Refusal(String),
    /// Neither image nor text
    Empty,
}

/// Classify a candidate's parts into exactly one payload branch.
///
/// The first part carrying inline data wins and ends the scan. Text is only
/// consulted when no part carries image data, and the first text part wins.
fn classify(parts: Vec<Part>) -> ReplyPayload {
    let mut first_text: Option<String> = None;
    for part in parts {
        if let Some(inline) = part.inline_data {
            return ReplyPayload::Image(inline);
        }
        if first_text.is_none() {
            first_text = part.text;
        }
    }
    match first_text {
        Some(text) => ReplyPayload::Refusal(text),
        None => ReplyPayload::Empty,
    }
}

/// Unpack a `generateContent` reply into a normalized image result.
pub(crate) fn extract_image(
    response: GenerateContentResponse,
) -> Result<GeneratedImage, GenerationError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GenerationError::EmptyResponse)?;
    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();

    match classify(parts) {
        ReplyPayload::Image(inline) => {
            let mime_type = inline
                .mime_type
                .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());
            Ok(GeneratedImage::from_inline(inline.data, mime_type))
        }
        ReplyPayload::Refusal(text) => Err(GenerationError::ModelRefused(text)),
        ReplyPayload::Empty => Err(GenerationError::NoImageData),
    }
}

#[async_trait]
impl ImageProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, GenerationError> {
        let mut parts = vec![RequestPart::Text {
            text: request.prompt.clone(),
        }];
        if let Some(image) = &request.input_image {
            parts.push(RequestPart::InlineData {
                inline_data: InlineDataBody {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                },
            });
        }

        let body = GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfigBody {
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
                image_config: ImageConfigBody {
                    aspect_ratio: request.aspect_ratio.clone(),
                },
            },
        };

        let url = format!("{}/{}:generateContent", self.endpoint, self.model);
        tracing::debug!(
            model = %self.model,
            refinement = request.input_image.is_some(),
            "Sending generateContent request"
        );

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport {
                message: format!("Gemini request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Transport {
                message: format!("Gemini HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let parsed: GenerateContentResponse =
            resp.json().await.map_err(|e| GenerationError::Transport {
                message: format!("Failed to parse Gemini response: {e}"),
                status_code: None,
            })?;

        extract_image(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_part(data: &str, mime_type: Option<&str>) -> Part {
        Part {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.map(String::from),
                data: data.to_string(),
            }),
        }
    }

    fn text_part(text: &str) -> Part {
        Part {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    fn response_with_parts(parts: Vec<Part>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent { parts }),
            }],
        }
    }

    #[test]
    fn test_extract_image_part_wins_over_text() {
        let response = response_with_parts(vec![
            image_part("aW1hZ2U=", Some("image/webp")),
            text_part("Here is your image."),
        ]);
        let image = extract_image(response).unwrap();
        assert_eq!(image.data, "aW1hZ2U=");
        assert_eq!(image.mime_type, "image/webp");
    }

    #[test]
    fn test_extract_first_image_part_wins() {
        let response = response_with_parts(vec![
            text_part("Two renditions follow."),
            image_part("Zmlyc3Q=", Some("image/png")),
            image_part("c2Vjb25k", Some("image/jpeg")),
        ]);
        let image = extract_image(response).unwrap();
        assert_eq!(image.data, "Zmlyc3Q=");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_extract_text_only_is_refusal_with_verbatim_text() {
        let response = response_with_parts(vec![text_part("I cannot create this.")]);
        match extract_image(response) {
            Err(GenerationError::ModelRefused(text)) => {
                assert_eq!(text, "I cannot create this.");
            }
            other => panic!("Expected ModelRefused, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_no_candidates_is_empty_response() {
        let response = GenerateContentResponse { candidates: vec![] };
        assert!(matches!(
            extract_image(response),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_extract_empty_parts_is_no_image_data() {
        let response = response_with_parts(vec![]);
        assert!(matches!(
            extract_image(response),
            Err(GenerationError::NoImageData)
        ));
    }

    #[test]
    fn test_extract_missing_content_is_no_image_data() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate { content: None }],
        };
        assert!(matches!(
            extract_image(response),
            Err(GenerationError::NoImageData)
        ));
    }

    #[test]
    fn test_extract_missing_mime_type_defaults_to_png() {
        let response = response_with_parts(vec![image_part("cGl4ZWxz", None)]);
        let image = extract_image(response).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert!(image.display_uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_extract_display_uri_matches_template() {
        let response = response_with_parts(vec![image_part("cGl4ZWxz", Some("image/jpeg"))]);
        let image = extract_image(response).unwrap();
        assert_eq!(image.display_uri, "data:image/jpeg;base64,cGl4ZWxz");
    }

    #[test]
    fn test_deserialize_camel_case_reply() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Rendering follows."},
                        {"inlineData": {"mimeType": "image/png", "data": "QUJD"}}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let image = extract_image(response).unwrap();
        assert_eq!(image.data, "QUJD");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_deserialize_absent_candidates_field() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            extract_image(response),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_request_body_wire_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    RequestPart::Text {
                        text: "edit this".to_string(),
                    },
                    RequestPart::InlineData {
                        inline_data: InlineDataBody {
                            mime_type: "image/png".to_string(),
                            data: "QUJD".to_string(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfigBody {
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
                image_config: ImageConfigBody {
                    aspect_ratio: "16:9".to_string(),
                },
            },
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "edit this");
        assert_eq!(
            value["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(
            value["generationConfig"]["imageConfig"]["aspectRatio"],
            "16:9"
        );
        assert_eq!(value["generationConfig"]["responseModalities"][0], "IMAGE");
    }

    #[test]
    fn test_provider_builds_with_timeout() {
        let provider = GeminiProvider::new(
            "https://generativelanguage.googleapis.com/v1beta/models/",
            "key",
            "gemini-2.5-flash-image",
            5000,
        )
        .unwrap();
        assert_eq!(provider.name(), "gemini");
        // Trailing slash on the endpoint is normalized away
        assert!(!provider.endpoint.ends_with('/'));
    }
}
