//! Core value types: the per-request configuration snapshot and the
//! normalized generated image.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Snapshot of the user's choices at the moment a request is issued.
///
/// Option fields reference catalog entries by id; an id with no matching
/// entry degrades to a per-field fallback during prompt construction rather
/// than failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Free-text description of what the graphic should contain
    pub prompt_text: String,
    pub color_scheme_id: String,
    pub visual_style_id: String,
    pub graphic_type_id: String,
    pub aspect_ratio_id: String,
}

/// A normalized generated image.
///
/// `display_uri` is derived state, always `data:<mime_type>;base64,<data>`.
/// Both constructors go through [`GeneratedImage::from_inline`], so the
/// three fields cannot drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Data URI ready for direct display
    pub display_uri: String,
    /// Base64-encoded image bytes as returned by the API
    pub data: String,
    /// MIME type declared by the API (or the `image/png` default)
    pub mime_type: String,
}

impl GeneratedImage {
    /// Build an image result from a base64 payload and its MIME type.
    pub fn from_inline(data: String, mime_type: String) -> Self {
        let display_uri = format!("data:{mime_type};base64,{data}");
        Self {
            display_uri,
            data,
            mime_type,
        }
    }

    /// Build an image result from raw bytes (e.g. a file being re-submitted
    /// for refinement).
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        Self::from_inline(
            base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type.to_string(),
        )
    }

    /// Decode the base64 payload back into raw bytes.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(&self.data)
    }

    /// File extension matching the declared MIME type.
    ///
    /// Unrecognized MIME types map to "bin" so the payload is still saved.
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            other => {
                tracing::warn!("Unknown MIME type '{other}', saving with .bin extension");
                "bin"
            }
        }
    }
}

/// MIME type for a file extension, used when re-submitting a saved image.
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "jpeg" | "jpg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        other => {
            tracing::warn!("Unknown image extension '{other}', defaulting to image/png");
            "image/png"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uri_is_derived_from_data_and_mime() {
        let image = GeneratedImage::from_inline("QUJD".to_string(), "image/png".to_string());
        assert_eq!(
            image.display_uri,
            format!("data:{};base64,{}", image.mime_type, image.data)
        );
    }

    #[test]
    fn test_from_bytes_round_trips() {
        let bytes = [0x89u8, 0x50, 0x4E, 0x47, 0x0D, 0x0A];
        let image = GeneratedImage::from_bytes(&bytes, "image/png");
        assert_eq!(image.decode_bytes().unwrap(), bytes);
        assert!(image.display_uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_file_extension_mapping() {
        let png = GeneratedImage::from_inline("QQ==".into(), "image/png".into());
        assert_eq!(png.file_extension(), "png");
        let jpeg = GeneratedImage::from_inline("QQ==".into(), "image/jpeg".into());
        assert_eq!(jpeg.file_extension(), "jpg");
        let odd = GeneratedImage::from_inline("QQ==".into(), "application/pdf".into());
        assert_eq!(odd.file_extension(), "bin");
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("PNG"), "image/png");
        assert_eq!(mime_for_extension("jpg"), "image/jpeg");
        assert_eq!(mime_for_extension("tiff"), "image/png");
    }
}
