//! Brandforge Core - brand graphic generation library.
//!
//! Brandforge turns a set of brand choices (color palette, visual style,
//! graphic type, aspect ratio) plus a free-text prompt into instructions for
//! a generative image model, issues the request, and normalizes the reply
//! into a displayable image that can be refined iteratively.
//!
//! # Architecture
//!
//! ```text
//! Selections → Prompt builder → generateContent call → Extractor → GeneratedImage
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use brandforge_core::{provider_from_config, Config, GenerationConfig, Generator};
//!
//! #[tokio::main]
//! async fn main() -> brandforge_core::Result<()> {
//!     let config = Config::load()?;
//!     let catalogs = config.catalogs()?;
//!     let generator = Generator::new(provider_from_config(&config.api)?);
//!
//!     let request = GenerationConfig {
//!         prompt_text: "a lighthouse on a cliff".into(),
//!         color_scheme_id: "ocean".into(),
//!         visual_style_id: "minimal".into(),
//!         graphic_type_id: "poster".into(),
//!         aspect_ratio_id: "9:16".into(),
//!     };
//!     let image = generator.generate(&request, &catalogs).await?;
//!     println!("{}", image.mime_type);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod error;
pub mod imagen;
pub mod prompt;
pub mod types;

// Re-exports for convenient access
pub use catalog::{AspectRatio, Catalogs, ColorScheme, GraphicType, VisualStyle};
pub use config::{ApiConfig, Config, LoggingConfig, OutputConfig};
pub use error::{
    BrandforgeError, CatalogError, ConfigError, GenerationError, GenerationResult, Result,
};
pub use imagen::{provider_from_config, GeminiProvider, Generator, ImageProvider, ImageRequest,
    InlineImage};
pub use types::{mime_for_extension, GeneratedImage, GenerationConfig};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_config_builds_catalogs() {
        let config = Config::default();
        let catalogs = config.catalogs().unwrap();
        assert!(catalogs.color_scheme("ocean").is_some());
    }
}
