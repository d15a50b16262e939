//! Error types for the Brandforge generation core.
//!
//! The generation taxonomy distinguishes the three ways the model API can
//! legitimately answer without producing an image (no candidates, a textual
//! refusal, content with neither image nor text) from plain transport
//! failures, so callers can show a precise message for each.

use thiserror::Error;

/// Top-level error type for Brandforge operations.
#[derive(Error, Debug)]
pub enum BrandforgeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog mutation errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Generation request errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize configuration back to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Catalog mutation errors.
///
/// Ids are unique within each catalog; inserting a second entry with an
/// existing id is rejected rather than silently replacing the first.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// An entry with this id already exists in the named catalog
    #[error("Duplicate {catalog} id: {id}")]
    DuplicateId { catalog: &'static str, id: String },
}

/// Errors from a single generation or refinement request.
///
/// None of these are retried by the core; each terminates the pending
/// request and is surfaced to the caller as-is.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The API returned no candidates at all
    #[error("The model returned an empty response")]
    EmptyResponse,

    /// The model answered with explanatory text instead of image data.
    /// The text is carried verbatim so the caller can display it.
    #[error("The model declined to generate an image: {0}")]
    ModelRefused(String),

    /// Candidates were present but carried neither image nor text content
    #[error("The model response contained no image data")]
    NoImageData,

    /// The HTTP call itself failed (network, auth, rate limit). The
    /// underlying cause is wrapped, not classified further.
    #[error("Image request failed: {message}")]
    Transport {
        message: String,
        status_code: Option<u16>,
    },
}

/// Convenience type alias for Brandforge results.
pub type Result<T> = std::result::Result<T, BrandforgeError>;

/// Convenience type alias for generation-request results.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
