//! Generative image API integration.
//!
//! Provides a provider abstraction over the external image model, the Gemini
//! wire client with its response extractor, and the generator façade that
//! turns user selections into requests.

pub(crate) mod gemini;
pub(crate) mod generator;
pub(crate) mod provider;

pub use gemini::GeminiProvider;
pub use generator::Generator;
pub use provider::{provider_from_config, ImageProvider, ImageRequest, InlineImage};
