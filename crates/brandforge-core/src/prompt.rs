//! Prompt construction for generation and refinement requests.
//!
//! Both builders are pure: they resolve the catalog ids they are handed and
//! assemble instruction text, nothing else. Missing ids degrade per field
//! instead of failing, so a request stays best-effort even when an option
//! was removed from its catalog after being selected.
//!
//! The two builders deliberately use different fallbacks. Generation
//! substitutes generic placeholders ("standard colors", "clean style",
//! "image"). Refinement substitutes empty strings: the image being edited
//! already carries the original constraints.

use crate::catalog::Catalogs;
use crate::types::GenerationConfig;

const FALLBACK_COLORS: &str = "standard colors";
const FALLBACK_STYLE: &str = "clean style";
const FALLBACK_TYPE: &str = "image";

/// Build the instruction text for an initial generation request.
pub fn generation_prompt(config: &GenerationConfig, catalogs: &Catalogs) -> String {
    let graphic = catalogs
        .graphic_type(&config.graphic_type_id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| FALLBACK_TYPE.to_string());
    let style = catalogs
        .style(&config.visual_style_id)
        .map(|s| s.description.clone())
        .unwrap_or_else(|| FALLBACK_STYLE.to_string());
    let colors = catalogs
        .color_scheme(&config.color_scheme_id)
        .map(|s| s.colors.join(", "))
        .unwrap_or_else(|| FALLBACK_COLORS.to_string());

    format!(
        "Create a {graphic} in a {style}.\n\
         Use ONLY the following colors: {colors}. The color palette is a strict requirement.\n\
         Content: {prompt}\n\
         Render at high quality with a clean, professional finish.",
        prompt = config.prompt_text
    )
    .trim()
    .to_string()
}

/// Build the instruction text for refining an existing image.
///
/// The image bytes themselves are attached at request assembly, not here.
pub fn refinement_prompt(
    instructions: &str,
    config: &GenerationConfig,
    catalogs: &Catalogs,
) -> String {
    let style = catalogs
        .style(&config.visual_style_id)
        .map(|s| s.description.clone())
        .unwrap_or_default();
    let colors = catalogs
        .color_scheme(&config.color_scheme_id)
        .map(|s| s.colors.join(", "))
        .unwrap_or_default();

    format!(
        "Edit the provided image: {instructions}\n\
         Keep the existing composition. Preserve the {style} and stay strictly \
         within the color palette: {colors}."
    )
    .trim()
    .to_string()
}
