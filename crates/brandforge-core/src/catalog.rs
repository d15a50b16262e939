//! Option catalogs: the selectable palettes, styles, graphic types, and
//! aspect ratios a graphic can be generated from.
//!
//! Catalogs are plain in-memory collections looked up by id. The library
//! ships seed catalogs; the caller owns its `Catalogs` value and may append
//! entries at runtime (or via config tables). Prompt and request code never
//! touches a catalog except through explicit parameters, which keeps the
//! generation logic testable in isolation.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A named brand color palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Stable identifier used in configs and CLI flags
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Hex color values, ordered by prominence
    pub colors: Vec<String>,
}

/// A visual style, with the phrase describing it to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualStyle {
    pub id: String,
    pub name: String,
    /// Prompt-facing description, e.g. "clean minimalist flat design"
    pub description: String,
}

/// A kind of graphic the model can be asked for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphicType {
    pub id: String,
    /// Prompt-facing noun phrase, e.g. "social media post graphic"
    pub name: String,
}

/// An output aspect ratio. The id doubles as the value sent to the API
/// ("1:1", "16:9", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspectRatio {
    pub id: String,
    pub name: String,
}

/// The four option catalogs, bundled so they can be passed across call
/// boundaries as one read-only snapshot.
#[derive(Debug, Clone)]
pub struct Catalogs {
    color_schemes: Vec<ColorScheme>,
    styles: Vec<VisualStyle>,
    graphic_types: Vec<GraphicType>,
    aspect_ratios: Vec<AspectRatio>,
}

impl Catalogs {
    /// Empty catalogs, for callers that supply everything themselves.
    pub fn empty() -> Self {
        Self {
            color_schemes: Vec::new(),
            styles: Vec::new(),
            graphic_types: Vec::new(),
            aspect_ratios: Vec::new(),
        }
    }

    /// The seed catalogs shipped with the library.
    pub fn builtin() -> Self {
        let mut catalogs = Self::empty();

        for (id, name, colors) in [
            ("ocean", "Ocean", &["#0B3954", "#087E8B", "#BFD7EA"][..]),
            ("sunset", "Sunset", &["#F25C05", "#F28705", "#732002"][..]),
            ("forest", "Forest", &["#1E3F20", "#4A7856", "#94ECBE"][..]),
            ("berry", "Berry", &["#4A1942", "#893168", "#EFD9CE"][..]),
            ("monochrome", "Monochrome", &["#111111", "#555555", "#F5F5F5"][..]),
        ] {
            catalogs.color_schemes.push(ColorScheme {
                id: id.to_string(),
                name: name.to_string(),
                colors: colors.iter().map(|c| c.to_string()).collect(),
            });
        }

        for (id, name, description) in [
            (
                "minimal",
                "Minimal",
                "clean minimalist flat design with generous negative space",
            ),
            (
                "corporate",
                "Corporate",
                "polished corporate design with crisp lines and subtle gradients",
            ),
            (
                "retro",
                "Retro",
                "bold retro design with geometric shapes and grainy texture",
            ),
            (
                "playful",
                "Playful",
                "playful hand-drawn design with rounded shapes and loose linework",
            ),
            (
                "editorial",
                "Editorial",
                "modern editorial design with strong typography and asymmetric layout",
            ),
        ] {
            catalogs.styles.push(VisualStyle {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
            });
        }

        for (id, name) in [
            ("logo", "logo"),
            ("banner", "banner"),
            ("social-post", "social media post graphic"),
            ("poster", "poster"),
            ("icon", "app icon"),
        ] {
            catalogs.graphic_types.push(GraphicType {
                id: id.to_string(),
                name: name.to_string(),
            });
        }

        for (id, name) in [
            ("1:1", "Square"),
            ("16:9", "Widescreen"),
            ("9:16", "Story"),
            ("4:3", "Landscape"),
            ("3:4", "Portrait"),
        ] {
            catalogs.aspect_ratios.push(AspectRatio {
                id: id.to_string(),
                name: name.to_string(),
            });
        }

        catalogs
    }

    // --- Lookups ---

    pub fn color_scheme(&self, id: &str) -> Option<&ColorScheme> {
        self.color_schemes.iter().find(|s| s.id == id)
    }

    pub fn style(&self, id: &str) -> Option<&VisualStyle> {
        self.styles.iter().find(|s| s.id == id)
    }

    pub fn graphic_type(&self, id: &str) -> Option<&GraphicType> {
        self.graphic_types.iter().find(|t| t.id == id)
    }

    pub fn aspect_ratio(&self, id: &str) -> Option<&AspectRatio> {
        self.aspect_ratios.iter().find(|a| a.id == id)
    }

    // --- Listing (for UIs and the `options` command) ---

    pub fn color_schemes(&self) -> &[ColorScheme] {
        &self.color_schemes
    }

    pub fn styles(&self) -> &[VisualStyle] {
        &self.styles
    }

    pub fn graphic_types(&self) -> &[GraphicType] {
        &self.graphic_types
    }

    pub fn aspect_ratios(&self) -> &[AspectRatio] {
        &self.aspect_ratios
    }

    // --- Runtime extension ---

    pub fn add_color_scheme(&mut self, scheme: ColorScheme) -> Result<(), CatalogError> {
        if self.color_scheme(&scheme.id).is_some() {
            return Err(CatalogError::DuplicateId {
                catalog: "palette",
                id: scheme.id,
            });
        }
        self.color_schemes.push(scheme);
        Ok(())
    }

    pub fn add_style(&mut self, style: VisualStyle) -> Result<(), CatalogError> {
        if self.style(&style.id).is_some() {
            return Err(CatalogError::DuplicateId {
                catalog: "style",
                id: style.id,
            });
        }
        self.styles.push(style);
        Ok(())
    }

    pub fn add_graphic_type(&mut self, graphic_type: GraphicType) -> Result<(), CatalogError> {
        if self.graphic_type(&graphic_type.id).is_some() {
            return Err(CatalogError::DuplicateId {
                catalog: "graphic type",
                id: graphic_type.id,
            });
        }
        self.graphic_types.push(graphic_type);
        Ok(())
    }

    pub fn add_aspect_ratio(&mut self, aspect_ratio: AspectRatio) -> Result<(), CatalogError> {
        if self.aspect_ratio(&aspect_ratio.id).is_some() {
            return Err(CatalogError::DuplicateId {
                catalog: "aspect ratio",
                id: aspect_ratio.id,
            });
        }
        self.aspect_ratios.push(aspect_ratio);
        Ok(())
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_non_empty() {
        let catalogs = Catalogs::builtin();
        assert!(!catalogs.color_schemes().is_empty());
        assert!(!catalogs.styles().is_empty());
        assert!(!catalogs.graphic_types().is_empty());
        assert!(!catalogs.aspect_ratios().is_empty());
    }

    #[test]
    fn test_builtin_ids_unique() {
        let catalogs = Catalogs::builtin();
        for list in [
            catalogs
                .color_schemes()
                .iter()
                .map(|s| s.id.clone())
                .collect::<Vec<_>>(),
            catalogs
                .styles()
                .iter()
                .map(|s| s.id.clone())
                .collect::<Vec<_>>(),
            catalogs
                .graphic_types()
                .iter()
                .map(|t| t.id.clone())
                .collect::<Vec<_>>(),
            catalogs
                .aspect_ratios()
                .iter()
                .map(|a| a.id.clone())
                .collect::<Vec<_>>(),
        ] {
            let mut sorted = list.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len(), "duplicate id in {list:?}");
        }
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let catalogs = Catalogs::builtin();
        assert_eq!(catalogs.color_scheme("ocean").unwrap().name, "Ocean");
        assert!(catalogs.color_scheme("no-such-palette").is_none());
        assert!(catalogs.style("minimal").is_some());
        assert!(catalogs.graphic_type("logo").is_some());
        assert_eq!(catalogs.aspect_ratio("16:9").unwrap().name, "Widescreen");
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalogs = Catalogs::builtin();
        let duplicate = ColorScheme {
            id: "ocean".to_string(),
            name: "Another Ocean".to_string(),
            colors: vec!["#000000".to_string()],
        };
        let err = catalogs.add_color_scheme(duplicate).unwrap_err();
        assert!(err.to_string().contains("ocean"));
        // The original entry is untouched
        assert_eq!(catalogs.color_scheme("ocean").unwrap().name, "Ocean");
    }

    #[test]
    fn test_add_appends_new_entry() {
        let mut catalogs = Catalogs::builtin();
        let before = catalogs.styles().len();
        catalogs
            .add_style(VisualStyle {
                id: "brutalist".to_string(),
                name: "Brutalist".to_string(),
                description: "raw brutalist design with heavy blocks".to_string(),
            })
            .unwrap();
        assert_eq!(catalogs.styles().len(), before + 1);
        assert!(catalogs.style("brutalist").is_some());
    }
}
