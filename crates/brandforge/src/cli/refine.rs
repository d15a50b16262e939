//! The `brandforge refine` command - edit a previously generated image.

use std::path::PathBuf;

use anyhow::Context;
use brandforge_core::{
    mime_for_extension, provider_from_config, Config, GeneratedImage, GenerationConfig, Generator,
};
use clap::Args;

use super::output;

/// Arguments for the `refine` command.
#[derive(Args, Debug)]
pub struct RefineArgs {
    /// Previously generated image to edit
    pub image: PathBuf,

    /// Edit instructions
    pub instructions: String,

    /// Color palette id the image was generated with
    #[arg(long, default_value = "ocean")]
    pub palette: String,

    /// Visual style id the image was generated with
    #[arg(long, default_value = "minimal")]
    pub style: String,

    /// Graphic type id (used for the saved file name)
    #[arg(long = "type", default_value = "social-post")]
    pub graphic_type: String,

    /// Aspect ratio id
    #[arg(long, default_value = "1:1")]
    pub aspect: String,

    /// Output file path (defaults to a name derived from the graphic type)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print the result as JSON on stdout instead of saving a file
    #[arg(long)]
    pub json: bool,
}

/// Execute the refine command.
pub async fn execute(args: RefineArgs, config: &Config) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(&args.image)
        .await
        .with_context(|| format!("Failed to read image: {}", args.image.display()))?;
    let extension = args
        .image
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    let current = GeneratedImage::from_bytes(&bytes, mime_for_extension(extension));

    let catalogs = config.catalogs()?;
    let request = GenerationConfig {
        prompt_text: String::new(),
        color_scheme_id: args.palette,
        visual_style_id: args.style,
        graphic_type_id: args.graphic_type,
        aspect_ratio_id: args.aspect,
    };

    let generator = Generator::new(provider_from_config(&config.api)?);
    let image = generator
        .refine(&current, &args.instructions, &request, &catalogs)
        .await?;

    if args.json {
        output::print_json(&image)?;
    } else {
        let path = output::save_image(
            &image,
            args.out.as_deref(),
            &request.graphic_type_id,
            config,
        )?;
        println!("{}", path.display());
    }
    Ok(())
}
