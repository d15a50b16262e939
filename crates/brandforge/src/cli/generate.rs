//! The `brandforge generate` command.

use std::path::PathBuf;

use brandforge_core::{provider_from_config, Config, GenerationConfig, Generator};
use clap::Args;

use super::output;

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// What the graphic should contain
    pub prompt: String,

    /// Color palette id (see `brandforge options palettes`)
    #[arg(long, default_value = "ocean")]
    pub palette: String,

    /// Visual style id
    #[arg(long, default_value = "minimal")]
    pub style: String,

    /// Graphic type id
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

/// Execute the generate command.
pub async fn execute(args: GenerateArgs, config: &Config) -> anyhow::Result<()> {
    let catalogs = config.catalogs()?;
    let request = GenerationConfig {
        prompt_text: args.prompt,
        color_scheme_id: args.palette,
        visual_style_id: args.style,
        graphic_type_id: args.graphic_type,
        aspect_ratio_id: args.aspect,
    };

    let generator = Generator::new(provider_from_config(&config.api)?);
    let image = generator.generate(&request, &catalogs).await?;

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
