//! Guided session for bare `brandforge` invocations on a TTY.
//!
//! Walks the user through palette/style/type/aspect selection and a content
//! prompt, generates, then offers refinement of the current image until the
//! user exits. Each request is awaited before the next action is offered, so
//! at most one request is ever in flight, and a failed request leaves the
//! current image untouched.

use brandforge_core::{
    provider_from_config, Catalogs, Config, GenerationConfig, Generator,
};
use console::Style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use super::{output, theme};

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
///
/// Use this to wrap `interact_text()` calls that lack an `_opt` variant, so
/// interrupts exit the current flow cleanly instead of panicking.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Entry point for the guided session.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    theme::print_banner();

    let catalogs = config.catalogs()?;
    let generator = Generator::new(provider_from_config(&config.api)?);
    let theme = theme::brandforge_theme();
    let error_style = Style::new().for_stderr().red();

    loop {
        let Some(request) = build_request(&theme, &catalogs)? else {
            return Ok(());
        };

        eprintln!("  Generating...");
        let mut current = match generator.generate(&request, &catalogs).await {
            Ok(image) => image,
            Err(e) => {
                eprintln!("  {}", error_style.apply_to(format!("✗ {e}")));
                continue;
            }
        };
        eprintln!("  ✓ Image ready ({})", current.mime_type);

        // Refinement loop over the current image. The image is replaced
        // wholesale on success and kept on failure.
        loop {
            let selection = Select::with_theme(&theme)
                .with_prompt("Next")
                .items(&["Refine this image", "Save image", "Start over", "Exit"])
                .default(0)
                .interact_opt()?;

            match selection {
                Some(0) => {
                    let Some(instructions) = handle_interrupt(
                        Input::<String>::with_theme(&theme)
                            .with_prompt("What should change?")
                            .interact_text(),
                    )?
                    else {
                        break;
                    };

                    eprintln!("  Refining...");
                    match generator
                        .refine(&current, &instructions, &request, &catalogs)
                        .await
                    {
                        Ok(image) => {
                            current = image;
                            eprintln!("  ✓ Updated ({})", current.mime_type);
                        }
                        Err(e) => eprintln!("  {}", error_style.apply_to(format!("✗ {e}"))),
                    }
                }
                Some(1) => {
                    match output::save_image(&current, None, &request.graphic_type_id, config) {
                        Ok(path) => eprintln!("  ✓ Saved to {}", path.display()),
                        Err(e) => eprintln!("  {}", error_style.apply_to(format!("✗ {e}"))),
                    }
                }
                Some(2) => break,
                Some(3) | None => return Ok(()),
                _ => unreachable!(),
            }
        }
    }
}

/// Ask for the four selections plus the content prompt.
///
/// Returns `None` when the user backs out with Esc or Ctrl+C.
fn build_request(
    theme: &ColorfulTheme,
    catalogs: &Catalogs,
) -> anyhow::Result<Option<GenerationConfig>> {
    let Some(palette) = pick(theme, "Color palette", catalogs.color_schemes(), |s| {
        format!("{} ({})", s.name, s.colors.join(", "))
    })?
    else {
        return Ok(None);
    };

    let Some(style) = pick(theme, "Visual style", catalogs.styles(), |s| {
        format!("{} ({})", s.name, s.description)
    })?
    else {
        return Ok(None);
    };

    let Some(graphic_type) = pick(theme, "Graphic type", catalogs.graphic_types(), |t| {
        t.name.clone()
    })?
    else {
        return Ok(None);
    };

    let Some(aspect) = pick(theme, "Aspect ratio", catalogs.aspect_ratios(), |a| {
        format!("{} ({})", a.name, a.id)
    })?
    else {
        return Ok(None);
    };

    let Some(prompt_text) = handle_interrupt(
        Input::<String>::with_theme(theme)
            .with_prompt("Describe the graphic")
            .interact_text(),
    )?
    else {
        return Ok(None);
    };

    Ok(Some(GenerationConfig {
        prompt_text,
        color_scheme_id: palette.id.clone(),
        visual_style_id: style.id.clone(),
        graphic_type_id: graphic_type.id.clone(),
        aspect_ratio_id: aspect.id.clone(),
    }))
}

/// Present a catalog as a selection menu, returning the chosen entry.
fn pick<'a, T>(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &'a [T],
    label: impl Fn(&T) -> String,
) -> anyhow::Result<Option<&'a T>> {
    let labels: Vec<String> = items.iter().map(label).collect();
    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(selection.map(|i| &items[i]))
}
