//! The `brandforge options` command - list selectable catalog entries.

use brandforge_core::{Catalogs, Config};
use clap::{Args, Subcommand};

/// Arguments for the `options` command.
#[derive(Args, Debug)]
pub struct OptionsArgs {
    #[command(subcommand)]
    pub command: Option<OptionsCommand>,
}

/// Which catalog to list. With no subcommand, all four are shown.
#[derive(Subcommand, Debug)]
pub enum OptionsCommand {
    /// Color palettes
    Palettes,
    /// Visual styles
    Styles,
    /// Graphic types
    Types,
    /// Aspect ratios
    Aspects,
}

/// Execute the options command.
pub async fn execute(args: OptionsArgs, config: &Config) -> anyhow::Result<()> {
    let catalogs = config.catalogs()?;

    match args.command {
        Some(OptionsCommand::Palettes) => print_palettes(&catalogs),
        Some(OptionsCommand::Styles) => print_styles(&catalogs),
        Some(OptionsCommand::Types) => print_types(&catalogs),
        Some(OptionsCommand::Aspects) => print_aspects(&catalogs),
        None => {
            print_palettes(&catalogs);
            println!();
            print_styles(&catalogs);
            println!();
            print_types(&catalogs);
            println!();
            print_aspects(&catalogs);
        }
    }
    Ok(())
}

fn print_palettes(catalogs: &Catalogs) {
    println!("Palettes:");
    for scheme in catalogs.color_schemes() {
        println!(
            "  {:<14} {:<14} {}",
            scheme.id,
            scheme.name,
            scheme.colors.join(", ")
        );
    }
}

fn print_styles(catalogs: &Catalogs) {
    println!("Styles:");
    for style in catalogs.styles() {
        println!("  {:<14} {:<14} {}", style.id, style.name, style.description);
    }
}

fn print_types(catalogs: &Catalogs) {
    println!("Graphic types:");
    for graphic_type in catalogs.graphic_types() {
        println!("  {:<14} {}", graphic_type.id, graphic_type.name);
    }
}

fn print_aspects(catalogs: &Catalogs) {
    println!("Aspect ratios:");
    for aspect in catalogs.aspect_ratios() {
        println!("  {:<14} {}", aspect.id, aspect.name);
    }
}
