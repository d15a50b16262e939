//! Brandforge CLI - generate and refine brand graphics with a generative
//! image model.
//!
//! Brandforge takes a brand's palette, style, and graphic type, plus a
//! free-text prompt, and asks a generative image model for a matching
//! graphic. Generated images can be iteratively refined.
//!
//! # Usage
//!
//! ```bash
//! # Generate a social post graphic
//! brandforge generate "spring sale, 20% off" --palette sunset --type social-post
//!
//! # Refine a previously saved image
//! brandforge refine social-post-1714399551.png "make the text larger"
//!
//! # List selectable options
//! brandforge options palettes
//!
//! # Guided session
//! brandforge
//! ```

use clap::{CommandFactory, Parser, Subcommand};

mod cli;
mod logging;

/// Brandforge - generate and refine brand graphics with a generative image model.
#[derive(Parser, Debug)]
#[command(name = "brandforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a new brand graphic
    Generate(cli::generate::GenerateArgs),

    /// Refine a previously generated graphic
    Refine(cli::refine::RefineArgs),

    /// List selectable palettes, styles, graphic types, and aspect ratios
    Options(cli::options::OptionsArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI overrides.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match brandforge_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `brandforge config path`."
            );
            brandforge_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Brandforge v{}", brandforge_core::VERSION);

    // Dispatch to the appropriate command handler; a bare invocation on a
    // TTY enters the guided session.
    match cli.command {
        Some(Commands::Generate(args)) => cli::generate::execute(args, &config).await,
        Some(Commands::Refine(args)) => cli::refine::execute(args, &config).await,
        Some(Commands::Options(args)) => cli::options::execute(args, &config).await,
        Some(Commands::Config(args)) => cli::config::execute(args).await,
        None => {
            if console::user_attended() {
                cli::session::run(&config).await
            } else {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}
