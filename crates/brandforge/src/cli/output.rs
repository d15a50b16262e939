//! Saving and reporting generated images.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use brandforge_core::{Config, GeneratedImage};
use serde::Serialize;

/// JSON summary emitted with `--json`.
#[derive(Serialize)]
struct ImageReport<'a> {
    display_uri: &'a str,
    mime_type: &'a str,
    decoded_bytes: usize,
}

/// Print the normalized result as JSON on stdout.
pub fn print_json(image: &GeneratedImage) -> anyhow::Result<()> {
    let bytes = image.decode_bytes()?;
    let report = ImageReport {
        display_uri: &image.display_uri,
        mime_type: &image.mime_type,
        decoded_bytes: bytes.len(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Save the decoded image, returning the path written.
///
/// With no explicit path, the file name is derived from the graphic type
/// and the current Unix timestamp, inside the configured output directory.
pub fn save_image(
    image: &GeneratedImage,
    out: Option<&Path>,
    graphic_type: &str,
    config: &Config,
) -> anyhow::Result<PathBuf> {
    let path = match out {
        Some(path) => path.to_path_buf(),
        None => {
            let dir = config.output_dir();
            std::fs::create_dir_all(&dir)?;
            let stamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            dir.join(format!(
                "{graphic_type}-{stamp}.{}",
                image.file_extension()
            ))
        }
    };

    let bytes = image.decode_bytes()?;
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), "Image saved");
    Ok(path)
}
