//! Saving fetched plots.
//!
//! Names files after the plot request and writes them through a `.part` temp
//! file that is renamed into place once synced.

mod sanitize;

pub use sanitize::{sanitize_filename, truncate_bytes, NAME_MAX};

use crate::fetch::PlotImage;
use crate::plot_url::{FilterState, PlotEndpoint};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// File extension for an image media type; `img` when unrecognized.
pub fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/svg+xml" => "svg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "img",
    }
}

/// Derives a stable filename from the plot request, e.g.
/// `weekly_US_food_insufficient_w13-67.png` or
/// `national_black_food_insufficient_w63.png`.
///
/// The stem is shortened so the name plus its `.part` temp suffix stays within
/// NAME_MAX.
pub fn default_filename(
    endpoint: PlotEndpoint,
    filter: &FilterState,
    content_type: &str,
) -> String {
    let mut parts: Vec<String> = vec![endpoint.path().to_string()];
    if let Some(g) = filter.geography() {
        parts.push(g.to_string());
    }
    if let Some(races) = filter.race_list() {
        parts.push(races.replace(',', "+"));
    }
    if let Some(m) = filter.metric() {
        parts.push(m.to_string());
    }
    if let Some(w) = filter.weeks {
        parts.push(format!("w{}", w));
    }
    let ext = extension_for(content_type);
    let stem = sanitize_filename(&parts.join("_"));
    let max_stem = NAME_MAX - TEMP_SUFFIX.len() - ext.len() - 1;
    format!("{}.{}", truncate_bytes(&stem, max_stem), ext)
}

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `image` to `path` atomically; an existing file is replaced.
pub fn save_plot(image: &PlotImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp = temp_path(path);
    {
        let mut f = File::create(&tmp).with_context(|| format!("create {}", tmp.display()))?;
        f.write_all(&image.bytes)
            .with_context(|| format!("write {}", tmp.display()))?;
        f.sync_all().context("sync plot file")?;
    }
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to rename {} to {}", tmp.display(), path.display()))?;
    tracing::info!(path = %path.display(), bytes = image.len(), "plot saved");
    Ok(())
}
