//! `pulse fetch` – fetch a plot image and save it.

use anyhow::{Context, Result};
use crate::cli::PlotArgs;
use pulse_core::config::PulseConfig;
use pulse_core::fetch;
use pulse_core::output;
use pulse_core::plot_url::PlotUrlBuilder;
use std::path::PathBuf;

pub async fn run_fetch(
    cfg: &PulseConfig,
    builder: &PlotUrlBuilder,
    plot: &PlotArgs,
    output: Option<PathBuf>,
) -> Result<()> {
    let endpoint = plot.endpoint();
    let filter = plot.filter();
    let url = builder.build(endpoint, &filter);

    let opts = cfg.fetch_options();
    let policy = cfg.retry_policy();
    let fetch_url = url.clone();
    let image = tokio::task::spawn_blocking(move || {
        fetch::fetch_plot_with_retry(&fetch_url, &opts, &policy)
    })
    .await
    .context("fetch task panicked")?
    .with_context(|| format!("fetch {}", url))?;

    let path = match output {
        Some(p) => p,
        None => {
            let dir = match &cfg.output_dir {
                Some(d) => d.clone(),
                None => std::env::current_dir()?,
            };
            dir.join(output::default_filename(endpoint, &filter, &image.content_type))
        }
    };
    output::save_plot(&image, &path)?;

    println!("{}  {}", image.sha256_hex(), path.display());
    Ok(())
}
