//! CLI for building and fetching Household Pulse Survey plots.

mod args;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use pulse_core::config;
use pulse_core::plot_url::PlotUrlBuilder;
use std::path::PathBuf;

pub use args::PlotArgs;
use commands::{run_catalog, run_completions, run_fetch, run_url};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pulse")]
#[command(about = "Build and fetch Household Pulse Survey plots", long_about = None)]
pub struct Cli {
    /// Plot service base URL (overrides `base_url` in config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the plot request URL for the given selections.
    Url {
        #[command(subcommand)]
        plot: PlotArgs,
    },

    /// Fetch the plot image and save it to disk.
    Fetch {
        #[command(subcommand)]
        plot: PlotArgs,

        /// Output file (default: derived from the selections, in `output_dir`
        /// or the current directory).
        #[arg(short, long, global = true, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List the codes accepted by the plot controls.
    Catalog {
        #[arg(value_enum)]
        kind: CatalogKind,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Metrics,
    Races,
    Geographies,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Catalog { kind, json } => return run_catalog(kind, json),
            CliCommand::Completions { shell } => {
                run_completions(shell);
                return Ok(());
            }
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let builder = match cli.base_url.as_deref() {
            Some(base) => PlotUrlBuilder::parse(base)?,
            None => cfg.url_builder()?,
        };

        match cli.command {
            CliCommand::Url { plot } => run_url(&builder, &plot),
            CliCommand::Fetch { plot, output } => run_fetch(&cfg, &builder, &plot, output).await?,
            CliCommand::Catalog { .. } | CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
