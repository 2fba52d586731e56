//! CLI for the radarcam radar image cache.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use radarcam_core::config;
use std::path::PathBuf;

use commands::{run_config, run_fetch, run_snapshot, run_urls, run_watch};

/// Top-level CLI for radarcam.
#[derive(Debug, Parser)]
#[command(name = "radarcam")]
#[command(about = "radarcam: latest FMI Testbed weather radar frame as a camera still", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the animation page and list the frame URLs, newest first.
    Urls {
        /// Print a JSON array instead of one URL per line.
        #[arg(long)]
        json: bool,
    },

    /// Download the latest frame to a file, bypassing the cache.
    Fetch {
        /// Where to write the image.
        #[arg(long, short, default_value = "download.png")]
        output: PathBuf,
    },

    /// Serve one still through the cache and write it to a file.
    Snapshot {
        /// Where to write the image.
        #[arg(long, short, default_value = "radar.png")]
        output: PathBuf,
    },

    /// Poll the camera every frame interval until interrupted.
    Watch {
        /// Stop after N polls (default: run until Ctrl-C).
        #[arg(long, value_name = "N")]
        count: Option<u64>,
    },

    /// Show the effective configuration and where it lives.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Urls { json } => run_urls(&cfg, json).await?,
            CliCommand::Fetch { output } => run_fetch(&cfg, &output).await?,
            CliCommand::Snapshot { output } => run_snapshot(&cfg, &output).await?,
            CliCommand::Watch { count } => run_watch(&cfg, count).await?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
