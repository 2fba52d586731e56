//! `radarcam snapshot` – serve one still through the cache.

use anyhow::{Context, Result};
use radarcam_core::camera::RadarCamera;
use radarcam_core::checksum;
use radarcam_core::config::RadarConfig;
use radarcam_core::storage;
use std::path::Path;

pub async fn run_snapshot(cfg: &RadarConfig, output: &Path) -> Result<()> {
    let camera = RadarCamera::from_config(cfg);
    let cache_path = camera.cache().path().to_path_buf();
    let source_url = camera.cache().source_url().to_string();
    let outcome = tokio::task::spawn_blocking(move || camera.poll())
        .await
        .context("snapshot task join")?;

    println!("{:<10} {}", "outcome", outcome.label());
    println!("{:<10} {}", "source", source_url);
    println!("{:<10} {}", "cache", cache_path.display());
    if let Some(reason) = outcome.reason() {
        println!("{:<10} {}", "reason", reason);
    }

    match outcome.bytes() {
        Some(bytes) => {
            storage::write_atomic(output, bytes)?;
            let written = checksum::sha256_path(output)?;
            if written != checksum::sha256_bytes(bytes) {
                anyhow::bail!("{} does not match the served frame", output.display());
            }
            println!("{:<10} {}", "sha256", written);
            println!("{:<10} {} ({} bytes)", "saved", output.display(), bytes.len());
            Ok(())
        }
        None => anyhow::bail!("no radar image available"),
    }
}
