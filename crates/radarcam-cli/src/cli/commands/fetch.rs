//! `radarcam fetch` – one-shot download of the latest frame.

use anyhow::{Context, Result};
use radarcam_core::config::RadarConfig;
use radarcam_core::fetch::{self, CurlClient};
use radarcam_core::{extract, storage};
use std::path::Path;

pub async fn run_fetch(cfg: &RadarConfig, output: &Path) -> Result<()> {
    let (url, len) = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        let output = output.to_path_buf();
        move || -> Result<(String, usize)> {
            let client = CurlClient::new(cfg.http());
            let page = fetch::fetch_page(&client, &cfg.source_url)
                .context("failed to fetch the radar page")?;
            let urls = extract::parse_image_urls(&page).context("no radar images found")?;
            let latest = fetch::resolve_image_url(&cfg.source_url, &urls[0]);
            let bytes = fetch::fetch_bytes(&client, &latest)
                .with_context(|| format!("failed to download the radar image {}", latest))?;
            storage::write_atomic(&output, &bytes)?;
            Ok((latest, bytes.len()))
        }
    })
    .await
    .context("fetch task join")??;

    println!("Saved {} ({} bytes) to {}", url, len, output.display());
    Ok(())
}
