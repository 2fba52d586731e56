//! `radarcam urls` – list the frame URLs on the animation page.

use anyhow::{Context, Result};
use radarcam_core::config::RadarConfig;
use radarcam_core::extract;
use radarcam_core::fetch::{self, CurlClient};

pub async fn run_urls(cfg: &RadarConfig, json: bool) -> Result<()> {
    let urls = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        move || -> Result<Vec<String>> {
            let client = CurlClient::new(cfg.http());
            let page = fetch::fetch_page(&client, &cfg.source_url)
                .with_context(|| format!("failed to fetch the radar page {}", cfg.source_url))?;
            let urls = extract::parse_image_urls(&page).context("no radar images found")?;
            Ok(urls
                .iter()
                .map(|u| fetch::resolve_image_url(&cfg.source_url, u))
                .collect())
        }
    })
    .await
    .context("urls task join")??;

    if json {
        println!("{}", serde_json::to_string_pretty(&urls)?);
    } else {
        for url in &urls {
            println!("{}", url);
        }
    }
    Ok(())
}
