//! `radarcam watch` – poll the camera like a host would.

use anyhow::{Context, Result};
use radarcam_core::camera::RadarCamera;
use radarcam_core::checksum;
use radarcam_core::config::RadarConfig;
use std::sync::Arc;
use std::time::Duration;

/// `tokio::time::interval` rejects a zero period.
const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub async fn run_watch(cfg: &RadarConfig, count: Option<u64>) -> Result<()> {
    let camera = Arc::new(RadarCamera::from_config(cfg));
    let period = camera.frame_interval().max(MIN_POLL_INTERVAL);
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    println!(
        "Polling {} every {:?} (Ctrl-C to stop)",
        cfg.source_url, period
    );

    let mut polls = 0u64;
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("watch interrupted after {} poll(s)", polls);
                break;
            }
        }

        let outcome = tokio::task::spawn_blocking({
            let camera = Arc::clone(&camera);
            move || camera.poll()
        })
        .await
        .context("poll task join")?;
        polls += 1;

        let digest = outcome
            .bytes()
            .map(checksum::sha256_bytes)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<12} {}",
            polls,
            outcome.label(),
            checksum::short(&digest)
        );
        if let Some(reason) = outcome.reason() {
            tracing::warn!(poll = polls, "serving without a new frame: {}", reason);
        }

        if count.is_some_and(|n| polls >= n) {
            break;
        }
    }
    Ok(())
}
