//! `radarcam config` – print the effective configuration.

use anyhow::Result;
use radarcam_core::config::{self, RadarConfig};

pub fn run_config(cfg: &RadarConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    println!("# cache file: {}", cfg.cache_path().display());
    println!("# http: {:?}", cfg.http());
    Ok(())
}
