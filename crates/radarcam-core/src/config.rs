use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Animation page that carries the radar frame list.
pub const TESTBED_URL: &str = "https://testbed.fmi.fi/";

/// How long a downloaded frame is served before the page is scraped again.
pub const DEFAULT_FRESHNESS_SECS: u64 = 5 * 60;

/// File name of the cached frame inside the platform temp directory.
pub const CACHE_FILE_NAME: &str = "fmi-testbed-cache.png";

/// HTTP client options (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Follow 3xx redirects (max 10 hops).
    pub follow_redirects: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            follow_redirects: true,
        }
    }
}

/// Global configuration loaded from `~/.config/radarcam/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
    /// Page scraped for the `anim_images_anim_anim` array.
    pub source_url: String,
    /// Freshness window of the cached frame, in seconds.
    pub freshness_secs: u64,
    /// Override for the cache file location (None = `<tmp>/fmi-testbed-cache.png`).
    #[serde(default)]
    pub cache_path: Option<PathBuf>,
    /// Optional HTTP options; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            source_url: TESTBED_URL.to_string(),
            freshness_secs: DEFAULT_FRESHNESS_SECS,
            cache_path: None,
            http: None,
        }
    }
}

impl RadarConfig {
    pub fn freshness(&self) -> Duration {
        Duration::from_secs(self.freshness_secs)
    }

    /// Cache file path: the configured override or the temp-dir default.
    pub fn cache_path(&self) -> PathBuf {
        self.cache_path
            .clone()
            .unwrap_or_else(default_cache_path)
    }

    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn default_cache_path() -> PathBuf {
    std::env::temp_dir().join(CACHE_FILE_NAME)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("radarcam")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RadarConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RadarConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RadarConfig = toml::from_str(&data)?;
    Ok(cfg)
}
