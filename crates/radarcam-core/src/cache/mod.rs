//! Time-based on-disk cache of the latest radar frame.
//!
//! One file, one timestamp. A request inside the freshness window reads the
//! file; anything else scrapes the page, downloads the first listed frame and
//! replaces the file. Failures never surface to the caller: they fall back to
//! the previous frame, or to nothing when no frame was ever cached.
//!
//! The timestamp lock is held only around reads and updates, never across
//! network or file I/O. Two overlapping requests may both refresh; the last
//! rename wins.

mod outcome;

pub use outcome::{ImageOutcome, RefreshError};

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, SystemTime};

use crate::checksum;
use crate::config::RadarConfig;
use crate::extract;
use crate::fetch::{self, CurlClient, HttpClient};
use crate::storage;

/// Freshness of the cached frame at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No cache file.
    Empty,
    /// File present and downloaded within the freshness window.
    Fresh,
    /// File present but older than the window, or of unknown age.
    Stale,
}

#[derive(Debug, Default)]
struct Meta {
    last_updated: Option<SystemTime>,
    digest: Option<String>,
}

pub struct ImageCache<C = CurlClient> {
    client: C,
    source_url: String,
    path: PathBuf,
    freshness: Duration,
    meta: Mutex<Meta>,
}

impl ImageCache<CurlClient> {
    /// Cache backed by libcurl, with URL, path, window and HTTP options from `cfg`.
    pub fn from_config(cfg: &RadarConfig) -> Self {
        ImageCache::new(
            CurlClient::new(cfg.http()),
            cfg.source_url.clone(),
            cfg.cache_path(),
            cfg.freshness(),
        )
    }
}

impl<C: HttpClient> ImageCache<C> {
    pub fn new(
        client: C,
        source_url: impl Into<String>,
        path: impl Into<PathBuf>,
        freshness: Duration,
    ) -> Self {
        Self {
            client,
            source_url: source_url.into(),
            path: path.into(),
            freshness,
            meta: Mutex::new(Meta::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn freshness(&self) -> Duration {
        self.freshness
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// When the cached file was last replaced by this instance.
    pub fn last_updated(&self) -> Option<SystemTime> {
        self.meta().last_updated
    }

    fn meta(&self) -> MutexGuard<'_, Meta> {
        self.meta.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> CacheState {
        if !self.path.is_file() {
            return CacheState::Empty;
        }
        let last_updated = self.meta().last_updated;
        match last_updated.map(|t| t.elapsed()) {
            Some(Ok(age)) if age < self.freshness => CacheState::Fresh,
            // Clock moved backwards past the timestamp: age unknown.
            Some(Err(_)) | Some(Ok(_)) | None => CacheState::Stale,
        }
    }

    /// Bytes of the current frame, refreshing first if needed. Never fails.
    pub fn get_image(&self) -> Option<Vec<u8>> {
        self.serve().into_bytes()
    }

    /// Serve one image request and report how it was satisfied.
    pub fn serve(&self) -> ImageOutcome {
        if self.state() == CacheState::Fresh {
            match storage::read_if_exists(&self.path) {
                Ok(Some(bytes)) => {
                    tracing::debug!(
                        path = %self.path.display(),
                        "radar image is younger than {:?}, serving cached frame",
                        self.freshness
                    );
                    return ImageOutcome::Cached(bytes);
                }
                Ok(None) => {
                    tracing::debug!("cache file disappeared, refreshing");
                }
                Err(e) => {
                    tracing::warn!("reading cached radar image failed, refreshing: {:#}", e);
                }
            }
        }

        let reason = match self.refresh() {
            Ok(bytes) => return ImageOutcome::Refreshed(bytes),
            Err(reason) => reason,
        };
        tracing::error!("error updating radar image: {}", reason);

        match storage::read_if_exists(&self.path) {
            Ok(Some(bytes)) => ImageOutcome::StaleFallback { bytes, reason },
            Ok(None) => ImageOutcome::Unavailable { reason },
            Err(e) => {
                tracing::warn!("reading previous radar image failed: {:#}", e);
                ImageOutcome::Unavailable { reason }
            }
        }
    }

    /// Scrape the page, download the newest frame and replace the cache file.
    /// The file and timestamp are untouched on any error.
    pub fn refresh(&self) -> Result<Vec<u8>, RefreshError> {
        let page = fetch::fetch_page(&self.client, &self.source_url).map_err(RefreshError::Page)?;
        let urls = extract::parse_image_urls(&page).map_err(RefreshError::Parse)?;
        // Upstream lists frames newest first.
        let latest = fetch::resolve_image_url(&self.source_url, &urls[0]);
        tracing::debug!(
            frames = urls.len(),
            "downloading the radar image from {}",
            latest
        );

        let bytes = fetch::fetch_bytes(&self.client, &latest).map_err(|source| {
            RefreshError::Download {
                url: latest.clone(),
                source,
            }
        })?;
        storage::write_atomic(&self.path, &bytes).map_err(RefreshError::Store)?;

        let digest = checksum::sha256_bytes(&bytes);
        let mut meta = self.meta();
        if meta.digest.as_deref() == Some(digest.as_str()) {
            tracing::debug!(sha256 = checksum::short(&digest), "radar frame unchanged");
        } else {
            tracing::info!(
                sha256 = checksum::short(&digest),
                bytes = bytes.len(),
                "radar image updated from {}",
                latest
            );
        }
        meta.last_updated = Some(SystemTime::now());
        meta.digest = Some(digest);
        Ok(bytes)
    }
}
