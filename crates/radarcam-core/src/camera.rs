//! Camera facade handed to a host: identity, frame interval, still image.

use std::time::Duration;

use crate::cache::{ImageCache, ImageOutcome};
use crate::config::RadarConfig;
use crate::fetch::{CurlClient, HttpClient};

pub const UNIQUE_ID: &str = "fmi_testbed";
pub const DISPLAY_NAME: &str = "FMI Testbed";

pub struct RadarCamera<C = CurlClient> {
    cache: ImageCache<C>,
}

impl RadarCamera<CurlClient> {
    pub fn from_config(cfg: &RadarConfig) -> Self {
        let camera = RadarCamera::new(ImageCache::from_config(cfg));
        tracing::info!(
            source = cfg.source_url.as_str(),
            cache = %camera.cache.path().display(),
            "added FMI Testbed radar camera"
        );
        camera
    }
}

impl<C: HttpClient> RadarCamera<C> {
    pub fn new(cache: ImageCache<C>) -> Self {
        Self { cache }
    }

    pub fn unique_id(&self) -> &'static str {
        UNIQUE_ID
    }

    pub fn name(&self) -> &'static str {
        DISPLAY_NAME
    }

    /// How often a host should ask for a new still; new frames can't appear faster.
    pub fn frame_interval(&self) -> Duration {
        self.cache.freshness()
    }

    pub fn cache(&self) -> &ImageCache<C> {
        &self.cache
    }

    pub fn camera_image(&self) -> Option<Vec<u8>> {
        self.cache.get_image()
    }

    pub fn poll(&self) -> ImageOutcome {
        self.cache.serve()
    }
}
