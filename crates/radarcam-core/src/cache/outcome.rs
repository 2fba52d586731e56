//! What a single `serve` call produced, and why a refresh failed.

use thiserror::Error;

use crate::extract::ParseError;
use crate::fetch::FetchError;

/// Why a refresh did not produce a new cached frame. Never escapes `get_image`.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("fetching radar page: {0}")]
    Page(#[source] FetchError),
    #[error("parsing radar page: {0}")]
    Parse(#[source] ParseError),
    #[error("downloading {url}: {source}")]
    Download { url: String, source: FetchError },
    #[error("writing cache file: {0:#}")]
    Store(anyhow::Error),
}

/// Result of serving one image request.
#[derive(Debug)]
pub enum ImageOutcome {
    /// Frame was within the freshness window; no network I/O happened.
    Cached(Vec<u8>),
    /// A new frame was downloaded and cached.
    Refreshed(Vec<u8>),
    /// Refresh failed; the previous frame is served.
    StaleFallback { bytes: Vec<u8>, reason: RefreshError },
    /// Refresh failed and nothing is cached yet.
    Unavailable { reason: RefreshError },
}

impl ImageOutcome {
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            ImageOutcome::Cached(b) | ImageOutcome::Refreshed(b) => Some(b),
            ImageOutcome::StaleFallback { bytes, .. } => Some(bytes),
            ImageOutcome::Unavailable { .. } => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            ImageOutcome::Cached(b) | ImageOutcome::Refreshed(b) => Some(b),
            ImageOutcome::StaleFallback { bytes, .. } => Some(bytes),
            ImageOutcome::Unavailable { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&RefreshError> {
        match self {
            ImageOutcome::StaleFallback { reason, .. } | ImageOutcome::Unavailable { reason } => {
                Some(reason)
            }
            _ => None,
        }
    }

    /// Short label for status output.
    pub fn label(&self) -> &'static str {
        match self {
            ImageOutcome::Cached(_) => "cached",
            ImageOutcome::Refreshed(_) => "refreshed",
            ImageOutcome::StaleFallback { .. } => "stale",
            ImageOutcome::Unavailable { .. } => "unavailable",
        }
    }
}
