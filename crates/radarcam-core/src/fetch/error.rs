//! Transport and status errors for page and image GETs.

use thiserror::Error;

/// Longest body prefix kept in `HttpStatus` for diagnostics.
pub(crate) const SNIPPET_LEN: usize = 200;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Could not reach the remote host (DNS, connect, TLS, timeout, reset).
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with something other than 200.
    #[error("HTTP {status}: {snippet}")]
    HttpStatus { status: u32, snippet: String },
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

impl FetchError {
    pub(crate) fn status(status: u32, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let snippet: String = text.trim().chars().take(SNIPPET_LEN).collect();
        FetchError::HttpStatus { status, snippet }
    }

    /// Status code for `HttpStatus`, None for transport failures.
    pub fn status_code(&self) -> Option<u32> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            FetchError::Network(_) => None,
        }
    }
}
