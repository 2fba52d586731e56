//! libcurl-backed GET client.

use std::time::Duration;

use super::{FetchError, HttpClient, HttpResponse};
use crate::config::HttpConfig;

/// Blocking GET over a fresh curl easy handle per request.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlClient {
    opts: HttpConfig,
}

impl CurlClient {
    pub fn new(opts: HttpConfig) -> Self {
        Self { opts }
    }
}

impl HttpClient for CurlClient {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        if self.opts.follow_redirects {
            easy.follow_location(true)?;
            easy.max_redirections(10)?;
        }
        easy.connect_timeout(Duration::from_secs(self.opts.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(self.opts.timeout_secs))?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpResponse { status, body })
    }
}
