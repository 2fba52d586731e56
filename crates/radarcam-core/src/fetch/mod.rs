//! Outbound HTTP GETs: the animation page and the radar frame.
//!
//! Both requests are plain GETs without custom headers or authentication.
//! Anything other than HTTP 200 is an error; there are no retries.

mod client;
mod error;

pub use client::CurlClient;
pub use error::FetchError;

/// Status line and body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Transport seam between the image cache and the network.
pub trait HttpClient: Send + Sync {
    /// Perform one GET. Transport failures are `FetchError::Network`;
    /// any status code is returned as-is.
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url)
    }
}

impl<T: HttpClient + ?Sized> HttpClient for Box<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url)
    }
}

fn get_ok(client: &dyn HttpClient, url: &str) -> Result<Vec<u8>, FetchError> {
    let resp = client.get(url)?;
    if resp.status != 200 {
        return Err(FetchError::status(resp.status, &resp.body));
    }
    Ok(resp.body)
}

/// GET the animation page and return its body as text (invalid UTF-8 is replaced).
pub fn fetch_page(client: &dyn HttpClient, url: &str) -> Result<String, FetchError> {
    let body = get_ok(client, url)?;
    tracing::debug!(url, bytes = body.len(), "fetched radar page");
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// GET an image and return its raw bytes.
pub fn fetch_bytes(client: &dyn HttpClient, url: &str) -> Result<Vec<u8>, FetchError> {
    let body = get_ok(client, url)?;
    tracing::debug!(url, bytes = body.len(), "downloaded radar image");
    Ok(body)
}

/// Resolve an image reference from the page against the page URL.
/// Absolute URLs come back unchanged. Blank references, references that join
/// back to the page itself, and strings that cannot be joined are passed
/// through as-is so they fail at download time.
pub fn resolve_image_url(page_url: &str, image: &str) -> String {
    if image.trim().is_empty() || url::Url::parse(image).is_ok() {
        return image.to_string();
    }
    let Ok(mut base) = url::Url::parse(page_url) else {
        return image.to_string();
    };
    base.set_fragment(None);
    match base.join(image) {
        Ok(joined) if without_fragment(&joined) != base => joined.to_string(),
        _ => image.to_string(),
    }
}

fn without_fragment(u: &url::Url) -> url::Url {
    let mut u = u.clone();
    u.set_fragment(None);
    u
}
