//! Integration test: local HTTP server serving an animation page and frames,
//! scraped and cached through the libcurl client.

mod common;

use std::time::Duration;

use radarcam_core::cache::{CacheState, ImageCache, ImageOutcome};
use radarcam_core::config::HttpConfig;
use radarcam_core::fetch::{self, CurlClient, FetchError};
use radarcam_core::extract;
use tempfile::tempdir;

fn page_for(server: &common::radar_server::RadarServer, frames: &[&str]) -> String {
    let list = frames
        .iter()
        .map(|f| format!("\"{}\"", server.url(f)))
        .collect::<Vec<_>>()
        .join(",\n    ");
    format!(
        "<html><body>\n<script>\nvar anim_images_anim_anim = new Array(\n    {}\n);\n</script>\n</body></html>",
        list
    )
}

fn client() -> CurlClient {
    CurlClient::new(HttpConfig {
        connect_timeout_secs: 2,
        timeout_secs: 5,
        follow_redirects: true,
    })
}

#[test]
fn scrape_download_and_serve_latest_frame() {
    let server = common::radar_server::start();
    server.route("/", 200, page_for(&server, &["a.png", "b.png"]));
    server.route("/a.png", 200, b"frame-a".to_vec());
    server.route("/b.png", 200, b"frame-b".to_vec());

    let dir = tempdir().unwrap();
    let cache = ImageCache::new(
        client(),
        server.base(),
        dir.path().join("fmi-testbed-cache.png"),
        Duration::from_secs(300),
    );

    assert_eq!(cache.get_image().as_deref(), Some(&b"frame-a"[..]));
    assert_eq!(cache.get_image().as_deref(), Some(&b"frame-a"[..]));
    assert_eq!(server.hits("/"), 1);
    assert_eq!(server.hits("/a.png"), 1);
    assert_eq!(server.hits("/b.png"), 0);
    assert_eq!(cache.state(), CacheState::Fresh);
}

#[test]
fn zero_window_refreshes_every_time_and_falls_back_on_missing_frame() {
    let server = common::radar_server::start();
    server.route("/", 200, page_for(&server, &["a.png"]));
    server.route("/a.png", 200, b"frame-a".to_vec());

    let dir = tempdir().unwrap();
    let cache = ImageCache::new(
        client(),
        server.base(),
        dir.path().join("cache.png"),
        Duration::ZERO,
    );
    assert_eq!(cache.get_image().as_deref(), Some(&b"frame-a"[..]));

    server.route("/", 200, page_for(&server, &["c.png", "a.png"]));
    let outcome = cache.serve();
    assert!(matches!(outcome, ImageOutcome::StaleFallback { .. }));
    assert_eq!(outcome.bytes(), Some(&b"frame-a"[..]));
    assert_eq!(server.hits("/"), 2);
    assert_eq!(server.hits("/c.png"), 1);
}

#[test]
fn page_without_array_never_downloads() {
    let server = common::radar_server::start();
    server.route("/", 200, "<html><body>No script here</body></html>");

    let dir = tempdir().unwrap();
    let cache = ImageCache::new(
        client(),
        server.base(),
        dir.path().join("cache.png"),
        Duration::from_secs(300),
    );
    assert!(cache.get_image().is_none());
    assert_eq!(cache.state(), CacheState::Empty);
    assert!(!dir.path().join("cache.png").exists());
}

#[test]
fn unreachable_host_without_cache_is_absent() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let dir = tempdir().unwrap();
    let cache = ImageCache::new(
        client(),
        format!("http://127.0.0.1:{}/", port),
        dir.path().join("cache.png"),
        Duration::from_secs(300),
    );
    match cache.serve() {
        ImageOutcome::Unavailable { .. } => {}
        other => panic!("expected Unavailable, got {:?}", other.label()),
    }
}

#[test]
fn fetch_page_reports_status_and_snippet() {
    let server = common::radar_server::start();
    server.route("/", 503, "down for maintenance");

    let err = fetch::fetch_page(&client(), server.base()).unwrap_err();
    match err {
        FetchError::HttpStatus { status, snippet } => {
            assert_eq!(status, 503);
            assert_eq!(snippet, "down for maintenance");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[test]
fn fetched_page_extracts_in_source_order() {
    let server = common::radar_server::start();
    server.route("/", 200, page_for(&server, &["3.png", "2.png", "1.png"]));

    let page = fetch::fetch_page(&client(), server.base()).unwrap();
    assert_eq!(
        extract::extract_image_urls(&page),
        vec![server.url("3.png"), server.url("2.png"), server.url("1.png")]
    );
}
