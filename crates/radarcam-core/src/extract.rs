//! Image URL extraction from the animation page.
//!
//! The page embeds its frame list as
//! `var anim_images_anim_anim = new Array("…", "…", …);`, newest frame first.
//! The pattern below is a contract against that page: when the page changes
//! shape, extraction yields nothing instead of failing.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Name of the JavaScript array the animation widget reads its frames from.
pub const ANIMATION_ARRAY: &str = "anim_images_anim_anim";

static ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"var\s+{}\s*=\s*new\s+Array\s*\(([^)]*)\)",
        regex::escape(ANIMATION_ARRAY)
    );
    Regex::new(&pattern).expect("animation array pattern")
});

static QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"|'([^']*)'"#).expect("quoted string pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("animation array `anim_images_anim_anim` not found in page")]
    ArrayMissing,
    #[error("animation array holds no quoted image URLs")]
    NoQuotedUrls,
}

/// Parse the frame URLs, reporting why nothing was found.
pub fn parse_image_urls(page: &str) -> Result<Vec<String>, ParseError> {
    let contents = ARRAY_RE
        .captures(page)
        .and_then(|c| c.get(1))
        .ok_or(ParseError::ArrayMissing)?
        .as_str();

    let urls: Vec<String> = QUOTED_RE
        .captures_iter(contents)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().to_string())
        .collect();

    if urls.is_empty() {
        return Err(ParseError::NoQuotedUrls);
    }
    Ok(urls)
}

/// Frame URLs in page order (newest first), or empty when the page has none.
pub fn extract_image_urls(page: &str) -> Vec<String> {
    parse_image_urls(page).unwrap_or_default()
}
