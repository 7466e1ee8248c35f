//! Product gallery image extraction
//!
//! Storefront CDNs serve resized variants through a `width=` query parameter
//! or a `_WxH.` filename suffix. Both are removed so exports point at the
//! full-resolution original.

use crate::extract::selectors::{first_non_empty, IMAGE_SELECTORS};
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;
use url::Url;

/// Maximum number of images kept per product
pub const MAX_IMAGES: usize = 5;

static SIZE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_\d+x\d+\.").expect("hardcoded regex pattern is valid"));

/// Markers used by themes for "no image available" artwork
const PLACEHOLDER_MARKERS: &[&str] = &["no-image", "placeholder"];

/// Collects up to [`MAX_IMAGES`] unique, absolute, full-size image URLs
///
/// The first gallery selector that yields a usable image wins; later
/// selectors are not consulted.
pub fn extract_image_urls(document: &Html, base_url: &Url) -> Vec<String> {
    let candidates = first_non_empty(document, IMAGE_SELECTORS, |img| {
        let element = img.value();
        let src = element
            .attr("src")
            .filter(|s| !s.trim().is_empty())
            .or_else(|| element.attr("data-src"))?;
        normalize_image_url(src, base_url)
    });

    let mut images: Vec<String> = Vec::with_capacity(MAX_IMAGES);
    for url in candidates {
        if images.len() == MAX_IMAGES {
            break;
        }
        if !images.contains(&url) {
            images.push(url);
        }
    }

    images
}

/// Turns a raw `src` attribute into a full-size absolute URL
///
/// Returns `None` for empty sources, placeholder artwork, and values that
/// cannot be resolved against `base_url`.
///
/// # Example
///
/// ```
/// use sumi_shelf::extract::normalize_image_url;
/// use url::Url;
///
/// let base = Url::parse("https://shop.example.com").unwrap();
/// assert_eq!(
///     normalize_image_url("//cdn.example.com/files/tee_800x800.jpg?width=400", &base).as_deref(),
///     Some("https://cdn.example.com/files/tee.jpg"),
/// );
/// ```
pub fn normalize_image_url(src: &str, base_url: &Url) -> Option<String> {
    let src = src.trim();
    if src.is_empty() || PLACEHOLDER_MARKERS.iter().any(|m| src.contains(m)) {
        return None;
    }

    let absolute = if let Some(rest) = src.strip_prefix("//") {
        format!("https://{}", rest)
    } else {
        src.to_string()
    };

    let full_size = SIZE_SUFFIX.replace_all(&absolute, ".");

    let mut resolved = match base_url.join(&full_size) {
        Ok(resolved) if resolved.scheme() == "http" || resolved.scheme() == "https" => resolved,
        Ok(resolved) => {
            tracing::debug!("Skipping non-HTTP image URL {}", resolved);
            return None;
        }
        Err(e) => {
            tracing::debug!("Skipping unresolvable image URL '{}': {}", full_size, e);
            return None;
        }
    };

    strip_width_param(&mut resolved);
    Some(resolved.to_string())
}

/// Removes numeric `width=` pairs, dropping the query entirely when nothing remains
fn strip_width_param(url: &mut Url) {
    let is_width = |key: &str, value: &str| {
        key == "width" && !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    };

    if !url.query_pairs().any(|(k, v)| is_width(&k, &v)) {
        return;
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, v)| !is_width(k, v))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
}
