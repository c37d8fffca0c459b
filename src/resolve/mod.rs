//! Platform-specific identifier resolution
//!
//! A crawling agent needs a stable identifier per content item. For
//! Xiaohongshu the share URL itself is that identifier. For Douyin the
//! pasted URL is usually a short link that must be chased through one HTTP
//! redirect before the numeric item id can be read off the long-form URL.
//!
//! Redirects are handled manually: the client is built with redirects
//! disabled and a bounded request timeout, so a resolution can never stall
//! the pipeline indefinitely.

use crate::config::ResolverConfig;
use crate::platform::Platform;
use crate::SweepError;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use url::Url;

// Douyin item ids are the numeric path segment of the long-form note URL.
static NOTE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"note/(\d+)").expect("Failed to compile note-id pattern"));

/// Builds the HTTP client used for short-link resolution
///
/// Redirects are disabled so the `Location` header can be read directly,
/// and the whole request is bounded by the configured timeout.
pub fn build_resolver_client(config: &ResolverConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .redirect(Policy::none())
        .build()
}

/// Resolves a link record's URL to the identifier its crawling agent needs
///
/// # Arguments
///
/// * `client` - HTTP client built by [`build_resolver_client`]
/// * `config` - Resolver configuration (short-link host, timeout)
/// * `platform` - The platform the URL was classified to
/// * `url` - The URL as extracted from the pasted text
///
/// # Returns
///
/// * `Ok(String)` - The stable identifier: the URL itself for Xiaohongshu,
///   the numeric item id for Douyin
/// * `Err(SweepError::UnresolvableIdentifier)` - The identifier pattern did
///   not match after resolution; carries the original URL
pub async fn resolve_identifier(
    client: &Client,
    config: &ResolverConfig,
    platform: Platform,
    url: &str,
) -> Result<String, SweepError> {
    match platform {
        Platform::Xiaohongshu => Ok(url.to_string()),
        Platform::Douyin => resolve_douyin_id(client, config, url).await,
    }
}

/// Resolves a Douyin URL to its numeric item id
///
/// Short links (URLs on the configured short-link host) are first expanded
/// by issuing a GET with redirects disabled and substituting the `Location`
/// header of a 301/302/307 response. The id is then extracted from the
/// (possibly substituted) URL.
pub async fn resolve_douyin_id(
    client: &Client,
    config: &ResolverConfig,
    url: &str,
) -> Result<String, SweepError> {
    let effective_url = if url.contains(&config.short_link_host) {
        follow_short_link(client, url).await?
    } else {
        url.to_string()
    };

    match extract_note_id(&effective_url) {
        Some(id) => Ok(id),
        None => Err(SweepError::UnresolvableIdentifier {
            url: url.to_string(),
        }),
    }
}

/// Follows a single short-link redirect and returns the target URL
///
/// A 301/302/307 response with a `Location` header yields the header value;
/// any other response leaves the URL unchanged.
pub async fn follow_short_link(client: &Client, url: &str) -> Result<String, SweepError> {
    let response = client.get(url).send().await?;
    let status = response.status();

    if matches!(
        status,
        StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND | StatusCode::TEMPORARY_REDIRECT
    ) {
        if let Some(location) = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
        {
            // Location may be relative; resolve it against the request URL
            let target = match Url::parse(url).and_then(|base| base.join(location)) {
                Ok(resolved) => resolved.to_string(),
                Err(_) => location.to_string(),
            };
            tracing::debug!("Short link {} redirected to {}", url, target);
            return Ok(target);
        }
    }

    Ok(url.to_string())
}

/// Extracts the numeric note id from a long-form Douyin URL
pub fn extract_note_id(url: &str) -> Option<String> {
    NOTE_ID_PATTERN
        .captures(url)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_resolver_config() -> ResolverConfig {
        ResolverConfig {
            request_timeout_secs: 10,
            short_link_host: "v.douyin.com".to_string(),
        }
    }

    #[test]
    fn test_extract_note_id() {
        assert_eq!(
            extract_note_id("https://www.douyin.com/note/7234567890123456789"),
            Some("7234567890123456789".to_string())
        );
        assert_eq!(extract_note_id("https://www.douyin.com/video/abc"), None);
        assert_eq!(extract_note_id("https://v.douyin.com/qAvG3Q0bJbc/"), None);
    }

    #[tokio::test]
    async fn test_xiaohongshu_identifier_is_identity() {
        let config = test_resolver_config();
        let client = build_resolver_client(&config).unwrap();

        let url = "http://xhslink.com/a/LBoH4igKHbofb";
        let id = resolve_identifier(&client, &config, Platform::Xiaohongshu, url)
            .await
            .unwrap();
        assert_eq!(id, url);
    }

    #[tokio::test]
    async fn test_long_form_douyin_url_needs_no_network() {
        let config = test_resolver_config();
        let client = build_resolver_client(&config).unwrap();

        // Not on the short-link host, so no request is issued
        let id = resolve_douyin_id(&client, &config, "https://www.douyin.com/note/12345")
            .await
            .unwrap();
        assert_eq!(id, "12345");
    }

    #[tokio::test]
    async fn test_unresolvable_douyin_url_carries_original() {
        let config = test_resolver_config();
        let client = build_resolver_client(&config).unwrap();

        let result = resolve_douyin_id(&client, &config, "https://www.douyin.com/video/abc").await;
        match result {
            Err(SweepError::UnresolvableIdentifier { url }) => {
                assert_eq!(url, "https://www.douyin.com/video/abc");
            }
            other => panic!("Expected UnresolvableIdentifier, got {:?}", other),
        }
    }
}
