//! Share-snippet parsing
//!
//! This module turns raw pasted text into link records. Input is expected to
//! be one share snippet per line, but the parse is deliberately best-effort:
//! malformed lines degrade to the unknown-user sentinel or to no records at
//! all, never to an error. The only hard failure is a URL from an
//! unsupported platform, which aborts the whole batch.

mod username;

pub use username::{extract_username, UNKNOWN_USER};

use crate::platform::{classify_url, Platform};
use crate::SweepError;
use once_cell::sync::Lazy;
use regex::Regex;

/// One discovered content link
///
/// A line containing several URLs yields several records, all sharing the
/// line's username and raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// Best-effort extracted poster name, or the unknown-user sentinel
    pub username: String,

    /// The discovered URL, exactly as it appeared in the text
    pub url: String,

    /// The platform the URL was classified to
    pub platform: Platform,

    /// The originating line, trimmed
    pub raw_content: String,
}

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("Failed to compile URL pattern"));

/// Extracts link records from pasted share-snippet text
///
/// Each non-blank line is scanned for a username and for HTTP/HTTPS URLs;
/// one [`LinkRecord`] is emitted per URL found. Lines without a URL produce
/// nothing. Classification happens at emission time, so a URL from an
/// unrecognized domain fails the whole batch before anything else runs.
///
/// # Arguments
///
/// * `text` - Raw pasted text, one share snippet per line
///
/// # Returns
///
/// * `Ok(Vec<LinkRecord>)` - All discovered links in line order
/// * `Err(SweepError::UnsupportedPlatform)` - A URL matched no known platform
///
/// # Example
///
/// ```
/// use share_sweep::extract::extract_share_links;
/// use share_sweep::platform::Platform;
///
/// let text = "52 拾贰发布了一篇小红书笔记 http://xhslink.com/a/LBoH4igKHbofb";
/// let records = extract_share_links(text).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].username, "拾贰");
/// assert_eq!(records[0].platform, Platform::Xiaohongshu);
/// ```
pub fn extract_share_links(text: &str) -> Result<Vec<LinkRecord>, SweepError> {
    let mut records = Vec::new();

    for line in text.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let username = extract_username(line);

        for url_match in URL_PATTERN.find_iter(line) {
            let url = url_match.as_str().to_string();
            let platform = classify_url(&url)?;

            records.push(LinkRecord {
                username: username.clone(),
                url,
                platform,
                raw_content: line.to_string(),
            });
        }
    }

    tracing::debug!("Extracted {} link records", records.len());

    Ok(records)
}
