//! Platform classification for discovered share links
//!
//! This module maps content URLs onto the closed set of supported platforms
//! and carries the per-platform constants (display labels, artifact
//! directories) the rest of the pipeline keys on.

use crate::SweepError;

/// The supported source platforms
///
/// The enum is deliberately closed: every downstream match over it is
/// exhaustive, so adding a platform is a compile-time checklist rather than
/// a runtime lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Xiaohongshu (小红书) notes
    Xiaohongshu,
    /// Douyin (抖音) items
    Douyin,
}

impl Platform {
    /// Dispatch and aggregation order: Xiaohongshu rows always precede Douyin rows.
    pub const ALL: [Platform; 2] = [Platform::Xiaohongshu, Platform::Douyin];

    /// Returns the localized display label used in the report's platform column
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Xiaohongshu => "小红书",
            Platform::Douyin => "抖音",
        }
    }

    /// Returns the short name used in configuration and logs
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Xiaohongshu => "xhs",
            Platform::Douyin => "douyin",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a URL by its source platform
///
/// The check is an ordered substring match over the fixed set of known
/// domains: Xiaohongshu's two domains first (`xiaohongshu.com`,
/// `xhslink.com`), then Douyin's (`douyin.com`).
///
/// An unrecognized URL is a hard failure, not a silent skip: a run containing
/// even one link the pipeline cannot crawl must abort before any state is
/// touched.
///
/// # Arguments
///
/// * `url` - The URL to classify
///
/// # Returns
///
/// * `Ok(Platform)` - The matching platform tag
/// * `Err(SweepError::UnsupportedPlatform)` - No known domain matched; carries the URL
///
/// # Examples
///
/// ```
/// use share_sweep::platform::{classify_url, Platform};
///
/// let platform = classify_url("http://xhslink.com/a/LBoH4igKHbofb").unwrap();
/// assert_eq!(platform, Platform::Xiaohongshu);
///
/// assert!(classify_url("https://example.com/post/1").is_err());
/// ```
pub fn classify_url(url: &str) -> Result<Platform, SweepError> {
    if url.contains("xiaohongshu.com") || url.contains("xhslink.com") {
        Ok(Platform::Xiaohongshu)
    } else if url.contains("douyin.com") {
        Ok(Platform::Douyin)
    } else {
        Err(SweepError::UnsupportedPlatform {
            url: url.to_string(),
        })
    }
}
