//! Username heuristics for share snippets

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel used when no username can be recovered from a line
pub const UNKNOWN_USER: &str = "未知用户";

// Share snippets name the poster right before the "发布了" (posted) marker.
static POSTED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\S+?)发布了").expect("Failed to compile posted-marker pattern"));

// Douyin-style snippets carry the poster inside a fullwidth-bracket title.
static BRACKET_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"【([^】]+)").expect("Failed to compile bracket-title pattern"));

/// Extracts the poster's name from one snippet line
///
/// Patterns are tried in priority order: the token immediately preceding the
/// `发布了` marker first, then the text inside a `【...】` title segment. When
/// neither matches, the [`UNKNOWN_USER`] sentinel is returned rather than an
/// error; username extraction never fails the batch.
pub fn extract_username(line: &str) -> String {
    if let Some(captures) = POSTED_MARKER.captures(line) {
        return captures[1].to_string();
    }

    if let Some(captures) = BRACKET_TITLE.captures(line) {
        return captures[1].to_string();
    }

    UNKNOWN_USER.to_string()
}
