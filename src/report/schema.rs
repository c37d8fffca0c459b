//! The unified report row schema
//!
//! Each platform's agent writes records under its own field names; this
//! module maps them onto the single shared row shape the report uses.
//! Every value is carried as a string so the report renders uniformly no
//! matter whether an agent emitted `"10"` or `10`.

use crate::extract::UNKNOWN_USER;
use crate::platform::Platform;
use serde_json::Value;

/// Report column headers, in column order
pub const REPORT_HEADERS: [&str; 8] = [
    "用户名",
    "平台",
    "链接",
    "点赞数",
    "评论数",
    "收藏数",
    "分享数",
    "原始内容",
];

/// One normalized report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedRecord {
    pub username: String,
    pub platform: String,
    pub url: String,
    pub likes: String,
    pub comments: String,
    pub collects: String,
    pub shares: String,
    pub content: String,
}

impl AggregatedRecord {
    /// Normalizes one artifact record into the unified schema
    ///
    /// Missing count fields default to `"0"`, missing text fields to the
    /// empty string, and a missing nickname to the unknown-user sentinel.
    pub fn from_artifact(platform: Platform, record: &Value) -> Self {
        let url_field = match platform {
            Platform::Xiaohongshu => "note_url",
            Platform::Douyin => "aweme_url",
        };

        Self {
            username: text_field(record, "nickname", UNKNOWN_USER),
            platform: platform.label().to_string(),
            url: text_field(record, url_field, ""),
            likes: text_field(record, "liked_count", "0"),
            comments: text_field(record, "comment_count", "0"),
            collects: text_field(record, "collected_count", "0"),
            shares: text_field(record, "share_count", "0"),
            content: text_field(record, "title", ""),
        }
    }

    /// Returns the row's values in report column order
    pub fn columns(&self) -> [&str; 8] {
        [
            &self.username,
            &self.platform,
            &self.url,
            &self.likes,
            &self.comments,
            &self.collects,
            &self.shares,
            &self.content,
        ]
    }
}

/// Reads a field as a string, stringifying bare numbers
fn text_field(record: &Value, key: &str, default: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_xiaohongshu_field_mapping() {
        let record = json!({
            "nickname": "拾贰",
            "note_url": "https://www.xiaohongshu.com/explore/abc",
            "liked_count": "10",
            "comment_count": "3",
            "collected_count": "2",
            "share_count": "1",
            "title": "吉伊演唱会"
        });

        let row = AggregatedRecord::from_artifact(Platform::Xiaohongshu, &record);
        assert_eq!(row.username, "拾贰");
        assert_eq!(row.platform, "小红书");
        assert_eq!(row.url, "https://www.xiaohongshu.com/explore/abc");
        assert_eq!(row.likes, "10");
        assert_eq!(row.content, "吉伊演唱会");
    }

    #[test]
    fn test_douyin_url_field_name() {
        let record = json!({ "aweme_url": "https://www.douyin.com/note/1" });
        let row = AggregatedRecord::from_artifact(Platform::Douyin, &record);
        assert_eq!(row.url, "https://www.douyin.com/note/1");
        assert_eq!(row.platform, "抖音");
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let record = json!({ "note_url": "u" });
        let row = AggregatedRecord::from_artifact(Platform::Xiaohongshu, &record);

        assert_eq!(row.username, UNKNOWN_USER);
        assert_eq!(row.likes, "0");
        assert_eq!(row.comments, "0");
        assert_eq!(row.collects, "0");
        assert_eq!(row.shares, "0");
        assert_eq!(row.content, "");
    }

    #[test]
    fn test_numeric_counts_are_stringified() {
        let record = json!({ "liked_count": 42 });
        let row = AggregatedRecord::from_artifact(Platform::Douyin, &record);
        assert_eq!(row.likes, "42");
    }

    #[test]
    fn test_columns_match_header_order() {
        let record = json!({
            "nickname": "a", "note_url": "b", "liked_count": "1",
            "comment_count": "2", "collected_count": "3", "share_count": "4",
            "title": "c"
        });
        let row = AggregatedRecord::from_artifact(Platform::Xiaohongshu, &record);
        assert_eq!(row.columns(), ["a", "小红书", "b", "1", "2", "3", "4", "c"]);
        assert_eq!(REPORT_HEADERS.len(), row.columns().len());
    }
}
