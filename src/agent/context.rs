//! Per-run dispatch state
//!
//! The identifier lists and the run-mode indicator are built fresh for every
//! run and handed to each agent invocation by value. Nothing here outlives a
//! run, so two pipeline runs can never race on shared dispatch state.

use crate::platform::Platform;
use serde::Serialize;

/// What the agents are being asked to do
///
/// The pipeline always crawls specific items discovered in the pasted text,
/// never a feed or search listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrawlMode {
    /// Fetch the specified items only
    Detail,
}

/// Resolved identifiers grouped by platform, in discovery order
#[derive(Debug, Clone, Default)]
pub struct JobBatch {
    /// Xiaohongshu note URLs (the share URL is the identifier)
    pub xhs_note_urls: Vec<String>,

    /// Douyin numeric item ids
    pub douyin_item_ids: Vec<String>,
}

impl JobBatch {
    /// Creates an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a resolved identifier to its platform's list
    pub fn push(&mut self, platform: Platform, identifier: String) {
        match platform {
            Platform::Xiaohongshu => self.xhs_note_urls.push(identifier),
            Platform::Douyin => self.douyin_item_ids.push(identifier),
        }
    }

    /// Returns the identifier list for a platform
    pub fn identifiers(&self, platform: Platform) -> &[String] {
        match platform {
            Platform::Xiaohongshu => &self.xhs_note_urls,
            Platform::Douyin => &self.douyin_item_ids,
        }
    }

    /// Returns true if no platform has any identifiers
    pub fn is_empty(&self) -> bool {
        Platform::ALL
            .iter()
            .all(|&p| self.identifiers(p).is_empty())
    }
}

/// The context one run hands to every agent it invokes
///
/// Serialized to JSON for the subprocess agent bridge.
#[derive(Debug, Clone, Serialize)]
pub struct RunContext {
    /// Run-mode indicator; always [`CrawlMode::Detail`] for this pipeline
    pub mode: CrawlMode,

    /// Xiaohongshu note URLs to fetch
    pub xhs_note_urls: Vec<String>,

    /// Douyin item ids to fetch
    pub douyin_item_ids: Vec<String>,
}

impl RunContext {
    /// Builds the per-run context from a resolved job batch
    pub fn from_batch(batch: &JobBatch) -> Self {
        Self {
            mode: CrawlMode::Detail,
            xhs_note_urls: batch.xhs_note_urls.clone(),
            douyin_item_ids: batch.douyin_item_ids.clone(),
        }
    }
}
