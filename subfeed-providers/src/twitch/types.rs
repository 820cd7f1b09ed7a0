//! Twitch Helix response payloads

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Every Helix endpoint wraps its payload in a `data` array.
#[derive(Debug, Clone, Deserialize)]
pub struct TwitchEnvelope<T> {
    pub data: Vec<T>,
}

/// User record from `GET /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct TwitchUser {
    pub id: String,
    pub login: String,
    pub display_name: String,
}

/// Stream record from `GET /streams`.
///
/// `stream_type` is a literal marker ("live", "rerun", ...) rather than a
/// boolean; only "live" counts as actually live.
#[derive(Debug, Clone, Deserialize)]
pub struct TwitchStream {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(rename = "type")]
    pub stream_type: String,
    pub title: String,
    #[serde(default)]
    pub viewer_count: u64,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl TwitchStream {
    /// Helix marks live broadcasts with `type == "live"`; reruns and any
    /// future marker values are not live.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.stream_type == "live"
    }

    /// Thumbnail URL with the `{width}x{height}` placeholders substituted.
    #[must_use]
    pub fn thumbnail(&self, width: u32, height: u32) -> Option<String> {
        self.thumbnail_url.as_ref().map(|template| {
            template
                .replace("{width}", &width.to_string())
                .replace("{height}", &height.to_string())
        })
    }
}
