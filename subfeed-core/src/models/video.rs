use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PersistedChannel;

/// A piece of on-demand content reported by a provider.
///
/// `published_at` is the ordering and cursor field; it is assumed (not
/// enforced) to be monotonic per channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id_in_provider: String,
    pub channel: PersistedChannel,
    pub title: String,
    pub url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub image_url: Option<String>,
    /// Episode number when the provider reports one; `0` from upstream is
    /// already normalized to none by the adapters.
    pub episode: Option<i32>,
    pub season: Option<i32>,
}

/// A stored video. Immutable after insert; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedVideo {
    pub id: i64,
    #[serde(flatten)]
    pub video: Video,
}

impl std::ops::Deref for PersistedVideo {
    type Target = Video;

    fn deref(&self) -> &Self::Target {
        &self.video
    }
}
