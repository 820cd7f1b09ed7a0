use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PersistedChannel;

/// A live broadcast reported by a provider.
///
/// Ephemeral: a provider's entire live-stream set is replaced atomically
/// on every sync. A stream not reported in a sync run is implicitly gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStream {
    pub channel: PersistedChannel,
    pub title: String,
    /// Providers report reruns and other non-live broadcast types too.
    pub live: bool,
    pub live_since: DateTime<Utc>,
    pub image_url: Option<String>,
}
