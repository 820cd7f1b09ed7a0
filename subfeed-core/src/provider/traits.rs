// Content Provider Contract

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::Result;
use crate::models::{Channel, LiveStream, PersistedChannel, Provider, Video};

/// Uniform contract every provider adapter implements.
///
/// Only `resolve_channel` is mandatory; the content operations default to
/// empty results so an adapter implements exactly the operations its
/// provider supports. The orchestrator gates calls on the capability table
/// before they reach an adapter, so the defaults exist as a safety net,
/// not a dispatch mechanism.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Stable human-readable adapter name, used in logs.
    fn name(&self) -> &'static str;

    /// The provider this adapter serves.
    fn provider(&self) -> Provider;

    /// Look up a channel by its provider-native id.
    ///
    /// `Ok(None)` means the provider authoritatively reports no such
    /// channel. Transport and API failures are errors, never `None`.
    async fn resolve_channel(&self, id_in_provider: &str) -> Result<Option<Channel>>;

    /// Content published after `since` on the given channel. A `None`
    /// cursor means the channel has no stored content yet and everything
    /// currently offered should be returned.
    async fn fetch_new_videos(
        &self,
        _channel: &PersistedChannel,
        _since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Video>> {
        Ok(Vec::new())
    }

    /// Current broadcast state for the given channels. The result is a
    /// full snapshot: channels absent from it are not broadcasting.
    async fn fetch_live_streams(&self, _channels: &[PersistedChannel]) -> Result<Vec<LiveStream>> {
        Ok(Vec::new())
    }

    /// Free-text channel search for subscription UIs. Results are not
    /// persisted.
    async fn channel_suggestions(&self, _query: &str) -> Result<Vec<Channel>> {
        Ok(Vec::new())
    }
}
