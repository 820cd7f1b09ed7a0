// Twitch Provider Adapter
//
// Live streams only: Twitch is used purely as a broadcast-state source,
// so the on-demand operations keep their empty defaults.

use async_trait::async_trait;
use subfeed_providers::twitch::TwitchStream;
use subfeed_providers::TwitchClient;

use super::error::Result;
use super::traits::ContentProvider;
use crate::config::TwitchConfig;
use crate::models::{Channel, LiveStream, PersistedChannel, Provider};

const THUMBNAIL_WIDTH: u32 = 640;
const THUMBNAIL_HEIGHT: u32 = 360;

pub struct TwitchProvider {
    client: TwitchClient,
}

impl TwitchProvider {
    #[must_use]
    pub fn new(config: &TwitchConfig) -> Self {
        Self {
            client: TwitchClient::new(config.base_url.clone(), config.client_id.clone()),
        }
    }
}

/// Join raw stream records back to the channels they were fetched for.
///
/// Helix reports the streamer's display name, which differs from the
/// stored login only by case, so the match is case-insensitive. A stream
/// whose owner is not among `channels` is dropped rather than guessed at.
fn to_live_streams(channels: &[PersistedChannel], streams: Vec<TwitchStream>) -> Vec<LiveStream> {
    streams
        .into_iter()
        .filter_map(|stream| {
            let channel = channels
                .iter()
                .find(|c| c.id_in_provider.eq_ignore_ascii_case(&stream.user_name))?;
            let live = stream.is_live();
            let image_url = stream.thumbnail(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT);
            Some(LiveStream {
                channel: channel.clone(),
                title: stream.title,
                live,
                live_since: stream.started_at,
                image_url,
            })
        })
        .collect()
}

#[async_trait]
impl ContentProvider for TwitchProvider {
    fn name(&self) -> &'static str {
        "twitch"
    }

    fn provider(&self) -> Provider {
        Provider::Twitch
    }

    async fn resolve_channel(&self, id_in_provider: &str) -> Result<Option<Channel>> {
        let users = self.client.get_users(&[id_in_provider.to_string()]).await?;
        Ok(users.into_iter().next().map(|user| Channel {
            provider: Provider::Twitch,
            // The login is the stable handle used for stream lookups.
            id_in_provider: user.login,
            name: user.display_name,
            url: None,
            image_url: None,
        }))
    }

    async fn fetch_live_streams(&self, channels: &[PersistedChannel]) -> Result<Vec<LiveStream>> {
        if channels.is_empty() {
            return Ok(Vec::new());
        }
        let logins: Vec<String> = channels
            .iter()
            .map(|channel| channel.id_in_provider.clone())
            .collect();
        let streams = self.client.get_streams(&logins).await?;
        Ok(to_live_streams(channels, streams))
    }
}
