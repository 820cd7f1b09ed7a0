use serde::{Deserialize, Serialize};

use super::Provider;

/// A subscribable entity native to one provider (a show, a user stream,
/// a series). Identity is `(provider, id_in_provider)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub provider: Provider,
    /// Provider-native id: a Twitch login, a Yle series id, a TMDB show id.
    pub id_in_provider: String,
    pub name: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

/// A channel that has been stored; the surrogate `id` is assigned at first
/// persistence and is the identity used by all downstream joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedChannel {
    pub id: i32,
    #[serde(flatten)]
    pub channel: Channel,
}

impl std::ops::Deref for PersistedChannel {
    type Target = Channel;

    fn deref(&self) -> &Self::Target {
        &self.channel
    }
}
