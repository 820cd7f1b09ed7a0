use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// External content source
///
/// The provider set is closed: every variant is wired to exactly one
/// adapter in the registry, and every persisted channel names one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Twitch,
    Yle,
    TheMovieDb,
}

impl Provider {
    /// All known providers, in registry order.
    pub const ALL: [Self; 3] = [Self::Twitch, Self::Yle, Self::TheMovieDb];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Twitch => "twitch",
            Self::Yle => "yle",
            Self::TheMovieDb => "the_movie_db",
        }
    }

    /// Operations this provider supports. Calls outside the capability set
    /// are rejected at the orchestrator layer.
    #[must_use]
    pub const fn capabilities(self) -> ProviderCapabilities {
        match self {
            Self::Twitch => ProviderCapabilities {
                videos: false,
                live_streams: true,
                channel_suggestions: false,
            },
            Self::Yle | Self::TheMovieDb => ProviderCapabilities {
                videos: true,
                live_streams: false,
                channel_suggestions: true,
            },
        }
    }

    #[must_use]
    pub const fn supports(self, capability: Capability) -> bool {
        self.capabilities().supports(capability)
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitch" => Ok(Self::Twitch),
            "yle" => Ok(Self::Yle),
            "the_movie_db" | "themoviedb" | "tmdb" => Ok(Self::TheMovieDb),
            _ => Err(format!("Unknown provider: {s}")),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One operation family a provider may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Videos,
    LiveStreams,
    ChannelSuggestions,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Videos => write!(f, "videos"),
            Self::LiveStreams => write!(f, "live_streams"),
            Self::ChannelSuggestions => write!(f, "channel_suggestions"),
        }
    }
}

/// Capability set of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCapabilities {
    pub videos: bool,
    pub live_streams: bool,
    pub channel_suggestions: bool,
}

impl ProviderCapabilities {
    #[must_use]
    pub const fn supports(self, capability: Capability) -> bool {
        match capability {
            Capability::Videos => self.videos,
            Capability::LiveStreams => self.live_streams,
            Capability::ChannelSuggestions => self.channel_suggestions,
        }
    }
}
