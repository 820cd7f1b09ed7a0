// Provider System
//
// One adapter per external source, all behind the same contract. The
// adapters translate provider-native payloads (fetched by the clients in
// `subfeed-providers`) into domain models; nothing above this module sees
// a provider-native type.

pub mod error;
pub mod registry;
pub mod tmdb;
pub mod traits;
pub mod twitch;
pub mod yle;

pub use error::ProviderError;
pub use registry::ProviderRegistry;
pub use tmdb::TheMovieDbProvider;
pub use traits::ContentProvider;
pub use twitch::TwitchProvider;
pub use yle::YleProvider;
