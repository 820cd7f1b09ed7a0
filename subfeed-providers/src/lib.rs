// Subfeed Provider Clients
//
// Pure HTTP client implementations for the external content APIs the sync
// engine pulls from. These clients know nothing about the ContentProvider
// trait or persistence; subfeed-core/provider wraps them into adapters.
//
// Architecture:
// - subfeed-providers: typed HTTP clients (Twitch, Yle Areena, The Movie DB)
// - subfeed-core/provider: ContentProvider adapters calling these clients
// - subfeed-core/service: SyncService orchestrating adapters and stores

// Shared error types
pub mod error;

// HTTP clients
pub mod tmdb;
pub mod twitch;
pub mod yle;

// Re-export client types for convenience
pub use error::ClientError;
pub use tmdb::TmdbClient;
pub use twitch::TwitchClient;
pub use yle::YleClient;
