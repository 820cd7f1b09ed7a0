//! Twitch Helix API client
//!
//! Channel identity on Twitch is the login handle, not the numeric user id.

pub mod client;
pub mod types;

pub use client::{TwitchClient, LIVE_STREAM_CHUNK_SIZE};
pub use types::{TwitchStream, TwitchUser};
