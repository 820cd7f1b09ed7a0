//! The Movie DB (TMDB) API client
//!
//! A channel corresponds to a TV show; episodes become videos dated at
//! their air date.

pub mod client;
pub mod types;

pub use client::TmdbClient;
pub use types::{
    image_url, TmdbEpisode, TmdbSeason, TmdbSeasonExtended, TmdbTvShow, TmdbTvShowExtended,
};
