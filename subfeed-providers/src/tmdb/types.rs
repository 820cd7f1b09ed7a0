//! TMDB response payloads

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResponse<T> {
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbEpisode {
    pub id: i64,
    pub name: String,
    /// Absent for unaired episodes.
    #[serde(default)]
    pub air_date: Option<NaiveDate>,
    pub episode_number: i32,
    pub season_number: i32,
    #[serde(default)]
    pub still_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSeason {
    pub season_number: i32,
    /// Absent for unaired seasons and some specials.
    #[serde(default)]
    pub air_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSeasonExtended {
    pub season_number: i32,
    #[serde(default)]
    pub air_date: Option<NaiveDate>,
    #[serde(default)]
    pub episodes: Vec<TmdbEpisode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvShow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvShowExtended {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub seasons: Vec<TmdbSeason>,
}

/// Full CDN URL for a show-relative image path (w300 rendition).
/// Stray backslashes in stored paths are stripped.
#[must_use]
pub fn image_url(path: &str) -> String {
    format!("https://image.tmdb.org/t/p/w300{}", path.replace('\\', ""))
}
