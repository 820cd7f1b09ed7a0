// The Movie Database Provider Adapter
//
// Seasons are fetched coarsely: the season listing carries air dates, so
// the adapter walks seasons newest-first and stops once the selection
// already reaches past the cursor. The season that straddles the cursor is
// fetched whole and may yield episodes the caller has already stored; the
// store's insert path treats duplicates as a no-op, so over-fetch is the
// accepted cost of one request per season instead of one per episode.

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use subfeed_providers::tmdb::{image_url, TmdbSeason};
use subfeed_providers::TmdbClient;

use super::error::{ProviderError, Result};
use super::traits::ContentProvider;
use crate::config::TmdbConfig;
use crate::models::{Channel, PersistedChannel, Provider, Video};

pub struct TheMovieDbProvider {
    client: TmdbClient,
}

impl TheMovieDbProvider {
    #[must_use]
    pub fn new(config: &TmdbConfig) -> Self {
        Self {
            client: TmdbClient::new(config.base_url.clone(), config.api_key.clone()),
        }
    }
}

fn show_id(id_in_provider: &str) -> Result<i64> {
    id_in_provider
        .parse()
        .map_err(|_| ProviderError::InvalidChannelId(id_in_provider.to_string()))
}

/// Seasons that may contain episodes aired after `since`.
///
/// Walks seasons in descending season-number order and keeps adding until
/// the selection already contains a season that started before the cursor;
/// that season straddles the cursor and is the last one needed. Seasons
/// without an air date are never treated as covering the cursor, so they
/// are kept and never end the walk.
fn select_seasons(seasons: &[TmdbSeason], since: Option<DateTime<Utc>>) -> Vec<TmdbSeason> {
    let Some(since) = since else {
        return seasons.to_vec();
    };
    let cutoff = since.date_naive();

    let mut ordered = seasons.to_vec();
    ordered.sort_by(|a, b| b.season_number.cmp(&a.season_number));

    let mut selected: Vec<TmdbSeason> = Vec::new();
    for season in ordered {
        let covered = selected
            .iter()
            .any(|s| s.air_date.is_some_and(|aired| aired < cutoff));
        if covered {
            break;
        }
        selected.push(season);
    }
    selected
}

#[async_trait]
impl ContentProvider for TheMovieDbProvider {
    fn name(&self) -> &'static str {
        "the_movie_db"
    }

    fn provider(&self) -> Provider {
        Provider::TheMovieDb
    }

    async fn resolve_channel(&self, id_in_provider: &str) -> Result<Option<Channel>> {
        // A non-numeric id cannot name a show.
        let Ok(id) = id_in_provider.parse::<i64>() else {
            return Ok(None);
        };
        match self.client.get_tv_show(id).await {
            Ok(show) => Ok(Some(Channel {
                provider: Provider::TheMovieDb,
                id_in_provider: show.id.to_string(),
                name: show.name,
                url: None,
                image_url: show.poster_path.as_deref().map(image_url),
            })),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn fetch_new_videos(
        &self,
        channel: &PersistedChannel,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Video>> {
        let id = show_id(&channel.id_in_provider)?;
        let show = self.client.get_tv_show(id).await?;
        let seasons = select_seasons(&show.seasons, since);

        let mut videos = Vec::new();
        for season in seasons {
            let detail = self.client.get_tv_show_season(id, season.season_number).await?;
            for episode in detail.episodes {
                // Unaired episodes have no air date and no publish instant.
                let Some(air_date) = episode.air_date else {
                    continue;
                };
                videos.push(Video {
                    id_in_provider: episode.id.to_string(),
                    channel: channel.clone(),
                    title: episode.name,
                    url: None,
                    published_at: air_date.and_time(NaiveTime::MIN).and_utc(),
                    image_url: episode.still_path.as_deref().map(image_url),
                    episode: Some(episode.episode_number),
                    season: Some(episode.season_number),
                });
            }
        }
        Ok(videos)
    }

    async fn channel_suggestions(&self, query: &str) -> Result<Vec<Channel>> {
        let shows = self.client.search_tv_shows(query).await?;
        Ok(shows
            .into_iter()
            .map(|show| Channel {
                provider: Provider::TheMovieDb,
                id_in_provider: show.id.to_string(),
                name: show.name,
                url: None,
                image_url: show.poster_path.as_deref().map(image_url),
            })
            .collect())
    }
}
