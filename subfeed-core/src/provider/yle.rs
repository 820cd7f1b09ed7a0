// Yle Areena Provider Adapter
//
// On-demand content and suggestions; Yle has no live-stream surface here.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use subfeed_providers::yle::YleProgram;
use subfeed_providers::YleClient;

use super::error::Result;
use super::traits::ContentProvider;
use crate::config::YleConfig;
use crate::models::{Channel, PersistedChannel, Provider, Video};

pub struct YleProvider {
    client: YleClient,
}

impl YleProvider {
    #[must_use]
    pub fn new(config: &YleConfig) -> Self {
        Self {
            client: YleClient::new(
                config.base_url.clone(),
                config.app_id.clone(),
                config.app_key.clone(),
            ),
        }
    }
}

/// Map a catalog program to a video on `channel`.
///
/// Programs without an areena publication event have no publish instant
/// and are skipped; callers filter availability first.
fn to_video(program: YleProgram, channel: &PersistedChannel) -> Option<Video> {
    let published_at = program.available_from()?;
    let episode = program.episode();
    let season = program.season();
    let image_url = program.image.as_ref().and_then(|image| image.url());
    Some(Video {
        id_in_provider: program.id,
        channel: channel.clone(),
        title: program.title.fi,
        url: None,
        published_at,
        image_url,
        episode,
        season,
    })
}

#[async_trait]
impl ContentProvider for YleProvider {
    fn name(&self) -> &'static str {
        "yle"
    }

    fn provider(&self) -> Provider {
        Provider::Yle
    }

    async fn resolve_channel(&self, id_in_provider: &str) -> Result<Option<Channel>> {
        match self.client.get_series(id_in_provider).await {
            Ok(series) => Ok(Some(Channel {
                provider: Provider::Yle,
                id_in_provider: series.id,
                name: series.title.fi,
                url: None,
                image_url: series.image.as_ref().and_then(|image| image.url()),
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
        let programs = self
            .client
            .get_programs_of_series(&channel.id_in_provider)
            .await?;
        let now = Utc::now();

        let videos = programs
            .into_iter()
            .filter(|program| program.is_available(now))
            .filter_map(|program| to_video(program, channel))
            .filter(|video| since.is_none_or(|cursor| video.published_at > cursor))
            .collect();
        Ok(videos)
    }

    /// Suggest the parent series of matching programs. The search endpoint
    /// returns programs, so several hits from one series collapse into a
    /// single suggestion.
    async fn channel_suggestions(&self, query: &str) -> Result<Vec<Channel>> {
        let programs = self.client.search_programs(query).await?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut suggestions = Vec::new();
        for program in programs {
            let Some(series) = program.part_of_series else {
                continue;
            };
            if !seen.insert(series.id.clone()) {
                continue;
            }
            suggestions.push(Channel {
                provider: Provider::Yle,
                id_in_provider: series.id,
                name: series.title.fi,
                url: None,
                // The program image, not the series image: the series
                // record in search results rarely carries one.
                image_url: program.image.as_ref().and_then(|image| image.url()),
            });
        }
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> YleConfig {
        YleConfig {
            base_url: base_url.to_string(),
            app_id: "id".to_string(),
            app_key: "key".to_string(),
        }
    }

    fn persisted(series_id: &str) -> PersistedChannel {
        PersistedChannel {
            id: 7,
            channel: Channel {
                provider: Provider::Yle,
                id_in_provider: series_id.to_string(),
                name: "Sarja".to_string(),
                url: None,
                image_url: None,
            },
        }
    }

    #[tokio::test]
    async fn test_resolve_channel_from_series() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/series/items/1-123.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "id": "1-123",
                    "title": {"fi": "Pasila"},
                    "image": {"id": "13-1-9", "available": true}
                }
            })))
            .mount(&server)
            .await;

        let adapter = YleProvider::new(&config(&server.uri()));
        let channel = adapter.resolve_channel("1-123").await.unwrap().expect("channel");
        assert_eq!(channel.id_in_provider, "1-123");
        assert_eq!(channel.name, "Pasila");
        assert_eq!(
            channel.image_url.as_deref(),
            Some("http://images.cdn.yle.fi/image/upload/13-1-9.jpg")
        );
    }

    #[tokio::test]
    async fn test_resolve_missing_series_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/series/items/1-999.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let adapter = YleProvider::new(&config(&server.uri()));
        assert!(adapter.resolve_channel("1-999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_new_videos_filters_availability_and_cursor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/programs/items.json"))
            .and(query_param("series", "1-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {
                        // Old episode, at the cursor: excluded.
                        "id": "1-old",
                        "title": {"fi": "Jakso 1"},
                        "episodeNumber": 1,
                        "publicationEvent": [{
                            "service": {"id": "yle-areena"},
                            "startTime": "2024-01-01T18:00:00Z"
                        }]
                    },
                    {
                        // Published after the cursor: included.
                        "id": "1-new",
                        "title": {"fi": "Jakso 2"},
                        "episodeNumber": 2,
                        "partOfSeason": {"seasonNumber": 3},
                        "publicationEvent": [{
                            "service": {"id": "yle-areena"},
                            "startTime": "2024-02-01T18:00:00Z"
                        }]
                    },
                    {
                        // Future publication: not yet available.
                        "id": "1-future",
                        "title": {"fi": "Jakso 3"},
                        "episodeNumber": 3,
                        "publicationEvent": [{
                            "service": {"id": "yle-areena"},
                            "startTime": "2999-01-01T18:00:00Z"
                        }]
                    },
                    {
                        // Broadcast-only publication: not watchable in areena.
                        "id": "1-tv",
                        "title": {"fi": "Jakso 4"},
                        "episodeNumber": 4,
                        "publicationEvent": [{
                            "service": {"id": "yle-tv1"},
                            "startTime": "2024-02-02T18:00:00Z"
                        }]
                    }
                ]
            })))
            .mount(&server)
            .await;

        let adapter = YleProvider::new(&config(&server.uri()));
        let channel = persisted("1-123");
        let since = "2024-01-01T18:00:00Z".parse().ok();
        let videos = adapter.fetch_new_videos(&channel, since).await.unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id_in_provider, "1-new");
        assert_eq!(videos[0].episode, Some(2));
        assert_eq!(videos[0].season, Some(3));
        assert_eq!(videos[0].channel.id, 7);
    }

    #[tokio::test]
    async fn test_fetch_new_videos_without_cursor_returns_all_available() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/programs/items.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {
                        "id": "1-a",
                        "title": {"fi": "A"},
                        "publicationEvent": [{
                            "service": {"id": "yle-areena"},
                            "startTime": "2020-01-01T00:00:00Z"
                        }]
                    },
                    {
                        "id": "1-b",
                        "title": {"fi": "B"},
                        "publicationEvent": [{
                            "service": {"id": "yle-areena"},
                            "startTime": "2021-01-01T00:00:00Z"
                        }]
                    }
                ]
            })))
            .mount(&server)
            .await;

        let adapter = YleProvider::new(&config(&server.uri()));
        let videos = adapter
            .fetch_new_videos(&persisted("1-123"), None)
            .await
            .unwrap();
        assert_eq!(videos.len(), 2);
    }

    #[tokio::test]
    async fn test_suggestions_deduplicate_by_series() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/programs/items.json"))
            .and(query_param("q", "pasila"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {
                        "id": "1-e1",
                        "title": {"fi": "Jakso 1"},
                        "partOfSeries": {"id": "1-123", "title": {"fi": "Pasila"}},
                        "image": {"id": "13-1-1", "available": true}
                    },
                    {
                        "id": "1-e2",
                        "title": {"fi": "Jakso 2"},
                        "partOfSeries": {"id": "1-123", "title": {"fi": "Pasila"}}
                    },
                    {
                        // No parent series: not suggestible.
                        "id": "1-solo",
                        "title": {"fi": "Yksittäinen"}
                    },
                    {
                        "id": "1-e3",
                        "title": {"fi": "Jakso"},
                        "partOfSeries": {"id": "1-456", "title": {"fi": "Toinen sarja"}}
                    }
                ]
            })))
            .mount(&server)
            .await;

        let adapter = YleProvider::new(&config(&server.uri()));
        let suggestions = adapter.channel_suggestions("pasila").await.unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].id_in_provider, "1-123");
        assert_eq!(suggestions[0].name, "Pasila");
        assert_eq!(
            suggestions[0].image_url.as_deref(),
            Some("http://images.cdn.yle.fi/image/upload/13-1-1.jpg")
        );
        assert_eq!(suggestions[1].id_in_provider, "1-456");
    }
}
