//! TMDB HTTP client

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;

use super::types::{TmdbSearchResponse, TmdbSeasonExtended, TmdbTvShow, TmdbTvShowExtended};
use crate::error::{check_response, json_with_limit, ClientError};

/// Shared HTTP client for all TMDB requests (connection pooling).
static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build TMDB shared HTTP client")
});

/// TMDB HTTP client
///
/// Authenticates with an `api_key` query parameter on every request.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a new TMDB client (reuses the shared connection pool)
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: SHARED_CLIENT.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Fetch a TV show with its season list. 404 means no such show.
    pub async fn get_tv_show(&self, show_id: i64) -> Result<TmdbTvShowExtended, ClientError> {
        let req = self
            .client
            .get(format!("{}/tv/{show_id}", self.base_url))
            .query(&[("api_key", &self.api_key)]);

        let resp = check_response(req.send().await?)?;
        json_with_limit(resp).await
    }

    /// Fetch one season of a show with its full episode list.
    pub async fn get_tv_show_season(
        &self,
        show_id: i64,
        season_number: i32,
    ) -> Result<TmdbSeasonExtended, ClientError> {
        let req = self
            .client
            .get(format!("{}/tv/{show_id}/season/{season_number}", self.base_url))
            .query(&[("api_key", &self.api_key)]);

        let resp = check_response(req.send().await?)?;
        json_with_limit(resp).await
    }

    /// Free-text TV show search.
    pub async fn search_tv_shows(&self, query: &str) -> Result<Vec<TmdbTvShow>, ClientError> {
        let req = self
            .client
            .get(format!("{}/search/tv", self.base_url))
            .query(&[("api_key", self.api_key.as_str()), ("query", query)]);

        let resp = check_response(req.send().await?)?;
        let response: TmdbSearchResponse<TmdbTvShow> = json_with_limit(resp).await?;
        Ok(response.results)
    }
}
