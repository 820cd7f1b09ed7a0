//! Yle Areena HTTP client

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;

use super::types::{YleEnvelope, YleProgram, YleSeries};
use crate::error::{check_response, json_with_limit, ClientError};

/// Page size requested from the programs listing; the catalog API caps at
/// 100 items per call.
const PROGRAMS_PAGE_LIMIT: u32 = 100;

/// Shared HTTP client for all Yle requests (connection pooling).
static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build Yle shared HTTP client")
});

/// Yle Areena HTTP client
///
/// Authenticates with `app_id`/`app_key` query parameters on every request.
#[derive(Clone)]
pub struct YleClient {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl YleClient {
    /// Create a new Yle client (reuses the shared connection pool)
    pub fn new(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            client: SHARED_CLIENT.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }

    fn auth(&self) -> [(&'static str, &str); 2] {
        [("app_id", self.app_id.as_str()), ("app_key", self.app_key.as_str())]
    }

    /// Fetch a single series by id. 404 means the series does not exist.
    pub async fn get_series(&self, series_id: &str) -> Result<YleSeries, ClientError> {
        let req = self
            .client
            .get(format!("{}/series/items/{series_id}.json", self.base_url))
            .query(&self.auth());

        let resp = check_response(req.send().await?)?;
        let envelope: YleEnvelope<YleSeries> = json_with_limit(resp).await?;
        Ok(envelope.data)
    }

    /// List programs belonging to a series.
    pub async fn get_programs_of_series(
        &self,
        series_id: &str,
    ) -> Result<Vec<YleProgram>, ClientError> {
        let req = self
            .client
            .get(format!("{}/programs/items.json", self.base_url))
            .query(&self.auth())
            .query(&[("series", series_id), ("type", "program")])
            .query(&[("limit", PROGRAMS_PAGE_LIMIT)]);

        let resp = check_response(req.send().await?)?;
        let envelope: YleEnvelope<Vec<YleProgram>> = json_with_limit(resp).await?;
        Ok(envelope.data)
    }

    /// Free-text program search.
    pub async fn search_programs(&self, query: &str) -> Result<Vec<YleProgram>, ClientError> {
        let req = self
            .client
            .get(format!("{}/programs/items.json", self.base_url))
            .query(&self.auth())
            .query(&[("q", query), ("type", "program")])
            .query(&[("limit", PROGRAMS_PAGE_LIMIT)]);

        let resp = check_response(req.send().await?)?;
        let envelope: YleEnvelope<Vec<YleProgram>> = json_with_limit(resp).await?;
        Ok(envelope.data)
    }
}
