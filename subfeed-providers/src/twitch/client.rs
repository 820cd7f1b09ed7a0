//! Twitch HTTP client

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;

use super::types::{TwitchEnvelope, TwitchStream, TwitchUser};
use crate::error::{check_response, json_with_limit, ClientError};

/// Helix caps query-parameter repetition at 100 values per request, so
/// batched stream lookups are issued in chunks of this size.
pub const LIVE_STREAM_CHUNK_SIZE: usize = 100;

/// Shared HTTP client for all Twitch requests (connection pooling).
static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build Twitch shared HTTP client")
});

/// Twitch Helix HTTP client
///
/// Authenticates with a `Client-ID` header on every request.
#[derive(Clone)]
pub struct TwitchClient {
    client: Client,
    base_url: String,
    client_id: String,
}

impl TwitchClient {
    /// Create a new Twitch client (reuses the shared connection pool)
    pub fn new(base_url: impl Into<String>, client_id: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: SHARED_CLIENT.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.into(),
        }
    }

    /// Look up users by login handle.
    ///
    /// Unknown logins are simply absent from the result.
    pub async fn get_users(&self, logins: &[String]) -> Result<Vec<TwitchUser>, ClientError> {
        let query: Vec<(&str, &str)> = logins.iter().map(|l| ("login", l.as_str())).collect();

        let req = self
            .client
            .get(format!("{}/users", self.base_url))
            .header("Client-ID", &self.client_id)
            .query(&query);

        let resp = check_response(req.send().await?)?;
        let envelope: TwitchEnvelope<TwitchUser> = json_with_limit(resp).await?;
        Ok(envelope.data)
    }

    /// Look up currently reported streams for the given login handles.
    ///
    /// Issues one request per chunk of [`LIVE_STREAM_CHUNK_SIZE`] logins and
    /// concatenates the results. Offline channels do not appear at all.
    pub async fn get_streams(&self, logins: &[String]) -> Result<Vec<TwitchStream>, ClientError> {
        let mut streams = Vec::new();

        for chunk in logins.chunks(LIVE_STREAM_CHUNK_SIZE) {
            let query: Vec<(&str, &str)> =
                chunk.iter().map(|l| ("user_login", l.as_str())).collect();

            let req = self
                .client
                .get(format!("{}/streams", self.base_url))
                .header("Client-ID", &self.client_id)
                .query(&query);

            let resp = check_response(req.send().await?)?;
            let envelope: TwitchEnvelope<TwitchStream> = json_with_limit(resp).await?;
            streams.extend(envelope.data);
        }

        Ok(streams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_get_users_sends_client_id_and_logins() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(header("Client-ID", "test-client"))
            .and(query_param("login", "somechannel"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {"id": "1234", "login": "somechannel", "display_name": "SomeChannel"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = TwitchClient::new(server.uri(), "test-client");
        let users = client.get_users(&["somechannel".to_string()]).await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].login, "somechannel");
        assert_eq!(users[0].display_name, "SomeChannel");
    }

    #[tokio::test]
    async fn test_get_users_unknown_login_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})),
            )
            .mount(&server)
            .await;

        let client = TwitchClient::new(server.uri(), "test-client");
        let users = client.get_users(&["nobody".to_string()]).await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_get_streams_chunks_requests() {
        let server = MockServer::start().await;

        // 150 logins must produce exactly two requests.
        Mock::given(method("GET"))
            .and(path("/streams"))
            .and(header("Client-ID", "test-client"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})),
            )
            .expect(2)
            .mount(&server)
            .await;

        let logins: Vec<String> = (0..150).map(|i| format!("channel{i}")).collect();
        let client = TwitchClient::new(server.uri(), "test-client");
        let streams = client.get_streams(&logins).await.unwrap();
        assert!(streams.is_empty());
    }

    #[tokio::test]
    async fn test_get_streams_parses_stream_records() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/streams"))
            .and(query_param("user_login", "somechannel"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "id": "999",
                    "user_id": "1234",
                    "user_name": "SomeChannel",
                    "type": "live",
                    "title": "Playing something",
                    "viewer_count": 42,
                    "started_at": "2024-05-01T18:30:00Z"
                }]
            })))
            .mount(&server)
            .await;

        let client = TwitchClient::new(server.uri(), "test-client");
        let streams = client.get_streams(&["somechannel".to_string()]).await.unwrap();

        assert_eq!(streams.len(), 1);
        assert!(streams[0].is_live());
        assert_eq!(streams[0].title, "Playing something");
        assert_eq!(streams[0].viewer_count, 42);
    }

    #[tokio::test]
    async fn test_http_error_propagates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = TwitchClient::new(server.uri(), "test-client");
        let err = client.get_users(&["somechannel".to_string()]).await.unwrap_err();
        assert!(matches!(err, ClientError::Http { .. }));
    }
}
