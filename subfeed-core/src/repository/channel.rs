// Channel Store

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::error::{Error, Result};
use crate::models::{Channel, PersistedChannel, Provider};

/// Channel persistence as seen by the sync service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelStore: Send + Sync {
    /// All stored channels of one provider, the sync working set.
    async fn list_by_provider(&self, provider: Provider) -> Result<Vec<PersistedChannel>>;

    /// Look up a channel by its natural key `(provider, id_in_provider)`.
    async fn find(
        &self,
        provider: Provider,
        id_in_provider: &str,
    ) -> Result<Option<PersistedChannel>>;

    /// Store a resolved channel and return it with its assigned id.
    async fn create(&self, channel: &Channel) -> Result<PersistedChannel>;
}

#[derive(Clone)]
pub struct PgChannelRepository {
    pool: PgPool,
}

impl PgChannelRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_channel(row: &PgRow) -> Result<PersistedChannel> {
    let provider: String = row.try_get("provider")?;
    let provider = provider.parse::<Provider>().map_err(Error::Internal)?;
    Ok(PersistedChannel {
        id: row.try_get("id")?,
        channel: Channel {
            provider,
            id_in_provider: row.try_get("id_in_provider")?,
            name: row.try_get("name")?,
            url: row.try_get("url")?,
            image_url: row.try_get("image_url")?,
        },
    })
}

#[async_trait]
impl ChannelStore for PgChannelRepository {
    async fn list_by_provider(&self, provider: Provider) -> Result<Vec<PersistedChannel>> {
        let rows = sqlx::query(
            "SELECT id, provider, id_in_provider, name, url, image_url
             FROM channels
             WHERE provider = $1
             ORDER BY id",
        )
        .bind(provider.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_channel).collect()
    }

    async fn find(
        &self,
        provider: Provider,
        id_in_provider: &str,
    ) -> Result<Option<PersistedChannel>> {
        let row = sqlx::query(
            "SELECT id, provider, id_in_provider, name, url, image_url
             FROM channels
             WHERE provider = $1 AND id_in_provider = $2",
        )
        .bind(provider.as_str())
        .bind(id_in_provider)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_channel).transpose()
    }

    async fn create(&self, channel: &Channel) -> Result<PersistedChannel> {
        let row = sqlx::query(
            "INSERT INTO channels (provider, id_in_provider, name, url, image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, provider, id_in_provider, name, url, image_url",
        )
        .bind(channel.provider.as_str())
        .bind(&channel.id_in_provider)
        .bind(&channel.name)
        .bind(&channel.url)
        .bind(&channel.image_url)
        .fetch_one(&self.pool)
        .await?;

        row_to_channel(&row)
    }
}
