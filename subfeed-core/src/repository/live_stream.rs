// Live Stream Store

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::{LiveStream, Provider};

/// Live-stream persistence as seen by the sync service.
///
/// Live streams are ephemeral snapshots, so the contract is a single
/// atomic replace; there is no incremental update path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LiveStreamStore: Send + Sync {
    /// Replace a provider's entire live-stream set in one transaction.
    /// Readers observe either the previous snapshot or the new one, never
    /// a mix.
    async fn replace_for_provider(&self, provider: Provider, streams: &[LiveStream])
        -> Result<()>;
}

#[derive(Clone)]
pub struct PgLiveStreamRepository {
    pool: PgPool,
}

impl PgLiveStreamRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LiveStreamStore for PgLiveStreamRepository {
    async fn replace_for_provider(
        &self,
        provider: Provider,
        streams: &[LiveStream],
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "DELETE FROM live_streams
             USING channels
             WHERE live_streams.channel_id = channels.id
               AND channels.provider = $1",
        )
        .bind(provider.as_str())
        .execute(&mut *tx)
        .await?;

        for stream in streams {
            sqlx::query(
                "INSERT INTO live_streams (channel_id, title, live, live_since, image_url)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(stream.channel.id)
            .bind(&stream.title)
            .bind(stream.live)
            .bind(stream.live_since)
            .bind(&stream.image_url)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
