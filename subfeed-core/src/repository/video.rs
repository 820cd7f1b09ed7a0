// Video Store

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::error::Result;
use crate::models::{PersistedChannel, PersistedVideo, Video};

/// Video persistence as seen by the sync service. Videos are append-only;
/// the newest one per channel doubles as the ingest cursor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// The most recently published stored video of a channel, if any.
    async fn most_recent(&self, channel: &PersistedChannel) -> Result<Option<PersistedVideo>>;

    /// Append one video. Re-inserting an already-stored video maps to
    /// [`Error::AlreadyExists`] via the unique `(channel_id,
    /// id_in_provider)` constraint; callers treat that as a no-op.
    async fn insert(&self, video: &Video) -> Result<()>;
}

#[derive(Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_video(row: &PgRow, channel: &PersistedChannel) -> Result<PersistedVideo> {
    Ok(PersistedVideo {
        id: row.try_get("id")?,
        video: Video {
            id_in_provider: row.try_get("id_in_provider")?,
            channel: channel.clone(),
            title: row.try_get("title")?,
            url: row.try_get("url")?,
            published_at: row.try_get("published_at")?,
            image_url: row.try_get("image_url")?,
            episode: row.try_get("episode")?,
            season: row.try_get("season")?,
        },
    })
}

#[async_trait]
impl VideoStore for PgVideoRepository {
    async fn most_recent(&self, channel: &PersistedChannel) -> Result<Option<PersistedVideo>> {
        let row = sqlx::query(
            "SELECT id, id_in_provider, title, url, published_at, image_url, episode, season
             FROM videos
             WHERE channel_id = $1
             ORDER BY published_at DESC
             LIMIT 1",
        )
        .bind(channel.id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(|row| row_to_video(row, channel)).transpose()
    }

    async fn insert(&self, video: &Video) -> Result<()> {
        sqlx::query(
            "INSERT INTO videos
                 (channel_id, id_in_provider, title, url, published_at, image_url, episode, season)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(video.channel.id)
        .bind(&video.id_in_provider)
        .bind(&video.title)
        .bind(&video.url)
        .bind(video.published_at)
        .bind(&video.image_url)
        .bind(video.episode)
        .bind(video.season)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
