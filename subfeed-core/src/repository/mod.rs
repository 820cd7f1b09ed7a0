// Persistence Layer
//
// Narrow store traits consumed by the sync service, with PostgreSQL
// implementations. The traits are exactly as wide as the orchestrator
// needs; feed-serving queries live elsewhere.

pub mod channel;
pub mod live_stream;
pub mod video;

pub use channel::{ChannelStore, PgChannelRepository};
pub use live_stream::{LiveStreamStore, PgLiveStreamRepository};
pub use video::{PgVideoRepository, VideoStore};

#[cfg(test)]
pub use channel::MockChannelStore;
#[cfg(test)]
pub use live_stream::MockLiveStreamStore;
#[cfg(test)]
pub use video::MockVideoStore;
