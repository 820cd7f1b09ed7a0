pub mod channel;
pub mod live_stream;
pub mod provider;
pub mod video;

pub use channel::{Channel, PersistedChannel};
pub use live_stream::LiveStream;
pub use provider::{Capability, Provider, ProviderCapabilities};
pub use video::{PersistedVideo, Video};
