// Service Layer

pub mod sync;

pub use sync::{ChannelOutcome, IngestReport, SyncService};
