//! Yle Areena API client
//!
//! A "program" is a catalog item; its parent series is the subscribable
//! unit. Availability is decided by publication events on the yle-areena
//! outlet.

pub mod client;
pub mod types;

pub use client::YleClient;
pub use types::{YleImage, YleProgram, YleSeries};
