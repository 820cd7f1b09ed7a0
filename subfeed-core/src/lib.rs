//! Core domain logic for subfeed: provider adapters, the sync service
//! and the persistence layer behind it.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod provider;
pub mod repository;
pub mod service;

pub use config::Config;
pub use error::{Error, Result};
