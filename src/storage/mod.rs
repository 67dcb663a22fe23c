//! Storage module for the key-value database and configuration.

pub mod config;
pub mod database;
pub mod kv;
pub mod schema;

pub use config::{AppConfig, ConfigError, EnergySettings};
pub use database::{Database, DatabaseError};
pub use kv::{KeyValueStore, MemoryStore};
