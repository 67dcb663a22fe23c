//! Synchronous key-value persistence boundary.
//!
//! Records are stored as JSON strings under well-known keys. Two backends
//! implement the trait: the SQLite [`Database`](super::Database) for durable
//! storage and [`MemoryStore`] for tests and throwaway sessions.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use super::database::DatabaseError;

/// Slot holding the guest profile.
pub const GUEST_PROFILE_KEY: &str = "lingoquest_user_v2";
/// Collection of registered profiles keyed by normalized email.
pub const USERS_KEY: &str = "lingoquest_users";
/// Email of the signed-in account, if any.
pub const SESSION_KEY: &str = "lingoquest_session";
/// Queue of lessons saved for offline use.
pub const OFFLINE_LESSONS_KEY: &str = "lingoquest_offline_lessons";

/// String-keyed document storage.
pub trait KeyValueStore {
    /// Fetch the raw value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, DatabaseError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), DatabaseError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), DatabaseError>;

    /// Fetch and deserialize a JSON document.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DatabaseError>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| DatabaseError::DeserializationError(e.to_string())),
            None => Ok(None),
        }
    }

    /// Serialize and store a JSON document.
    fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), DatabaseError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        self.set(key, &raw)
    }
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), DatabaseError> {
        self.entries.remove(key);
        Ok(())
    }
}
