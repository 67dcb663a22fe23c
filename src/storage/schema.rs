//! Database schema definitions for LingoQuest.
//!
//! Every persisted record is a JSON document addressed by a string key, so the
//! schema is a single key-value table plus the version bookkeeping.

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- Key-value documents (profiles, session pointer, offline lessons)
CREATE TABLE IF NOT EXISTS kv_entries (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Schema version tracking table.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;
