//! Learner profile: record types, energy, day rollover, accounts and the
//! persistent store.

pub mod auth;
pub mod calendar;
pub mod energy;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use auth::AuthError;
pub use store::{ProfileStore, Registration, StoreError};
pub use types::{Difficulty, LanguageProgress, Preferences, UserProfile};
