//! Profile persistence.
//!
//! Owns the guest slot, the authenticated users collection and the session
//! pointer. Every read applies energy regeneration and the calendar-day
//! rollover before the record is handed out.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::auth::{self, AuthError};
use super::calendar;
use super::energy;
use super::types::{LanguageProgress, Preferences, UserProfile};
use crate::goals::GoalType;
use crate::progress::{LessonOutcome, ReconcileOutcome, SessionReconciler};
use crate::storage::config::EnergySettings;
use crate::storage::kv::{GUEST_PROFILE_KEY, SESSION_KEY, USERS_KEY};
use crate::storage::{DatabaseError, KeyValueStore};

/// Authenticated records keyed by normalized email.
type UsersCollection = BTreeMap<String, UserProfile>;

/// Fields collected by the registration form.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub username: String,
    pub avatar: Option<String>,
}

/// Profile store over a key-value backend.
pub struct ProfileStore<S: KeyValueStore> {
    store: S,
    energy: EnergySettings,
    reconciler: SessionReconciler,
}

impl<S: KeyValueStore> ProfileStore<S> {
    /// Create a store with the default achievement catalog.
    pub fn new(store: S, energy: EnergySettings) -> Self {
        Self::with_reconciler(store, energy, SessionReconciler::default())
    }

    pub fn with_reconciler(store: S, energy: EnergySettings, reconciler: SessionReconciler) -> Self {
        Self {
            store,
            energy,
            reconciler,
        }
    }

    pub fn energy_settings(&self) -> &EnergySettings {
        &self.energy
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load the active profile as of now.
    pub fn read(&mut self) -> UserProfile {
        self.read_at(Utc::now())
    }

    /// Load the active profile, applying regeneration and rollover at `now`.
    pub fn read_at(&mut self, now: DateTime<Utc>) -> UserProfile {
        let mut profile = self.load(now);

        let regenerated = energy::regenerate(&mut profile, &self.energy, now);
        let rolled = calendar::roll_over(&mut profile, now.date_naive()).is_some();

        if regenerated || rolled {
            self.persist(&profile);
        }

        profile
    }

    /// Save a profile to its slot.
    pub fn write(&mut self, profile: &UserProfile) -> Result<(), StoreError> {
        if profile.is_guest {
            return Ok(self.store.set_json(GUEST_PROFILE_KEY, profile)?);
        }

        let email = profile
            .email
            .as_deref()
            .map(auth::normalize_email)
            .filter(|e| !e.is_empty())
            .ok_or(StoreError::MissingEmail)?;

        let mut users = self.users()?;
        users.insert(email, profile.clone());
        self.store.set_json(USERS_KEY, &users)?;
        Ok(())
    }

    /// Spend one energy point to start a lesson.
    pub fn consume_energy(&mut self) -> Result<UserProfile, StoreError> {
        self.consume_energy_at(Utc::now())
    }

    pub fn consume_energy_at(&mut self, now: DateTime<Utc>) -> Result<UserProfile, StoreError> {
        let mut profile = self.read_at(now);

        if !energy::spend(&mut profile, &self.energy, now) {
            return Err(StoreError::OutOfEnergy);
        }

        self.persist(&profile);
        Ok(profile)
    }

    /// Fold a finished lesson into the active profile and save it.
    pub fn complete_lesson(&mut self, outcome: &LessonOutcome) -> ReconcileOutcome {
        self.complete_lesson_at(outcome, Utc::now())
    }

    pub fn complete_lesson_at(&mut self, outcome: &LessonOutcome, now: DateTime<Utc>) -> ReconcileOutcome {
        let profile = self.read_at(now);
        let result = self.reconciler.reconcile(profile, outcome, now);
        self.persist(&result.profile);
        result
    }

    /// Record a lesson that was taken without `consume_energy`.
    ///
    /// Non-practice lessons spend one energy point first and are refused when
    /// energy is empty.
    pub fn record_lesson(&mut self, outcome: &LessonOutcome) -> Result<ReconcileOutcome, StoreError> {
        self.record_lesson_at(outcome, Utc::now())
    }

    pub fn record_lesson_at(
        &mut self,
        outcome: &LessonOutcome,
        now: DateTime<Utc>,
    ) -> Result<ReconcileOutcome, StoreError> {
        if !outcome.is_practice {
            self.consume_energy_at(now)?;
        }
        Ok(self.complete_lesson_at(outcome, now))
    }

    /// Create an account and sign into it.
    ///
    /// When signed out, the current guest progress moves into the new account
    /// and the guest slot is cleared. When signed in, the account starts fresh
    /// and the guest slot is left alone.
    pub fn register(&mut self, form: Registration) -> Result<UserProfile, StoreError> {
        self.register_at(form, Utc::now())
    }

    pub fn register_at(&mut self, form: Registration, now: DateTime<Utc>) -> Result<UserProfile, StoreError> {
        auth::validate_registration(&form.email, &form.password, &form.name, &form.username)?;

        let email = auth::normalize_email(&form.email);
        if self.users()?.contains_key(&email) {
            return Err(AuthError::EmailTaken.into());
        }

        let from_guest = self.session_email().is_none();
        let mut profile = if from_guest {
            self.read_at(now)
        } else {
            UserProfile::guest(now, self.energy.max_energy)
        };

        profile.id = uuid::Uuid::new_v4().to_string();
        profile.email = Some(email.clone());
        profile.password_hash = Some(auth::hash_password(&form.password)?);
        profile.name = form.name.trim().to_string();
        profile.username = Some(form.username.trim().to_string());
        if let Some(avatar) = form.avatar.filter(|a| !a.is_empty()) {
            profile.avatar = avatar;
        }
        profile.is_guest = false;
        profile.join_date = now;

        self.write(&profile)?;
        self.store.set(SESSION_KEY, &email)?;
        if from_guest {
            self.store.remove(GUEST_PROFILE_KEY)?;
        }

        tracing::info!("Registered account {}", profile.id);
        Ok(profile)
    }

    /// Sign into an existing account.
    pub fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, StoreError> {
        self.login_at(email, password, Utc::now())
    }

    pub fn login_at(&mut self, email: &str, password: &str, now: DateTime<Utc>) -> Result<UserProfile, StoreError> {
        let email = auth::normalize_email(email);
        let users = self.users()?;

        let hash = users
            .get(&email)
            .and_then(|p| p.password_hash.as_deref())
            .ok_or(AuthError::InvalidCredentials)?;

        if !auth::verify_password(password, hash)? {
            tracing::warn!("Failed login attempt");
            return Err(AuthError::InvalidCredentials.into());
        }

        self.store.set(SESSION_KEY, &email)?;
        tracing::info!("Signed in");
        Ok(self.read_at(now))
    }

    /// Clear the session pointer. Guest data is kept.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.store.remove(SESSION_KEY)?;
        tracing::info!("Signed out");
        Ok(())
    }

    /// Whether an account session is active.
    pub fn is_signed_in(&self) -> bool {
        self.session_email().is_some()
    }

    /// Make `code` the current language, creating progress for it if new.
    pub fn select_language(&mut self, code: &str) -> Result<UserProfile, StoreError> {
        let mut profile = self.read();
        profile
            .progress
            .entry(code.to_string())
            .or_insert_with(|| LanguageProgress::new(code));
        profile.current_language_code = Some(code.to_string());

        self.write(&profile)?;
        Ok(profile)
    }

    /// Replace the preferences.
    ///
    /// A changed XP goal target is applied to today's XP goal.
    pub fn update_preferences(&mut self, mut preferences: Preferences) -> Result<UserProfile, StoreError> {
        let mut profile = self.read();
        preferences.fill_defaults();

        if preferences.daily_goal_xp != profile.preferences.daily_goal_xp {
            for goal in profile
                .daily_goals
                .iter_mut()
                .filter(|g| g.goal_type == GoalType::Xp)
            {
                goal.target = preferences.daily_goal_xp;
                goal.title = format!("Earn {} XP", preferences.daily_goal_xp);
                goal.completed = goal.current >= goal.target;
            }
        }
        profile.preferences = preferences;

        self.write(&profile)?;
        Ok(profile)
    }

    /// Finish onboarding with the learner's chosen identity.
    pub fn complete_onboarding(
        &mut self,
        name: &str,
        avatar: Option<&str>,
        native_language_code: Option<&str>,
    ) -> Result<UserProfile, StoreError> {
        let mut profile = self.read();

        if !name.trim().is_empty() {
            profile.name = name.trim().to_string();
        }
        if let Some(avatar) = avatar.filter(|a| !a.is_empty()) {
            profile.avatar = avatar.to_string();
        }
        if let Some(native) = native_language_code.filter(|c| !c.is_empty()) {
            profile.native_language_code = native.to_string();
        }
        profile.has_completed_onboarding = true;

        self.write(&profile)?;
        Ok(profile)
    }

    /// Resolve and repair the stored record without time-based updates.
    fn load(&self, now: DateTime<Utc>) -> UserProfile {
        let max_energy = self.energy.max_energy;

        let stored = match self.session_email() {
            Some(email) => match self.users() {
                Ok(mut users) => {
                    let found = users.remove(&email);
                    if found.is_none() {
                        tracing::warn!("Session points at a missing account, using guest profile");
                    }
                    found
                }
                Err(e) => {
                    tracing::warn!("Failed to load accounts: {}", e);
                    None
                }
            },
            None => None,
        };

        let stored = match stored {
            Some(profile) => Some(profile),
            None => match self.store.get_json::<UserProfile>(GUEST_PROFILE_KEY) {
                Ok(profile) => profile,
                Err(e) => {
                    tracing::warn!("Failed to load guest profile, starting fresh: {}", e);
                    None
                }
            },
        };

        match stored {
            Some(mut profile) => {
                profile.fill_defaults(max_energy);
                profile
            }
            None => {
                tracing::debug!("No stored profile, creating guest");
                UserProfile::guest(now, max_energy)
            }
        }
    }

    fn users(&self) -> Result<UsersCollection, StoreError> {
        Ok(self.store.get_json::<UsersCollection>(USERS_KEY)?.unwrap_or_default())
    }

    fn session_email(&self) -> Option<String> {
        match self.store.get(SESSION_KEY) {
            Ok(email) => email.filter(|e| !e.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read session: {}", e);
                None
            }
        }
    }

    /// Write, logging and dropping storage failures.
    fn persist(&mut self, profile: &UserProfile) {
        if let Err(e) = self.write(profile) {
            tracing::warn!("Failed to save profile: {}", e);
        }
    }
}

/// Profile store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Out of energy")]
    OutOfEnergy,

    #[error("Account profile has no email")]
    MissingEmail,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}
