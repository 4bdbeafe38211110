//! In-memory activity registry.
//!
//! Activities are keyed by name and listed in the order they were seeded.
//! All access goes through one `RwLock`; each mutation validates and writes
//! under a single write guard, so concurrent signups for the same email
//! cannot both succeed.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::warn;

use mergington_config::ActivitySeed;

use super::activity::{Activity, ActivitySnapshot};
use crate::error::RegistryError;

#[derive(Debug, Default)]
struct Inner {
    order: Vec<String>,
    activities: HashMap<String, Activity>,
}

/// Thread-safe registry of activities.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    inner: RwLock<Inner>,
}

impl ActivityRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from seed records.
    ///
    /// A repeated activity name keeps the first record and a repeated email
    /// within one roster keeps its first occurrence.
    pub fn from_seeds(seeds: impl IntoIterator<Item = ActivitySeed>) -> Self {
        let registry = Self::new();
        for seed in seeds {
            let (name, activity) = Activity::from_seed(seed);
            if !registry.insert(name.clone(), activity) {
                warn!("Ignoring duplicate activity in seed data: {}", name);
            }
        }
        registry
    }

    /// Add an activity. Returns `false` and leaves the registry unchanged if
    /// the name is already taken.
    pub fn insert(&self, name: impl Into<String>, mut activity: Activity) -> bool {
        let name = name.into();
        let mut inner = self.inner.write();
        if inner.activities.contains_key(&name) {
            return false;
        }

        let mut roster: Vec<String> = Vec::with_capacity(activity.participants.len());
        for email in activity.participants.drain(..) {
            if roster.contains(&email) {
                warn!("Dropping repeated participant {} from {}", email, name);
            } else {
                roster.push(email);
            }
        }
        activity.participants = roster;

        inner.order.push(name.clone());
        inner.activities.insert(name, activity);
        true
    }

    /// Copy of every activity, in seed order.
    pub fn list(&self) -> ActivitySnapshot {
        let inner = self.inner.read();
        let entries = inner
            .order
            .iter()
            .filter_map(|name| {
                inner
                    .activities
                    .get(name)
                    .map(|activity| (name.clone(), activity.clone()))
            })
            .collect();
        ActivitySnapshot::new(entries)
    }

    /// Get an activity by name.
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.inner.read().activities.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().activities.contains_key(name)
    }

    /// Activity names in seed order.
    pub fn names(&self) -> Vec<String> {
        self.inner.read().order.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().activities.is_empty()
    }

    /// Append `email` to the roster of `activity`.
    ///
    /// Capacity is not checked; `max_participants` is informational.
    pub fn signup(&self, activity: &str, email: &str) -> Result<(), RegistryError> {
        let mut inner = self.inner.write();
        let record = inner
            .activities
            .get_mut(activity)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity.to_string()))?;

        if record.has_participant(email) {
            return Err(RegistryError::DuplicateSignup {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        record.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the roster of `activity`.
    pub fn unregister(&self, activity: &str, email: &str) -> Result<(), RegistryError> {
        let mut inner = self.inner.write();
        let record = inner
            .activities
            .get_mut(activity)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity.to_string()))?;

        let position = record
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotSignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            })?;

        record.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
