//! In-memory registry of activities keyed by name.
//!
//! Every mutation takes the write lock for the whole membership check and
//! update, so concurrent signups for the same email cannot both succeed.

use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::config::ConfigError;
use crate::database::seed_catalog;
use crate::models::{Activity, SeedActivity};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("{email} is already signed up for this activity")]
    AlreadyEnrolled { email: String },

    #[error("Activity is full")]
    ActivityFull,

    #[error("Email is required")]
    InvalidEmail,
}

impl DirectoryError {
    pub fn kind(&self) -> &'static str {
        match self {
            DirectoryError::ActivityNotFound => "activity_not_found",
            DirectoryError::ParticipantNotFound => "participant_not_found",
            DirectoryError::AlreadyEnrolled { .. } => "already_enrolled",
            DirectoryError::ActivityFull => "activity_full",
            DirectoryError::InvalidEmail => "invalid_email",
        }
    }
}

/// Whether `max_participants` rejects signups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Capacity is only reported.
    #[default]
    Advisory,
    Enforced,
}

impl CapacityPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            CapacityPolicy::Advisory => "advisory",
            CapacityPolicy::Enforced => "enforced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub activity: String,
    pub email: String,
}

#[derive(Clone)]
pub struct ActivityDirectory {
    inner: Arc<DirectoryInner>,
}

struct DirectoryInner {
    activities: RwLock<IndexMap<String, Activity>>,
    seed: IndexMap<String, Activity>,
    policy: CapacityPolicy,
}

impl ActivityDirectory {
    pub fn new(catalog: IndexMap<String, Activity>, policy: CapacityPolicy) -> Self {
        Self {
            inner: Arc::new(DirectoryInner {
                activities: RwLock::new(catalog.clone()),
                seed: catalog,
                policy,
            }),
        }
    }

    /// Validates the seed rows and builds a directory over them.
    pub fn from_seed(
        seed: Vec<SeedActivity>,
        policy: CapacityPolicy,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(seed_catalog::build_catalog(seed)?, policy))
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.inner.policy
    }

    /// Owned copy of every activity in seed order.
    pub async fn list(&self) -> IndexMap<String, Activity> {
        self.inner.activities.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.inner.activities.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.activities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn enroll(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Enrollment, DirectoryError> {
        let mut activities = self.inner.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if email.is_empty() {
            return Err(DirectoryError::InvalidEmail);
        }
        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadyEnrolled {
                email: email.to_string(),
            });
        }
        if self.inner.policy == CapacityPolicy::Enforced && activity.is_full() {
            return Err(DirectoryError::ActivityFull);
        }

        activity.participants.insert(email.to_string());
        Ok(Enrollment {
            activity: activity.name.clone(),
            email: email.to_string(),
        })
    }

    pub async fn withdraw(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Enrollment, DirectoryError> {
        let mut activities = self.inner.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if email.is_empty() {
            return Err(DirectoryError::InvalidEmail);
        }
        // shift_remove keeps the remaining participants in signup order
        if !activity.participants.shift_remove(email) {
            return Err(DirectoryError::ParticipantNotFound);
        }

        Ok(Enrollment {
            activity: activity.name.clone(),
            email: email.to_string(),
        })
    }

    /// Restores every activity to the catalog the directory was built from.
    pub async fn reset(&self) {
        let mut activities = self.inner.activities.write().await;
        *activities = self.inner.seed.clone();
    }
}
