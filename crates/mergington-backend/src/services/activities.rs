use std::collections::BTreeMap;

use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::Activity;
use mergington::errors::RosterError;

/// A trait for managing activities and their signup rosters.
///
/// This trait provides the roster operations the HTTP handlers need: listing
/// activities, looking one up, and adding or removing a participant. It is
/// designed to be implementation-agnostic, allowing for in-memory, database,
/// or other storage backends.
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity keyed by its unique name.
    ///
    /// The returned map may be empty if no activities exist. Activity names
    /// are unique; no operation in this service creates or deletes one.
    async fn list(&self) -> Result<BTreeMap<String, Activity>, Self::Error>;

    /// Retrieves a single activity by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity exists with the given name.
    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error>;

    /// Signs a student up for an activity.
    ///
    /// Appends the email to the activity's participant list and returns the
    /// updated activity. The list is left unchanged on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is
    /// already on its roster.
    async fn signup(&self, activity_name: &str, email: &str) -> Result<Activity, Self::Error>;

    /// Removes a student from an activity's roster.
    ///
    /// Removes exactly the given email, preserving the order of the
    /// remaining participants, and returns the updated activity. The list is
    /// left unchanged on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is not on
    /// its roster.
    async fn unregister(&self, activity_name: &str, email: &str) -> Result<Activity, Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// This implementation uses a `DashMap` to store activities, allowing for
/// concurrent access and modifications. Each check-then-mutate sequence runs
/// while holding the entry guard from `get_mut`, so a duplicate check and
/// the append it guards cannot interleave with another request against the
/// same activity.
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
}

impl ActivityServiceInMemory {
    pub fn new() -> Self {
        Self {
            activities: DashMap::new(),
        }
    }

    /// Builds a service pre-populated with the given activities.
    pub fn with_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        Self {
            activities: activities.into_iter().collect(),
        }
    }
}

impl Default for ActivityServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = RosterError;

    async fn list(&self) -> Result<BTreeMap<String, Activity>, Self::Error> {
        Ok(self
            .activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error> {
        self.activities
            .get(activity_name)
            .map(|entry| entry.value().clone())
            .ok_or(RosterError::ActivityNotFound)
    }

    async fn signup(&self, activity_name: &str, email: &str) -> Result<Activity, Self::Error> {
        let mut entry = self
            .activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        if entry.has_participant(email) {
            return Err(RosterError::AlreadySignedUp);
        }

        entry.add_participant(email);
        Ok(entry.value().clone())
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<Activity, Self::Error> {
        let mut entry = self
            .activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        if !entry.remove_participant(email) {
            return Err(RosterError::StudentNotFound);
        }

        Ok(entry.value().clone())
    }
}
