//! Data structures shared between the roster service and its HTTP surface.

use serde::{Deserialize, Serialize};

/// A single extracurricular activity and its signup roster.
///
/// Activities are keyed by name in the roster map, so the record itself only
/// carries the descriptive metadata and the participant list. Participants
/// are stored in signup order and identified solely by email.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Creates an activity with an empty roster.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Creates an activity with an initial set of participants.
    pub fn with_participants<I, S>(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            participants: participants.into_iter().map(Into::into).collect(),
            ..Self::new(description, schedule, max_participants)
        }
    }

    /// Returns whether the given email is already on the roster.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Appends a participant to the roster, preserving signup order.
    ///
    /// Callers are expected to check [`Activity::has_participant`] first; an
    /// email must appear at most once in the list.
    pub fn add_participant(&mut self, email: impl Into<String>) {
        self.participants.push(email.into());
    }

    /// Removes a participant by email, returning whether the email was present.
    ///
    /// The order of the remaining participants is unchanged.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != email);
        self.participants.len() != before
    }
}

/// Query parameters accepted by the signup and removal endpoints.
#[derive(Deserialize, Debug, Clone)]
pub struct SignupQuery {
    pub email: String,
}

/// Body shape for success confirmations.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Confirmation {
    pub message: String,
}

/// Body shape for structured error responses.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub roster: String,
    pub activities: usize,
    pub participants: usize,
}

/// Response returned by the health endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}
