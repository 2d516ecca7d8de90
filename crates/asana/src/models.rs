//! Asana entity type definitions.
//!
//! Field names follow the Asana v1 REST API, which is also the shape of
//! the "View As JSON" project export.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Envelope wrapping every Asana API response and snapshot document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload.
    pub data: T,
}

/// Asana project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Globally unique identifier.
    pub gid: String,
    /// Project name. Sprint projects embed the iteration range in a
    /// bracketed annotation, e.g. "Sprint 12 [2014-03-01 - 2014-03-08]".
    pub name: String,
}

/// Compact task reference returned by project task listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCompact {
    /// Globally unique identifier.
    pub gid: String,
    /// Task title.
    pub name: String,
}

/// Full task detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Globally unique identifier. Older snapshot exports omit it.
    #[serde(default)]
    pub gid: String,
    /// Task title. May open with an estimate annotation, e.g. "[3:2] Fix bug".
    pub name: String,
    /// Whether the task has been completed.
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp; present iff the task is completed.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Due date, if one was set.
    #[serde(default)]
    pub due_on: Option<NaiveDate>,
    /// Assignee, if the task is assigned.
    #[serde(default)]
    pub assignee: Option<Assignee>,
    /// Tags attached to the task.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Task assignee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignee {
    /// Display name.
    pub name: String,
}

/// Task tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name, e.g. "P1" or "5pts".
    pub name: String,
}

impl Tag {
    /// Convenience constructor used heavily in tests.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
