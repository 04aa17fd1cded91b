use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Status assigned to every newly created task.
pub const DEFAULT_STATUS_ID: i32 = 1;

/// Input structure for creating or updating a task.
/// Contains validation rules for its fields; handlers validate it before
/// calling into the use case.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task. Must not be empty.
    #[validate(length(min = 1))]
    pub title: String,

    /// Free-form description, empty when omitted.
    #[serde(default)]
    pub description: String,

    /// Optional deadline for the task.
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

/// A task ready to be persisted, owned by `user_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub deadline: Option<DateTime<Utc>>,
    pub status_id: i32,
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i32,
    /// Identifier of the user who owns the task.
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub deadline: Option<DateTime<Utc>>,
    pub status_id: i32,
}
