use std::sync::Arc;

use crate::auth::Identity;
use crate::error::AppError;
use crate::models::{NewTask, Task, TaskInput, DEFAULT_STATUS_ID};
use crate::repository::TaskRepository;

/// Task CRUD for the authenticated caller. Repository errors pass through
/// unchanged.
pub struct TaskUseCase {
    repository: Arc<dyn TaskRepository>,
}

impl TaskUseCase {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_by_id(&self, identity: Identity, id: i32) -> Result<Task, AppError> {
        self.repository.get_by_id(identity.subject_id(), id).await
    }

    pub async fn list_by_user(&self, identity: Identity) -> Result<Vec<Task>, AppError> {
        self.repository.list_by_user(identity.subject_id()).await
    }

    /// Creates a task owned by `identity`, starting in the default status.
    pub async fn create(&self, identity: Identity, input: TaskInput) -> Result<Task, AppError> {
        let task = NewTask {
            user_id: identity.subject_id(),
            title: input.title,
            description: input.description,
            deadline: input.deadline,
            status_id: DEFAULT_STATUS_ID,
        };
        self.repository.create(task).await
    }

    pub async fn update(
        &self,
        identity: Identity,
        id: i32,
        changes: TaskInput,
    ) -> Result<(), AppError> {
        self.repository
            .update(identity.subject_id(), id, changes)
            .await
    }

    pub async fn delete(&self, identity: Identity, id: i32) -> Result<(), AppError> {
        self.repository.delete(identity.subject_id(), id).await
    }
}
