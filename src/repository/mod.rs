//! Persistence ports consumed by the use-case layer.
//!
//! Repositories are the first layer to classify a failure: a missing row is
//! reported as `not_found` (including updates and deletes that touch no row),
//! a uniqueness violation as `conflict`, and anything else as `internal`.
//! Task operations are always scoped to the owning user; a task that belongs
//! to someone else is reported exactly like a missing one.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{NewTask, NewUser, Task, TaskInput, User};

pub use memory::{InMemoryTaskRepository, InMemoryUserRepository};
pub use postgres::{PgTaskRepository, PgUserRepository};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, AppError>;
    async fn get_by_id(&self, id: i32) -> Result<User, AppError>;
    async fn get_by_username(&self, username: &str) -> Result<User, AppError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn get_by_id(&self, user_id: i32, id: i32) -> Result<Task, AppError>;
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Task>, AppError>;
    async fn create(&self, task: NewTask) -> Result<Task, AppError>;
    async fn update(&self, user_id: i32, id: i32, changes: TaskInput) -> Result<(), AppError>;
    async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError>;
}
