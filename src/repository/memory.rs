//! In-memory repositories with the same classification rules as the Postgres
//! adapters. Used by the test suites and for running a service without a
//! database.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

use crate::error::AppError;
use crate::models::{NewTask, NewUser, Task, TaskInput, User};
use crate::repository::{TaskRepository, UserRepository};

struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn lock<T>(table: &Mutex<Table<T>>) -> Result<MutexGuard<'_, Table<T>>, AppError> {
    table
        .lock()
        .map_err(|_| AppError::internal("in-memory table lock poisoned"))
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn count(&self) -> usize {
        self.table.lock().map(|t| t.rows.len()).unwrap_or_default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let mut table = lock(&self.table)?;
        if table.rows.iter().any(|u| u.username == user.username) {
            return Err(AppError::conflict("User already exists"));
        }
        let stored = User {
            id: table.allocate_id(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
        };
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        lock(&self.table)?
            .rows
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        lock(&self.table)?
            .rows
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

#[derive(Default)]
pub struct InMemoryTaskRepository {
    table: Mutex<Table<Task>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks across all users.
    pub fn count(&self) -> usize {
        self.table.lock().map(|t| t.rows.len()).unwrap_or_default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn get_by_id(&self, user_id: i32, id: i32) -> Result<Task, AppError> {
        lock(&self.table)?
            .rows
            .iter()
            .find(|t| t.id == id && t.user_id == user_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Task not found"))
    }

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        let table = lock(&self.table)?;
        let mut tasks: Vec<Task> = table
            .rows
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(tasks)
    }

    async fn create(&self, task: NewTask) -> Result<Task, AppError> {
        let mut table = lock(&self.table)?;
        let stored = Task {
            id: table.allocate_id(),
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            created_at: Utc::now(),
            deadline: task.deadline,
            status_id: task.status_id,
        };
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, user_id: i32, id: i32, changes: TaskInput) -> Result<(), AppError> {
        let mut table = lock(&self.table)?;
        let task = table
            .rows
            .iter_mut()
            .find(|t| t.id == id && t.user_id == user_id)
            .ok_or_else(|| AppError::not_found(format!("no task found with id {}", id)))?;
        task.title = changes.title;
        task.description = changes.description;
        task.deadline = changes.deadline;
        Ok(())
    }

    async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let mut table = lock(&self.table)?;
        let before = table.rows.len();
        table.rows.retain(|t| !(t.id == id && t.user_id == user_id));
        if table.rows.len() == before {
            return Err(AppError::not_found(format!("no task found with id {}", id)));
        }
        Ok(())
    }
}
