use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{AppError, ErrorKind};
use crate::models::{NewTask, NewUser, Task, TaskInput, User};
use crate::repository::{TaskRepository, UserRepository};

const TASK_COLUMNS: &str = "id, user_id, title, description, created_at, deadline, status_id";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        log::debug!("inserting user username={}", user.username);
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, $3)
             RETURNING id, username, email, password_hash",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::warn!("failed to create user username={}: {}", user.username, e);
            AppError::from(e)
        })
    }

    async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        log::debug!("fetching user id={}", id);
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            log::warn!("user id={} not found", id);
            AppError::not_found("User not found")
        })
    }

    async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        log::debug!("fetching user username={}", username);
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            log::warn!("user username={} not found", username);
            AppError::not_found("User not found")
        })
    }
}

pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn get_by_id(&self, user_id: i32, id: i32) -> Result<Task, AppError> {
        let sql = format!(
            "SELECT {} FROM tasks WHERE id = $1 AND user_id = $2",
            TASK_COLUMNS
        );
        sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))
    }

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        let sql = format!(
            "SELECT {} FROM tasks WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
            TASK_COLUMNS
        );
        let tasks = sqlx::query_as::<_, Task>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::wrap(e, ErrorKind::Internal, "failed to list tasks"))?;
        Ok(tasks)
    }

    async fn create(&self, task: NewTask) -> Result<Task, AppError> {
        let sql = format!(
            "INSERT INTO tasks (user_id, title, description, deadline, status_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            TASK_COLUMNS
        );
        sqlx::query_as::<_, Task>(&sql)
            .bind(task.user_id)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.deadline)
            .bind(task.status_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                log::error!(
                    "error while inserting task title={:?} user_id={}: {}",
                    task.title,
                    task.user_id,
                    e
                );
                AppError::from(e)
            })
    }

    async fn update(&self, user_id: i32, id: i32, changes: TaskInput) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE tasks SET title = $1, description = $2, deadline = $3
             WHERE id = $4 AND user_id = $5",
        )
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.deadline)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("no task found with id {}", id)));
        }
        log::debug!("updated {} task rows", result.rows_affected());
        Ok(())
    }

    async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("no task found with id {}", id)));
        }
        log::debug!("deleted {} task rows", result.rows_affected());
        Ok(())
    }
}
