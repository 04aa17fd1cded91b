use crate::{
    auth::{AuthMiddleware, Identity},
    error::AppError,
    models::TaskInput,
    routes::StatusResponse,
    usecase::TaskUseCase,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Retrieves the tasks owned by the authenticated user, newest first.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Task` objects.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `500 Internal Server Error`: For database errors.
#[get("")]
pub async fn list_tasks(
    use_case: web::Data<TaskUseCase>,
    identity: Identity,
) -> Result<impl Responder, AppError> {
    log::debug!("fetching tasks for user_id={}", identity.subject_id());
    let tasks = use_case.list_by_user(identity).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task for the authenticated user.
///
/// The owner always comes from the bearer token; a `user_id` in the body is
/// ignored. The title is required and checked here, before the use case runs.
///
/// ## Request Body:
/// - `title`: The title of the task (required, non-empty).
/// - `description` (optional): A description of the task.
/// - `deadline` (optional): RFC 3339 timestamp.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Task` object as JSON.
/// - `400 Bad Request`: Malformed body or empty title.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `500 Internal Server Error`: For database errors.
#[post("")]
pub async fn create_task(
    use_case: web::Data<TaskUseCase>,
    identity: Identity,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = use_case.create(identity, task_data.into_inner()).await?;
    log::info!("task created id={} user_id={}", task.id, task.user_id);
    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a specific task by its ID.
///
/// ## Responses:
/// - `200 OK`: Returns the `Task` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If the task does not exist or belongs to another user.
#[get("/{id:[0-9]+}")]
pub async fn get_task(
    use_case: web::Data<TaskUseCase>,
    identity: Identity,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task = use_case.get_by_id(identity, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Replaces the title, description and deadline of a task.
///
/// ## Responses:
/// - `200 OK`: `{"status": "success"}`.
/// - `400 Bad Request`: Malformed body or empty title.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If the task does not exist or belongs to another user.
#[put("/{id:[0-9]+}")]
pub async fn update_task(
    use_case: web::Data<TaskUseCase>,
    identity: Identity,
    task_id: web::Path<i32>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let id = task_id.into_inner();

    use_case
        .update(identity, id, task_data.into_inner())
        .await?;
    log::info!("task updated id={}", id);
    Ok(HttpResponse::Ok().json(StatusResponse::success()))
}

/// Deletes a task by its ID.
///
/// ## Responses:
/// - `200 OK`: `{"status": "success"}`.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If the task does not exist or belongs to another user.
#[delete("/{id:[0-9]+}")]
pub async fn delete_task(
    use_case: web::Data<TaskUseCase>,
    identity: Identity,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let id = task_id.into_inner();

    use_case.delete(identity, id).await?;
    log::info!("task deleted id={}", id);
    Ok(HttpResponse::Ok().json(StatusResponse::success()))
}

/// Mounts `/tasks` behind the bearer-token middleware.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tasks")
            .wrap(AuthMiddleware)
            .service(list_tasks)
            .service(create_task)
            .service(get_task)
            .service(update_task)
            .service(delete_task),
    );
}
