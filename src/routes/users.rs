use crate::{
    error::AppError,
    models::{RegisterRequest, RegisterResponse},
    usecase::UserUseCase,
};
use actix_web::{get, post, web, HttpResponse, Responder};

/// Register a new user
///
/// ## Responses:
/// - `201 Created`: `{"id": <new user id>}`.
/// - `400 Bad Request`: Malformed body.
/// - `409 Conflict`: The username is taken.
/// - `500 Internal Server Error`: Hashing or database failure.
#[post("/register")]
pub async fn register(
    use_case: web::Data<UserUseCase>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    let user = use_case
        .register(
            &register_data.username,
            &register_data.email,
            &register_data.password,
        )
        .await?;

    Ok(HttpResponse::Created().json(RegisterResponse { id: user.id }))
}

/// Fetch a user by id. The password hash is never part of the response.
///
/// ## Responses:
/// - `200 OK`: the `User` as JSON.
/// - `404 Not Found`: no user with this id.
#[get("/{id:[0-9]+}")]
pub async fn get_user(
    use_case: web::Data<UserUseCase>,
    user_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let user = use_case.get_user(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").service(register).service(get_user));
}
