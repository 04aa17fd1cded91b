use crate::{
    auth::{LoginRequest, LoginResponse},
    error::{AppError, ErrorKind},
    usecase::AuthUseCase,
};
use actix_web::{post, web, HttpResponse, Responder};

/// Login user
///
/// Checks the supplied credentials and answers `{"success": bool}`.
///
/// An unknown username is answered exactly like a wrong password, so the
/// response never reveals whether an account exists. The distinction is kept
/// in the logs.
///
/// ## Responses:
/// - `200 OK`: `{"success": true}` or `{"success": false}`.
/// - `400 Bad Request`: the body is not a valid login request.
/// - `500 Internal Server Error`: storage or hash comparison failure.
#[post("/login")]
pub async fn login(
    use_case: web::Data<AuthUseCase>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let success = match use_case
        .login(&login_data.username, &login_data.password)
        .await
    {
        Ok(success) => success,
        Err(err) if err.classify() == ErrorKind::NotFound => {
            log::warn!(
                "login failed, user not found username={}",
                login_data.username
            );
            false
        }
        Err(err) => return Err(err),
    };

    Ok(HttpResponse::Ok().json(LoginResponse { success }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login);
}
