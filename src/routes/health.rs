use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Name of the running service, registered as app data by `server::run`.
#[derive(Debug, Clone, Copy)]
pub struct ServiceName(pub &'static str);

/// Liveness probe, served without authentication by every service.
#[get("/health")]
pub async fn health(service: web::Data<ServiceName>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": service.0,
        "timestamp": Utc::now()
    }))
}
