#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use taskdesk::auth::TokenIssuer;
use taskdesk::repository::{InMemoryTaskRepository, InMemoryUserRepository};
use taskdesk::routes;
use taskdesk::usecase::{AuthUseCase, TaskUseCase, UserUseCase};

const TEST_SECRET: &[u8] = b"integration-test-secret";

/// `Authorization` header value for `user_id`, signed with a throwaway secret.
pub fn bearer(user_id: i32) -> String {
    let token = TokenIssuer::new(TEST_SECRET)
        .issue(user_id)
        .expect("token should be issued");
    format!("Bearer {}", token)
}

pub fn task_routes(
    repo: Arc<InMemoryTaskRepository>,
) -> impl Fn(&mut web::ServiceConfig) + Send + Clone + 'static {
    let use_case = web::Data::new(TaskUseCase::new(repo));
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(use_case.clone());
        routes::tasks::config(cfg);
    }
}

pub fn user_routes(
    repo: Arc<InMemoryUserRepository>,
) -> impl Fn(&mut web::ServiceConfig) + Send + Clone + 'static {
    let use_case = web::Data::new(UserUseCase::new(repo));
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(use_case.clone());
        routes::users::config(cfg);
    }
}

pub fn auth_routes(
    repo: Arc<InMemoryUserRepository>,
) -> impl Fn(&mut web::ServiceConfig) + Send + Clone + 'static {
    let use_case = web::Data::new(AuthUseCase::new(repo, TokenIssuer::new(TEST_SECRET)));
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(use_case.clone());
        routes::auth::config(cfg);
    }
}
