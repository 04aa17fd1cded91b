use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, ContentType},
    Error, HttpMessage, HttpResponse,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::claims::authenticate;

/// Body of every authentication rejection.
pub const UNAUTHORIZED_BODY: &str = "Unauthorized";

/// Decodes the bearer token of each request and attaches the caller's
/// [`Identity`](crate::auth::Identity) to the request extensions.
///
/// Requests without an acceptable token are answered here with a plain-text
/// 401 and never reach the wrapped service. The response is the same for
/// every failure; the reason only shows up in the logs.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .map(|value| value.to_str().unwrap_or_default());

        match authenticate(auth_header) {
            Ok(identity) => {
                log::debug!(
                    "bearer token accepted for user_id={} on {}",
                    identity.subject_id(),
                    req.path()
                );
                req.extensions_mut().insert(identity);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(reason) => {
                log::warn!("rejected request to {}: {}", req.path(), reason);
                let response = HttpResponse::Unauthorized()
                    .content_type(ContentType::plaintext())
                    .body(UNAUTHORIZED_BODY);
                let res = req.into_response(response).map_into_right_body();
                Box::pin(async move { Ok(res) })
            }
        }
    }
}
