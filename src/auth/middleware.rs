use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    web::Data,
};
use tracing::debug;

use crate::session::SessionStore;

pub const LOGIN_PATH: &str = "/login";

pub fn redirect(to: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, to))
        .finish()
}

/// Sends anyone without a session to the login page.
pub async fn session_guard(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let session = req
        .app_data::<Data<SessionStore>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Session store missing"))?
        .current();

    let session = match session {
        Some(s) => s,
        None => {
            debug!(path = %req.path(), "No session, redirecting to login");
            return Ok(req.into_response(redirect(LOGIN_PATH)));
        }
    };

    req.extensions_mut().insert(session);

    next.call(req).await
}
