use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::{
    auth::{
        middleware::{LOGIN_PATH, redirect},
        token::user_id_from_token,
        validation::{validate_login, validate_register},
    },
    client::BackendClient,
    error::ApiError,
    model::session::Session,
    models::{LoginReqDto, RegisterReq},
    session::SessionStore,
    view::DashboardState,
};

pub const DASHBOARD_PATH: &str = "/dashboard";

/// Log in against the backend and keep the session
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Logged in", body = Object, example = json!({
            "message": "Login successful",
            "role": "MANAGER",
            "redirect": "/dashboard/manager"
        })),
        (status = 302, description = "Already logged in, redirect to /dashboard"),
        (status = 400, description = "Form validation failed", body = Object, example = json!({
            "error": "Email field should not be empty."
        })),
        (status = 401, description = "Invalid email or password"),
        (status = 502, description = "Backend unreachable")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "dashboard_login",
    skip(credentials, store, backend, dashboard),
    fields(email = %credentials.email)
)]
pub async fn login(
    credentials: web::Json<LoginReqDto>,
    store: web::Data<SessionStore>,
    backend: web::Data<BackendClient>,
    dashboard: web::Data<DashboardState>,
) -> Result<HttpResponse, ApiError> {
    if store.is_authenticated() {
        debug!("Already logged in");
        return Ok(redirect(DASHBOARD_PATH));
    }

    validate_login(&credentials)?;

    let response = backend.login(&credentials).await.map_err(|e| match e {
        ApiError::Http { status: 401, message } if message == ApiError::generic_message(401) => {
            ApiError::Http {
                status: 401,
                message: "Invalid email or password".to_string(),
            }
        }
        other => other,
    })?;

    let user_id = response
        .id
        .or(response.user_id)
        .or_else(|| user_id_from_token(&response.token));

    let session = Session {
        user_id,
        role: response.role,
        token: response.token,
    };
    store.login(&session)?;
    // views cached for an earlier session must not leak into this one
    dashboard.reset();

    info!(role = %session.role, user_id = ?session.user_id, "Login successful");

    Ok(HttpResponse::Ok().json(json!({
        "message": response.message.unwrap_or_else(|| "Login successful".to_string()),
        "role": session.role,
        "redirect": session.role().dashboard_path()
    })))
}

/// Register a new employee with the backend
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterReq,
    responses(
        (status = 201, description = "Registered", body = Object, example = json!({
            "message": "Registration successful!"
        })),
        (status = 302, description = "Already logged in, redirect to /dashboard"),
        (status = 400, description = "Form validation failed", body = Object, example = json!({
            "error": "Password and Confirm Password do not match."
        })),
        (status = 502, description = "Backend unreachable")
    ),
    tag = "Auth"
)]
#[instrument(name = "dashboard_register", skip(form, store, backend), fields(email = %form.email))]
pub async fn register(
    form: web::Json<RegisterReq>,
    store: web::Data<SessionStore>,
    backend: web::Data<BackendClient>,
) -> Result<HttpResponse, ApiError> {
    if store.is_authenticated() {
        return Ok(redirect(DASHBOARD_PATH));
    }

    let employee = validate_register(&form)?;
    let created = backend.register(&employee).await?;

    info!("Registration successful");

    Ok(HttpResponse::Created().json(json!({
        "message": "Registration successful!",
        "employee": created
    })))
}

/// Drop the session and go back to the login page
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 303, description = "Session cleared, redirect to /login")
    ),
    tag = "Auth"
)]
pub async fn logout(
    store: web::Data<SessionStore>,
    dashboard: web::Data<DashboardState>,
) -> Result<HttpResponse, ApiError> {
    store.logout()?;
    dashboard.reset();

    Ok(HttpResponse::SeeOther()
        .insert_header((actix_web::http::header::LOCATION, LOGIN_PATH))
        .finish())
}
