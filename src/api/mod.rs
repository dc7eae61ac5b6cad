pub mod employee;
pub mod manager;

use std::future::Future;
use std::sync::Mutex;

use actix_web::HttpResponse;
use serde::Serialize;
use tracing::warn;

use crate::auth::{
    auth::CurrentSession,
    middleware::{LOGIN_PATH, redirect},
};
use crate::error::ApiError;
use crate::session::SessionStore;
use crate::view::{DashboardState, ViewState};

/// Runs `fetch` for the view held in `cell` and answers with the view's state.
///
/// A fetch failure lands in `error` next to the last good data. A 401 from the
/// backend ends the session, forgets every cached view and redirects to the
/// login page.
pub(crate) async fn render<T, F>(
    cell: &Mutex<ViewState<T>>,
    store: &SessionStore,
    dashboard: &DashboardState,
    fetch: F,
) -> Result<HttpResponse, ApiError>
where
    T: Clone + Serialize,
    F: Future<Output = Result<T, ApiError>>,
{
    let ticket = cell.lock().expect("view state poisoned").begin();

    let result = fetch.await;

    if result.as_ref().is_err_and(ApiError::is_unauthorized) {
        return end_session(store, dashboard);
    }

    let snapshot = {
        let mut state = cell.lock().expect("view state poisoned");
        state.apply(ticket, result);
        state.clone()
    };

    Ok(HttpResponse::Ok().json(snapshot))
}

/// The backend no longer accepts the token: log out and send the user to login.
pub(crate) fn end_session(
    store: &SessionStore,
    dashboard: &DashboardState,
) -> Result<HttpResponse, ApiError> {
    warn!("Backend rejected the session token, logging out");
    store.logout()?;
    dashboard.reset();
    Ok(redirect(LOGIN_PATH))
}

/// Landing route: sends the user to their role's dashboard
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 302, description = "Redirect to /dashboard/employee or /dashboard/manager, or to /login without a session")
    ),
    tag = "Dashboard"
)]
pub async fn dashboard(session: CurrentSession) -> HttpResponse {
    redirect(session.role().dashboard_path())
}
