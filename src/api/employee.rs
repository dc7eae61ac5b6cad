use actix_web::{HttpResponse, web};
use chrono::Local;
use tracing::instrument;

use crate::{
    api::render,
    auth::auth::CurrentSession,
    client::BackendClient,
    error::ApiError,
    session::SessionStore,
    view::{DashboardState, EmployeeDashboard},
};

/// Employee dashboard for the logged-in user
#[utoipa::path(
    get,
    path = "/dashboard/employee",
    responses(
        (status = 200, description = "View state; `data` holds the dashboard, `error` the last failure", body = EmployeeDashboard),
        (status = 302, description = "No session, redirect to /login"),
        (status = 403, description = "Session has no employee id", body = Object, example = json!({
            "error": "No employee profile"
        }))
    ),
    tag = "Dashboard"
)]
#[instrument(skip_all, fields(user_id = ?session.user_id))]
pub async fn employee_dashboard(
    session: CurrentSession,
    backend: web::Data<BackendClient>,
    store: web::Data<SessionStore>,
    dashboard: web::Data<DashboardState>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = session.user_id()?;
    let client = backend.with_token(&session.token);
    let today = Local::now().date_naive();

    render(&dashboard.employee, &store, &dashboard, async {
        let (employee, records) = futures::try_join!(
            client.fetch_employee(employee_id),
            client.fetch_schedules(Some(employee_id))
        )?;
        Ok(EmployeeDashboard::build(&employee, &records, today))
    })
    .await
}
