use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::IntoParams;

use crate::{
    api::{end_session, render},
    auth::{auth::CurrentSession, validation::validate_new_schedule},
    client::BackendClient,
    error::ApiError,
    models::CreateScheduleReq,
    session::SessionStore,
    view::{DashboardState, EmployeeDetail, ManagerDashboard, manager::CalendarEvent},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamQuery {
    /// Comma-separated employee ids to show in the attendance chart
    #[param(example = "1,2")]
    pub selected: Option<String>,
}

impl TeamQuery {
    /// Unparsable ids are skipped; an empty selection means everyone.
    pub fn selected_ids(&self) -> Option<Vec<u64>> {
        let ids: Vec<u64> = self
            .selected
            .as_deref()?
            .split(',')
            .filter_map(|id| id.trim().parse().ok())
            .collect();
        (!ids.is_empty()).then_some(ids)
    }
}

/// Team calendar, attendance chart and event-type breakdown
#[utoipa::path(
    get,
    path = "/dashboard/manager",
    params(TeamQuery),
    responses(
        (status = 200, description = "View state; `data` holds the dashboard, `error` the last failure", body = ManagerDashboard),
        (status = 302, description = "No session, redirect to /login"),
        (status = 403, description = "Manager only")
    ),
    tag = "Dashboard"
)]
#[instrument(skip_all, fields(manager_id = ?session.user_id))]
pub async fn manager_dashboard(
    session: CurrentSession,
    query: web::Query<TeamQuery>,
    backend: web::Data<BackendClient>,
    store: web::Data<SessionStore>,
    dashboard: web::Data<DashboardState>,
) -> Result<HttpResponse, ApiError> {
    session.require_manager()?;
    let manager_id = session.user_id()?;
    let client = backend.with_token(&session.token);
    let selected = query.selected_ids();

    render(&dashboard.manager, &store, &dashboard, async {
        let (team, records) = futures::try_join!(
            client.fetch_team(manager_id),
            client.fetch_schedules(None)
        )?;
        Ok(ManagerDashboard::build(&team, &records, selected.as_deref()))
    })
    .await
}

/// One team member's records and attendance
#[utoipa::path(
    get,
    path = "/dashboard/manager/employees/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Team member to show")
    ),
    responses(
        (status = 200, description = "View state for the latest selection", body = EmployeeDetail),
        (status = 302, description = "No session, redirect to /login"),
        (status = 403, description = "Manager only")
    ),
    tag = "Dashboard"
)]
#[instrument(skip(session, backend, store, dashboard))]
pub async fn employee_detail(
    session: CurrentSession,
    path: web::Path<u64>,
    backend: web::Data<BackendClient>,
    store: web::Data<SessionStore>,
    dashboard: web::Data<DashboardState>,
) -> Result<HttpResponse, ApiError> {
    session.require_manager()?;
    let employee_id = path.into_inner();
    let client = backend.with_token(&session.token);

    render(&dashboard.detail, &store, &dashboard, async {
        let records = client.fetch_schedules(Some(employee_id)).await?;
        Ok(EmployeeDetail::build(employee_id, &records))
    })
    .await
}

/// Add an entry to the team calendar
#[utoipa::path(
    post,
    path = "/dashboard/manager/schedules",
    request_body = CreateScheduleReq,
    responses(
        (status = 201, description = "Created; the calendar event built from the backend's record", body = CalendarEvent),
        (status = 400, description = "Form validation failed", body = Object, example = json!({
            "error": "Please fill in all fields"
        })),
        (status = 302, description = "No session, redirect to /login"),
        (status = 403, description = "Manager only")
    ),
    tag = "Dashboard"
)]
#[instrument(skip_all, fields(employee_id = ?form.employee_id))]
pub async fn create_schedule(
    session: CurrentSession,
    form: web::Json<CreateScheduleReq>,
    backend: web::Data<BackendClient>,
    store: web::Data<SessionStore>,
    dashboard: web::Data<DashboardState>,
) -> Result<HttpResponse, ApiError> {
    session.require_manager()?;
    let body = validate_new_schedule(&form)?;
    let client = backend.with_token(&session.token);

    let mut created = match client.create_schedule(&body).await {
        Ok(record) => record,
        Err(e) if e.is_unauthorized() => return end_session(&store, &dashboard),
        Err(e) => return Err(e),
    };

    // echo-only backends may leave the owner out
    if created.owner_id().is_none() {
        created.employee = Some(body.employee.clone());
    }

    let event = CalendarEvent::from_record(&created)
        .ok_or_else(|| ApiError::Decode("created schedule has no owner".to_string()))?;

    dashboard
        .manager
        .lock()
        .expect("view state poisoned")
        .update(|view| view.push_event(event.clone()));

    info!(schedule_id = created.id, "Schedule created");

    Ok(HttpResponse::Created().json(event))
}
