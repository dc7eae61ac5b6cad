#[macro_use]
mod common;

use actix_web::{http::StatusCode, test, web::Data};
use attendance_dashboard::{
    config::Config,
    model::session::Session,
    session::{SessionState, SessionStore},
    view::DashboardState,
};
use serde_json::{Value, json};

use common::*;

fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> &str {
    resp.headers()
        .get("location")
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
}

fn shared_state() -> (Data<SessionStore>, Data<DashboardState>) {
    let store = SessionStore::open(temp_session_file());
    (Data::new(store), Data::new(DashboardState::default()))
}

macro_rules! login_as {
    ($app:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/login")
            .peer_addr(peer())
            .set_json(json!({ "email": $email, "password": PASSWORD }))
            .to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! get {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get()
            .uri($uri)
            .peer_addr(peer())
            .to_request();
        test::call_service(&$app, req).await
    }};
}

#[actix_web::test]
async fn dashboard_redirects_to_login_without_session() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    for uri in ["/dashboard", "/dashboard/employee", "/dashboard/manager"] {
        let resp = get!(app, uri);
        assert_eq!(resp.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(location(&resp), "/login");
    }

    let resp = get!(app, "/");
    assert_eq!(location(&resp), "/dashboard");
}

#[actix_web::test]
async fn invalid_login_form_never_reaches_backend() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    let resp = login_as!(app, "not-an-email");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/login")
        .peer_addr(peer())
        .set_json(json!({ "email": MANAGER_EMAIL, "password": "" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["error"], "Password field should not be empty.");

    let req = test::TestRequest::post()
        .uri("/login")
        .peer_addr(peer())
        .set_json(json!({ "email": MANAGER_EMAIL }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Password field should not be empty.");

    assert_eq!(backend.logins(), 0);
    assert_eq!(store.state(), SessionState::LoggedOut);
}

#[actix_web::test]
async fn wrong_credentials_report_invalid_login() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    let req = test::TestRequest::post()
        .uri("/login")
        .peer_addr(peer())
        .set_json(json!({ "email": MANAGER_EMAIL, "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid email or password");
    assert_eq!(backend.logins(), 1);
    assert!(!store.is_authenticated());
}

#[actix_web::test]
async fn login_stores_session_and_logout_clears_it() {
    let backend = spawn_backend();
    let session_file = temp_session_file();
    let config = Config::for_backend(&backend.url, &session_file);
    let store = Data::new(SessionStore::open(&session_file));
    let dashboard = Data::new(DashboardState::default());
    let app = dashboard_app!(config, store, dashboard);

    let resp = login_as!(app, MANAGER_EMAIL);
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["redirect"], "/dashboard/manager");

    let session = store.current().unwrap();
    assert_eq!(session.user_id, Some(1));
    assert_eq!(session.token, "manager-token");

    // survives a restart
    let reopened = SessionStore::open(&session_file);
    assert!(reopened.is_authenticated());

    // a second login attempt goes straight to the dashboard
    let resp = login_as!(app, MANAGER_EMAIL);
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(backend.logins(), 1);

    let resp = get!(app, "/dashboard");
    assert_eq!(location(&resp), "/dashboard/manager");

    let req = test::TestRequest::post()
        .uri("/logout")
        .peer_addr(peer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
    assert!(!store.is_authenticated());

    let resp = get!(app, "/dashboard/manager");
    assert_eq!(location(&resp), "/login");
}

#[actix_web::test]
async fn employee_id_falls_back_to_token_claims() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    let resp = login_as!(app, EMPLOYEE_EMAIL);
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(store.current().unwrap().user_id, Some(3));

    let resp = get!(app, "/dashboard");
    assert_eq!(location(&resp), "/dashboard/employee");
}

#[actix_web::test]
async fn employee_dashboard_aggregates_own_schedules() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    login_as!(app, EMPLOYEE_EMAIL);

    let resp = get!(app, "/dashboard/employee");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["loading"], false);

    let data = &body["data"];
    assert_eq!(data["employee"]["name"], "Aravind");
    assert_eq!(data["summary"]["presentRatio"], 0.75);
    assert_eq!(
        data["summary"]["categoryHistogram"],
        json!({ "Work": 1, "Meetings": 1, "Breaks": 1, "Other": 1 })
    );
    assert_eq!(data["gauge"]["label"], "75.00%");
    assert_eq!(data["timeDivision"]["labels"], json!(["Work", "Meetings", "Breaks", "Other"]));

    let today: Vec<u64> = ids(&data["today"]);
    let upcoming: Vec<u64> = ids(&data["upcoming"]);
    assert_eq!(today, vec![1]);
    assert_eq!(upcoming, vec![2, 3]);
    assert_eq!(data["today"][0]["event"], "Work");
}

fn ids(items: &Value) -> Vec<u64> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_u64().unwrap())
        .collect()
}

#[actix_web::test]
async fn manager_views_are_forbidden_to_employees() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    login_as!(app, EMPLOYEE_EMAIL);

    let resp = get!(app, "/dashboard/manager");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = get!(app, "/dashboard/manager/employees/2");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn manager_dashboard_builds_calendar_and_charts() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    login_as!(app, MANAGER_EMAIL);

    let body: Value = test::read_body_json(get!(app, "/dashboard/manager")).await;
    let data = &body["data"];

    assert_eq!(data["team"].as_array().unwrap().len(), 2);
    // the ownerless record stays off the calendar
    assert_eq!(data["events"].as_array().unwrap().len(), 5);

    assert_eq!(data["attendanceChart"]["labels"], json!(["Akshay", "Aravind"]));
    assert_eq!(data["attendanceChart"]["datasets"][0]["data"], json!([1, 3]));
    assert_eq!(data["attendanceChart"]["datasets"][1]["data"], json!([0, 1]));

    assert_eq!(
        data["eventTypes"]["labels"],
        json!(["SHIFT", "MEETING", "LEAVE", "Unspecified"])
    );
    assert_eq!(data["eventTypes"]["data"], json!([3, 1, 1, 1]));

    let stacked = &data["timeDivisionChart"];
    assert_eq!(stacked["stacked"], true);
    assert_eq!(stacked["labels"], json!(["Akshay", "Aravind"]));
    // Work, Meetings, Leaves, Other
    assert_eq!(stacked["datasets"][0]["data"], json!([1, 1]));
    assert_eq!(stacked["datasets"][1]["data"], json!([0, 1]));
    assert_eq!(stacked["datasets"][2]["data"], json!([0, 1]));
    assert_eq!(stacked["datasets"][3]["data"], json!([0, 1]));
    assert_eq!(data["presence"]["labels"], json!(["Present", "Absent"]));
    assert_eq!(data["presence"]["data"], json!([4, 1]));

    let body: Value = test::read_body_json(get!(app, "/dashboard/manager?selected=3")).await;
    assert_eq!(body["data"]["attendanceChart"]["labels"], json!(["Aravind"]));
    assert_eq!(body["data"]["timeDivisionChart"]["labels"], json!(["Aravind"]));
    assert_eq!(body["data"]["presence"]["data"], json!([3, 1]));
}

#[actix_web::test]
async fn employee_detail_summarizes_one_member() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    login_as!(app, MANAGER_EMAIL);

    let body: Value = test::read_body_json(get!(app, "/dashboard/manager/employees/2")).await;
    let data = &body["data"];
    assert_eq!(data["employeeId"], 2);
    assert_eq!(data["summary"]["presentRatio"], 1.0);
    assert_eq!(data["events"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn create_schedule_adds_calendar_event() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    login_as!(app, MANAGER_EMAIL);
    get!(app, "/dashboard/manager");

    let req = test::TestRequest::post()
        .uri("/dashboard/manager/schedules")
        .peer_addr(peer())
        .set_json(json!({
            "title": "Sprint planning",
            "startTime": "2025-01-30T09:00",
            "endTime": "2025-01-30T10:00",
            "employeeId": 3
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let event: Value = test::read_body_json(resp).await;
    assert_eq!(event["id"], 100);
    assert_eq!(event["title"], "Sprint planning");
    assert_eq!(event["resourceId"], 3);

    let view = dashboard.manager.lock().unwrap();
    let events = &view.data.as_ref().unwrap().events;
    assert_eq!(events.len(), 6);
    assert_eq!(events.last().unwrap().id, 100);
}

#[actix_web::test]
async fn incomplete_schedule_form_is_rejected() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    login_as!(app, MANAGER_EMAIL);

    let req = test::TestRequest::post()
        .uri("/dashboard/manager/schedules")
        .peer_addr(peer())
        .set_json(json!({ "title": "", "startTime": "2025-01-30T09:00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Please fill in all fields");
}

#[actix_web::test]
async fn network_failure_keeps_last_good_view() {
    let backend = spawn_backend();
    let (store, dashboard) = shared_state();

    let online = Config::for_backend(&backend.url, &temp_session_file());
    let app = dashboard_app!(online, store, dashboard);
    login_as!(app, MANAGER_EMAIL);
    let before: Value = test::read_body_json(get!(app, "/dashboard/manager")).await;
    assert!(before["data"].is_object());

    let offline = Config::for_backend(&dead_backend_url(), &temp_session_file());
    let app = dashboard_app!(offline, store, dashboard);
    let after: Value = test::read_body_json(get!(app, "/dashboard/manager")).await;

    assert_eq!(after["error"], "Network Error: Could not connect to server");
    assert_eq!(after["data"], before["data"]);
    assert!(store.is_authenticated());
}

#[actix_web::test]
async fn backend_rejecting_token_ends_session() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    login_as!(app, EXPIRED_EMAIL);
    assert!(store.is_authenticated());

    let resp = get!(app, "/dashboard/manager");
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/login");
    assert!(!store.is_authenticated());

    backend.stop().await;
}

#[actix_web::test]
async fn register_forwards_employee_to_backend() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(peer())
        .set_json(json!({
            "id": "42",
            "firstName": "Srikar",
            "lastName": "Rao",
            "email": "srikar@company.com",
            "role": "EMPLOYEE",
            "password": "secret1",
            "confirmPassword": "secret1",
            "manager": { "id": "1" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Registration successful!");
    assert_eq!(body["employee"]["name"], "Srikar Rao");
    assert_eq!(body["employee"]["credentials"], "secret1");
}

fn manager_session(user_id: u64, token: &str) -> Session {
    Session {
        user_id: Some(user_id),
        role: "MANAGER".to_string(),
        token: token.to_string(),
    }
}

#[actix_web::test]
async fn rejected_token_forgets_cached_views() {
    let backend = spawn_backend();
    let (store, dashboard) = shared_state();

    let online = Config::for_backend(&backend.url, &temp_session_file());
    let app = dashboard_app!(online, store, dashboard);
    login_as!(app, MANAGER_EMAIL);
    let before: Value = test::read_body_json(get!(app, "/dashboard/manager")).await;
    assert!(before["data"]["team"].is_array());

    store.login(&manager_session(1, "expired")).unwrap();
    let resp = get!(app, "/dashboard/manager");
    assert_eq!(location(&resp), "/login");
    assert!(!store.is_authenticated());
    assert!(dashboard.manager.lock().unwrap().data.is_none());

    // the next user, with the backend down, sees no trace of the first
    store.login(&manager_session(77, "other-token")).unwrap();
    let offline = Config::for_backend(&dead_backend_url(), &temp_session_file());
    let app = dashboard_app!(offline, store, dashboard);
    let after: Value = test::read_body_json(get!(app, "/dashboard/manager")).await;

    assert_eq!(after["data"], Value::Null);
    assert_eq!(after["error"], "Network Error: Could not connect to server");
}

#[actix_web::test]
async fn rejected_token_on_create_forgets_cached_views() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    login_as!(app, MANAGER_EMAIL);
    get!(app, "/dashboard/manager");
    store.login(&manager_session(1, "expired")).unwrap();

    let req = test::TestRequest::post()
        .uri("/dashboard/manager/schedules")
        .peer_addr(peer())
        .set_json(json!({
            "title": "Sprint planning",
            "startTime": "2025-01-30T09:00",
            "endTime": "2025-01-30T10:00",
            "employeeId": 3
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(location(&resp), "/login");
    assert!(!store.is_authenticated());
    assert!(dashboard.manager.lock().unwrap().data.is_none());
}

#[actix_web::test]
async fn login_starts_with_empty_views() {
    let backend = spawn_backend();
    let config = Config::for_backend(&backend.url, &temp_session_file());
    let (store, dashboard) = shared_state();
    let app = dashboard_app!(config, store, dashboard);

    login_as!(app, MANAGER_EMAIL);
    get!(app, "/dashboard/manager");
    assert!(dashboard.manager.lock().unwrap().data.is_some());

    // session dropped outside the logout route
    store.logout().unwrap();
    let resp = login_as!(app, EMPLOYEE_EMAIL);
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(dashboard.manager.lock().unwrap().data.is_none());
}
