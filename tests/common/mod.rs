#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use chrono::{Days, Local};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use uuid::Uuid;

pub const MANAGER_EMAIL: &str = "manager@company.com";
pub const EMPLOYEE_EMAIL: &str = "aravind@company.com";
pub const EXPIRED_EMAIL: &str = "expired@company.com";
pub const PASSWORD: &str = "secret";

/// Builds the dashboard app around shared state, the way `main` does.
#[macro_export]
macro_rules! dashboard_app {
    ($config:expr, $store:expr, $dashboard:expr) => {{
        let config: attendance_dashboard::config::Config = $config.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .app_data($store.clone())
                .app_data(actix_web::web::Data::new(
                    attendance_dashboard::client::BackendClient::new(&config),
                ))
                .app_data($dashboard.clone())
                .configure(move |cfg| attendance_dashboard::routes::configure(cfg, config.clone())),
        )
        .await
    }};
}

pub fn peer() -> std::net::SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

pub fn temp_session_file() -> String {
    std::env::temp_dir()
        .join(format!("dashboard-session-{}.json", Uuid::new_v4()))
        .to_string_lossy()
        .into_owned()
}

/// A base URL nothing listens on.
pub fn dead_backend_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn day(offset: u64) -> String {
    Local::now()
        .date_naive()
        .checked_add_days(Days::new(offset))
        .unwrap()
        .format("%Y-%m-%d")
        .to_string()
}

pub fn employee_token() -> String {
    encode(
        &Header::default(),
        &json!({ "userId": 3, "role": "EMPLOYEE" }),
        &EncodingKey::from_secret(b"backend-secret"),
    )
    .unwrap()
}

fn all_schedules() -> Vec<Value> {
    vec![
        json!({ "id": 1, "employee": { "id": 3, "name": "Aravind" }, "date": day(0),
                "startTime": "09:00:00", "endTime": "17:00:00", "scheduleOfDay": "Work",
                "leave": false, "eventType": "SHIFT" }),
        json!({ "id": 2, "employee": { "id": 3, "name": "Aravind" }, "date": day(1),
                "startTime": "10:00:00", "endTime": "11:00:00", "scheduleOfDay": "MEETING",
                "leave": false, "eventType": "MEETING" }),
        json!({ "id": 3, "employee": { "id": 3, "name": "Aravind" }, "date": day(2),
                "scheduleOfDay": null, "leave": true, "leaveType": "SICK", "eventType": "LEAVE" }),
        json!({ "id": 4, "employee": { "id": 3, "name": "Aravind" }, "date": null,
                "scheduleOfDay": "break", "leave": false, "eventType": "SHIFT" }),
        json!({ "id": 5, "employee": { "id": 2, "name": "Akshay" }, "date": day(0),
                "startTime": "09:00:00", "endTime": "17:00:00", "scheduleOfDay": "Work",
                "leave": false, "eventType": "SHIFT" }),
        json!({ "id": 6, "date": day(0), "scheduleOfDay": "Work" }),
    ]
}

fn owner(record: &Value) -> Option<u64> {
    record["employee"]["id"].as_u64()
}

fn rejected(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        == Some("Bearer expired")
}

fn expired() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "message": "Token expired" }))
}

async fn login(body: web::Json<Value>, calls: web::Data<AtomicUsize>) -> HttpResponse {
    calls.fetch_add(1, Ordering::SeqCst);

    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    match (email, password) {
        (MANAGER_EMAIL, PASSWORD) => {
            HttpResponse::Ok().json(json!({ "token": "manager-token", "role": "MANAGER", "id": 1 }))
        }
        // no id in the body; it lives in the JWT
        (EMPLOYEE_EMAIL, PASSWORD) => {
            HttpResponse::Ok().json(json!({ "token": employee_token(), "role": "EMPLOYEE" }))
        }
        (EXPIRED_EMAIL, PASSWORD) => {
            HttpResponse::Ok().json(json!({ "token": "expired", "role": "MANAGER", "id": 1 }))
        }
        _ => HttpResponse::Unauthorized().finish(),
    }
}

async fn register(body: web::Json<Value>) -> HttpResponse {
    HttpResponse::Created().json(body.into_inner())
}

async fn employee(req: HttpRequest, path: web::Path<u64>) -> HttpResponse {
    if rejected(&req) {
        return expired();
    }
    match path.into_inner() {
        3 => HttpResponse::Ok().json(json!({
            "id": 3, "name": "Aravind", "email": EMPLOYEE_EMAIL,
            "position": null, "role": "EMPLOYEE", "managerId": 1
        })),
        _ => HttpResponse::NotFound().json(json!({ "message": "Employee not found" })),
    }
}

async fn schedules(req: HttpRequest) -> HttpResponse {
    if rejected(&req) {
        return expired();
    }
    HttpResponse::Ok().json(all_schedules())
}

async fn employee_schedules(req: HttpRequest, path: web::Path<u64>) -> HttpResponse {
    if rejected(&req) {
        return expired();
    }
    let id = path.into_inner();
    let own: Vec<Value> = all_schedules()
        .into_iter()
        .filter(|r| owner(r) == Some(id))
        .collect();
    HttpResponse::Ok().json(own)
}

async fn team(req: HttpRequest, path: web::Path<u64>) -> HttpResponse {
    if rejected(&req) {
        return expired();
    }
    match path.into_inner() {
        1 => HttpResponse::Ok().json(json!([
            { "id": 2, "name": "Akshay", "email": "akshay@company.com", "role": "EMPLOYEE", "manager": { "id": 1 } },
            { "id": 3, "name": "Aravind", "email": EMPLOYEE_EMAIL, "role": "EMPLOYEE", "manager": { "id": 1 } }
        ])),
        _ => HttpResponse::Ok().json(json!([])),
    }
}

async fn create_schedule(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if rejected(&req) {
        return expired();
    }
    let mut created = body.into_inner();
    created["id"] = json!(100);
    HttpResponse::Ok().json(created)
}

/// In-process stand-in for the remote attendance API.
pub struct MockBackend {
    pub url: String,
    pub login_calls: Arc<AtomicUsize>,
    handle: ServerHandle,
}

impl MockBackend {
    pub fn logins(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub async fn stop(&self) {
        self.handle.stop(true).await;
    }
}

pub fn spawn_backend() -> MockBackend {
    let login_calls = Arc::new(AtomicUsize::new(0));
    let calls = login_calls.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(calls.clone()))
            .route("/login", web::post().to(login))
            .route("/register", web::post().to(register))
            .route("/employees/{id}", web::get().to(employee))
            .route("/schedules", web::get().to(schedules))
            .route("/schedules", web::post().to(create_schedule))
            .route("/schedules/employee/{id}", web::get().to(employee_schedules))
            .route("/manager/{id}/team", web::get().to(team))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let port = server.addrs()[0].port();
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    MockBackend {
        url: format!("http://127.0.0.1:{port}"),
        login_calls,
        handle,
    }
}
