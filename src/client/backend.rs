//! HTTP client for the remote attendance API.
//!
//! Every call either returns the parsed entity or a single `ApiError`; there is
//! no retry and no partial result.

use reqwest::{Client, RequestBuilder, Response, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, instrument};
use uuid::Uuid;

use crate::config::Config;
use crate::error::ApiError;
use crate::model::{
    employee::EmployeeRecord,
    schedule::{NewSchedule, ScheduleRecord},
};
use crate::models::{LoginReqDto, LoginResponse, RegisterEmployee};

#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    login_path: String,
    register_path: String,
    token: Option<String>,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_base_url.clone(),
            login_path: config.login_path.clone(),
            register_path: config.register_path.clone(),
            token: None,
        }
    }

    /// Copy of this client that sends `Authorization: Bearer <token>`.
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            ..self.clone()
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header(AUTHORIZATION, format!("Bearer {token}")),
            None => req,
        }
    }

    async fn execute(&self, req: RequestBuilder) -> Result<(Uuid, Response), ApiError> {
        let request_id = Uuid::new_v4();

        let response = req.send().await.map_err(|e| {
            error!(%request_id, error = %e, "Backend unreachable");
            ApiError::from(e)
        })?;

        let status = response.status();
        debug!(%request_id, status = status.as_u16(), url = %response.url(), "Backend responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body);
            error!(%request_id, status = status.as_u16(), error = %err, "Backend returned an error");
            return Err(err);
        }

        Ok((request_id, response))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let (request_id, response) = self.execute(req).await?;

        response.json::<T>().await.map_err(|e| {
            error!(%request_id, error = %e, "Failed to decode backend response");
            ApiError::Decode(e.to_string())
        })
    }

    /// All schedules, or only the given employee's.
    #[instrument(skip(self))]
    pub async fn fetch_schedules(
        &self,
        employee_id: Option<u64>,
    ) -> Result<Vec<ScheduleRecord>, ApiError> {
        let path = match employee_id {
            Some(id) => format!("/schedules/employee/{id}"),
            None => "/schedules".to_string(),
        };
        self.send(self.get(&path)).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_employee(&self, id: u64) -> Result<EmployeeRecord, ApiError> {
        self.send(self.get(&format!("/employees/{id}"))).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_team(&self, manager_id: u64) -> Result<Vec<EmployeeRecord>, ApiError> {
        self.send(self.get(&format!("/manager/{manager_id}/team")))
            .await
    }

    #[instrument(skip(self, record), fields(employee_id = record.employee.id))]
    pub async fn create_schedule(&self, record: &NewSchedule) -> Result<ScheduleRecord, ApiError> {
        self.send(self.post("/schedules").json(record)).await
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &LoginReqDto) -> Result<LoginResponse, ApiError> {
        self.send(self.post(&self.login_path).json(credentials))
            .await
    }

    /// Returns whatever the backend echoes back for the created employee.
    #[instrument(skip(self, employee), fields(email = %employee.email))]
    pub async fn register(&self, employee: &RegisterEmployee) -> Result<Value, ApiError> {
        let (_, response) = self
            .execute(self.post(&self.register_path).json(employee))
            .await?;

        // some deployments answer with plain text
        let body = response.text().await.map_err(ApiError::from)?;
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}
