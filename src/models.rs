use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[serde(default)]
    #[schema(example = "aravind@company.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "secret")]
    pub password: String,
}

/// What the backend answers on a successful login. Extra fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ManagerField {
    #[serde(default)]
    #[schema(example = "1")]
    pub id: String,
}

/// Registration form as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReq {
    #[serde(default)]
    #[schema(example = "42")]
    pub id: String,
    #[serde(default)]
    #[schema(example = "Srikar")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Rao")]
    pub last_name: String,
    #[serde(default)]
    #[schema(example = "srikar@company.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "EMPLOYEE")]
    pub role: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub manager: ManagerField,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManagerRef {
    pub id: Option<String>,
}

/// Employee-shaped body forwarded to the backend's register endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterEmployee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub credentials: String,
    pub manager: ManagerRef,
}

/// Form for adding an entry to the team calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleReq {
    #[serde(default)]
    #[schema(example = "Sprint planning")]
    pub title: String,
    /// `datetime-local` value, e.g. `2025-01-30T09:00`
    #[serde(default)]
    #[schema(example = "2025-01-30T09:00")]
    pub start_time: String,
    #[serde(default)]
    #[schema(example = "2025-01-30T10:00")]
    pub end_time: String,
    #[serde(default)]
    #[schema(example = 3)]
    pub employee_id: Option<u64>,
}
