use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::schedule::EmployeeRef;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 3,
        "name": "Aravind",
        "email": "aravind@company.com",
        "position": "Developer",
        "role": "EMPLOYEE",
        "managerId": 1
    })
)]
pub struct EmployeeRecord {
    #[schema(example = 3)]
    pub id: u64,

    #[serde(default)]
    #[schema(example = "Aravind")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "aravind@company.com")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "Developer", nullable = true)]
    pub position: Option<String>,

    #[serde(default)]
    #[schema(example = "EMPLOYEE", nullable = true)]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<EmployeeRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl EmployeeRecord {
    pub fn manager(&self) -> Option<u64> {
        self.manager_id.or_else(|| self.manager.as_ref().map(|m| m.id))
    }
}
