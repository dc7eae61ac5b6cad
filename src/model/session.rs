use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::model::role::Role;

/// Client-held proof of authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unknown when neither the login response nor the token carries it
    pub user_id: Option<u64>,
    pub role: String,
    pub token: String,
}

impl Session {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }

    /// Id used to scope employee and team queries.
    pub fn user_id(&self) -> Result<u64, ApiError> {
        self.user_id
            .ok_or_else(|| ApiError::Forbidden("No employee profile".to_string()))
    }

    pub fn require_manager(&self) -> Result<(), ApiError> {
        if self.role().is_manager() {
            Ok(())
        } else {
            Err(ApiError::Forbidden("Manager only".to_string()))
        }
    }
}
