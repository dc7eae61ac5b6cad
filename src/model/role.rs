use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Role as reported by the backend at login. Unknown strings land in `Other`.
#[derive(Debug, Clone, Eq, PartialEq, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    Employee,
    Manager,
    #[strum(default)]
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        raw.parse().unwrap_or_else(|_| Role::Other(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Manager => "MANAGER",
            Role::Other(raw) => raw,
        }
    }

    pub fn is_manager(&self) -> bool {
        *self == Role::Manager
    }

    /// Landing page for this role.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Manager => "/dashboard/manager",
            _ => "/dashboard/employee",
        }
    }
}
