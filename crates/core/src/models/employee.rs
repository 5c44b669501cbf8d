use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee capability tag. An owner sees the garage-wide daily schedule,
/// a mechanic only their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Owner,
    Mechanic,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "OWNER",
            Role::Mechanic => "MECHANIC",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "OWNER" => Some(Role::Owner),
            "MECHANIC" => Some(Role::Mechanic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
}
