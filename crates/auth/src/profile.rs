use serde::{Deserialize, Serialize};

use rentroll_core::OwnerId;

use crate::roles::Role;

/// Nested role object as the backend serializes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInfo {
    pub authority: Role,
}

/// The authenticated account, from `GET /users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    /// Data scope: which owner's houses/contracts this account sees.
    pub owner_id: OwnerId,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: RoleInfo,
}

impl UserProfile {
    pub fn role(&self) -> Role {
        self.role.authority
    }
}
