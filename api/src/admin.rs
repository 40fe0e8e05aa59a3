//! User administration.

use serde::Serialize;

use crate::models::{NewUser, Role, UserRow};
use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct RoleChange {
    role: Role,
}

impl ApiClient {
    /// All users, or only those with `role`.
    pub async fn list_users(&self, role: Option<Role>) -> Result<Vec<UserRow>, ApiError> {
        let query: Vec<(&str, String)> = role
            .map(|r| vec![("role", r.as_str().to_string())])
            .unwrap_or_default();
        self.get("admin/users", &query).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<UserRow, ApiError> {
        self.post("admin/users", user).await
    }

    pub async fn update_user_role(&self, id: &str, role: Role) -> Result<UserRow, ApiError> {
        self.patch(&format!("admin/users/{id}/role"), &RoleChange { role })
            .await
    }
}
