use async_trait::async_trait;
use serde::Serialize;

use crate::models::{AuthResponse, Role};
use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role: Role,
}

/// Account endpoints. Unauthenticated on the server side.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<AuthResponse, ApiError>;
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post("auth/login", &LoginRequest { email, password })
            .await
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<AuthResponse, ApiError> {
        self.post(
            "auth/register",
            &RegisterRequest {
                name,
                email,
                password,
                role,
            },
        )
        .await
    }
}
