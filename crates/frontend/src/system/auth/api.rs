use contracts::system::auth::{
    ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
};

use crate::shared::api_client::{ApiClient, ApiError};

/// Exchange credentials for a bearer token.
pub async fn login(
    client: &ApiClient,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    client
        .post("/login", &LoginRequest { username, password })
        .await
}

/// Create a new account; the user logs in afterwards.
pub async fn register(
    client: &ApiClient,
    username: String,
    password: String,
) -> Result<MessageResponse, ApiError> {
    client
        .post("/register", &RegisterRequest { username, password })
        .await
}

pub async fn change_password(
    client: &ApiClient,
    old_password: String,
    new_password: String,
) -> Result<MessageResponse, ApiError> {
    client
        .post(
            "/change-password",
            &ChangePasswordRequest {
                old_password,
                new_password,
            },
        )
        .await
}
