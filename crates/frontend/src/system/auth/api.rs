use contracts::shared::ApiEnvelope;
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use contracts::system::users::{RegisterRequest, VerifyEmailRequest};

use crate::shared::request;

/// Login with email and password; returns the access/refresh token pair.
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let body = LoginRequest { email, password };
    let envelope: ApiEnvelope<LoginResponse> = request::post_json("/auth/login", &body).await?;
    Ok(envelope.data)
}

/// Refresh the access token using the refresh token.
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let body = RefreshRequest { refresh_token };
    let envelope: ApiEnvelope<RefreshResponse> = request::post_json("/auth/refresh", &body).await?;
    Ok(envelope.data)
}

/// Register a new merchant account (`POST /users`).
pub async fn register(body: &RegisterRequest) -> Result<UserInfo, String> {
    let envelope: ApiEnvelope<UserInfo> = request::post_json("/users", body).await?;
    Ok(envelope.data)
}

/// Confirm the email address with the mailed code.
pub async fn verify_email(email: String, code: String) -> Result<(), String> {
    let body = VerifyEmailRequest { email, code };
    let _: ApiEnvelope<serde_json::Value> =
        request::post_json("/users/verify-email", &body).await?;
    Ok(())
}

/// Fetch the merchant behind the current access token.
pub async fn get_current_user() -> Result<UserInfo, String> {
    let envelope: ApiEnvelope<UserInfo> = request::get_json("/users/me").await?;
    Ok(envelope.data)
}
