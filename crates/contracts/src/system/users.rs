use serde::{Deserialize, Serialize};

/// Payload for `POST /users` (merchant registration).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    #[serde(rename = "businessName")]
    pub business_name: String,
}

/// Payload for `POST /users/verify-email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}
