use serde::{Deserialize, Serialize};

/// Request body for a beta signup. Both fields are optional at the parsing
/// boundary so a missing email reaches the validation path instead of a
/// deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Response returned after a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
}

/// Error body shared by all failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
