//! Response body shapes for the activities API.

use serde::Deserialize;

/// Standard success wrapper: `{"status": "success", "data": ...}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    pub data: T,
}

/// Error bodies are `{"error": string}`. The string reaches the caller
/// uninterpreted.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Login succeeds with the token at the top level, not inside `data`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "rol", default)]
    pub role: Option<String>,
}

/// `GET /api/users/me` payload. Unlike the grouped preferences endpoint,
/// favorites arrive here as a flat name list.
#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
}
