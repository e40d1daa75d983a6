use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response.
    Network(reqwest::Error),
    /// Non-2xx response; `message` is the server's error string, verbatim.
    Http { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape.
    Decode(serde_json::Error),
    /// Unusable client-side input (bad base URL, invalid display time).
    Config(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {e}"),
            ApiError::Http { status, message } => write!(f, "{message} (HTTP {status})"),
            ApiError::Decode(e) => write!(f, "unexpected response body: {e}"),
            ApiError::Config(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
