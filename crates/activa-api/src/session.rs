use reqwest::Url;

use crate::error::{ApiError, Result};

/// Who is talking to the API and where it lives.
///
/// Threaded explicitly through the client instead of living in ambient
/// session storage. Protected routes send the raw token as the
/// `Authorization` header value; the backend expects no `Bearer` prefix.
#[derive(Clone, Debug)]
pub struct Session {
    base_url: String,
    token: Option<String>,
}

impl Session {
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn authenticated(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Some(token.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Build `{base}/api/{segments...}`. Each segment is pushed as one path
    /// component, so activity names with spaces or slashes arrive encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {:?}: {e}", self.base_url)))?;
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ApiError::Config(format!("base URL {:?} cannot carry a path", self.base_url))
            })?;
            path.pop_if_empty();
            path.push("api");
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_under_api() {
        let session = Session::anonymous("http://localhost:5000");
        let url = session.endpoint(&["activities"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/activities");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let session = Session::anonymous("http://localhost:5000");
        let url = session.endpoint(&["preferences", "Fútbol 5"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/preferences/F%C3%BAtbol%205"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let session = Session::anonymous("http://localhost:5000/");
        let url = session.endpoint(&["activities"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/activities");
    }

    #[test]
    fn test_invalid_base_url_is_a_config_error() {
        let session = Session::anonymous("localhost:what");
        match session.endpoint(&["activities"]) {
            Err(ApiError::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_token_lifecycle() {
        let mut session = Session::anonymous("http://localhost:5000");
        assert!(session.token().is_none());

        session.set_token(Some("tok-123".to_string()));
        assert_eq!(session.token(), Some("tok-123"));

        session.set_token(None);
        assert!(session.token().is_none());
    }
}
