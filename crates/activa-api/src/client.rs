use activa_core::{CategoryGroup, PreferenceSet, ToggleOutcome, is_valid_display_time};
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::{ApiError, Result};
use crate::session::Session;
use crate::wire::{Envelope, ErrorBody, LoginResponse, Profile};

/// Client for the activities API.
///
/// Thin request plumbing around a [`Session`]: every method maps to one
/// endpoint, decodes the standard envelope, and converts error bodies into
/// [`ApiError::Http`] with the server's message intact.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    session: Session,
}

/// Payload for the admin activity-creation endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct NewActivity {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    // -- auth ----------------------------------------------------------

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = self.session.endpoint(&["auth", "login"])?;
        let body = json!({ "email": email, "password": password });
        let response = self.http.post(url).json(&body).send().await?;
        decode(response).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Option<&str>,
    ) -> Result<()> {
        let url = self.session.endpoint(&["auth", "register"])?;
        let mut body = json!({ "name": name, "email": email, "password": password });
        if let Some(role) = role {
            body["rol"] = json!(role);
        }
        let response = self.http.post(url).json(&body).send().await?;
        expect_success(response).await
    }

    pub async fn me(&self) -> Result<Profile> {
        let url = self.session.endpoint(&["users", "me"])?;
        let response = self.authorized(self.http.get(url)).send().await?;
        Ok(decode::<Envelope<Profile>>(response).await?.data)
    }

    pub async fn delete_account(&self) -> Result<()> {
        let url = self.session.endpoint(&["users", "me"])?;
        let response = self.authorized(self.http.delete(url)).send().await?;
        expect_success(response).await
    }

    // -- catalog -------------------------------------------------------

    /// The public nested catalog payload.
    pub async fn activities(&self) -> Result<Vec<CategoryGroup>> {
        let url = self.session.endpoint(&["activities"])?;
        let response = self.http.get(url).send().await?;
        Ok(decode::<Envelope<Vec<CategoryGroup>>>(response).await?.data)
    }

    /// Create an activity (admin only). The display time is validated
    /// locally before any request goes out.
    pub async fn create_activity(&self, activity: &NewActivity) -> Result<()> {
        if let Some(time) = &activity.time
            && !is_valid_display_time(time)
        {
            return Err(ApiError::Config(format!(
                "time {time:?} must look like 02/06/25 2:00pm"
            )));
        }
        let url = self.session.endpoint(&["activities"])?;
        let response = self
            .authorized(self.http.post(url).json(activity))
            .send()
            .await?;
        expect_success(response).await
    }

    pub async fn delete_activity(&self, name: &str) -> Result<()> {
        let url = self.session.endpoint(&["activities", name])?;
        let response = self.authorized(self.http.delete(url)).send().await?;
        expect_success(response).await
    }

    // -- recommendations and preferences -------------------------------

    pub async fn recommendations(&self) -> Result<Vec<CategoryGroup>> {
        let url = self.session.endpoint(&["recommendations"])?;
        let response = self.authorized(self.http.get(url)).send().await?;
        Ok(decode::<Envelope<Vec<CategoryGroup>>>(response).await?.data)
    }

    pub async fn my_preferences(&self) -> Result<Vec<CategoryGroup>> {
        let url = self.session.endpoint(&["preferences", "me"])?;
        let response = self.authorized(self.http.get(url)).send().await?;
        Ok(decode::<Envelope<Vec<CategoryGroup>>>(response).await?.data)
    }

    /// Bulk-add favorite names.
    pub async fn add_preferences(&self, names: &[String]) -> Result<()> {
        let url = self.session.endpoint(&["preferences"])?;
        let body = json!({ "actividades": names });
        let response = self
            .authorized(self.http.post(url).json(&body))
            .send()
            .await?;
        expect_success(response).await
    }

    pub async fn remove_preference(&self, name: &str) -> Result<()> {
        let url = self.session.endpoint(&["preferences", name])?;
        let response = self.authorized(self.http.delete(url)).send().await?;
        expect_success(response).await
    }

    pub async fn like(&self, name: &str) -> Result<()> {
        let url = self.session.endpoint(&["activities", name, "like"])?;
        let response = self.authorized(self.http.post(url)).send().await?;
        expect_success(response).await
    }

    pub async fn unlike(&self, name: &str) -> Result<()> {
        let url = self.session.endpoint(&["activities", name, "like"])?;
        let response = self.authorized(self.http.delete(url)).send().await?;
        expect_success(response).await
    }

    /// Toggle one favorite.
    ///
    /// Membership is read before the request, and local state changes only
    /// after a successful response; a failed call leaves `preferences`
    /// untouched for the caller to surface or retry.
    pub async fn toggle_preference(
        &self,
        preferences: &mut PreferenceSet,
        name: &str,
    ) -> Result<ToggleOutcome> {
        if preferences.contains(name) {
            self.remove_preference(name).await?;
            preferences.remove(name);
            Ok(ToggleOutcome::Removed)
        } else {
            self.add_preferences(&[name.to_string()]).await?;
            preferences.insert(name);
            Ok(ToggleOutcome::Added)
        }
    }

    /// Like-from-recommendation path: add-only, through the like endpoint.
    pub async fn like_recommended(
        &self,
        preferences: &mut PreferenceSet,
        name: &str,
    ) -> Result<()> {
        self.like(name).await?;
        preferences.insert(name);
        Ok(())
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        // Raw token value, deliberately not prefixed with "Bearer". A
        // missing token is sent as no header at all; protected routes
        // answer with an error body the caller surfaces.
        match self.session.token() {
            Some(token) => builder.header(AUTHORIZATION, token),
            None => builder,
        }
    }
}

/// Decode a success body, or surface the server's error string.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(http_error(status, &body));
    }
    serde_json::from_str(&body).map_err(ApiError::Decode)
}

/// Check the status only, ignoring the body of confirmation responses.
async fn expect_success(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await?;
    Err(http_error(status, &body))
}

fn http_error(status: reqwest::StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    ApiError::Http {
        status: status.as_u16(),
        message,
    }
}
