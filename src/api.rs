//! CRUD client for the backend: posts, skills, the singleton profile record,
//! and the session probes.

use crate::error::ApiError;
use crate::models::{Envelope, PersonalInfo, Post, Skill};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Confirmation seam for destructive actions. The binary wires this to a
/// prompt; tests and callers supply policy directly.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything. Useful for non-interactive callers and tests.
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct AdminApi {
    http: reqwest::Client,
    base_url: String,
}

impl AdminApi {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the status and decode the envelope, mapping every failure shape
    /// onto the error taxonomy.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::RemoteFailure(format!(
                "backend returned {}: {}",
                status, body
            )));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        if !envelope.success {
            return Err(ApiError::RemoteFailure(
                envelope
                    .error
                    .unwrap_or_else(|| "backend reported failure".to_string()),
            ));
        }
        Ok(envelope)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ==================== Posts ====================

    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.http.get(self.url("/api/posts")).send().await?;
        let envelope: Envelope<Vec<Post>> = Self::decode(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/api/posts/{}", id)))
            .send()
            .await?;
        let envelope: Envelope<Post> = Self::decode(response).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::MalformedResponse("post reply without data".to_string()))
    }

    pub async fn create_post(&self, post: &Post) -> Result<Post, ApiError> {
        debug!("Creating post '{}'", post.title_fa);
        let response = self
            .http
            .post(self.url("/api/posts"))
            .json(post)
            .send()
            .await?;
        let envelope: Envelope<Post> = Self::decode(response).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::MalformedResponse("create reply without data".to_string()))
    }

    pub async fn update_post(&self, id: i64, post: &Post) -> Result<(), ApiError> {
        debug!("Updating post {}", id);
        let response = self
            .http
            .put(self.url(&format!("/api/posts/{}", id)))
            .json(post)
            .send()
            .await?;
        Self::decode::<Post>(response).await.map(|_| ())
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/posts/{}", id)))
            .send()
            .await?;
        Self::decode::<serde_json::Value>(response).await.map(|_| ())
    }

    // ==================== Skills ====================

    pub async fn list_skills(&self) -> Result<Vec<Skill>, ApiError> {
        let response = self.http.get(self.url("/api/skills")).send().await?;
        let envelope: Envelope<Vec<Skill>> = Self::decode(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// The panel renders a create button but the backend flow was never
    /// finished; the reference shows a "coming soon" notice instead.
    pub async fn create_skill(&self, _skill: &Skill) -> Result<Skill, ApiError> {
        Err(ApiError::NotSupported("skill creation"))
    }

    pub async fn update_skill(&self, _id: i64, _skill: &Skill) -> Result<(), ApiError> {
        Err(ApiError::NotSupported("skill editing"))
    }

    pub async fn delete_skill(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/skills/{}", id)))
            .send()
            .await?;
        Self::decode::<serde_json::Value>(response).await.map(|_| ())
    }

    // ==================== Personal info ====================

    /// The profile is a singleton; a backend with no record yet answers
    /// success with no data.
    pub async fn personal_info(&self) -> Result<Option<PersonalInfo>, ApiError> {
        let response = self.http.get(self.url("/api/personal-info")).send().await?;
        let envelope: Envelope<PersonalInfo> = Self::decode(response).await?;
        Ok(envelope.data)
    }

    /// Upsert the singleton profile record.
    pub async fn update_personal_info(&self, info: &PersonalInfo) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.url("/api/personal-info"))
            .json(info)
            .send()
            .await?;
        Self::decode::<PersonalInfo>(response).await.map(|_| ())
    }

    // ==================== Session ====================

    /// Probe the admin session. Any failure, transport included, reads as
    /// "not authenticated" and the caller redirects to the login page.
    pub async fn check_auth(&self) -> bool {
        match self.http.get(self.url("/admin/check-auth")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Auth probe failed: {}", e);
                false
            }
        }
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self.http.post(self.url("/admin/logout")).send().await?;
        Self::decode::<serde_json::Value>(response).await.map(|_| ())
    }
}
