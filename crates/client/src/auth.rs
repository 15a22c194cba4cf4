//! Authentication and account endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

use rentroll_auth::{AccessToken, Session, UserProfile};

use crate::error::ApiError;
use crate::http::{Acknowledgement, ApiClient, decode};

/// `POST /auth/login` response (OAuth2 password flow).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: AccessToken,
    pub token_type: String,
}

/// Registration payload for `POST /users/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Partial profile update for `PUT /users/me`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

impl ApiClient {
    /// Authenticate and establish the session.
    ///
    /// The backend expects form-encoded OAuth2 credentials; the profile is
    /// fetched with the fresh token before the session is stored, so a
    /// failed profile fetch leaves no half-authenticated state behind.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let token: TokenResponse = self
            .post_form("auth/login", &[("username", email), ("password", password)])
            .await?;

        let profile = self.me_with_token(&token.access_token).await?;
        let session = Session {
            token: token.access_token,
            profile,
        };
        self.session().set(session.clone());
        info!(role = %session.role(), "session established");
        Ok(session)
    }

    /// Drop the stored session. Purely client-side; tokens are not revoked.
    pub fn logout(&self) {
        self.session().clear();
    }

    pub async fn register(&self, user: &NewUser) -> Result<UserProfile, ApiError> {
        self.post_json("users/register", user).await
    }

    /// Fetch the current profile and refresh the stored session copy.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let profile: UserProfile = self.get_json("users/me").await?;
        if let Some(mut session) = self.session().get() {
            session.profile = profile.clone();
            self.session().set(session);
        }
        Ok(profile)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let profile: UserProfile = self.put_json("users/me", update).await?;
        if let Some(mut session) = self.session().get() {
            session.profile = profile.clone();
            self.session().set(session);
        }
        Ok(profile)
    }

    pub async fn change_password(
        &self,
        change: &PasswordChange,
    ) -> Result<Acknowledgement, ApiError> {
        self.post_json("users/me/change-password", change).await
    }

    async fn me_with_token(&self, token: &AccessToken) -> Result<UserProfile, ApiError> {
        let response = self
            .request_with_token(Method::GET, "users/me", token)?
            .send()
            .await?;
        decode(response).await
    }
}
