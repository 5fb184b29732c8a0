//! Authentication.

use crate::models::{AuthDetail, RefreshedToken};
use crate::Result;
use serde::Serialize;
use taiga_core::types::Endpoint;
use taiga_core::{Error, TaigaClient};
use tracing::debug;

#[derive(Serialize)]
struct LoginRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

/// Username/password login and token refresh.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: TaigaClient,
}

impl AuthService {
    /// Create a new auth service.
    #[must_use]
    pub const fn new(client: TaigaClient) -> Self {
        Self { client }
    }

    /// Log in with a Taiga username (or email) and password.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthDetail> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::ValidationError(
                "username and password are required to log in".into(),
            ));
        }

        let url = self.client.make_url(&[Endpoint::Auth.as_str()], &[])?;
        let request = LoginRequest {
            kind: "normal",
            username,
            password,
        };
        let detail: AuthDetail = self.client.post_json(url, &request).await?;
        debug!(user_id = detail.id, username = %detail.username, "Logged in to Taiga");
        Ok(detail)
    }

    /// Exchange a refresh token for a new bearer token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshedToken> {
        let url = self
            .client
            .make_url(&[Endpoint::Auth.as_str(), "refresh"], &[])?;
        self.client
            .post_json(
                url,
                &RefreshRequest {
                    refresh: refresh_token,
                },
            )
            .await
    }

    /// A client sharing this service's connection pool that authenticates as the
    /// logged-in user.
    #[must_use]
    pub fn authenticated_client(&self, detail: &AuthDetail) -> TaigaClient {
        self.client.with_token(detail.auth_token.clone())
    }
}
