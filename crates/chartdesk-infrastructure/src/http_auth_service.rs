//! HTTP AuthService implementation.
//!
//! Talks to GoTrue-style auth endpoints under `{base}/auth/v1`. Every
//! request carries the public anon key; authenticated requests add the
//! user's bearer token.

use crate::config_service::ServiceConfig;
use crate::dto::session::{TokenResponseDto, UserDto};
use async_trait::async_trait;
use chartdesk_core::auth::{AuthSession, AuthService, UserIdentity};
use chartdesk_core::error::{ChartdeskError, Result};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Serialize)]
struct PasswordGrantBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Auth service client over the remote HTTP auth endpoints.
#[derive(Clone)]
pub struct HttpAuthService {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl HttpAuthService {
    /// Creates a client for the configured service.
    ///
    /// All requests are bounded by a per-request timeout so a hung call can
    /// never wedge the frontend.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ChartdeskError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            anon_key: config.anon_key.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn transport(context: &str, err: reqwest::Error) -> ChartdeskError {
        tracing::warn!("Auth request failed ({context}): {err}");
        ChartdeskError::data_access(format!("Auth request failed ({context}): {err}"))
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let response = self
            .client
            .post(self.endpoint("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&PasswordGrantBody { email, password })
            .send()
            .await
            .map_err(|e| Self::transport("login", e))?;

        match response.status() {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ChartdeskError::InvalidCredentials)
            }
            status if status.is_success() => {
                let body: TokenResponseDto = response
                    .json()
                    .await
                    .map_err(|e| Self::transport("login response", e))?;
                Ok(body.into())
            }
            status => Err(ChartdeskError::data_access(format!(
                "Login failed with status {status}"
            ))),
        }
    }

    async fn current_user(&self, access_token: &str) -> Result<Option<UserIdentity>> {
        let response = self
            .client
            .get(self.endpoint("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| Self::transport("current_user", e))?;

        match response.status() {
            // Expired or invalid token means "no identity", not a failure
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status if status.is_success() => {
                let user: UserDto = response
                    .json()
                    .await
                    .map_err(|e| Self::transport("current_user response", e))?;
                Ok(Some(user.into()))
            }
            status => Err(ChartdeskError::data_access(format!(
                "Session query failed with status {status}"
            ))),
        }
    }

    async fn logout(&self, access_token: &str) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| Self::transport("logout", e))?;

        match response.status() {
            // An already-dead token is as logged out as it gets
            StatusCode::UNAUTHORIZED => Ok(()),
            status if status.is_success() => Ok(()),
            status => Err(ChartdeskError::data_access(format!(
                "Logout failed with status {status}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> HttpAuthService {
        HttpAuthService::new(&ServiceConfig {
            service_url: "https://example.test/".to_string(),
            anon_key: "anon".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_has_no_double_slash() {
        let auth = service();
        assert_eq!(
            auth.endpoint("token?grant_type=password"),
            "https://example.test/auth/v1/token?grant_type=password"
        );
        assert_eq!(auth.endpoint("user"), "https://example.test/auth/v1/user");
    }
}
