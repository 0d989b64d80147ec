use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::gateway::{ApiRequest, Gateway};
use crate::types::BasicResponse;

use super::credential::RefreshCredential;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Tokens returned by login. The access credential arrives as a cookie.
#[derive(Clone, Deserialize)]
pub struct AuthTokens {
    pub refresh_token: String,
}

impl std::fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthTokens")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct EmailCodeRequest<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
}

/// Account flows against the backend's `/api/auth` endpoints.
///
/// Credential-establishing calls bypass expiry recovery: a 401 on login
/// means the password was wrong, not that a session expired.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use shadewalk::auth::{AuthService, LoginRequest, MemoryCredentialStore};
/// use shadewalk::config::ClientConfig;
/// use shadewalk::gateway::Gateway;
///
/// # async fn example() -> shadewalk::error::Result<()> {
/// let config = ClientConfig::new("https://api.example.com")?;
/// let gateway = Arc::new(Gateway::new(&config, Arc::new(MemoryCredentialStore::new()))?);
/// let auth = AuthService::new(gateway);
/// auth.login(&LoginRequest {
///     email: "walker@example.com".into(),
///     password: "hunter2".into(),
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AuthService {
    gateway: Arc<Gateway>,
}

impl AuthService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<BasicResponse> {
        validate_email(&request.email)?;
        if request.nickname.trim().is_empty() {
            return Err(ApiError::InvalidArgument("nickname must not be empty".to_string()));
        }
        let request = ApiRequest::post("/api/auth/signup")
            .json(request)?
            .without_recovery();
        self.gateway.send(request).await?.json_or_default()
    }

    /// Log in and persist the returned refresh credential.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthTokens> {
        validate_email(&request.email)?;
        let request = ApiRequest::post("/api/auth/login")
            .json(request)?
            .without_recovery();
        let tokens: AuthTokens = self.gateway.send(request).await?.json()?;
        self.gateway
            .store()
            .save(&RefreshCredential::new(tokens.refresh_token.clone()))?;
        info!("logged in");
        Ok(tokens)
    }

    pub async fn send_email_code(&self, email: &str) -> Result<BasicResponse> {
        validate_email(email)?;
        let request = ApiRequest::post("/api/auth/send")
            .json(&EmailCodeRequest { email, code: None })?
            .without_recovery();
        self.gateway.send(request).await?.json_or_default()
    }

    pub async fn verify_email_code(&self, email: &str, code: &str) -> Result<BasicResponse> {
        validate_email(email)?;
        let request = ApiRequest::post("/api/auth/verify")
            .json(&EmailCodeRequest {
                email,
                code: Some(code),
            })?
            .without_recovery();
        self.gateway.send(request).await?.json_or_default()
    }

    /// Exchange the stored refresh credential for a new session.
    ///
    /// Shares the gateway's refresh episode if one is already running.
    pub async fn reissue(&self) -> Result<()> {
        self.gateway.refresh().await
    }

    /// Forget the stored refresh credential.
    pub fn logout(&self) -> Result<()> {
        self.gateway.store().clear()?;
        info!("logged out");
        Ok(())
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.gateway.store().load()?.is_some())
    }
}

fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ApiError::InvalidArgument(format!(
            "not an email address: {trimmed:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(validate_email("walker@example.com").is_ok());
        assert!(validate_email("walker").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("walker@localhost").is_err());
    }

    #[test]
    fn tokens_debug_is_redacted() {
        let tokens = AuthTokens {
            refresh_token: "secret".to_string(),
        };
        assert!(!format!("{tokens:?}").contains("secret"));
    }
}
