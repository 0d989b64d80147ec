//! Authenticated request gateway.
//!
//! Every backend call goes through [`Gateway::send`]. The access credential
//! is a cookie kept in the client's cookie jar; the refresh credential lives
//! in a [`CredentialStore`]. When the backend answers `401 Unauthorized`, the
//! gateway performs one coordinated refresh and replays the request once.

pub mod refresh;
pub mod request;

pub use refresh::{RefreshCoordinator, RefreshOutcome, RefreshTicket};
pub use request::{ApiRequest, ApiResponse, RetryableRequest};

use std::sync::Arc;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::auth::{CredentialStore, RefreshCredential};
use crate::config::{self, ClientConfig};
use crate::error::{response_message, ApiError, Result};

/// Status the backend uses to signal an expired access credential.
pub const EXPIRY_STATUS: StatusCode = StatusCode::UNAUTHORIZED;

pub const REISSUE_PATH: &str = "/api/auth/reissue";

#[derive(Debug, Serialize)]
struct ReissueRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct ReissueResponse {
    refresh_token: String,
}

/// HTTP client that attaches credentials and recovers from expiry.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use shadewalk::config::ClientConfig;
/// use shadewalk::gateway::{ApiRequest, Gateway};
///
/// # async fn example() -> shadewalk::error::Result<()> {
/// let config = ClientConfig::new("https://api.example.com")?;
/// let gateway = Gateway::new(&config, Arc::new(config.credential_store()))?;
/// let response = gateway.send(ApiRequest::get("/api/favorites")).await?;
/// println!("{}", response.text());
/// # Ok(())
/// # }
/// ```
pub struct Gateway {
    client: reqwest::Client,
    base_url: Url,
    store: Arc<dyn CredentialStore>,
    refresh: RefreshCoordinator,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url.as_str())
            .field("store", &"..")
            .field("refresh", &self.refresh)
            .finish()
    }
}

impl Gateway {
    /// Build a gateway with a cookie-enabled client from `config`.
    pub fn new(config: &ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()?;
        Ok(Self::with_client(client, config.base_url().clone(), store))
    }

    /// Build a gateway around an existing client.
    ///
    /// The client should have a cookie store if the backend delivers the
    /// access credential as a cookie.
    pub fn with_client(
        client: reqwest::Client,
        base_url: Url,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            client,
            base_url,
            store,
            refresh: RefreshCoordinator::new(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    pub fn refresh_in_progress(&self) -> bool {
        self.refresh.in_progress()
    }

    /// Requests currently waiting on the in-flight refresh.
    pub fn pending_requests(&self) -> usize {
        self.refresh.pending()
    }

    /// Send a request, recovering once from credential expiry.
    ///
    /// Returns the response verbatim on 2xx. Fails with
    /// [`ApiError::Unauthenticated`] when the credential cannot be refreshed
    /// or is rejected again after a refresh, and with an upstream error for
    /// every other failure.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut attempt = RetryableRequest::new(request);
        loop {
            let generation = self.refresh.generation();
            let response = self.dispatch(&attempt.request).await?;
            if response.status() != EXPIRY_STATUS {
                return response.error_for_status();
            }

            if !attempt.request.recovers_on_expiry() {
                return Err(ApiError::Unauthenticated(response_message(
                    response.status(),
                    &response.text(),
                )));
            }
            if !attempt.mark_retried() {
                warn!(
                    path = attempt.request.path(),
                    "credential rejected again after refresh"
                );
                return Err(ApiError::Unauthenticated(
                    "credential rejected after refresh".to_string(),
                ));
            }

            debug!(path = attempt.request.path(), "access credential expired");
            self.recover(generation).await?;
            debug!(path = attempt.request.path(), "replaying request");
        }
    }

    /// Refresh the session now, sharing any refresh already in flight.
    pub async fn refresh(&self) -> Result<()> {
        let generation = self.refresh.generation();
        match self.refresh.begin(generation) {
            RefreshTicket::Leader(lease) => self.lead_refresh(lease).await,
            RefreshTicket::Follower(waiter) => follow_refresh(waiter).await,
            // Another refresh finished between the two reads.
            RefreshTicket::AlreadyRefreshed => Ok(()),
        }
    }

    async fn recover(&self, observed: u64) -> Result<()> {
        match self.refresh.begin(observed) {
            RefreshTicket::Leader(lease) => self.lead_refresh(lease).await,
            RefreshTicket::Follower(waiter) => {
                debug!(
                    pending = self.refresh.pending(),
                    "refresh in flight, queueing request"
                );
                follow_refresh(waiter).await
            }
            RefreshTicket::AlreadyRefreshed => Ok(()),
        }
    }

    async fn lead_refresh(&self, lease: refresh::RefreshLease<'_>) -> Result<()> {
        info!("refreshing session credentials");
        match self.reissue().await {
            Ok(()) => {
                let released = lease.settle(RefreshOutcome::Refreshed);
                info!(released, "session refreshed");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "session refresh failed, clearing credentials");
                if let Err(clear_err) = self.store.clear() {
                    warn!(error = %clear_err, "failed to clear credential store");
                }
                lease.settle(RefreshOutcome::Failed);
                Err(match err {
                    ApiError::Unauthenticated(reason) => ApiError::Unauthenticated(reason),
                    other => ApiError::Unauthenticated(format!("session refresh failed: {other}")),
                })
            }
        }
    }

    /// One refresh network call. The store is read fresh every time.
    async fn reissue(&self) -> Result<()> {
        let current = self
            .store
            .load()?
            .ok_or_else(|| ApiError::Unauthenticated("no refresh credential stored".to_string()))?;

        let response = self
            .client
            .post(config::endpoint(&self.base_url, REISSUE_PATH))
            .json(&ReissueRequest {
                refresh_token: current.as_str(),
            })
            .send()
            .await?;
        let response = ApiResponse::read(response).await?.error_for_status()?;
        let payload: ReissueResponse = response.json()?;

        self.store
            .save(&RefreshCredential::new(payload.refresh_token))?;
        Ok(())
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = config::endpoint(&self.base_url, request.path());
        debug!(method = %request.method(), %url, "sending request");

        let mut builder = self
            .client
            .request(request.method().clone(), url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        ApiResponse::read(response).await
    }
}

async fn follow_refresh(waiter: refresh::RefreshWaiter) -> Result<()> {
    match waiter.outcome().await {
        RefreshOutcome::Refreshed => Ok(()),
        RefreshOutcome::Failed => Err(ApiError::Unauthenticated(
            "session refresh failed".to_string(),
        )),
    }
}
