#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use shadewalk::auth::{CredentialStore, MemoryCredentialStore};
use shadewalk::config::ClientConfig;
use shadewalk::gateway::Gateway;
use shadewalk::ShadewalkClient;
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

/// Latency of the mocked reissue endpoint. Long enough that concurrent
/// 401s arrive while the refresh is still in flight.
pub const REFRESH_DELAY: Duration = Duration::from_millis(250);

pub const REISSUE_PATH: &str = "/api/auth/reissue";

pub fn gateway(server: &MockServer, store: Arc<dyn CredentialStore>) -> Arc<Gateway> {
    let config = ClientConfig::new(&server.uri()).expect("mock server uri");
    Arc::new(Gateway::new(&config, store).expect("gateway"))
}

pub fn client(server: &MockServer, store: Arc<dyn CredentialStore>) -> ShadewalkClient {
    ShadewalkClient::from_gateway(gateway(server, store))
}

pub fn store_with(token: &str) -> Arc<MemoryCredentialStore> {
    Arc::new(MemoryCredentialStore::with_token(token))
}

pub fn stored_token(store: &MemoryCredentialStore) -> Option<String> {
    store
        .load()
        .expect("memory store")
        .map(|credential| credential.token)
}

pub fn expired_body() -> Value {
    json!({ "status": 401, "message": "access token expired" })
}

/// Wraps `data` in the backend's `{status, message, data}` envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "status": 200, "message": "ok", "data": data })
}

/// Shared switch flipped by the reissue responder and read by protected
/// endpoints.
#[derive(Clone, Default)]
pub struct Session {
    refreshed: Arc<AtomicBool>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_refreshed(&self) -> bool {
        self.refreshed.load(Ordering::SeqCst)
    }

    /// 401 until the session is refreshed, then 200 with `body`.
    pub fn protected(&self, body: Value) -> ProtectedEndpoint {
        ProtectedEndpoint {
            session: self.clone(),
            body,
        }
    }

    /// Reissue endpoint that hands out `new_token` after [`REFRESH_DELAY`].
    pub fn reissue(&self, new_token: &str) -> ReissueEndpoint {
        ReissueEndpoint {
            session: self.clone(),
            new_token: new_token.to_string(),
        }
    }
}

pub struct ProtectedEndpoint {
    session: Session,
    body: Value,
}

impl Respond for ProtectedEndpoint {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        if self.session.is_refreshed() {
            ResponseTemplate::new(200).set_body_json(self.body.clone())
        } else {
            ResponseTemplate::new(401).set_body_json(expired_body())
        }
    }
}

pub struct ReissueEndpoint {
    session: Session,
    new_token: String,
}

impl Respond for ReissueEndpoint {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        self.session.refreshed.store(true, Ordering::SeqCst);
        ResponseTemplate::new(200)
            .insert_header("set-cookie", "access_token=fresh; Path=/; HttpOnly")
            .set_body_json(json!({ "refresh_token": self.new_token }))
            .set_delay(REFRESH_DELAY)
    }
}

pub async fn requests_to(server: &MockServer, path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == path)
        .collect()
}
