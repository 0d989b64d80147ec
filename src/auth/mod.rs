//! Refresh-credential storage and account flows.

pub mod credential;
pub mod error;
pub mod service;
pub mod store;

pub use credential::RefreshCredential;
pub use error::StoreError;
pub use service::{AuthService, AuthTokens, LoginRequest, SignupRequest};
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
