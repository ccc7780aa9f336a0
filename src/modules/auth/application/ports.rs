use crate::modules::auth::domain::Credentials;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde::Deserialize;

/// Read-only view of the backend session
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionGateway: Send + Sync {
    /// `GET /check_auth`
    async fn is_authenticated(&self) -> AppResult<bool>;
}

/// Reply of `/login` and `/register`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthReply {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Operations that change the backend session
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> AppResult<AuthReply>;
    async fn register(&self, credentials: &Credentials) -> AppResult<AuthReply>;
    async fn logout(&self) -> AppResult<()>;
    /// `GET /get_user_info`; `None` when the backend does not report an email
    async fn user_email(&self) -> AppResult<Option<String>>;
}
