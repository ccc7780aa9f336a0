use super::ports::{AuthGateway, SessionGateway};
use crate::modules::auth::domain::Credentials;
use crate::shared::domain::value_objects::{Locale, Message};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use log::debug;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
enum AuthAction {
    Login,
    Register,
}

impl AuthAction {
    fn name(self) -> &'static str {
        match self {
            AuthAction::Login => "login",
            AuthAction::Register => "register",
        }
    }
}

/// Login gate: validates credentials locally, then talks to the backend
pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    session: Arc<dyn SessionGateway>,
    locale: Locale,
}

impl AuthService {
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        session: Arc<dyn SessionGateway>,
        locale: Locale,
    ) -> Self {
        Self {
            gateway,
            session,
            locale,
        }
    }

    /// Returns the backend's success message
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let credentials = Credentials::for_login(email, password, self.locale)?;
        self.authenticate(AuthAction::Login, credentials).await
    }

    pub async fn register(&self, email: &str, password: &str) -> AppResult<String> {
        let credentials = Credentials::for_registration(email, password, self.locale)?;
        self.authenticate(AuthAction::Register, credentials).await
    }

    pub async fn logout(&self) -> AppResult<()> {
        let result = self.gateway.logout().await;
        LogContext::auth_operation("logout", None, result.is_ok());
        result
    }

    pub async fn is_logged_in(&self) -> AppResult<bool> {
        self.session.is_authenticated().await
    }

    /// Email of the logged-in user; failures are not worth reporting
    pub async fn current_user(&self) -> Option<String> {
        match self.gateway.user_email().await {
            Ok(email) => email,
            Err(err) => {
                debug!("Could not fetch user info: {}", err);
                None
            }
        }
    }

    async fn authenticate(
        &self,
        action: AuthAction,
        credentials: Credentials,
    ) -> AppResult<String> {
        let reply = match action {
            AuthAction::Login => self.gateway.login(&credentials).await,
            AuthAction::Register => self.gateway.register(&credentials).await,
        };

        match reply {
            Ok(reply) if reply.success => {
                LogContext::auth_operation(action.name(), Some(&credentials.email), true);
                Ok(reply.message)
            }
            Ok(reply) => {
                LogContext::auth_operation(action.name(), Some(&credentials.email), false);
                let message = if reply.message.trim().is_empty() {
                    self.locale.text(Message::AuthRequired).to_string()
                } else {
                    reply.message
                };
                Err(AppError::Unauthorized(message))
            }
            Err(err) => {
                LogContext::error_with_context(&err, &format!("{} request failed", action.name()));
                Err(AppError::NetworkError(
                    self.locale.text(Message::NetworkFailure).to_string(),
                ))
            }
        }
    }
}
