use crate::modules::auth::application::ports::{AuthGateway, AuthReply, SessionGateway};
use crate::modules::auth::domain::Credentials;
use crate::modules::search::application::ports::SearchBackend;
use crate::modules::search::domain::SearchEndpoint;
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct CheckAuthResponse {
    #[serde(default)]
    logged_in: bool,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    email: Option<String>,
}

/// HTTP client for the onion backend
///
/// Keeps the backend's session cookie in memory for the lifetime of the
/// process. Every call is a single request; nothing is retried.
pub struct OnionApiClient {
    client: Client,
    base_url: String,
}

impl OnionApiClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> AppResult<T> {
        let timer = TimedOperation::new(&format!("GET {}", path_and_query));
        LogContext::api_call(path_and_query, "started", None);

        let response = self.client.get(self.url(path_and_query)).send().await?;
        let body = Self::read_json(path_and_query, response).await;

        LogContext::api_call(path_and_query, outcome(&body), Some(timer.elapsed_ms()));
        body
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let timer = TimedOperation::new(&format!("POST {}", path));
        LogContext::api_call(path, "started", None);

        let response = self.client.post(self.url(path)).json(body).send().await?;
        let reply = Self::read_json(path, response).await;

        LogContext::api_call(path, outcome(&reply), Some(timer.elapsed_ms()));
        reply
    }

    async fn read_json<T: DeserializeOwned>(path: &str, response: Response) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            warn!("{} answered HTTP {}", path, status);
            return Err(AppError::NetworkError(format!("HTTP {}", status)));
        }

        response.json::<T>().await.map_err(|e| {
            debug!("Failed to decode {} response: {}", path, e);
            AppError::from(e)
        })
    }
}

fn outcome<T>(result: &AppResult<T>) -> &'static str {
    if result.is_ok() {
        "ok"
    } else {
        "failed"
    }
}

#[async_trait]
impl SearchBackend for OnionApiClient {
    async fn search(&self, endpoint: SearchEndpoint, query: &str) -> AppResult<Value> {
        self.get_json(&endpoint.path_and_query(query)).await
    }
}

#[async_trait]
impl SessionGateway for OnionApiClient {
    async fn is_authenticated(&self) -> AppResult<bool> {
        let reply: CheckAuthResponse = self.get_json("/check_auth").await?;
        Ok(reply.logged_in)
    }
}

#[async_trait]
impl AuthGateway for OnionApiClient {
    async fn login(&self, credentials: &Credentials) -> AppResult<AuthReply> {
        self.post_json("/login", credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> AppResult<AuthReply> {
        self.post_json("/register", credentials).await
    }

    async fn logout(&self) -> AppResult<()> {
        let response = self.client.get(self.url("/logout")).send().await?;
        if !response.status().is_success() {
            return Err(AppError::NetworkError(format!("HTTP {}", response.status())));
        }
        Ok(())
    }

    async fn user_email(&self) -> AppResult<Option<String>> {
        let info: UserInfoResponse = self.get_json("/get_user_info").await?;
        Ok(info.email.filter(|email| !email.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_joined_to_base() {
        let config = AppConfig::default()
            .with_base_url("https://onion.example.org/")
            .unwrap();
        let client = OnionApiClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "https://onion.example.org");
        assert_eq!(
            client.url(&SearchEndpoint::Ip.path_and_query("8.8.8.8")),
            "https://onion.example.org/search_ip?ip=8.8.8.8"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let config = AppConfig::default()
            .with_base_url("http://127.0.0.1:9")
            .unwrap();
        let client = OnionApiClient::new(&config).unwrap();

        let result = client.is_authenticated().await;
        assert!(matches!(result, Err(AppError::NetworkError(_))));
    }

    #[test]
    fn test_check_auth_defaults_to_logged_out() {
        let reply: CheckAuthResponse = serde_json::from_str("{}").unwrap();
        assert!(!reply.logged_in);
    }
}
