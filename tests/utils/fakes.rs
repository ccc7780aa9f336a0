/// Hand-written fakes of the backend ports
///
/// They share one `FakeSession` so logging in through `FakeAuth` unlocks
/// `FakeBackend` searches, like the real backend's session cookie.
use async_trait::async_trait;
use onion_lib::modules::auth::{AuthGateway, AuthReply, Credentials, SessionGateway};
use onion_lib::modules::search::{SearchBackend, SearchEndpoint};
use onion_lib::shared::{AppError, AppResult};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
pub struct FakeSession {
    logged_in: AtomicBool,
    checks: AtomicUsize,
}

impl FakeSession {
    pub fn logged_in() -> Arc<Self> {
        let session = Self::default();
        session.logged_in.store(true, Ordering::SeqCst);
        Arc::new(session)
    }

    pub fn logged_out() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionGateway for FakeSession {
    async fn is_authenticated(&self) -> AppResult<bool> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        Ok(self.logged_in.load(Ordering::SeqCst))
    }
}

/// Accepts exactly one account
pub struct FakeAuth {
    session: Arc<FakeSession>,
    email: String,
    password: String,
}

impl FakeAuth {
    pub fn new(session: Arc<FakeSession>, email: &str, password: &str) -> Self {
        Self {
            session,
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

#[async_trait]
impl AuthGateway for FakeAuth {
    async fn login(&self, credentials: &Credentials) -> AppResult<AuthReply> {
        let accepted = credentials.email == self.email && credentials.password() == self.password;
        self.session.logged_in.store(accepted, Ordering::SeqCst);
        Ok(AuthReply {
            success: accepted,
            message: if accepted {
                "Welcome back".into()
            } else {
                "Invalid email or password".into()
            },
        })
    }

    async fn register(&self, _credentials: &Credentials) -> AppResult<AuthReply> {
        Ok(AuthReply {
            success: false,
            message: "User already exists".into(),
        })
    }

    async fn logout(&self) -> AppResult<()> {
        self.session.logged_in.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn user_email(&self) -> AppResult<Option<String>> {
        if self.session.logged_in.load(Ordering::SeqCst) {
            Ok(Some(self.email.clone()))
        } else {
            Err(AppError::Unauthorized("not logged in".into()))
        }
    }
}

/// Canned replies keyed by query, with optional per-query delay
#[derive(Default)]
pub struct FakeBackend {
    replies: HashMap<String, Value>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<(SearchEndpoint, String)>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, query: &str, body: Value) -> Self {
        self.replies.insert(query.to_string(), body);
        self
    }

    pub fn delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<(SearchEndpoint, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchBackend for FakeBackend {
    async fn search(&self, endpoint: SearchEndpoint, query: &str) -> AppResult<Value> {
        self.calls.lock().unwrap().push((endpoint, query.to_string()));

        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }

        self.replies
            .get(query)
            .cloned()
            .ok_or_else(|| AppError::NetworkError("connection refused".into()))
    }
}
