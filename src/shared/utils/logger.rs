use log::{debug, error, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup; `RUST_LOG` overrides the defaults
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Warn) // Default level
            .filter_module("onion_lib", log::LevelFilter::Info) // More verbose for our app
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_secs()
            .format_module_path(false)
            .init();

        debug!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log backend API calls
    pub fn api_call(endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!("API: {} {} in {}ms", endpoint, status, duration),
            None => debug!("API: Starting {}", endpoint),
        }
    }

    /// Log search submissions
    pub fn search_operation(query: &str, category: Option<&str>, outcome: Option<&str>) {
        match (category, outcome) {
            (Some(c), Some(o)) => info!("Search: '{}' as {} finished with {}", query, c, o),
            (Some(c), None) => debug!("Search: Dispatching '{}' as {}", query, c),
            (None, Some(o)) => info!("Search: '{}' rejected: {}", query, o),
            (None, None) => debug!("Search: Received '{}'", query),
        }
    }

    /// Log login, registration and logout attempts
    pub fn auth_operation(operation: &str, email: Option<&str>, success: bool) {
        let who = email.unwrap_or("current session");
        if success {
            info!("Auth: {} succeeded for {}", operation, who);
        } else {
            warn!("Auth: {} failed for {}", operation, who);
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: &str) {
        debug!(
            "Performance: {} took {}ms ({})",
            operation, duration_ms, additional_info
        );
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.elapsed_ms();
        LogContext::performance_metric(&self.operation, duration, info);
        duration
    }
}
