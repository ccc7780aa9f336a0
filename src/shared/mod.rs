// Shared Kernel
// Errors, configuration, localisation and utilities used by every module

pub mod config; // Environment-driven configuration
pub mod domain; // Shared value objects (locale, user-facing messages)
pub mod errors; // Shared error types
pub mod infrastructure; // HTTP client for the onion backend
pub mod utils; // Logging and throttling

// Re-exports for convenience
pub use config::AppConfig;
pub use domain::value_objects::{Locale, Message};
pub use errors::{AppError, AppResult};
pub use infrastructure::api_client::OnionApiClient;
