pub mod application;
pub mod commands;
pub mod domain;

// Re-exports for easy external access
pub use application::{AuthGateway, AuthReply, AuthService, SessionGateway};
pub use domain::Credentials;
