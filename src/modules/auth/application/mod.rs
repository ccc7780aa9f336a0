pub mod ports;
pub mod service;

pub use ports::{AuthGateway, AuthReply, SessionGateway};
pub use service::AuthService;
