pub mod logger;
pub mod rate_limiter;

pub use logger::{init_logger, LogContext, TimedOperation};
pub use rate_limiter::SearchThrottle;
