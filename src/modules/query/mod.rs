pub mod domain;

// Re-exports for easy external access
pub use domain::services::{
    classifier::classify,
    sanitizer::sanitize,
    validator::{
        find_emails, find_phones, is_valid_email, is_valid_ip, is_valid_phone, normalize_phone,
    },
};
pub use domain::value_objects::{Query, QueryCategory};
