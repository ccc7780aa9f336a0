use crate::modules::query::{is_valid_email, sanitize};
use crate::shared::domain::value_objects::{Locale, Message};
use crate::shared::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Login/registration body, validated before it leaves the client
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    password: String,
}

impl Credentials {
    pub fn for_login(email: &str, password: &str, locale: Locale) -> AppResult<Self> {
        let email = sanitize(email).trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(AppError::ValidationError(
                locale.text(Message::InvalidEmail).to_string(),
            ));
        }

        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    /// Registration additionally enforces the minimum password length
    pub fn for_registration(email: &str, password: &str, locale: Locale) -> AppResult<Self> {
        let credentials = Self::for_login(email, password, locale)?;
        if credentials.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::ValidationError(
                locale.text(Message::PasswordTooShort).to_string(),
            ));
        }
        Ok(credentials)
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
