use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for every user-visible string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Keys for the fixed strings the client shows to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    NotSpecified,
    NothingFound,
    AuthRequired,
    EmptyQuery,
    UnrecognizedQuery,
    UnknownSource,
    InvalidEmail,
    PasswordTooShort,
    NetworkFailure,
    RateLimited,
    Country,
    Region,
    City,
    Isp,
    Coordinates,
    Timezone,
    ReportTitle,
    Query,
    Time,
    RecordsFound,
    Guest,
    LoginSucceeded,
    Registered,
    LoggedOut,
    SignedInAs,
    NotSignedIn,
    Names,
    Phones,
    Emails,
    NoNames,
    NoPhones,
    NoEmails,
    Russia,
    UnknownOperator,
    TotalRecords,
    Information,
}

impl Locale {
    pub fn text(self, message: Message) -> &'static str {
        match self {
            Locale::En => english(message),
            Locale::Ru => russian(message),
        }
    }
}

fn english(message: Message) -> &'static str {
    match message {
        Message::NotSpecified => "not specified",
        Message::NothingFound => "Nothing found",
        Message::AuthRequired => "Authorization required",
        Message::EmptyQuery => "Enter data to search",
        Message::UnrecognizedQuery => {
            "Unrecognized query: enter an IP address, a phone number or an email address"
        }
        Message::UnknownSource => "Unknown source",
        Message::InvalidEmail => "Please enter a valid email address",
        Message::PasswordTooShort => "Password must be at least 6 characters long",
        Message::NetworkFailure => "Network error",
        Message::RateLimited => "Too many requests, try again later",
        Message::Country => "Country",
        Message::Region => "Region",
        Message::City => "City",
        Message::Isp => "ISP",
        Message::Coordinates => "Coordinates",
        Message::Timezone => "Timezone",
        Message::ReportTitle => "Search results for",
        Message::Query => "Query",
        Message::Time => "Time",
        Message::RecordsFound => "Sources found",
        Message::Guest => "Guest",
        Message::LoginSucceeded => "Login successful",
        Message::Registered => "Registration successful",
        Message::LoggedOut => "Logged out",
        Message::SignedInAs => "Signed in as",
        Message::NotSignedIn => "Not signed in",
        Message::Names => "Names",
        Message::Phones => "Phones",
        Message::Emails => "Email addresses",
        Message::NoNames => "No names found",
        Message::NoPhones => "No phones found",
        Message::NoEmails => "No emails found",
        Message::Russia => "Russia",
        Message::UnknownOperator => "Unknown operator",
        Message::TotalRecords => "Total records",
        Message::Information => "Information",
    }
}

fn russian(message: Message) -> &'static str {
    match message {
        Message::NotSpecified => "Не указано",
        Message::NothingFound => "Ничего не найдено",
        Message::AuthRequired => "Требуется авторизация",
        Message::EmptyQuery => "Введите данные для поиска",
        Message::UnrecognizedQuery => {
            "Неизвестный формат запроса: введите IP-адрес, номер телефона или email"
        }
        Message::UnknownSource => "Неизвестный источник",
        Message::InvalidEmail => "Пожалуйста, введите корректный email адрес",
        Message::PasswordTooShort => "Пароль должен содержать минимум 6 символов",
        Message::NetworkFailure => "Ошибка сети",
        Message::RateLimited => "Слишком много запросов. Попробуйте позже.",
        Message::Country => "Страна",
        Message::Region => "Регион",
        Message::City => "Город",
        Message::Isp => "Провайдер",
        Message::Coordinates => "Координаты",
        Message::Timezone => "Часовой пояс",
        Message::ReportTitle => "Результаты поиска",
        Message::Query => "Запрос",
        Message::Time => "Время",
        Message::RecordsFound => "Найдено баз",
        Message::Guest => "Гость",
        Message::LoginSucceeded => "Вход выполнен",
        Message::Registered => "Регистрация прошла успешно",
        Message::LoggedOut => "Вы вышли из системы",
        Message::SignedInAs => "Вы вошли как",
        Message::NotSignedIn => "Вход не выполнен",
        Message::Names => "Имена",
        Message::Phones => "Телефоны",
        Message::Emails => "Email адреса",
        Message::NoNames => "Имена не найдены",
        Message::NoPhones => "Телефоны не найдены",
        Message::NoEmails => "Email не найдены",
        Message::Russia => "Россия",
        Message::UnknownOperator => "Неизвестный оператор",
        Message::TotalRecords => "Всего записей",
        Message::Information => "Информация",
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            other => Err(AppError::ConfigError(format!(
                "Unsupported locale '{}'. Must be one of: en, ru",
                other
            ))),
        }
    }
}
