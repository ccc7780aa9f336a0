use crate::modules::query::{find_emails, find_phones};
use crate::modules::search::domain::{RecordListResult, SearchResult};
use crate::shared::domain::value_objects::{Locale, Message};
use serde::Serialize;

/// At most this many distinct phones are collected
pub const MAX_PHONES: usize = 5;

// Field keys that hold a person's name, compared after dropping emoji and punctuation
const NAME_KEYS: [&str; 13] = [
    "фамилия",
    "имя",
    "отчество",
    "фио",
    "никнейм",
    "name",
    "surname",
    "firstname",
    "lastname",
    "middlename",
    "fullname",
    "nickname",
    "nick",
];

/// Names, phones and emails found across all source records of a result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactSummary {
    /// `key: value` for every name-like field
    pub names: Vec<String>,
    pub phones: Vec<PhoneContact>,
    /// `key: address` for every email mentioned in a field
    pub emails: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneContact {
    /// Display form, e.g. `+7 900 123-45-67`
    pub number: String,
    pub operator: &'static str,
    pub region: &'static str,
}

impl ContactSummary {
    pub fn from_result(result: &SearchResult, locale: Locale) -> Self {
        match result {
            SearchResult::Records(list) => Self::from_records(list, locale),
            _ => Self::default(),
        }
    }

    fn from_records(list: &RecordListResult, locale: Locale) -> Self {
        let mut summary = Self::default();

        for field in list.records.iter().flat_map(|record| &record.fields) {
            let Some(value) = field.value.as_deref() else {
                continue;
            };

            if is_name_key(&field.key) {
                summary.names.push(format!("{}: {}", field.key, value));
            }

            for phone in find_phones(value) {
                let number = display_number(&phone);
                if summary.phones.len() < MAX_PHONES
                    && !summary.phones.iter().any(|p| p.number == number)
                {
                    summary.phones.push(PhoneContact {
                        operator: operator_name(&phone, locale),
                        region: locale.text(Message::Russia),
                        number,
                    });
                }
            }

            for email in find_emails(value) {
                let entry = format!("{}: {}", field.key, email);
                if !summary.emails.contains(&entry) {
                    summary.emails.push(entry);
                }
            }
        }

        summary
    }
}

fn is_name_key(key: &str) -> bool {
    let normalized: String = key
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    NAME_KEYS.contains(&normalized.as_str())
}

// `+79001234567` -> `+7 900 123-45-67`
fn display_number(compact: &str) -> String {
    let national = &compact[2..];
    format!(
        "+7 {} {}-{}-{}",
        &national[0..3],
        &national[3..6],
        &national[6..8],
        &national[8..10]
    )
}

// Mobile operator by the first two digits of the operator code
fn operator_name(compact: &str, locale: Locale) -> &'static str {
    let (en, ru) = match &compact[2..4] {
        "91" => ("MTS", "МТС"),
        "90" | "96" => ("Beeline", "Билайн"),
        "92" | "93" | "95" => ("MegaFon", "МегаФон"),
        "98" | "99" => ("Utel", "ЮТел"),
        _ => return locale.text(Message::UnknownOperator),
    };
    match locale {
        Locale::En => en,
        Locale::Ru => ru,
    }
}
