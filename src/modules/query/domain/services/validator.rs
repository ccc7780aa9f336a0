//! Format predicates for the three searchable query kinds.
//!
//! All patterns use explicit `[0-9]` classes: `\d` would also accept
//! non-ASCII digits.

use regex::Regex;
use std::sync::LazyLock;

/// Longest email address accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LEN: usize = 254;

static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$",
    )
    .expect("IPv4 pattern is valid")
});

// +7 / 8, operator code optionally in parentheses, groups 3-3-2-2 optionally dash separated
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[78](?:-?[0-9]{3}|\([0-9]{3}\))-?[0-9]{3}-?[0-9]{2}-?[0-9]{2}$")
        .expect("phone pattern is valid")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

// Unanchored forms for scanning free text: "+7"/"8" numbers with optional
// brackets, dashes and single spaces, or a bare ten-digit national number
static PHONE_IN_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:\+7|\b8) ?[(-]?[0-9]{3}[)-]? ?[0-9]{3}-?[0-9]{2}-?[0-9]{2}\b|\b[0-9]{10}\b",
    )
    .expect("phone scan pattern is valid")
});

static EMAIL_IN_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("email scan pattern is valid")
});

/// Dotted-quad IPv4 address, each octet 0-255, nothing before or after
pub fn is_valid_ip(s: &str) -> bool {
    IPV4_PATTERN.is_match(s)
}

/// Russian mobile number such as `+79991234567`, `8(999)123-45-67` or `8-999-123-45-67`
pub fn is_valid_phone(s: &str) -> bool {
    PHONE_PATTERN.is_match(s)
}

pub fn is_valid_email(s: &str) -> bool {
    s.len() <= MAX_EMAIL_LEN && EMAIL_PATTERN.is_match(s)
}

/// Reduce a phone-like string to `+7` and ten digits.
///
/// Accepts `+7XXXXXXXXXX`, `8XXXXXXXXXX` and bare `XXXXXXXXXX` once separators
/// are removed; anything else is `None`.
pub fn normalize_phone(candidate: &str) -> Option<String> {
    let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();
    let international = candidate.trim_start().starts_with('+');

    let national = match (international, digits.len()) {
        (true, 11) if digits.starts_with('7') => &digits[1..],
        (false, 11) if digits.starts_with('8') => &digits[1..],
        (false, 10) => digits.as_str(),
        _ => return None,
    };

    let compact = format!("+7{}", national);
    is_valid_phone(&compact).then_some(compact)
}

/// Phone numbers mentioned anywhere in `text`, normalized, in order of appearance
pub fn find_phones(text: &str) -> Vec<String> {
    PHONE_IN_TEXT
        .find_iter(text)
        .filter_map(|m| normalize_phone(m.as_str()))
        .collect()
}

/// Valid email addresses mentioned anywhere in `text`
pub fn find_emails(text: &str) -> Vec<&str> {
    EMAIL_IN_TEXT
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|email| is_valid_email(email))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ipv4_addresses() {
        for ip in ["192.168.1.1", "0.0.0.0", "255.255.255.255", "8.8.8.8", "10.0.0.255"] {
            assert!(is_valid_ip(ip), "{} should be valid", ip);
        }
    }

    #[test]
    fn test_invalid_ipv4_addresses() {
        for ip in [
            "256.1.1.1",
            "1.2.3",
            "1.2.3.4.5",
            "01.2.3.4",
            " 1.2.3.4",
            "1.2.3.4\n",
            "1.2.3.4/24",
            "a.b.c.d",
            "",
            "1..2.3",
        ] {
            assert!(!is_valid_ip(ip), "{:?} should be invalid", ip);
        }
    }

    #[test]
    fn test_valid_phone_numbers() {
        for phone in [
            "+79991234567",
            "89991234567",
            "79991234567",
            "+7(999)123-45-67",
            "8(999)1234567",
            "8-999-123-45-67",
            "+7999-123-45-67",
        ] {
            assert!(is_valid_phone(phone), "{} should be valid", phone);
        }
    }

    #[test]
    fn test_invalid_phone_numbers() {
        for phone in [
            "+7999123456",     // one digit short
            "+799912345678",   // one digit long
            "+19991234567",    // wrong country digit
            "9991234567",      // no leading 7/8
            "+7(999123-45-67", // unbalanced parenthesis
            "+7 999 123 45 67",
            "+7--9991234567",
            "tel:+79991234567",
            "+79991234567x",
        ] {
            assert!(!is_valid_phone(phone), "{:?} should be invalid", phone);
        }
    }

    #[test]
    fn test_valid_emails() {
        for email in ["user@example.com", "first.last+tag@mail.co.uk", "a_b%c@d-e.ru"] {
            assert!(is_valid_email(email), "{} should be valid", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "user@example",
            "user@@example.com",
            "@example.com",
            "user example@mail.com",
            "user@example.c",
            "user@example.com ",
            "",
        ] {
            assert!(!is_valid_email(email), "{:?} should be invalid", email);
        }
    }

    #[test]
    fn test_email_length_cap() {
        let domain = "example.com";
        let local_len = MAX_EMAIL_LEN - domain.len() - 1;

        let at_limit = format!("{}@{}", "a".repeat(local_len), domain);
        assert_eq!(at_limit.len(), MAX_EMAIL_LEN);
        assert!(is_valid_email(&at_limit));

        let over_limit = format!("{}@{}", "a".repeat(local_len + 1), domain);
        assert!(!is_valid_email(&over_limit));
    }

    #[test]
    fn test_normalize_phone_forms() {
        assert_eq!(normalize_phone("+7 (900) 123-45-67").as_deref(), Some("+79001234567"));
        assert_eq!(normalize_phone("8-900-123-45-67").as_deref(), Some("+79001234567"));
        assert_eq!(normalize_phone("9001234567").as_deref(), Some("+79001234567"));
        assert_eq!(normalize_phone("79001234567"), None);
        assert_eq!(normalize_phone("+1 555 123 4567"), None);
        assert_eq!(normalize_phone("12345"), None);
    }

    #[test]
    fn test_find_phones_in_free_text() {
        let text = "call +7 (900) 123-45-67 or 89161112233, ref 123456789012";
        assert_eq!(find_phones(text), vec!["+79001234567", "+79161112233"]);
    }

    #[test]
    fn test_find_emails_in_free_text() {
        let text = "contacts: ivan@mail.ru, backup <i.petrov@example.org>; bad@host";
        assert_eq!(find_emails(text), vec!["ivan@mail.ru", "i.petrov@example.org"]);
    }
}
