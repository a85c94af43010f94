use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Message;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+998\d{9}$").expect("phone regex compiles"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles")
});
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4,6}$").expect("code regex compiles"));

/// Strips spaces, dashes and parentheses; a bare 9-digit number gets `+998`.
pub fn normalize_phone(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    if compact.len() == 9 && compact.chars().all(|c| c.is_ascii_digit()) {
        format!("+998{compact}")
    } else if compact.starts_with("998") {
        format!("+{compact}")
    } else {
        compact
    }
}

pub fn validate_phone(raw: &str) -> Result<String, Message> {
    let phone = normalize_phone(raw);
    if PHONE_RE.is_match(&phone) {
        Ok(phone)
    } else {
        Err(Message::InvalidPhone)
    }
}

/// Empty is accepted; e-mail is optional everywhere it is asked for.
pub fn validate_email(raw: &str) -> Result<Option<String>, Message> {
    let email = raw.trim();
    if email.is_empty() {
        Ok(None)
    } else if EMAIL_RE.is_match(email) {
        Ok(Some(email.to_string()))
    } else {
        Err(Message::InvalidEmail)
    }
}

pub fn validate_code(raw: &str) -> Result<String, Message> {
    let code = raw.trim();
    if CODE_RE.is_match(code) {
        Ok(code.to_string())
    } else {
        Err(Message::InvalidCode)
    }
}

pub fn validate_rating(value: u8) -> Result<u8, Message> {
    if (1..=5).contains(&value) {
        Ok(value)
    } else {
        Err(Message::InvalidRating)
    }
}

pub fn require_all<'a>(values: impl IntoIterator<Item = &'a str>) -> Result<(), Message> {
    if values.into_iter().all(|v| !v.trim().is_empty()) {
        Ok(())
    } else {
        Err(Message::FillRequiredFields)
    }
}
