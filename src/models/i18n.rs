use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Uz,
    Ru,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Uz => "uz",
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uz" => Ok(Language::Uz),
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            other => Err(format!("Unsupported language: {other}")),
        }
    }
}

/// Picks the variant of a localized field for `lang`.
///
/// Falls back to the first non-empty variant in uz, ru, en order.
pub fn pick<'a>(lang: Language, uz: &'a str, ru: &'a str, en: &'a str) -> &'a str {
    let active = match lang {
        Language::Uz => uz,
        Language::Ru => ru,
        Language::En => en,
    };
    if !active.trim().is_empty() {
        return active;
    }
    [uz, ru, en]
        .into_iter()
        .find(|v| !v.trim().is_empty())
        .unwrap_or("")
}

/// User-facing toast texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectDirection,
    SelectCourse,
    FillRequiredFields,
    InvalidPhone,
    InvalidEmail,
    InvalidCode,
    InvalidRating,
    CodeSent,
    LoginSuccess,
    RegisterSuccess,
    EnrollSuccess,
    FeedbackSent,
    Saved,
    Deleted,
    GenericError,
    SessionExpired,
}

impl Message {
    pub fn text(&self, lang: Language) -> &'static str {
        use Language::*;
        use Message::*;
        match (self, lang) {
            (SelectDirection, Uz) => "Iltimos, yo'nalishni tanlang",
            (SelectDirection, Ru) => "Пожалуйста, выберите направление",
            (SelectDirection, En) => "Please select a direction",
            (SelectCourse, Uz) => "Iltimos, kursni tanlang",
            (SelectCourse, Ru) => "Пожалуйста, выберите курс",
            (SelectCourse, En) => "Please select a course",
            (FillRequiredFields, Uz) => "Iltimos, barcha majburiy maydonlarni to'ldiring",
            (FillRequiredFields, Ru) => "Пожалуйста, заполните все обязательные поля",
            (FillRequiredFields, En) => "Please fill all required fields",
            (InvalidPhone, Uz) => "Telefon raqami noto'g'ri",
            (InvalidPhone, Ru) => "Неверный номер телефона",
            (InvalidPhone, En) => "Invalid phone number",
            (InvalidEmail, Uz) => "Elektron pochta noto'g'ri",
            (InvalidEmail, Ru) => "Неверный адрес электронной почты",
            (InvalidEmail, En) => "Invalid email address",
            (InvalidCode, Uz) => "Tasdiqlash kodi noto'g'ri",
            (InvalidCode, Ru) => "Неверный код подтверждения",
            (InvalidCode, En) => "Invalid verification code",
            (InvalidRating, Uz) => "Baho 1 dan 5 gacha bo'lishi kerak",
            (InvalidRating, Ru) => "Оценка должна быть от 1 до 5",
            (InvalidRating, En) => "Rating must be between 1 and 5",
            (CodeSent, Uz) => "Tasdiqlash kodi yuborildi",
            (CodeSent, Ru) => "Код подтверждения отправлен",
            (CodeSent, En) => "Verification code sent",
            (LoginSuccess, Uz) => "Muvaffaqiyatli kirdingiz",
            (LoginSuccess, Ru) => "Вход выполнен успешно",
            (LoginSuccess, En) => "Logged in successfully",
            (RegisterSuccess, Uz) => "Ro'yxatdan muvaffaqiyatli o'tdingiz",
            (RegisterSuccess, Ru) => "Регистрация прошла успешно",
            (RegisterSuccess, En) => "Registration successful",
            (EnrollSuccess, Uz) => "Kursga muvaffaqiyatli yozildingiz",
            (EnrollSuccess, Ru) => "Вы успешно записались на курс",
            (EnrollSuccess, En) => "You have enrolled in the course",
            (FeedbackSent, Uz) => "Fikringiz uchun rahmat",
            (FeedbackSent, Ru) => "Спасибо за ваш отзыв",
            (FeedbackSent, En) => "Thank you for your feedback",
            (Saved, Uz) => "Saqlandi",
            (Saved, Ru) => "Сохранено",
            (Saved, En) => "Saved successfully",
            (Deleted, Uz) => "O'chirildi",
            (Deleted, Ru) => "Удалено",
            (Deleted, En) => "Deleted successfully",
            (GenericError, Uz) => "Xatolik yuz berdi",
            (GenericError, Ru) => "Произошла ошибка",
            (GenericError, En) => "Something went wrong",
            (SessionExpired, Uz) => "Sessiya tugadi, qaytadan kiring",
            (SessionExpired, Ru) => "Сессия истекла, войдите снова",
            (SessionExpired, En) => "Session expired, please log in again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_active_language() {
        assert_eq!(pick(Language::Ru, "Salom", "Привет", "Hello"), "Привет");
        assert_eq!(pick(Language::En, "Salom", "Привет", "Hello"), "Hello");
    }

    #[test]
    fn test_pick_falls_back() {
        assert_eq!(pick(Language::En, "Salom", "Привет", ""), "Salom");
        assert_eq!(pick(Language::Uz, " ", "Привет", "Hello"), "Привет");
        assert_eq!(pick(Language::Ru, "", "", ""), "");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("RU".parse::<Language>().unwrap(), Language::Ru);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_messages_differ_by_language() {
        let en = Message::FillRequiredFields.text(Language::En);
        assert_eq!(en, "Please fill all required fields");
        assert_ne!(en, Message::FillRequiredFields.text(Language::Uz));
    }
}
