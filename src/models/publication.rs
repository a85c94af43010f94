use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::lenient_date;
use super::i18n::{Language, pick};
use super::media::Media;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    #[serde(default)]
    pub title_uz: String,
    #[serde(default)]
    pub title_ru: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub content_uz: String,
    #[serde(default)]
    pub content_ru: String,
    #[serde(default)]
    pub content_en: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub publish_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub medias: Vec<Media>,
}

impl NewsItem {
    pub fn title(&self, lang: Language) -> &str {
        pick(lang, &self.title_uz, &self.title_ru, &self.title_en)
    }

    pub fn content(&self, lang: Language) -> &str {
        pick(lang, &self.content_uz, &self.content_ru, &self.content_en)
    }

    pub fn cover(&self) -> Option<&Media> {
        self.medias.iter().find(|m| m.is_image())
    }
}

/// An "elon" in backend terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: i64,
    #[serde(default)]
    pub title_uz: String,
    #[serde(default)]
    pub title_ru: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub content_uz: String,
    #[serde(default)]
    pub content_ru: String,
    #[serde(default)]
    pub content_en: String,
    #[serde(default)]
    pub description_uz: String,
    #[serde(default)]
    pub description_ru: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub publish_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub medias: Vec<Media>,
}

impl Opportunity {
    pub fn title(&self, lang: Language) -> &str {
        pick(lang, &self.title_uz, &self.title_ru, &self.title_en)
    }

    pub fn content(&self, lang: Language) -> &str {
        pick(lang, &self.content_uz, &self.content_ru, &self.content_en)
    }

    pub fn description(&self, lang: Language) -> &str {
        pick(lang, &self.description_uz, &self.description_ru, &self.description_en)
    }

    /// Open while the end date has not passed; undated opportunities stay open.
    pub fn is_open_on(&self, day: NaiveDate) -> bool {
        self.end_date.is_none_or(|end| day <= end)
    }
}

/// Form payload shared by news and opportunities.
///
/// Description fields are only sent for opportunities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationInput {
    pub title_uz: String,
    pub title_ru: String,
    pub title_en: String,
    pub content_uz: String,
    pub content_ru: String,
    pub content_en: String,
    pub description_uz: String,
    pub description_ru: String,
    pub description_en: String,
    pub publish_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl PublicationInput {
    pub fn localized_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("title_uz", self.title_uz.as_str()),
            ("title_ru", self.title_ru.as_str()),
            ("title_en", self.title_en.as_str()),
            ("content_uz", self.content_uz.as_str()),
            ("content_ru", self.content_ru.as_str()),
            ("content_en", self.content_en.as_str()),
        ]
    }

    pub fn description_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("description_uz", self.description_uz.as_str()),
            ("description_ru", self.description_ru.as_str()),
            ("description_en", self.description_en.as_str()),
        ]
    }

    pub fn has_required_fields(&self) -> bool {
        self.localized_fields()
            .iter()
            .all(|(_, value)| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_news_cover_is_first_image() {
        let news: NewsItem = serde_json::from_value(json!({
            "id": 1,
            "title_uz": "Yangilik",
            "medias": [
                {"id": 1, "url": "/uploads/a.mp4", "type": "video"},
                {"id": 2, "url": "/uploads/b.jpg", "type": "image"}
            ]
        }))
        .unwrap();
        assert_eq!(news.cover().map(|m| m.id), Some(2));
    }

    #[test]
    fn test_opportunity_open_window() {
        let opp: Opportunity =
            serde_json::from_value(json!({"id": 4, "end_date": "2025-06-30"})).unwrap();
        assert!(opp.is_open_on(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()));
        assert!(!opp.is_open_on(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
    }

    #[test]
    fn test_required_fields() {
        let mut input = PublicationInput::default();
        assert!(!input.has_required_fields());
        input.title_uz = "a".into();
        input.title_ru = "b".into();
        input.title_en = "c".into();
        input.content_uz = "d".into();
        input.content_ru = "e".into();
        assert!(!input.has_required_fields());
        input.content_en = "f".into();
        assert!(input.has_required_fields());
    }
}
