use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::lenient_date;
use super::i18n::{Language, pick};

/// A study direction grouping several courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub id: i64,
    #[serde(default)]
    pub title_uz: String,
    #[serde(default)]
    pub title_ru: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub description_uz: String,
    #[serde(default)]
    pub description_ru: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<Course>,
}

impl Direction {
    pub fn title(&self, lang: Language) -> &str {
        pick(lang, &self.title_uz, &self.title_ru, &self.title_en)
    }

    pub fn description(&self, lang: Language) -> &str {
        pick(lang, &self.description_uz, &self.description_ru, &self.description_en)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub direction_id: Option<i64>,
    #[serde(default)]
    pub title_uz: String,
    #[serde(default)]
    pub title_ru: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub description_uz: String,
    #[serde(default)]
    pub description_ru: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    pub hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Box<Direction>>,
}

impl Course {
    pub fn title(&self, lang: Language) -> &str {
        pick(lang, &self.title_uz, &self.title_ru, &self.title_en)
    }

    pub fn description(&self, lang: Language) -> &str {
        pick(lang, &self.description_uz, &self.description_ru, &self.description_en)
    }

    /// Direction id, taken from the nested direction when the flat key is absent.
    pub fn direction_ref(&self) -> Option<i64> {
        self.direction_id
            .or_else(|| self.direction.as_ref().map(|d| d.id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionInput {
    pub title_uz: String,
    pub title_ru: String,
    pub title_en: String,
    pub description_uz: String,
    pub description_ru: String,
    pub description_en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseInput {
    pub direction_id: i64,
    pub title_uz: String,
    pub title_ru: String,
    pub title_en: String,
    pub description_uz: String,
    pub description_ru: String,
    pub description_en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_direction_with_nested_courses() {
        let direction: Direction = serde_json::from_value(json!({
            "id": 3,
            "title_uz": "Dasturlash",
            "title_ru": "Программирование",
            "title_en": "",
            "end_date": "2025-12-31T00:00:00.000Z",
            "courses": [{"id": 7, "direction_id": 3, "title_en": "Rust", "hours": 72}]
        }))
        .unwrap();

        assert_eq!(direction.title(Language::En), "Dasturlash");
        assert_eq!(direction.end_date, NaiveDate::from_ymd_opt(2025, 12, 31));
        assert_eq!(direction.courses[0].hours, Some(72));
        assert_eq!(direction.courses[0].title(Language::En), "Rust");
    }

    #[test]
    fn test_course_direction_ref_from_nested() {
        let course: Course = serde_json::from_value(json!({
            "id": 1,
            "direction": {"id": 9}
        }))
        .unwrap();
        assert_eq!(course.direction_ref(), Some(9));
    }
}
