use std::cmp::Ordering;

use crate::models::{
    Course, Direction, Feedback, GalleryItem, Language, NewsItem, Opportunity, Partner, User,
};

use super::LoadState;

/// Text a search box matches against and the key lists are ordered by.
pub trait Searchable {
    fn search_text(&self, lang: Language) -> String;

    fn sort_key(&self, lang: Language) -> String {
        self.search_text(lang)
    }
}

/// Case-insensitive substring match.
pub fn matches_query(haystack: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Case-insensitive ordering with a case-sensitive tiebreak.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub query: String,
    pub state: LoadState<Vec<T>>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            query: String::new(),
            state: LoadState::Loading,
        }
    }
}

impl<T: Searchable> ListPage<T> {
    pub fn loaded(items: Vec<T>) -> Self {
        Self {
            query: String::new(),
            state: LoadState::Loaded(items),
        }
    }

    pub fn items(&self) -> &[T] {
        self.state.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    /// Items matching the current query, sorted by their localized key.
    pub fn visible(&self, lang: Language) -> Vec<&T> {
        let mut items: Vec<&T> = self
            .items()
            .iter()
            .filter(|item| matches_query(&item.search_text(lang), &self.query))
            .collect();
        items.sort_by(|a, b| compare_text(&a.sort_key(lang), &b.sort_key(lang)));
        items
    }
}

impl Searchable for Direction {
    fn search_text(&self, lang: Language) -> String {
        format!("{} {}", self.title(lang), self.description(lang))
    }

    fn sort_key(&self, lang: Language) -> String {
        self.title(lang).to_string()
    }
}

impl Searchable for Course {
    fn search_text(&self, lang: Language) -> String {
        let direction = self
            .direction
            .as_ref()
            .map(|d| d.title(lang))
            .unwrap_or_default();
        format!("{} {} {}", self.title(lang), self.description(lang), direction)
    }

    fn sort_key(&self, lang: Language) -> String {
        self.title(lang).to_string()
    }
}

impl Searchable for NewsItem {
    fn search_text(&self, lang: Language) -> String {
        self.title(lang).to_string()
    }

    /// Newest first.
    fn sort_key(&self, _lang: Language) -> String {
        invert_date(self.publish_date)
    }
}

impl Searchable for Opportunity {
    fn search_text(&self, lang: Language) -> String {
        format!("{} {}", self.title(lang), self.description(lang))
    }

    fn sort_key(&self, _lang: Language) -> String {
        invert_date(self.publish_date)
    }
}

impl Searchable for GalleryItem {
    fn search_text(&self, lang: Language) -> String {
        self.title(lang).to_string()
    }
}

impl Searchable for Partner {
    fn search_text(&self, _lang: Language) -> String {
        self.name.clone()
    }
}

impl Searchable for Feedback {
    fn search_text(&self, _lang: Language) -> String {
        format!("{} {} {}", self.name, self.workplace, self.message)
    }

    fn sort_key(&self, _lang: Language) -> String {
        let stamp = self.created_at.map(|t| t.timestamp()).unwrap_or(0);
        format!("{:020}", i64::MAX.saturating_sub(stamp))
    }
}

impl Searchable for User {
    fn search_text(&self, _lang: Language) -> String {
        format!(
            "{} {} {}",
            self.full_name(),
            self.phone,
            self.email.as_deref().unwrap_or_default()
        )
    }

    fn sort_key(&self, _lang: Language) -> String {
        self.full_name()
    }
}

/// Maps a date to a key that sorts newest first; undated items go last.
fn invert_date(date: Option<chrono::NaiveDate>) -> String {
    use chrono::Datelike;
    match date {
        Some(d) => {
            let stamp = d.year() * 10_000 + d.month() as i32 * 100 + d.day() as i32;
            format!("0{:08}", 99_999_999 - stamp)
        }
        None => "1".to_string(),
    }
}
