use serde::{Deserialize, Serialize};

use super::i18n::{Language, pick};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    File,
    #[serde(other)]
    Unknown,
}

impl MediaType {
    /// Guess from a file name extension, as the upload form does.
    pub fn from_file_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" => MediaType::Image,
            "mp4" | "webm" | "mov" | "avi" => MediaType::Video,
            _ => MediaType::File,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: i64,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaType,
}

impl Media {
    pub fn is_image(&self) -> bool {
        self.kind == MediaType::Image
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: i64,
    #[serde(default)]
    pub title_uz: String,
    #[serde(default)]
    pub title_ru: String,
    #[serde(default)]
    pub title_en: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaType,
}

impl GalleryItem {
    pub fn title(&self, lang: Language) -> &str {
        pick(lang, &self.title_uz, &self.title_ru, &self.title_en)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryInput {
    pub title_uz: String,
    pub title_ru: String,
    pub title_en: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnerInput {
    pub name: String,
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_unknown_media_type_tolerated() {
        let media: Media =
            serde_json::from_value(json!({"id": 1, "url": "/x", "type": "audio"})).unwrap();
        assert_eq!(media.kind, MediaType::Unknown);
    }

    #[test]
    fn test_media_type_from_file_name() {
        assert_eq!(MediaType::from_file_name("cover.JPG"), MediaType::Image);
        assert_eq!(MediaType::from_file_name("intro.mp4"), MediaType::Video);
        assert_eq!(MediaType::from_file_name("syllabus.pdf"), MediaType::File);
        assert_eq!(MediaType::from_file_name("README"), MediaType::File);
    }
}
