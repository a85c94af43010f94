use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dates::lenient_datetime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub workplace: String,
    #[serde(default)]
    pub phone: String,
    pub email: Option<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_approved: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackInput {
    pub name: String,
    pub workplace: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub rating: u8,
    pub message: String,
}
