use serde::{Deserialize, Serialize};

use super::catalog::{Course, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Pending,
    Enrolled,
    Completed,
    Rejected,
    Blocked,
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Pending => "PENDING",
            UserStatus::Enrolled => "ENROLLED",
            UserStatus::Completed => "COMPLETED",
            UserStatus::Rejected => "REJECTED",
            UserStatus::Blocked => "BLOCKED",
            UserStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub middle_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub phone: String,
    pub status: Option<UserStatus>,
    pub course_id: Option<i64>,
    pub direction_id: Option<i64>,
    pub course: Option<Course>,
    pub direction: Option<Direction>,
    #[serde(default)]
    pub role: UserRole,
}

impl User {
    pub fn full_name(&self) -> String {
        [
            Some(self.last_name.as_str()),
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_enrolled(&self) -> bool {
        self.course_id.is_some() || self.course.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub direction_id: i64,
    pub course_id: i64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_user_decodes_with_nested_course() {
        let user: User = serde_json::from_value(json!({
            "id": 12,
            "first_name": "Aziz",
            "last_name": "Karimov",
            "phone": "+998901234567",
            "status": "ENROLLED",
            "course_id": 7,
            "course": {"id": 7, "direction_id": 3},
            "role": "USER"
        }))
        .unwrap();
        assert_eq!(user.status, Some(UserStatus::Enrolled));
        assert_eq!(user.full_name(), "Karimov Aziz");
        assert!(user.is_enrolled());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_unknown_status_tolerated() {
        let user: User =
            serde_json::from_value(json!({"id": 1, "status": "ARCHIVED"})).unwrap();
        assert_eq!(user.status, Some(UserStatus::Unknown));
    }
}
