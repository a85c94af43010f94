use reqwest::Method;
use serde_json::json;

use super::{ApiClient, with_query};
use crate::error::ApiError;
use crate::models::{Envelope, ListEnvelope, User, UserStatus};

impl ApiClient {
    pub async fn users(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
        search: Option<&str>,
    ) -> Result<ListEnvelope<User>, ApiError> {
        let endpoint = with_query(
            "/admin/users",
            &[
                ("page", page.map(|p| p.to_string())),
                ("limit", limit.map(|l| l.to_string())),
                (
                    "search",
                    search
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                ),
            ],
        );
        self.get(&endpoint).await
    }

    pub async fn update_user_status(
        &self,
        id: i64,
        status: UserStatus,
    ) -> Result<Envelope<User>, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/admin/users/{id}"),
            &json!({ "status": status }),
        )
        .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<Envelope, ApiError> {
        self.delete(&format!("/admin/users/{id}")).await
    }
}
