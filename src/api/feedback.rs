use reqwest::Method;
use serde_json::json;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Envelope, Feedback, FeedbackInput, ListEnvelope};

impl ApiClient {
    pub async fn submit_feedback(&self, input: &FeedbackInput) -> Result<Envelope, ApiError> {
        self.send_json(Method::POST, "/feedback", input).await
    }

    /// Every submission, approved or not. Admin only.
    pub async fn feedback(&self) -> Result<ListEnvelope<Feedback>, ApiError> {
        self.get("/feedback").await
    }

    pub async fn approved_feedback(&self) -> Result<ListEnvelope<Feedback>, ApiError> {
        self.get("/feedback/approved").await
    }

    pub async fn approve_feedback(&self, id: i64, approved: bool) -> Result<Envelope, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/feedback/{id}/approve"),
            &json!({ "is_approved": approved }),
        )
        .await
    }

    pub async fn delete_feedback(&self, id: i64) -> Result<Envelope, ApiError> {
        self.delete(&format!("/feedback/{id}")).await
    }
}
