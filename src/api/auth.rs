use reqwest::Method;
use serde_json::json;
use tracing::info;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Course, EnrollRequest, Envelope, ProfileUpdate, RegisterRequest, User};

impl ApiClient {
    pub async fn register(&self, request: &RegisterRequest) -> Result<Envelope, ApiError> {
        self.send_json(Method::POST, "/user/register", request).await
    }

    /// Asks the backend to text a verification code to `phone`.
    pub async fn login(&self, phone: &str) -> Result<Envelope, ApiError> {
        self.send_json(Method::POST, "/user/login", &json!({ "phone": phone }))
            .await
    }

    /// Exchanges a verification code for a token. Does not store the token.
    pub async fn verify_code(&self, phone: &str, code: &str) -> Result<Envelope, ApiError> {
        self.send_json(
            Method::POST,
            "/user/verify",
            &json!({ "phone": phone, "code": code }),
        )
        .await
    }

    pub async fn admin_login(&self, username: &str, password: &str) -> Result<Envelope, ApiError> {
        self.send_json(
            Method::POST,
            "/admin/login",
            &json!({ "username": username, "password": password }),
        )
        .await
    }

    /// Local only; the backend keeps no session to end.
    pub fn logout(&self) {
        self.clear_token();
        info!("logged out");
    }

    pub async fn profile(&self) -> Result<Envelope<User>, ApiError> {
        self.get("/user/profile").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Envelope<User>, ApiError> {
        self.send_json(Method::PATCH, "/user/profile", update).await
    }

    pub async fn enroll(&self, request: &EnrollRequest) -> Result<Envelope<Course>, ApiError> {
        self.send_json(Method::POST, "/user/enroll", request).await
    }
}
