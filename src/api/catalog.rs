use reqwest::Method;

use super::{ApiClient, with_query};
use crate::error::ApiError;
use crate::models::{Course, CourseInput, Direction, DirectionInput, Envelope, ListEnvelope};

impl ApiClient {
    pub async fn directions(&self) -> Result<ListEnvelope<Direction>, ApiError> {
        self.get("/direction").await
    }

    pub async fn direction(&self, id: i64) -> Result<Envelope<Direction>, ApiError> {
        self.get(&format!("/direction/{id}")).await
    }

    pub async fn create_direction(
        &self,
        input: &DirectionInput,
    ) -> Result<Envelope<Direction>, ApiError> {
        self.send_json(Method::POST, "/direction", input).await
    }

    pub async fn update_direction(
        &self,
        id: i64,
        input: &DirectionInput,
    ) -> Result<Envelope<Direction>, ApiError> {
        self.send_json(Method::PATCH, &format!("/direction/{id}"), input)
            .await
    }

    pub async fn delete_direction(&self, id: i64) -> Result<Envelope, ApiError> {
        self.delete(&format!("/direction/{id}")).await
    }

    pub async fn courses(&self, direction_id: Option<i64>) -> Result<ListEnvelope<Course>, ApiError> {
        let endpoint = with_query(
            "/courses",
            &[("direction_id", direction_id.map(|id| id.to_string()))],
        );
        self.get(&endpoint).await
    }

    pub async fn course(&self, id: i64) -> Result<Envelope<Course>, ApiError> {
        self.get(&format!("/courses/{id}")).await
    }

    pub async fn create_course(&self, input: &CourseInput) -> Result<Envelope<Course>, ApiError> {
        self.send_json(Method::POST, "/courses", input).await
    }

    pub async fn update_course(
        &self,
        id: i64,
        input: &CourseInput,
    ) -> Result<Envelope<Course>, ApiError> {
        self.send_json(Method::PATCH, &format!("/courses/{id}"), input)
            .await
    }

    pub async fn delete_course(&self, id: i64) -> Result<Envelope, ApiError> {
        self.delete(&format!("/courses/{id}")).await
    }
}
