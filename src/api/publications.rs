use reqwest::Method;
use reqwest::multipart::Form;

use super::{ApiClient, RequestOptions, Upload, with_query};
use crate::error::ApiError;
use crate::models::{Envelope, ListEnvelope, NewsItem, Opportunity, PublicationInput};

const NEWS: &str = "/news";
const ELON: &str = "/elon";

/// Files are attached under the repeated `medias` field.
fn publication_form(
    input: &PublicationInput,
    with_description: bool,
    files: Vec<Upload>,
) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in input.localized_fields() {
        form = form.text(name, value.to_string());
    }
    if with_description {
        for (name, value) in input.description_fields() {
            form = form.text(name, value.to_string());
        }
    }
    if let Some(date) = input.publish_date {
        form = form.text("publish_date", date.to_string());
    }
    if let Some(date) = input.end_date {
        form = form.text("end_date", date.to_string());
    }
    for file in files {
        form = form.part("medias", file.into_part()?);
    }
    Ok(form)
}

fn paged(path: &str, page: Option<u32>, limit: Option<u32>) -> String {
    with_query(
        path,
        &[
            ("page", page.map(|p| p.to_string())),
            ("limit", limit.map(|l| l.to_string())),
        ],
    )
}

impl ApiClient {
    pub async fn news(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<ListEnvelope<NewsItem>, ApiError> {
        self.get(&paged(NEWS, page, limit)).await
    }

    pub async fn news_item(&self, id: i64) -> Result<Envelope<NewsItem>, ApiError> {
        self.get(&format!("{NEWS}/{id}")).await
    }

    pub async fn create_news(
        &self,
        input: &PublicationInput,
        files: Vec<Upload>,
    ) -> Result<Envelope<NewsItem>, ApiError> {
        let form = publication_form(input, false, files)?;
        self.request(NEWS, RequestOptions::multipart(Method::POST, form))
            .await
    }

    pub async fn update_news(
        &self,
        id: i64,
        input: &PublicationInput,
        files: Vec<Upload>,
    ) -> Result<Envelope<NewsItem>, ApiError> {
        let form = publication_form(input, false, files)?;
        self.request(
            &format!("{NEWS}/{id}"),
            RequestOptions::multipart(Method::PATCH, form),
        )
        .await
    }

    pub async fn delete_news(&self, id: i64) -> Result<Envelope, ApiError> {
        self.delete(&format!("{NEWS}/{id}")).await
    }

    pub async fn opportunities(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<ListEnvelope<Opportunity>, ApiError> {
        self.get(&paged(ELON, page, limit)).await
    }

    pub async fn opportunity(&self, id: i64) -> Result<Envelope<Opportunity>, ApiError> {
        self.get(&format!("{ELON}/{id}")).await
    }

    pub async fn create_opportunity(
        &self,
        input: &PublicationInput,
        files: Vec<Upload>,
    ) -> Result<Envelope<Opportunity>, ApiError> {
        let form = publication_form(input, true, files)?;
        self.request(ELON, RequestOptions::multipart(Method::POST, form))
            .await
    }

    pub async fn update_opportunity(
        &self,
        id: i64,
        input: &PublicationInput,
        files: Vec<Upload>,
    ) -> Result<Envelope<Opportunity>, ApiError> {
        let form = publication_form(input, true, files)?;
        self.request(
            &format!("{ELON}/{id}"),
            RequestOptions::multipart(Method::PATCH, form),
        )
        .await
    }

    pub async fn delete_opportunity(&self, id: i64) -> Result<Envelope, ApiError> {
        self.delete(&format!("{ELON}/{id}")).await
    }
}
