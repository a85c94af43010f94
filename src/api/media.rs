use reqwest::Method;
use reqwest::multipart::Form;

use super::{ApiClient, RequestOptions, Upload};
use crate::error::ApiError;
use crate::models::{Envelope, GalleryInput, GalleryItem, ListEnvelope, Partner, PartnerInput};

fn gallery_form(input: &GalleryInput, file: Option<Upload>) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("title_uz", input.title_uz.clone())
        .text("title_ru", input.title_ru.clone())
        .text("title_en", input.title_en.clone());
    if let Some(file) = file {
        form = form.part("media", file.into_part()?);
    }
    Ok(form)
}

fn partner_form(input: &PartnerInput, logo: Option<Upload>) -> Result<Form, ApiError> {
    let mut form = Form::new().text("name", input.name.clone());
    if let Some(website) = &input.website {
        form = form.text("website", website.clone());
    }
    if let Some(logo) = logo {
        form = form.part("logo", logo.into_part()?);
    }
    Ok(form)
}

impl ApiClient {
    pub async fn gallery(&self) -> Result<ListEnvelope<GalleryItem>, ApiError> {
        self.get("/gallery").await
    }

    pub async fn create_gallery_item(
        &self,
        input: &GalleryInput,
        file: Upload,
    ) -> Result<Envelope<GalleryItem>, ApiError> {
        let form = gallery_form(input, Some(file))?;
        self.request("/gallery", RequestOptions::multipart(Method::POST, form))
            .await
    }

    /// Replaces the file only when one is given.
    pub async fn update_gallery_item(
        &self,
        id: i64,
        input: &GalleryInput,
        file: Option<Upload>,
    ) -> Result<Envelope<GalleryItem>, ApiError> {
        let form = gallery_form(input, file)?;
        self.request(
            &format!("/gallery/{id}"),
            RequestOptions::multipart(Method::PATCH, form),
        )
        .await
    }

    pub async fn delete_gallery_item(&self, id: i64) -> Result<Envelope, ApiError> {
        self.delete(&format!("/gallery/{id}")).await
    }

    pub async fn partners(&self) -> Result<ListEnvelope<Partner>, ApiError> {
        self.get("/partners").await
    }

    pub async fn create_partner(
        &self,
        input: &PartnerInput,
        logo: Upload,
    ) -> Result<Envelope<Partner>, ApiError> {
        let form = partner_form(input, Some(logo))?;
        self.request("/partners", RequestOptions::multipart(Method::POST, form))
            .await
    }

    pub async fn update_partner(
        &self,
        id: i64,
        input: &PartnerInput,
        logo: Option<Upload>,
    ) -> Result<Envelope<Partner>, ApiError> {
        let form = partner_form(input, logo)?;
        self.request(
            &format!("/partners/{id}"),
            RequestOptions::multipart(Method::PATCH, form),
        )
        .await
    }

    pub async fn delete_partner(&self, id: i64) -> Result<Envelope, ApiError> {
        self.delete(&format!("/partners/{id}")).await
    }
}
