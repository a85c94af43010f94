use super::{ADMIN_LANG, load_into, merge, require};
use crate::api::Upload;
use crate::models::{GalleryInput, GalleryItem, Message, Partner, PartnerInput};
use crate::pages::search::ListPage;
use crate::pages::{Outcome, PageContext, Toast, settle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryAdmin {
    pub list: ListPage<GalleryItem>,
    pub form: GalleryInput,
    pub file: Option<Upload>,
    pub editing: Option<i64>,
}

impl GalleryAdmin {
    pub async fn load(&mut self, ctx: &PageContext) -> Outcome {
        load_into(ctx, &mut self.list, "gallery", ctx.client.gallery()).await
    }

    pub fn edit(&mut self, item: &GalleryItem) {
        self.editing = Some(item.id);
        self.file = None;
        self.form = GalleryInput {
            title_uz: item.title_uz.clone(),
            title_ru: item.title_ru.clone(),
            title_en: item.title_en.clone(),
        };
    }

    /// New items need a file; edits keep the existing one when none is chosen.
    /// The chosen file stays attached until the save succeeds.
    pub async fn submit(&mut self, ctx: &PageContext) -> Outcome {
        if let Err(outcome) = require([self.form.title_uz.as_str()]) {
            return outcome;
        }

        let result = match (self.editing, self.file.clone()) {
            (Some(id), file) => ctx.client.update_gallery_item(id, &self.form, file).await,
            (None, Some(file)) => ctx.client.create_gallery_item(&self.form, file).await,
            (None, None) => {
                return Outcome::toast(Toast::error(
                    Message::FillRequiredFields.text(ADMIN_LANG),
                ));
            }
        };
        let succeeded = matches!(&result, Ok(envelope) if envelope.success);
        let outcome = settle(ADMIN_LANG, "save gallery item", result, Message::Saved);
        if !succeeded {
            return outcome;
        }

        self.form = GalleryInput::default();
        self.file = None;
        self.editing = None;
        merge(outcome, self.load(ctx).await)
    }

    pub async fn delete(&mut self, ctx: &PageContext, id: i64) -> Outcome {
        let result = ctx.client.delete_gallery_item(id).await;
        let outcome = settle(ADMIN_LANG, "delete gallery item", result, Message::Deleted);
        merge(outcome, self.load(ctx).await)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnersAdmin {
    pub list: ListPage<Partner>,
    pub form: PartnerInput,
    pub logo: Option<Upload>,
    pub editing: Option<i64>,
}

impl PartnersAdmin {
    pub async fn load(&mut self, ctx: &PageContext) -> Outcome {
        load_into(ctx, &mut self.list, "partners", ctx.client.partners()).await
    }

    pub fn edit(&mut self, partner: &Partner) {
        self.editing = Some(partner.id);
        self.logo = None;
        self.form = PartnerInput {
            name: partner.name.clone(),
            website: partner.website.clone(),
        };
    }

    pub async fn submit(&mut self, ctx: &PageContext) -> Outcome {
        if let Err(outcome) = require([self.form.name.as_str()]) {
            return outcome;
        }
        if let Some(website) = &self.form.website
            && !website.trim().is_empty()
            && url::Url::parse(website.trim()).is_err()
        {
            return Outcome::toast(Toast::error("Website must be a full URL"));
        }

        let result = match (self.editing, self.logo.clone()) {
            (Some(id), logo) => ctx.client.update_partner(id, &self.form, logo).await,
            (None, Some(logo)) => ctx.client.create_partner(&self.form, logo).await,
            (None, None) => {
                return Outcome::toast(Toast::error(
                    Message::FillRequiredFields.text(ADMIN_LANG),
                ));
            }
        };
        let succeeded = matches!(&result, Ok(envelope) if envelope.success);
        let outcome = settle(ADMIN_LANG, "save partner", result, Message::Saved);
        if !succeeded {
            return outcome;
        }

        self.form = PartnerInput::default();
        self.logo = None;
        self.editing = None;
        merge(outcome, self.load(ctx).await)
    }

    pub async fn delete(&mut self, ctx: &PageContext, id: i64) -> Outcome {
        let result = ctx.client.delete_partner(id).await;
        let outcome = settle(ADMIN_LANG, "delete partner", result, Message::Deleted);
        merge(outcome, self.load(ctx).await)
    }
}
