//! News and opportunities share one form shape; opportunities add descriptions.

use super::{ADMIN_LANG, load_into, merge, require};
use crate::api::Upload;
use crate::models::{Message, NewsItem, Opportunity, PublicationInput};
use crate::pages::search::ListPage;
use crate::pages::{Outcome, PageContext, settle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationForm {
    pub input: PublicationInput,
    pub files: Vec<Upload>,
    /// Id of the record being edited; `None` creates.
    pub editing: Option<i64>,
}

impl PublicationForm {
    fn check(&self, with_description: bool) -> Result<(), Outcome> {
        require(self.input.localized_fields().into_iter().map(|(_, v)| v))?;
        if with_description {
            require(self.input.description_fields().into_iter().map(|(_, v)| v))?;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl From<&NewsItem> for PublicationForm {
    fn from(news: &NewsItem) -> Self {
        Self {
            input: PublicationInput {
                title_uz: news.title_uz.clone(),
                title_ru: news.title_ru.clone(),
                title_en: news.title_en.clone(),
                content_uz: news.content_uz.clone(),
                content_ru: news.content_ru.clone(),
                content_en: news.content_en.clone(),
                publish_date: news.publish_date,
                end_date: news.end_date,
                ..Default::default()
            },
            files: Vec::new(),
            editing: Some(news.id),
        }
    }
}

impl From<&Opportunity> for PublicationForm {
    fn from(opp: &Opportunity) -> Self {
        Self {
            input: PublicationInput {
                title_uz: opp.title_uz.clone(),
                title_ru: opp.title_ru.clone(),
                title_en: opp.title_en.clone(),
                content_uz: opp.content_uz.clone(),
                content_ru: opp.content_ru.clone(),
                content_en: opp.content_en.clone(),
                description_uz: opp.description_uz.clone(),
                description_ru: opp.description_ru.clone(),
                description_en: opp.description_en.clone(),
                publish_date: opp.publish_date,
                end_date: opp.end_date,
            },
            files: Vec::new(),
            editing: Some(opp.id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsAdmin {
    pub list: ListPage<NewsItem>,
    pub form: PublicationForm,
}

impl NewsAdmin {
    pub async fn load(&mut self, ctx: &PageContext) -> Outcome {
        load_into(ctx, &mut self.list, "news", ctx.client.news(None, None)).await
    }

    pub fn edit(&mut self, news: &NewsItem) {
        self.form = PublicationForm::from(news);
    }

    pub async fn submit(&mut self, ctx: &PageContext) -> Outcome {
        if let Err(outcome) = self.form.check(false) {
            return outcome;
        }

        let files = self.form.files.clone();
        let result = match self.form.editing {
            Some(id) => ctx.client.update_news(id, &self.form.input, files).await,
            None => ctx.client.create_news(&self.form.input, files).await,
        };
        let succeeded = matches!(&result, Ok(envelope) if envelope.success);
        let outcome = settle(ADMIN_LANG, "save news", result, Message::Saved);
        if !succeeded {
            return outcome;
        }

        self.form.reset();
        merge(outcome, self.load(ctx).await)
    }

    pub async fn delete(&mut self, ctx: &PageContext, id: i64) -> Outcome {
        let result = ctx.client.delete_news(id).await;
        let outcome = settle(ADMIN_LANG, "delete news", result, Message::Deleted);
        merge(outcome, self.load(ctx).await)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpportunitiesAdmin {
    pub list: ListPage<Opportunity>,
    pub form: PublicationForm,
}

impl OpportunitiesAdmin {
    pub async fn load(&mut self, ctx: &PageContext) -> Outcome {
        load_into(
            ctx,
            &mut self.list,
            "opportunities",
            ctx.client.opportunities(None, None),
        )
        .await
    }

    pub fn edit(&mut self, opportunity: &Opportunity) {
        self.form = PublicationForm::from(opportunity);
    }

    pub async fn submit(&mut self, ctx: &PageContext) -> Outcome {
        if let Err(outcome) = self.form.check(true) {
            return outcome;
        }

        let files = self.form.files.clone();
        let result = match self.form.editing {
            Some(id) => {
                ctx.client
                    .update_opportunity(id, &self.form.input, files)
                    .await
            }
            None => ctx.client.create_opportunity(&self.form.input, files).await,
        };
        let succeeded = matches!(&result, Ok(envelope) if envelope.success);
        let outcome = settle(ADMIN_LANG, "save opportunity", result, Message::Saved);
        if !succeeded {
            return outcome;
        }

        self.form.reset();
        merge(outcome, self.load(ctx).await)
    }

    pub async fn delete(&mut self, ctx: &PageContext, id: i64) -> Outcome {
        let result = ctx.client.delete_opportunity(id).await;
        let outcome = settle(ADMIN_LANG, "delete opportunity", result, Message::Deleted);
        merge(outcome, self.load(ctx).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Toast;

    #[test]
    fn test_news_form_requires_localized_fields() {
        let form = PublicationForm::default();
        let outcome = form.check(false).unwrap_err();
        assert_eq!(
            outcome.toast,
            Some(Toast::error("Please fill all required fields"))
        );
    }

    #[test]
    fn test_opportunity_form_requires_descriptions() {
        let mut form = PublicationForm::default();
        form.input.title_uz = "a".into();
        form.input.title_ru = "b".into();
        form.input.title_en = "c".into();
        form.input.content_uz = "d".into();
        form.input.content_ru = "e".into();
        form.input.content_en = "f".into();
        assert!(form.check(false).is_ok());
        assert!(form.check(true).is_err());
    }
}
