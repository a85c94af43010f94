use super::{ADMIN_LANG, load_into, merge, require};
use crate::models::{Course, CourseInput, Direction, DirectionInput, Message};
use crate::pages::search::ListPage;
use crate::pages::{Outcome, PageContext, Toast, settle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionsAdmin {
    pub list: ListPage<Direction>,
    pub form: DirectionInput,
    pub editing: Option<i64>,
}

impl DirectionsAdmin {
    pub async fn load(&mut self, ctx: &PageContext) -> Outcome {
        load_into(ctx, &mut self.list, "directions", ctx.client.directions()).await
    }

    pub fn edit(&mut self, direction: &Direction) {
        self.editing = Some(direction.id);
        self.form = DirectionInput {
            title_uz: direction.title_uz.clone(),
            title_ru: direction.title_ru.clone(),
            title_en: direction.title_en.clone(),
            description_uz: direction.description_uz.clone(),
            description_ru: direction.description_ru.clone(),
            description_en: direction.description_en.clone(),
            end_date: direction.end_date,
        };
    }

    pub async fn submit(&mut self, ctx: &PageContext) -> Outcome {
        if let Err(outcome) = require([
            self.form.title_uz.as_str(),
            self.form.title_ru.as_str(),
            self.form.title_en.as_str(),
        ]) {
            return outcome;
        }

        let result = match self.editing {
            Some(id) => ctx.client.update_direction(id, &self.form).await,
            None => ctx.client.create_direction(&self.form).await,
        };
        let succeeded = matches!(&result, Ok(envelope) if envelope.success);
        let outcome = settle(ADMIN_LANG, "save direction", result, Message::Saved);
        if !succeeded {
            return outcome;
        }

        self.form = DirectionInput::default();
        self.editing = None;
        merge(outcome, self.load(ctx).await)
    }

    pub async fn delete(&mut self, ctx: &PageContext, id: i64) -> Outcome {
        let result = ctx.client.delete_direction(id).await;
        let outcome = settle(ADMIN_LANG, "delete direction", result, Message::Deleted);
        merge(outcome, self.load(ctx).await)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursesAdmin {
    pub list: ListPage<Course>,
    pub form: CourseInput,
    pub editing: Option<i64>,
    /// Narrows the table to one direction.
    pub direction_filter: Option<i64>,
}

impl CoursesAdmin {
    pub async fn load(&mut self, ctx: &PageContext) -> Outcome {
        load_into(
            ctx,
            &mut self.list,
            "courses",
            ctx.client.courses(self.direction_filter),
        )
        .await
    }

    pub fn edit(&mut self, course: &Course) {
        self.editing = Some(course.id);
        self.form = CourseInput {
            direction_id: course.direction_ref().unwrap_or_default(),
            title_uz: course.title_uz.clone(),
            title_ru: course.title_ru.clone(),
            title_en: course.title_en.clone(),
            description_uz: course.description_uz.clone(),
            description_ru: course.description_ru.clone(),
            description_en: course.description_en.clone(),
            start_date: course.start_date,
            end_date: course.end_date,
            hours: course.hours,
        };
    }

    pub async fn submit(&mut self, ctx: &PageContext) -> Outcome {
        if let Err(outcome) = require([
            self.form.title_uz.as_str(),
            self.form.title_ru.as_str(),
            self.form.title_en.as_str(),
        ]) {
            return outcome;
        }
        if self.form.direction_id <= 0 {
            return Outcome::toast(Toast::error(Message::SelectDirection.text(ADMIN_LANG)));
        }
        if let (Some(start), Some(end)) = (self.form.start_date, self.form.end_date)
            && end < start
        {
            return Outcome::toast(Toast::error("End date must not be before start date"));
        }

        let result = match self.editing {
            Some(id) => ctx.client.update_course(id, &self.form).await,
            None => ctx.client.create_course(&self.form).await,
        };
        let succeeded = matches!(&result, Ok(envelope) if envelope.success);
        let outcome = settle(ADMIN_LANG, "save course", result, Message::Saved);
        if !succeeded {
            return outcome;
        }

        self.form = CourseInput::default();
        self.editing = None;
        merge(outcome, self.load(ctx).await)
    }

    pub async fn delete(&mut self, ctx: &PageContext, id: i64) -> Outcome {
        let result = ctx.client.delete_course(id).await;
        let outcome = settle(ADMIN_LANG, "delete course", result, Message::Deleted);
        merge(outcome, self.load(ctx).await)
    }
}
