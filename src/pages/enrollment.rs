use tracing::info;

use super::{Outcome, PageContext, Toast, failure};
use crate::models::{Course, Direction, EnrollRequest, Message};
use crate::routes::Route;

/// Course registration form: pick a direction, then one of its courses.
///
/// Selections are kept as the raw strings a `<select>` reports, so an
/// unselected field is `""`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseRegistration {
    pub selected_direction: String,
    pub selected_course: String,
    pub directions: Vec<Direction>,
    pub courses: Vec<Course>,
}

impl CourseRegistration {
    pub async fn load(&mut self, ctx: &PageContext) {
        self.directions = ctx.data.get_directions().await;
    }

    /// Switching direction reloads its courses and clears the course choice.
    pub async fn select_direction(&mut self, ctx: &PageContext, direction: &str) {
        self.selected_direction = direction.trim().to_string();
        self.selected_course.clear();
        self.courses = match self.selected_direction.parse::<i64>() {
            Ok(id) => ctx.data.get_courses(Some(id)).await,
            Err(_) => Vec::new(),
        };
    }

    fn validate(&self) -> Result<EnrollRequest, Message> {
        let direction_id = self
            .selected_direction
            .trim()
            .parse::<i64>()
            .map_err(|_| Message::SelectDirection)?;
        let course_id = self
            .selected_course
            .trim()
            .parse::<i64>()
            .map_err(|_| Message::SelectCourse)?;
        Ok(EnrollRequest {
            direction_id,
            course_id,
        })
    }

    pub async fn submit(&mut self, ctx: &PageContext) -> Outcome {
        let request = match self.validate() {
            Ok(request) => request,
            Err(msg) => return Outcome::toast(Toast::error(ctx.text(msg))),
        };

        if !ctx.client.is_authenticated() {
            return Outcome::toast(Toast::info(ctx.text(Message::SessionExpired)))
                .and_redirect(Route::Login);
        }

        match ctx.client.enroll(&request).await {
            Ok(envelope) if envelope.success => {
                info!(course_id = request.course_id, "enrolled");
                Outcome::toast(Toast::success(ctx.text(Message::EnrollSuccess)))
                    .and_redirect(Route::Dashboard)
            }
            Ok(envelope) if envelope.is_unauthorized() => {
                Outcome::toast(Toast::info(ctx.text(Message::SessionExpired)))
                    .and_redirect(Route::Login)
            }
            Ok(envelope) => Outcome::toast(Toast::error(
                envelope.message_or(ctx.text(Message::GenericError)),
            )),
            Err(err) => failure(ctx.lang, "enroll", &err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_selections() {
        let mut form = CourseRegistration::default();
        assert_eq!(form.validate(), Err(Message::SelectDirection));

        form.selected_direction = "3".into();
        assert_eq!(form.validate(), Err(Message::SelectCourse));

        form.selected_course = "7".into();
        assert_eq!(
            form.validate(),
            Ok(EnrollRequest {
                direction_id: 3,
                course_id: 7
            })
        );
    }
}
