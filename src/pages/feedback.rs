use super::{Outcome, PageContext, Toast, failure};
use crate::models::{FeedbackInput, Message};
use crate::validation::{require_all, validate_email, validate_phone, validate_rating};

/// Public "leave a review" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    pub name: String,
    pub workplace: String,
    pub phone: String,
    pub email: String,
    pub rating: u8,
    pub message: String,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            workplace: String::new(),
            phone: String::new(),
            email: String::new(),
            rating: 5,
            message: String::new(),
        }
    }
}

impl FeedbackForm {
    fn validate(&self) -> Result<FeedbackInput, Message> {
        require_all([
            self.name.as_str(),
            self.phone.as_str(),
            self.message.as_str(),
        ])?;
        let rating = validate_rating(self.rating)?;
        let phone = validate_phone(&self.phone)?;
        let email = validate_email(&self.email)?;
        Ok(FeedbackInput {
            name: self.name.trim().to_string(),
            workplace: self.workplace.trim().to_string(),
            phone,
            email,
            rating,
            message: self.message.trim().to_string(),
        })
    }

    /// Clears the form once the backend accepts it.
    pub async fn submit(&mut self, ctx: &PageContext) -> Outcome {
        let input = match self.validate() {
            Ok(input) => input,
            Err(msg) => return Outcome::toast(Toast::error(ctx.text(msg))),
        };

        match ctx.client.submit_feedback(&input).await {
            Ok(envelope) if envelope.success => {
                *self = Self::default();
                Outcome::toast(Toast::success(ctx.text(Message::FeedbackSent)))
            }
            Ok(envelope) => Outcome::toast(Toast::error(
                envelope.message_or(ctx.text(Message::GenericError)),
            )),
            Err(err) => failure(ctx.lang, "submit feedback", &err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_validation() {
        let mut form = FeedbackForm {
            name: "Dilnoza".into(),
            phone: "+998 93 111 22 33".into(),
            message: "Ajoyib kurs".into(),
            ..Default::default()
        };
        let input = form.validate().unwrap();
        assert_eq!(input.rating, 5);
        assert_eq!(input.phone, "+998931112233");

        form.rating = 0;
        assert_eq!(form.validate(), Err(Message::InvalidRating));

        form.rating = 4;
        form.message = "   ".into();
        assert_eq!(form.validate(), Err(Message::FillRequiredFields));
    }
}
