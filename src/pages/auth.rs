use tracing::info;

use super::{Outcome, PageContext, Toast, failure};
use crate::models::{Envelope, Message, RegisterRequest};
use crate::routes::Route;
use crate::validation::{require_all, validate_code, validate_email, validate_phone};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginStep {
    #[default]
    Phone,
    Code,
}

/// Phone number first, then the texted verification code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginPage {
    pub phone: String,
    pub code: String,
    pub step: LoginStep,
}

impl LoginPage {
    pub async fn request_code(&mut self, ctx: &PageContext) -> Outcome {
        let phone = match validate_phone(&self.phone) {
            Ok(phone) => phone,
            Err(msg) => return Outcome::toast(Toast::error(ctx.text(msg))),
        };

        match ctx.client.login(&phone).await {
            Ok(envelope) if envelope.success => {
                self.phone = phone;
                self.step = LoginStep::Code;
                Outcome::toast(Toast::success(ctx.text(Message::CodeSent)))
            }
            Ok(envelope) => Outcome::toast(Toast::error(
                envelope.message_or(ctx.text(Message::GenericError)),
            )),
            Err(err) => failure(ctx.lang, "login", &err),
        }
    }

    /// The phone is normalized again so a session started straight at the
    /// code step sends the same number the code was texted to.
    pub async fn verify_code(&mut self, ctx: &PageContext) -> Outcome {
        let phone = match validate_phone(&self.phone) {
            Ok(phone) => phone,
            Err(msg) => return Outcome::toast(Toast::error(ctx.text(msg))),
        };
        let code = match validate_code(&self.code) {
            Ok(code) => code,
            Err(msg) => return Outcome::toast(Toast::error(ctx.text(msg))),
        };
        self.phone = phone;

        match ctx.client.verify_code(&self.phone, &code).await {
            Ok(envelope) if envelope.success => match envelope.token {
                Some(token) => {
                    ctx.client.set_token(token);
                    info!("user logged in");
                    Outcome::toast(Toast::success(ctx.text(Message::LoginSuccess)))
                        .and_redirect(Route::Dashboard)
                }
                None => Outcome::toast(Toast::error(ctx.text(Message::GenericError))),
            },
            Ok(envelope) => Outcome::toast(Toast::error(
                envelope.message_or(ctx.text(Message::InvalidCode)),
            )),
            Err(err) => failure(ctx.lang, "verify code", &err),
        }
    }

    /// Back to the phone step, e.g. to fix a mistyped number.
    pub fn restart(&mut self) {
        self.code.clear();
        self.step = LoginStep::Phone;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterPage {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub phone: String,
    pub email: String,
}

impl RegisterPage {
    fn validate(&self) -> Result<RegisterRequest, Message> {
        require_all([
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.phone.as_str(),
        ])?;
        let phone = validate_phone(&self.phone)?;
        let email = validate_email(&self.email)?;
        let middle_name = Some(self.middle_name.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Ok(RegisterRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            middle_name,
            phone,
            email,
        })
    }

    pub async fn submit(&mut self, ctx: &PageContext) -> Outcome {
        let request = match self.validate() {
            Ok(request) => request,
            Err(msg) => return Outcome::toast(Toast::error(ctx.text(msg))),
        };

        match ctx.client.register(&request).await {
            Ok(envelope) if envelope.success => {
                Outcome::toast(Toast::success(ctx.text(Message::RegisterSuccess)))
                    .and_redirect(Route::Login)
            }
            Ok(envelope) => Outcome::toast(Toast::error(
                envelope.message_or(ctx.text(Message::GenericError)),
            )),
            Err(err) => failure(ctx.lang, "register", &err),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminLoginPage {
    pub username: String,
    pub password: String,
}

impl AdminLoginPage {
    pub async fn submit(&mut self, ctx: &PageContext) -> Outcome {
        let lang = super::admin::ADMIN_LANG;
        if let Err(msg) = require_all([self.username.as_str(), self.password.as_str()]) {
            return Outcome::toast(Toast::error(msg.text(lang)));
        }

        let result = ctx
            .client
            .admin_login(self.username.trim(), &self.password)
            .await;
        match result {
            Ok(Envelope {
                success: true,
                token: Some(token),
                ..
            }) => {
                ctx.client.set_token(token);
                self.password.clear();
                info!(username = %self.username.trim(), "admin logged in");
                Outcome::toast(Toast::success(Message::LoginSuccess.text(lang)))
                    .and_redirect(Route::AdminDashboard)
            }
            Ok(envelope) => Outcome::toast(Toast::error(
                envelope.message_or("Invalid username or password"),
            )),
            Err(err) => failure(lang, "admin login", &err),
        }
    }
}
