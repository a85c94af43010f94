use super::{LoadState, Outcome, PageContext, Toast};
use crate::models::{Message, User};
use crate::routes::Route;

/// The signed-in user's own page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardPage {
    pub profile: LoadState<User>,
}

impl DashboardPage {
    pub async fn load(&mut self, ctx: &PageContext) -> Outcome {
        if !ctx.client.is_authenticated() {
            self.profile = LoadState::Failed("not authenticated".into());
            return Outcome::redirect(Route::Login);
        }

        match ctx.data.get_user_profile().await {
            Some(user) => {
                self.profile = LoadState::Loaded(user);
                Outcome::none()
            }
            None => {
                self.profile = LoadState::Failed("profile unavailable".into());
                Outcome::toast(Toast::info(ctx.text(Message::SessionExpired)))
                    .and_redirect(Route::Login)
            }
        }
    }

    pub fn logout(&mut self, ctx: &PageContext) -> Outcome {
        ctx.client.logout();
        self.profile = LoadState::Loading;
        Outcome::redirect(Route::Home)
    }
}
