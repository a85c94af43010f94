use futures::join;

use super::{ADMIN_LANG, session_expired};
use crate::error::ApiError;
use crate::models::{ListEnvelope, Message};
use crate::pages::{LoadState, Outcome, PageContext, Toast};
use crate::routes::Route;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub users: u64,
    pub directions: u64,
    pub courses: u64,
    pub news: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminDashboard {
    pub stats: LoadState<Stats>,
}

/// Prefers the backend's `total`; falls back to counting the returned entries.
fn count<T>(result: Result<ListEnvelope<T>, ApiError>) -> Result<u64, bool> {
    match result {
        Ok(envelope) if envelope.success => Ok(match envelope.total {
            Some(total) => total,
            None => envelope.items().len() as u64,
        }),
        Ok(envelope) => Err(envelope.is_unauthorized()),
        Err(err) => Err(err.is_unauthorized()),
    }
}

impl AdminDashboard {
    pub async fn load(&mut self, ctx: &PageContext) -> Outcome {
        if !ctx.client.is_authenticated() {
            return Outcome::redirect(Route::AdminLogin);
        }

        let client = &ctx.client;
        let (users, directions, courses, news) = join!(
            client.users(None, None, None),
            client.directions(),
            client.courses(None),
            client.news(None, None)
        );

        match (count(users), count(directions), count(courses), count(news)) {
            (Ok(users), Ok(directions), Ok(courses), Ok(news)) => {
                self.stats = LoadState::Loaded(Stats {
                    users,
                    directions,
                    courses,
                    news,
                });
                Outcome::none()
            }
            results => {
                let unauthorized = [
                    results.0.err(),
                    results.1.err(),
                    results.2.err(),
                    results.3.err(),
                ]
                .into_iter()
                .flatten()
                .any(|unauthorized| unauthorized);
                self.stats = LoadState::Failed("statistics unavailable".into());
                if unauthorized {
                    session_expired()
                } else {
                    Outcome::toast(Toast::error(Message::GenericError.text(ADMIN_LANG)))
                }
            }
        }
    }
}
