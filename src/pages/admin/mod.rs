//! Admin back-office screens.
//!
//! The panel is English-only. List loads that fail because the session is
//! missing or rejected send the admin back to `/admin/login`.

pub mod catalog;
pub mod dashboard;
pub mod feedback;
pub mod media;
pub mod publications;
pub mod users;

use std::future::Future;

use tracing::{error, warn};

use super::search::{ListPage, Searchable};
use super::{LoadState, Outcome, PageContext, Toast};
use crate::error::ApiError;
use crate::models::{Language, ListEnvelope, Message};
use crate::routes::Route;

pub const ADMIN_LANG: Language = Language::En;

fn session_expired() -> Outcome {
    Outcome::toast(Toast::error(Message::SessionExpired.text(ADMIN_LANG)))
        .and_redirect(Route::AdminLogin)
}

/// Loads a list into `page`, keeping the current search query.
pub(crate) async fn load_into<T, F>(
    ctx: &PageContext,
    page: &mut ListPage<T>,
    what: &'static str,
    call: F,
) -> Outcome
where
    T: Searchable,
    F: Future<Output = Result<ListEnvelope<T>, ApiError>>,
{
    if !ctx.client.is_authenticated() {
        page.state = LoadState::Failed("not authenticated".into());
        return Outcome::redirect(Route::AdminLogin);
    }

    match call.await {
        Ok(envelope) if envelope.success => {
            page.state = LoadState::Loaded(envelope.items());
            Outcome::none()
        }
        Ok(envelope) if envelope.is_unauthorized() => {
            warn!(what, "admin session rejected");
            page.state = LoadState::Failed("unauthorized".into());
            session_expired()
        }
        Ok(envelope) => {
            let message = envelope.message_or(Message::GenericError.text(ADMIN_LANG));
            page.state = LoadState::Failed(message.clone());
            Outcome::toast(Toast::error(message))
        }
        Err(err) if err.is_unauthorized() => {
            warn!(what, error = %err, "admin session rejected");
            page.state = LoadState::Failed("unauthorized".into());
            session_expired()
        }
        Err(err) => {
            error!(what, error = %err, "failed to load admin list");
            page.state = LoadState::Failed(err.to_string());
            Outcome::toast(Toast::error(Message::GenericError.text(ADMIN_LANG)))
        }
    }
}

/// Rejects with "Please fill all required fields" when any value is blank.
pub(crate) fn require<'a>(values: impl IntoIterator<Item = &'a str>) -> Result<(), Outcome> {
    crate::validation::require_all(values)
        .map_err(|msg| Outcome::toast(Toast::error(msg.text(ADMIN_LANG))))
}

/// The first outcome carries the mutation's toast; a reload failure overrides it.
pub(crate) fn merge(mutation: Outcome, reload: Outcome) -> Outcome {
    if reload.redirect.is_some() || reload.toast.is_some() {
        reload
    } else {
        mutation
    }
}
