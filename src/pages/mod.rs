//! Page controllers.
//!
//! Each screen keeps its form state and loaded lists, validates input before
//! touching the network, and reports back through an [`Outcome`]: an optional
//! toast and an optional redirect.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod enrollment;
pub mod feedback;
pub mod home;
pub mod search;

use std::sync::Arc;

use tracing::error;

use crate::accessor::DataAccessor;
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Envelope, Language, Message};
use crate::routes::Route;

/// Handles every page needs: the shared client, the accessor and the active language.
#[derive(Clone)]
pub struct PageContext {
    pub client: Arc<ApiClient>,
    pub data: DataAccessor,
    pub lang: Language,
}

impl PageContext {
    pub fn new(client: Arc<ApiClient>, lang: Language) -> Self {
        Self {
            data: DataAccessor::new(client.clone()),
            client,
            lang,
        }
    }

    pub fn text(&self, message: Message) -> &'static str {
        message.text(self.lang)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Info,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub toast: Option<Toast>,
    pub redirect: Option<Route>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn toast(toast: Toast) -> Self {
        Self {
            toast: Some(toast),
            redirect: None,
        }
    }

    pub fn redirect(route: Route) -> Self {
        Self {
            toast: None,
            redirect: Some(route),
        }
    }

    pub fn and_redirect(mut self, route: Route) -> Self {
        self.redirect = Some(route);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Toast for a thrown transport/parse failure.
pub(crate) fn failure(lang: Language, action: &'static str, err: &ApiError) -> Outcome {
    error!(action, error = %err, "request failed");
    Outcome::toast(Toast::error(Message::GenericError.text(lang)))
}

/// Success toast, or the backend's message verbatim with a localized fallback.
pub(crate) fn settle<T>(
    lang: Language,
    action: &'static str,
    result: Result<Envelope<T>, ApiError>,
    on_success: Message,
) -> Outcome {
    match result {
        Ok(envelope) if envelope.success => Outcome::toast(Toast::success(on_success.text(lang))),
        Ok(envelope) => Outcome::toast(Toast::error(
            envelope.message_or(Message::GenericError.text(lang)),
        )),
        Err(err) => failure(lang, action, &err),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_settle_uses_backend_message() {
        let envelope: Envelope =
            serde_json::from_value(json!({"success": false, "message": "Already exists"})).unwrap();
        let outcome = settle(Language::En, "create", Ok(envelope), Message::Saved);
        assert_eq!(outcome.toast, Some(Toast::error("Already exists")));
    }

    #[test]
    fn test_settle_falls_back_to_localized_text() {
        let envelope: Envelope = serde_json::from_value(json!({"success": false})).unwrap();
        let outcome = settle(Language::Ru, "create", Ok(envelope), Message::Saved);
        assert_eq!(
            outcome.toast,
            Some(Toast::error(Message::GenericError.text(Language::Ru)))
        );
    }
}
