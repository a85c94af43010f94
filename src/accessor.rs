//! Read-side convenience layer for page controllers.
//!
//! Every getter swallows failures: public pages render an empty section
//! rather than an error when the backend misbehaves.

use std::future::Future;
use std::sync::Arc;

use tracing::{error, warn};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{
    Course, Direction, Envelope, Feedback, GalleryItem, ListEnvelope, NewsItem, Opportunity,
    Partner, User,
};

#[derive(Clone)]
pub struct DataAccessor {
    client: Arc<ApiClient>,
}

impl DataAccessor {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    async fn list<T, F>(what: &'static str, call: F) -> Vec<T>
    where
        F: Future<Output = Result<ListEnvelope<T>, ApiError>>,
    {
        match call.await {
            Ok(envelope) => {
                if !envelope.success {
                    warn!(what, message = ?envelope.message, "backend reported failure");
                }
                envelope.items()
            }
            Err(err) => {
                error!(what, error = %err, "failed to load list");
                Vec::new()
            }
        }
    }

    async fn one<T, F>(what: &'static str, call: F) -> Option<T>
    where
        F: Future<Output = Result<Envelope<T>, ApiError>>,
    {
        match call.await {
            Ok(envelope) if envelope.success => envelope.data,
            Ok(envelope) => {
                warn!(what, message = ?envelope.message, "backend reported failure");
                None
            }
            Err(err) => {
                error!(what, error = %err, "failed to load record");
                None
            }
        }
    }

    pub async fn get_directions(&self) -> Vec<Direction> {
        Self::list("directions", self.client.directions()).await
    }

    pub async fn get_courses(&self, direction_id: Option<i64>) -> Vec<Course> {
        Self::list("courses", self.client.courses(direction_id)).await
    }

    pub async fn get_news(&self, page: Option<u32>, limit: Option<u32>) -> Vec<NewsItem> {
        Self::list("news", self.client.news(page, limit)).await
    }

    pub async fn get_opportunities(&self, page: Option<u32>, limit: Option<u32>) -> Vec<Opportunity> {
        Self::list("opportunities", self.client.opportunities(page, limit)).await
    }

    pub async fn get_opportunity(&self, id: i64) -> Option<Opportunity> {
        Self::one("opportunity", self.client.opportunity(id)).await
    }

    pub async fn get_gallery(&self) -> Vec<GalleryItem> {
        Self::list("gallery", self.client.gallery()).await
    }

    pub async fn get_partners(&self) -> Vec<Partner> {
        Self::list("partners", self.client.partners()).await
    }

    pub async fn get_approved_feedback(&self) -> Vec<Feedback> {
        Self::list("approved feedback", self.client.approved_feedback()).await
    }

    pub async fn get_user_profile(&self) -> Option<User> {
        Self::one("user profile", self.client.profile()).await
    }
}
