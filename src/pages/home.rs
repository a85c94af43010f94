use futures::join;

use super::PageContext;
use crate::models::{Direction, Feedback, NewsItem, Partner};

const HOME_NEWS_LIMIT: u32 = 3;

/// Landing page sections, loaded together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomePage {
    pub directions: Vec<Direction>,
    pub news: Vec<NewsItem>,
    pub partners: Vec<Partner>,
    pub feedback: Vec<Feedback>,
}

impl HomePage {
    pub async fn load(ctx: &PageContext) -> Self {
        let (directions, news, partners, feedback) = join!(
            ctx.data.get_directions(),
            ctx.data.get_news(Some(1), Some(HOME_NEWS_LIMIT)),
            ctx.data.get_partners(),
            ctx.data.get_approved_feedback()
        );
        Self {
            directions,
            news,
            partners,
            feedback,
        }
    }

    /// Mean rating of approved feedback, if any.
    pub fn average_rating(&self) -> Option<f32> {
        if self.feedback.is_empty() {
            return None;
        }
        let total: u32 = self.feedback.iter().map(|f| u32::from(f.rating)).sum();
        Some(total as f32 / self.feedback.len() as f32)
    }
}
