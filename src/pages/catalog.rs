//! Public listing pages.

use super::search::ListPage;
use super::{LoadState, Outcome, PageContext};
use crate::models::{Course, Direction, GalleryItem, NewsItem, Opportunity};
use crate::routes::Route;

/// Page/limit passed straight through to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page: u32,
    pub limit: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl Paging {
    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }
}

pub async fn load_directions(ctx: &PageContext) -> ListPage<Direction> {
    ListPage::loaded(ctx.data.get_directions().await)
}

pub async fn load_courses(ctx: &PageContext, direction_id: Option<i64>) -> ListPage<Course> {
    ListPage::loaded(ctx.data.get_courses(direction_id).await)
}

pub async fn load_news(ctx: &PageContext, paging: Paging) -> ListPage<NewsItem> {
    ListPage::loaded(
        ctx.data
            .get_news(Some(paging.page), Some(paging.limit))
            .await,
    )
}

pub async fn load_opportunities(ctx: &PageContext, paging: Paging) -> ListPage<Opportunity> {
    ListPage::loaded(
        ctx.data
            .get_opportunities(Some(paging.page), Some(paging.limit))
            .await,
    )
}

pub async fn load_gallery(ctx: &PageContext) -> ListPage<GalleryItem> {
    ListPage::loaded(ctx.data.get_gallery().await)
}

/// `/opportunities/:id`.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityDetail {
    pub id: i64,
    pub state: LoadState<Opportunity>,
}

impl OpportunityDetail {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            state: LoadState::Loading,
        }
    }

    /// A missing opportunity sends the visitor to the not-found page.
    pub async fn load(&mut self, ctx: &PageContext) -> Outcome {
        match ctx.data.get_opportunity(self.id).await {
            Some(opportunity) => {
                self.state = LoadState::Loaded(opportunity);
                Outcome::none()
            }
            None => {
                self.state = LoadState::Failed(format!("opportunity {} not found", self.id));
                Outcome::redirect(Route::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_bounds() {
        let paging = Paging::default();
        assert_eq!(paging.prev().page, 1);
        assert_eq!(paging.next().next().page, 3);
        assert_eq!(paging.next().prev(), paging);

        let last = Paging {
            page: u32::MAX,
            limit: 10,
        };
        assert_eq!(last.next().page, u32::MAX);
    }
}
