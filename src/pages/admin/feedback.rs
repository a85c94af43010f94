use super::{ADMIN_LANG, load_into, merge};
use crate::models::{Feedback, Language, Message};
use crate::pages::search::ListPage;
use crate::pages::{Outcome, PageContext, settle};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApprovalFilter {
    #[default]
    All,
    Approved,
    Pending,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackAdmin {
    pub list: ListPage<Feedback>,
    pub filter: ApprovalFilter,
}

impl FeedbackAdmin {
    pub async fn load(&mut self, ctx: &PageContext) -> Outcome {
        load_into(ctx, &mut self.list, "feedback", ctx.client.feedback()).await
    }

    pub fn visible(&self) -> Vec<&Feedback> {
        self.list
            .visible(Language::En)
            .into_iter()
            .filter(|f| match self.filter {
                ApprovalFilter::All => true,
                ApprovalFilter::Approved => f.is_approved,
                ApprovalFilter::Pending => !f.is_approved,
            })
            .collect()
    }

    pub fn pending_count(&self) -> usize {
        self.list.items().iter().filter(|f| !f.is_approved).count()
    }

    pub async fn set_approved(&mut self, ctx: &PageContext, id: i64, approved: bool) -> Outcome {
        let result = ctx.client.approve_feedback(id, approved).await;
        let outcome = settle(ADMIN_LANG, "approve feedback", result, Message::Saved);
        merge(outcome, self.load(ctx).await)
    }

    pub async fn delete(&mut self, ctx: &PageContext, id: i64) -> Outcome {
        let result = ctx.client.delete_feedback(id).await;
        let outcome = settle(ADMIN_LANG, "delete feedback", result, Message::Deleted);
        merge(outcome, self.load(ctx).await)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_approval_filter() {
        let items: Vec<Feedback> = serde_json::from_value(json!([
            {"id": 1, "name": "A", "is_approved": true, "created_at": "2025-01-01T10:00:00Z"},
            {"id": 2, "name": "B", "is_approved": false, "created_at": "2025-02-01T10:00:00Z"}
        ]))
        .unwrap();
        let mut page = FeedbackAdmin {
            list: ListPage::loaded(items),
            filter: ApprovalFilter::All,
        };
        let ids: Vec<_> = page.visible().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 1]);

        page.filter = ApprovalFilter::Pending;
        let ids: Vec<_> = page.visible().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(page.pending_count(), 1);
    }
}
