use super::{ADMIN_LANG, load_into, merge};
use crate::models::{Language, Message, User, UserStatus};
use crate::pages::search::ListPage;
use crate::pages::{Outcome, PageContext, settle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersAdmin {
    pub list: ListPage<User>,
    pub status_filter: Option<UserStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl UsersAdmin {
    pub async fn load(&mut self, ctx: &PageContext) -> Outcome {
        load_into(
            ctx,
            &mut self.list,
            "users",
            ctx.client.users(self.page, self.limit, None),
        )
        .await
    }

    /// Client-side search plus status filter over the loaded page.
    pub fn visible(&self) -> Vec<&User> {
        self.list
            .visible(Language::En)
            .into_iter()
            .filter(|u| self.status_filter.is_none_or(|s| u.status == Some(s)))
            .collect()
    }

    pub async fn set_status(&mut self, ctx: &PageContext, id: i64, status: UserStatus) -> Outcome {
        let result = ctx.client.update_user_status(id, status).await;
        let outcome = settle(ADMIN_LANG, "update user status", result, Message::Saved);
        merge(outcome, self.load(ctx).await)
    }

    pub async fn delete(&mut self, ctx: &PageContext, id: i64) -> Outcome {
        let result = ctx.client.delete_user(id).await;
        let outcome = settle(ADMIN_LANG, "delete user", result, Message::Deleted);
        merge(outcome, self.load(ctx).await)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_search_and_status_filter() {
        let users: Vec<User> = serde_json::from_value(json!([
            {"id": 1, "first_name": "Aziz", "last_name": "Karimov", "phone": "+998901111111", "status": "ACTIVE"},
            {"id": 2, "first_name": "Malika", "last_name": "Aliyeva", "phone": "+998902222222", "status": "ENROLLED"},
            {"id": 3, "first_name": "Bobur", "last_name": "Karimov", "phone": "+998903333333", "status": "PENDING"}
        ]))
        .unwrap();
        let mut page = UsersAdmin {
            list: ListPage::loaded(users),
            ..Default::default()
        };

        page.list.query = "karimov".into();
        let ids: Vec<_> = page.visible().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);

        page.status_filter = Some(UserStatus::Pending);
        let ids: Vec<_> = page.visible().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3]);

        page.list.query = "2222".into();
        page.status_filter = None;
        let ids: Vec<_> = page.visible().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
