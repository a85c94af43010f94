use std::fmt;

/// Every screen of the public site and the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    Gallery,
    Directions,
    Courses,
    News,
    Opportunities,
    Opportunity(i64),
    Team,
    AdminLogin,
    AdminDashboard,
    AdminUsers,
    AdminNews,
    AdminDirections,
    AdminCourses,
    AdminOpportunities,
    AdminGallery,
    AdminPartners,
    AdminFeedback,
    NotFound,
}

const STATIC_ROUTES: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/login", Route::Login),
    ("/register", Route::Register),
    ("/dashboard", Route::Dashboard),
    ("/gallery", Route::Gallery),
    ("/directions", Route::Directions),
    ("/courses", Route::Courses),
    ("/news", Route::News),
    ("/opportunities", Route::Opportunities),
    ("/team", Route::Team),
    ("/admin/login", Route::AdminLogin),
    ("/admin/dashboard", Route::AdminDashboard),
    ("/admin/users", Route::AdminUsers),
    ("/admin/news", Route::AdminNews),
    ("/admin/directions", Route::AdminDirections),
    ("/admin/courses", Route::AdminCourses),
    ("/admin/opportunities", Route::AdminOpportunities),
    ("/admin/gallery", Route::AdminGallery),
    ("/admin/partners", Route::AdminPartners),
    ("/admin/feedback", Route::AdminFeedback),
];

impl Route {
    /// Resolves a browser path; query string, fragment and trailing slash are ignored.
    pub fn resolve(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };

        if let Some((_, route)) = STATIC_ROUTES.iter().find(|(p, _)| *p == path) {
            return *route;
        }

        if let Some(id) = path.strip_prefix("/opportunities/")
            && id.bytes().all(|b| b.is_ascii_digit())
            && let Ok(id) = id.parse::<i64>()
        {
            return Route::Opportunity(id);
        }

        Route::NotFound
    }

    pub fn path(&self) -> String {
        match self {
            Route::Opportunity(id) => format!("/opportunities/{id}"),
            Route::NotFound => "/404".to_string(),
            other => STATIC_ROUTES
                .iter()
                .find(|(_, r)| r == other)
                .map(|(p, _)| p.to_string())
                .unwrap_or_else(|| "/".to_string()),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Route::AdminLogin
                | Route::AdminDashboard
                | Route::AdminUsers
                | Route::AdminNews
                | Route::AdminDirections
                | Route::AdminCourses
                | Route::AdminOpportunities
                | Route::AdminGallery
                | Route::AdminPartners
                | Route::AdminFeedback
        )
    }

    pub fn requires_auth(&self) -> bool {
        match self {
            Route::Dashboard => true,
            Route::AdminLogin => false,
            other => other.is_admin(),
        }
    }

    /// Where an unauthenticated visitor of this route is sent.
    pub fn login_route(&self) -> Route {
        if self.is_admin() {
            Route::AdminLogin
        } else {
            Route::Login
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_static_paths() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/news/"), Route::News);
        assert_eq!(Route::resolve("/admin/feedback?tab=pending"), Route::AdminFeedback);
    }

    #[test]
    fn test_resolve_opportunity_detail() {
        assert_eq!(Route::resolve("/opportunities/42"), Route::Opportunity(42));
        assert_eq!(Route::resolve("/opportunities/abc"), Route::NotFound);
        assert_eq!(Route::resolve("/opportunities/+7"), Route::NotFound);
        assert_eq!(Route::resolve("/opportunities/-3"), Route::NotFound);
    }

    #[test]
    fn test_unknown_paths_fall_back() {
        assert_eq!(Route::resolve("/admin"), Route::NotFound);
        assert_eq!(Route::resolve("/courses/1/edit"), Route::NotFound);
    }

    #[test]
    fn test_path_resolve_roundtrip() {
        let mut routes: Vec<Route> = STATIC_ROUTES.iter().map(|(_, r)| *r).collect();
        routes.push(Route::Opportunity(7));
        for route in routes {
            assert_eq!(Route::resolve(&route.path()), route, "{route:?}");
        }
    }

    #[test]
    fn test_auth_requirements() {
        assert!(Route::Dashboard.requires_auth());
        assert!(Route::AdminUsers.requires_auth());
        assert!(!Route::AdminLogin.requires_auth());
        assert!(!Route::News.requires_auth());
        assert_eq!(Route::AdminNews.login_route(), Route::AdminLogin);
        assert_eq!(Route::Dashboard.login_route(), Route::Login);
    }
}
