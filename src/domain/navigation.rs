use derive_more::Display;
use std::time::Duration;
use strum::{EnumIter, IntoEnumIterator};

/// Client-side routes reachable from the navbar, footer and auth flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Route {
    #[display(fmt = "/")]
    Home,
    #[display(fmt = "/dashboard")]
    Dashboard,
    #[display(fmt = "/trading")]
    Trading,
    #[display(fmt = "/analytics")]
    Analytics,
    #[display(fmt = "/community")]
    Community,
    #[display(fmt = "/auth")]
    Auth,
    #[display(fmt = "/auth?signup=true")]
    Signup,
    #[display(fmt = "/api")]
    MarketDataApi,
    #[display(fmt = "/research")]
    Research,
    #[display(fmt = "/about")]
    About,
    #[display(fmt = "/careers")]
    Careers,
    #[display(fmt = "/contact")]
    Contact,
    #[display(fmt = "/press")]
    Press,
    #[display(fmt = "/privacy")]
    Privacy,
    #[display(fmt = "/terms")]
    Terms,
    #[display(fmt = "/cookie")]
    Cookie,
    #[display(fmt = "/compliance")]
    Compliance,
}

impl Route {
    pub fn path(&self) -> String {
        self.to_string()
    }

    /// Routes that render a real page; everything else lands on not-found.
    pub fn has_page(&self) -> bool {
        matches!(self, Route::Home | Route::Dashboard | Route::Trading | Route::Auth | Route::Signup)
    }

    /// Reverse lookup, ignoring a trailing slash. The query string is
    /// only significant for the signup variant of `/auth`.
    pub fn from_path(path: &str) -> Option<Route> {
        let (base, query) = match path.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (path, None),
        };
        let base = if base.len() > 1 { base.trim_end_matches('/') } else { base };
        if base == "/auth" && query.is_some_and(|q| signup_requested(Some(q))) {
            return Some(Route::Signup);
        }
        Route::iter().filter(|r| *r != Route::Signup).find(|r| r.path() == base)
    }
}

/// True when a query string carries `signup=true`.
pub fn signup_requested(query: Option<&str>) -> bool {
    query
        .map(|q| q.trim_start_matches('?'))
        .is_some_and(|q| q.split('&').any(|pair| pair == "signup=true"))
}

/// Navigation seam between the application layer and the router.
pub trait Navigator {
    fn navigate(&self, route: Route);
    fn navigate_after(&self, route: Route, delay: Duration);
}
