use leptos::*;
use leptos_router::{Route, Router, Routes};

use crate::config::AppConfig;
use crate::presentation::components::Toaster;
use crate::presentation::pages::{
    AiTradingPage, AuthenticationPage, IndexPage, MarketDashboardPage, NotFoundPage,
};
use crate::presentation::styles::APP_STYLES;

/// Root component: stylesheet, config context, routes and the toast stack.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <style>{APP_STYLES}</style>
        <Router>
            <Routes>
                <Route path="/" view=IndexPage/>
                <Route path="/dashboard" view=MarketDashboardPage/>
                <Route path="/trading" view=AiTradingPage/>
                <Route path="/auth" view=AuthenticationPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
