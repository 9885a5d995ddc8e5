use gloo_timers::future::TimeoutFuture;
use leptos_router::NavigateOptions;
use std::rc::Rc;
use std::time::Duration;

use crate::domain::logging::LogComponent;
use crate::domain::navigation::{Navigator, Route};
use crate::log_debug;

/// [`Navigator`] on top of the router's navigate function. Must be built
/// inside the `<Router>` tree.
#[derive(Clone)]
pub struct BrowserNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl BrowserNavigator {
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self { navigate: Rc::new(navigate) }
    }

    /// Navigator bound to the router in the current reactive scope
    pub fn from_router() -> Self {
        Self::new(leptos_router::use_navigate())
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: Route) {
        log_debug!(LogComponent::Infrastructure("Navigator"), "navigate {}", route);
        (self.navigate)(&route.path(), NavigateOptions::default());
    }

    fn navigate_after(&self, route: Route, delay: Duration) {
        let this = self.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(millis).await;
            this.navigate(route);
        });
    }
}
