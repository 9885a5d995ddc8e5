use leptos::*;
use leptos_router::{A, use_location};

use crate::domain::logging::LogComponent;
use crate::domain::navigation::Route;
use crate::{log_info, log_warn};
use crate::presentation::components::Navbar;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    // Navbar and footer link to sections that have no page yet.
    match Route::from_path(&path) {
        Some(route) if !route.has_page() => {
            log_info!(LogComponent::Presentation("NotFound"), "{} is linked but has no page", route);
        }
        _ => {
            log_warn!(LogComponent::Presentation("NotFound"), "404: no route for {}", path);
        }
    }

    view! {
        <div class="page muted-bg">
            <Navbar/>
            <main class="not-found">
                <h1>"404"</h1>
                <p class="page-subtitle">"Oops! Page not found"</p>
                <A href=Route::Home.path() class="btn btn-blue">"Return to Home"</A>
            </main>
        </div>
    }
}
