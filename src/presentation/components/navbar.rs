use leptos::*;
use leptos_router::A;

use crate::config::AppConfig;
use crate::domain::logging::LogComponent;
use crate::domain::navigation::{Navigator, Route};
use crate::event_utils::use_is_mobile;
use crate::infrastructure::BrowserNavigator;
use crate::log_debug;

/// Links in the top bar, in display order
pub const NAV_ITEMS: [(&str, &str, Route); 4] = [
    ("Dashboard", "▦", Route::Dashboard),
    ("Trading", "↗", Route::Trading),
    ("Analytics", "▥", Route::Analytics),
    ("Community", "👥", Route::Community),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let is_mobile = use_is_mobile(&config);
    let (menu_open, set_menu_open) = create_signal(false);
    let navigator = store_value(BrowserNavigator::from_router());

    // A menu left open on a narrow screen must not pop up after a resize back.
    create_effect(move |_| {
        if !is_mobile.get() {
            set_menu_open.set(false);
        }
    });

    let toggle_menu = move |_: ev::MouseEvent| {
        set_menu_open.update(|open| *open = !*open);
        log_debug!(LogComponent::Presentation("Navbar"), "mobile menu open={}", menu_open.get_untracked());
    };

    let go_to = move |route: Route| {
        set_menu_open.set(false);
        navigator.with_value(|n| n.navigate(route));
    };
    let login = move |_: ev::MouseEvent| go_to(Route::Auth);
    let signup = move |_: ev::MouseEvent| go_to(Route::Signup);

    // Following any link in the mobile menu closes it.
    view! {
        <nav class="navbar">
            <div class="container navbar-row">
                <A href=Route::Home.path() class="brand">"CommodityHub"</A>
                <Show when=move || !is_mobile.get()>
                    <div class="nav-links">
                        <NavLinks/>
                        <button type="button" class="btn btn-outline-gold" on:click=login>
                            "→ Login"
                        </button>
                        <button type="button" class="btn btn-gold" on:click=signup>
                            "Sign Up"
                        </button>
                    </div>
                </Show>
                <Show when=move || is_mobile.get()>
                    <button
                        type="button"
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </Show>
            </div>
            <Show when=move || is_mobile.get() && menu_open.get()>
                <div class="mobile-menu" on:click=move |_| set_menu_open.set(false)>
                    <NavLinks/>
                    <div class="mobile-actions">
                        <button type="button" class="btn btn-block btn-outline-gold" on:click=login>
                            "→ Login"
                        </button>
                        <button type="button" class="btn btn-block btn-gold" on:click=signup>
                            "Sign Up"
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLinks() -> impl IntoView {
    NAV_ITEMS
        .iter()
        .map(|&(name, icon, route)| {
            view! {
                <A href=route.path() class="nav-link">
                    <span aria-hidden="true">{icon}</span>
                    {name}
                </A>
            }
        })
        .collect_view()
}
