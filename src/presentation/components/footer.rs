use leptos::*;
use leptos_router::A;

use crate::domain::navigation::Route;
use crate::time_utils::{copyright_line, current_year};

pub const FOOTER_COLUMNS: [(&str, [(&str, Route); 4]); 3] = [
    (
        "Products",
        [
            ("Trading Platform", Route::Trading),
            ("Analytics Tools", Route::Analytics),
            ("Market Data API", Route::MarketDataApi),
            ("Research Reports", Route::Research),
        ],
    ),
    (
        "Company",
        [
            ("About Us", Route::About),
            ("Careers", Route::Careers),
            ("Contact", Route::Contact),
            ("Press", Route::Press),
        ],
    ),
    (
        "Legal",
        [
            ("Privacy Policy", Route::Privacy),
            ("Terms of Service", Route::Terms),
            ("Cookie Policy", Route::Cookie),
            ("Compliance", Route::Compliance),
        ],
    ),
];

#[component]
pub fn Footer() -> impl IntoView {
    let columns = FOOTER_COLUMNS
        .iter()
        .map(|(heading, links)| {
            view! {
                <div>
                    <h3>{*heading}</h3>
                    <ul>
                        {links
                            .iter()
                            .map(|&(label, route)| view! { <li><A href=route.path()>{label}</A></li> })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="brand" style="color: #fff">"CommodityHub"</div>
                        <p>
                            "The premier platform for commodity trading, market insights, and professional networking."
                        </p>
                    </div>
                    {columns}
                </div>
                <p class="copyright">{copyright_line(current_year())}</p>
            </div>
        </footer>
    }
}
