use leptos::*;

use crate::presentation::components::{CommoditiesOverview, Footer, Hero, MarketSnapshot, Navbar};

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <main style="flex-grow: 1">
                <Hero/>
                <CommoditiesOverview/>
                <MarketSnapshot/>
            </main>
            <Footer/>
        </div>
    }
}
