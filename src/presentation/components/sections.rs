use leptos::*;

use super::primitives::{Card, CardContent, TrendChange};
use crate::domain::market_data::catalog::{CATEGORIES, SNAPSHOT_QUOTES};
use crate::domain::navigation::{Navigator, Route};
use crate::infrastructure::BrowserNavigator;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1518183225770-6e68f0a558af?q=80&w=800&auto=format&fit=crop";

#[component]
pub fn Hero() -> impl IntoView {
    let navigator = store_value(BrowserNavigator::from_router());

    view! {
        <div class="container">
            <div class="hero">
                <div class="hero-copy">
                    <h1 class="hero-title">"The Global Commodities Exchange Platform"</h1>
                    <p class="hero-text">
                        "Discover opportunities in raw materials and agricultural products with real-time data, "
                        "advanced analytics, and a community of professional traders."
                    </p>
                    <div class="hero-actions">
                        <button
                            type="button"
                            class="btn btn-lg btn-gold"
                            on:click=move |_| navigator.with_value(|n| n.navigate(Route::Trading))
                        >
                            "Start Trading Now"
                        </button>
                        <button
                            type="button"
                            class="btn btn-lg btn-outline-blue"
                            on:click=move |_| navigator.with_value(|n| n.navigate(Route::Dashboard))
                        >
                            "Explore Markets"
                        </button>
                    </div>
                </div>
                <div class="hero-image">
                    <img src=HERO_IMAGE alt="Commodity trading visualization"/>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn CommoditiesOverview() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="section-intro">
                    <h2>"What Are Commodities?"</h2>
                    <p>
                        "Commodities are raw materials or primary agricultural products that can be bought, sold, or traded. "
                        "These physical goods form the foundation of the global economy and are essential inputs for products we use every day."
                    </p>
                </div>
                <div class="grid grid-4">
                    {CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <Card class="category-card">
                                    <CardContent>
                                        <div class=category.icon.css_class()>{category.icon.glyph()}</div>
                                        <h3 class="section-title" style="justify-content: center">
                                            {category.title}
                                        </h3>
                                        <p class="muted">{category.description}</p>
                                    </CardContent>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn MarketSnapshot() -> impl IntoView {
    view! {
        <section class="section muted-bg">
            <div class="container">
                <div class="section-intro" style="margin-bottom: 2rem">
                    <h2>"Quick Market Snapshot"</h2>
                    <p>
                        "Track real-time commodity prices and market trends across major categories including energy, metals, and agricultural products."
                    </p>
                </div>
                <div class="grid grid-3">
                    {SNAPSHOT_QUOTES
                        .iter()
                        .map(|quote| {
                            view! {
                                <Card class="quote-card">
                                    <div class="card-header">
                                        <h3 class="card-title">{quote.name}</h3>
                                    </div>
                                    <CardContent>
                                        <div class="quote-body">
                                            <div>
                                                <p class="quote-price">{quote.price.formatted()}</p>
                                                <p class="muted">{quote.unit}</p>
                                            </div>
                                            <TrendChange change=quote.change/>
                                        </div>
                                    </CardContent>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
