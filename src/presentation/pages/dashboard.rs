use leptos::*;
use strum::IntoEnumIterator;

use crate::domain::chart::LineChart;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::HistoryWindow;
use crate::domain::market_data::catalog::{LIVE_QUOTES, NEWS, history_window};
use crate::log_debug;
use crate::presentation::components::{
    Card, CardContent, CardHeader, LineChartView, Navbar, TrendChange,
};

#[component]
pub fn MarketDashboardPage() -> impl IntoView {
    view! {
        <div class="page muted-bg">
            <Navbar/>
            <main class="page-main">
                <h1 class="page-title">"Market Dashboard"</h1>
                <p class="page-subtitle">"Real-time commodity market insights and analysis"</p>
                <LiveMarketTable/>
                <HistoricalTrends/>
                <MarketNews/>
            </main>
        </div>
    }
}

#[component]
fn LiveMarketTable() -> impl IntoView {
    let rows = LIVE_QUOTES
        .iter()
        .map(|quote| {
            view! {
                <tr>
                    <td style="font-weight: 500">{quote.name}</td>
                    <td>{quote.price.formatted()}</td>
                    <td><TrendChange change=quote.change/></td>
                    <td class="muted">{quote.unit}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section style="margin-bottom: 2rem">
            <h2 class="section-title">"▥ Live Market Data"</h2>
            <div style="overflow: auto">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Commodity"</th>
                            <th>"Price"</th>
                            <th>"24h Change"</th>
                            <th>"Unit"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </section>
    }
}

/// History chart with a 3/5/7 day window picker.
#[component]
fn HistoricalTrends() -> impl IntoView {
    let (window, set_window) = create_signal(HistoryWindow::default());
    let chart = Signal::derive(move || LineChart::from_history(history_window(window.get())));

    let picker = HistoryWindow::iter()
        .map(|option| {
            view! {
                <button
                    type="button"
                    class="btn btn-sm"
                    class:btn-blue=move || window.get() == option
                    class:btn-outline=move || window.get() != option
                    on:click=move |_| {
                        log_debug!(LogComponent::Presentation("Dashboard"), "history window {}", option);
                        set_window.set(option);
                    }
                >
                    {option.as_ref().to_string()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section style="margin-bottom: 2rem">
            <h2 class="section-title">"↗ Historical Price Trends"</h2>
            <Card>
                <CardHeader
                    title=Signal::derive(move || window.get().title())
                    description="Closing prices of the tracked commodities"
                >
                    <div class="window-picker">{picker}</div>
                </CardHeader>
                <CardContent>
                    <LineChartView chart=chart/>
                </CardContent>
            </Card>
        </section>
    }
}

#[component]
fn MarketNews() -> impl IntoView {
    view! {
        <section style="margin-bottom: 2rem">
            <h2 class="section-title">"🌐 Market News"</h2>
            <div class="grid">
                {NEWS
                    .iter()
                    .map(|news| {
                        view! {
                            <Card>
                                <CardContent>
                                    <h3 class="section-title" style="font-size: 1rem; margin: 0 0 0.25rem">
                                        {news.title}
                                    </h3>
                                    <div class="muted" style="margin-bottom: 0.5rem">
                                        <span style="font-weight: 500">{news.source}</span>
                                        " • "
                                        <span>{news.time}</span>
                                    </div>
                                    <p style="margin: 0">{news.snippet}</p>
                                </CardContent>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
