use commodity_hub::domain::market_data::catalog::{
    CATEGORIES, LIVE_QUOTES, NEWS, PRICE_HISTORY, SNAPSHOT_QUOTES, history_window,
};
use commodity_hub::domain::market_data::{CommodityQuote, HistoryWindow, Trend};
use insta::{assert_json_snapshot, assert_snapshot};
use strum::IntoEnumIterator;

fn board(quotes: &[CommodityQuote]) -> String {
    quotes
        .iter()
        .map(|q| format!("{} {} {} {}", q.name, q.price.formatted(), q.unit, q.change.formatted()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_board() {
    assert_snapshot!(board(&SNAPSHOT_QUOTES), @r"
    Gold 2011.25 USD/oz +0.40%
    Crude Oil (WTI) 78.42 USD/bbl -0.85%
    Silver 23.76 USD/oz +0.20%
    Copper 4.05 USD/lb -0.30%
    Natural Gas 2.48 USD/MMBtu +1.20%
    Wheat 603.25 USc/bu +0.75%
    ");
}

#[test]
fn live_board_extends_snapshot() {
    assert_eq!(LIVE_QUOTES.len(), 8);
    assert_eq!(&LIVE_QUOTES[..6], &SNAPSHOT_QUOTES[..]);
    assert_eq!(board(&LIVE_QUOTES[6..]), "Coffee 247.35 USc/lb +2.10%\nSoybeans 1204.50 USc/bu -0.45%");
}

#[test]
fn quote_trends_follow_sign() {
    let down: Vec<&str> =
        LIVE_QUOTES.iter().filter(|q| q.change.trend() == Trend::Down).map(|q| q.name).collect();
    assert_eq!(down, vec!["Crude Oil (WTI)", "Copper", "Soybeans"]);
}

#[test]
fn history_windows_are_trailing_slices() {
    for window in HistoryWindow::iter() {
        let slice = history_window(window);
        assert_eq!(slice.len(), window.days());
        assert_eq!(slice.last().map(|p| p.label), Some("Day 7"));
    }
    assert_eq!(history_window(HistoryWindow::ThreeDays)[0].label, "Day 5");
    assert_eq!(HistoryWindow::default().title(), "7-Day Price Movement");
    assert_eq!(PRICE_HISTORY[6].gold, SNAPSHOT_QUOTES[0].price.value());
}

#[test]
fn news_feed_shape() {
    let ids: Vec<u32> = NEWS.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert!(NEWS.iter().all(|n| !n.title.is_empty() && !n.source.is_empty()));
}

#[test]
fn categories_json() {
    let titles: Vec<&str> = CATEGORIES.iter().map(|c| c.title).collect();
    assert_json_snapshot!(titles, @r#"
    [
      "Energy",
      "Agriculture",
      "Metals",
      "Environmental"
    ]
    "#);
}
