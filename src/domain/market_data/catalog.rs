//! Hard-coded market tables. Nothing here is fetched.

use super::entities::{CategoryIcon, CommodityCategory, CommodityQuote, HistoricalPoint, NewsItem};
use super::value_objects::HistoryWindow;

/// Landing page snapshot.
pub static SNAPSHOT_QUOTES: [CommodityQuote; 6] = [
    CommodityQuote::new("Gold", 2011.25, 0.4, "USD/oz"),
    CommodityQuote::new("Crude Oil (WTI)", 78.42, -0.85, "USD/bbl"),
    CommodityQuote::new("Silver", 23.76, 0.2, "USD/oz"),
    CommodityQuote::new("Copper", 4.05, -0.3, "USD/lb"),
    CommodityQuote::new("Natural Gas", 2.48, 1.2, "USD/MMBtu"),
    CommodityQuote::new("Wheat", 603.25, 0.75, "USc/bu"),
];

/// Dashboard board: the snapshot plus two soft commodities.
pub static LIVE_QUOTES: [CommodityQuote; 8] = [
    CommodityQuote::new("Gold", 2011.25, 0.4, "USD/oz"),
    CommodityQuote::new("Crude Oil (WTI)", 78.42, -0.85, "USD/bbl"),
    CommodityQuote::new("Silver", 23.76, 0.2, "USD/oz"),
    CommodityQuote::new("Copper", 4.05, -0.3, "USD/lb"),
    CommodityQuote::new("Natural Gas", 2.48, 1.2, "USD/MMBtu"),
    CommodityQuote::new("Wheat", 603.25, 0.75, "USc/bu"),
    CommodityQuote::new("Coffee", 247.35, 2.1, "USc/lb"),
    CommodityQuote::new("Soybeans", 1204.50, -0.45, "USc/bu"),
];

pub static PRICE_HISTORY: [HistoricalPoint; 7] = [
    HistoricalPoint { label: "Day 1", gold: 2005.40, oil: 79.10, silver: 23.55, copper: 4.10 },
    HistoricalPoint { label: "Day 2", gold: 2008.75, oil: 78.85, silver: 23.62, copper: 4.08 },
    HistoricalPoint { label: "Day 3", gold: 2010.20, oil: 78.60, silver: 23.70, copper: 4.07 },
    HistoricalPoint { label: "Day 4", gold: 2007.50, oil: 78.40, silver: 23.65, copper: 4.06 },
    HistoricalPoint { label: "Day 5", gold: 2009.80, oil: 78.75, silver: 23.72, copper: 4.04 },
    HistoricalPoint { label: "Day 6", gold: 2010.90, oil: 78.30, silver: 23.75, copper: 4.02 },
    HistoricalPoint { label: "Day 7", gold: 2011.25, oil: 78.42, silver: 23.76, copper: 4.05 },
];

pub static NEWS: [NewsItem; 4] = [
    NewsItem {
        id: 1,
        title: "Gold prices hit new record high amid global economic uncertainty",
        source: "Financial Times",
        time: "2 hours ago",
        snippet: "Gold prices surged to a record high today as investors seek safe-haven assets amid growing concerns about global economic stability.",
    },
    NewsItem {
        id: 2,
        title: "Oil prices drop on increased US production reports",
        source: "Reuters",
        time: "4 hours ago",
        snippet: "Crude oil prices fell by nearly 1% following reports of increased production in US shale regions and higher than expected inventory levels.",
    },
    NewsItem {
        id: 3,
        title: "Agricultural commodities rally on adverse weather forecasts",
        source: "Bloomberg",
        time: "6 hours ago",
        snippet: "Wheat, corn and soybean futures rallied as weather forecasts predicted drier conditions in key growing regions, potentially impacting crop yields.",
    },
    NewsItem {
        id: 4,
        title: "Copper demand expected to surge with EV market growth",
        source: "Commodity Insider",
        time: "9 hours ago",
        snippet: "Analysis suggests copper demand could double by 2035 due to electric vehicle manufacturing and renewable energy infrastructure needs.",
    },
];

pub static CATEGORIES: [CommodityCategory; 4] = [
    CommodityCategory {
        title: "Energy",
        description: "Crude oil, natural gas, gasoline, and other fuels that power global economies.",
        icon: CategoryIcon::Droplets,
    },
    CommodityCategory {
        title: "Agriculture",
        description: "Wheat, corn, soybeans, coffee, and other food and fiber products essential for daily life.",
        icon: CategoryIcon::Wheat,
    },
    CommodityCategory {
        title: "Metals",
        description: "Gold, silver, copper, and other metals used in industries, technology, and as stores of value.",
        icon: CategoryIcon::Diamond,
    },
    CommodityCategory {
        title: "Environmental",
        description: "Carbon credits, renewable energy certificates, and other sustainability-focused commodities.",
        icon: CategoryIcon::Leaf,
    },
];

/// Trailing slice of the history for the selected window.
pub fn history_window(window: HistoryWindow) -> &'static [HistoricalPoint] {
    let days = window.days().min(PRICE_HISTORY.len());
    &PRICE_HISTORY[PRICE_HISTORY.len() - days..]
}
