pub use super::value_objects::{ChangePercent, Commodity, Price};
use serde::Serialize;

/// Domain entity - one row of a price board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommodityQuote {
    pub name: &'static str,
    pub price: Price,
    pub change: ChangePercent,
    pub unit: &'static str,
}

impl CommodityQuote {
    pub const fn new(name: &'static str, price: f64, change: f64, unit: &'static str) -> Self {
        Self { name, price: Price(price), change: ChangePercent(change), unit }
    }
}

/// Closing prices of the four tracked commodities on one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoricalPoint {
    pub label: &'static str,
    pub gold: f64,
    pub oil: f64,
    pub silver: f64,
    pub copper: f64,
}

impl HistoricalPoint {
    pub fn value_for(&self, commodity: Commodity) -> f64 {
        match commodity {
            Commodity::Gold => self.gold,
            Commodity::Oil => self.oil,
            Commodity::Silver => self.silver,
            Commodity::Copper => self.copper,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: &'static str,
    pub source: &'static str,
    pub time: &'static str,
    pub snippet: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryIcon {
    Droplets,
    Wheat,
    Diamond,
    Leaf,
}

impl CategoryIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryIcon::Droplets => "💧",
            CategoryIcon::Wheat => "🌾",
            CategoryIcon::Diamond => "💎",
            CategoryIcon::Leaf => "🍃",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CategoryIcon::Droplets => "icon text-blue-500",
            CategoryIcon::Wheat => "icon text-amber-500",
            CategoryIcon::Diamond => "icon text-gray-500",
            CategoryIcon::Leaf => "icon text-green-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommodityCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: CategoryIcon,
}
