use serde::Serialize;
use strum::IntoEnumIterator;

use crate::domain::logging::LogComponent;
use crate::domain::market_data::Commodity;
use crate::log_debug;

/// One day of a mock 7-day forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: &'static str,
    pub actual: Option<f64>,
    pub predicted: f64,
    pub min: f64,
    pub max: f64,
}

const fn today(price: f64) -> ForecastPoint {
    ForecastPoint { date: "Today", actual: Some(price), predicted: price, min: price, max: price }
}

const fn day(date: &'static str, predicted: f64, min: f64, max: f64) -> ForecastPoint {
    ForecastPoint { date, actual: None, predicted, min, max }
}

pub static GOLD_FORECAST: [ForecastPoint; 8] = [
    today(2011.25),
    day("Day 1", 2018.50, 2010.75, 2026.25),
    day("Day 2", 2025.75, 2012.80, 2038.70),
    day("Day 3", 2030.40, 2013.90, 2046.90),
    day("Day 4", 2036.80, 2016.20, 2057.40),
    day("Day 5", 2042.10, 2018.30, 2065.90),
    day("Day 6", 2047.65, 2019.85, 2075.45),
    day("Day 7", 2053.20, 2021.40, 2085.00),
];

pub static OIL_FORECAST: [ForecastPoint; 8] = [
    today(78.42),
    day("Day 1", 77.85, 76.90, 78.80),
    day("Day 2", 77.40, 76.20, 78.60),
    day("Day 3", 78.10, 76.80, 79.40),
    day("Day 4", 78.85, 77.35, 80.35),
    day("Day 5", 79.40, 77.65, 81.15),
    day("Day 6", 80.05, 78.05, 82.05),
    day("Day 7", 80.75, 78.50, 83.00),
];

pub static SILVER_FORECAST: [ForecastPoint; 8] = [
    today(23.76),
    day("Day 1", 23.95, 23.55, 24.35),
    day("Day 2", 24.10, 23.60, 24.60),
    day("Day 3", 24.25, 23.65, 24.85),
    day("Day 4", 24.45, 23.75, 25.15),
    day("Day 5", 24.70, 23.90, 25.50),
    day("Day 6", 24.95, 24.05, 25.85),
    day("Day 7", 25.20, 24.20, 26.20),
];

pub static COPPER_FORECAST: [ForecastPoint; 8] = [
    today(4.05),
    day("Day 1", 4.08, 4.02, 4.14),
    day("Day 2", 4.12, 4.04, 4.20),
    day("Day 3", 4.15, 4.05, 4.25),
    day("Day 4", 4.18, 4.06, 4.30),
    day("Day 5", 4.22, 4.08, 4.36),
    day("Day 6", 4.26, 4.10, 4.42),
    day("Day 7", 4.30, 4.12, 4.48),
];

/// Claimed accuracy shown under the targets (mock figure).
pub const HISTORICAL_ACCURACY_PCT: u8 = 78;

pub fn forecast_for(commodity: Commodity) -> &'static [ForecastPoint] {
    match commodity {
        Commodity::Gold => &GOLD_FORECAST,
        Commodity::Oil => &OIL_FORECAST,
        Commodity::Silver => &SILVER_FORECAST,
        Commodity::Copper => &COPPER_FORECAST,
    }
}

/// Price-target rows: label and the forecast day it reads.
pub const PREDICTION_HORIZONS: [(&str, usize); 3] = [("24 Hours", 1), ("3 Days", 3), ("7 Days", 7)];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTarget {
    pub horizon: &'static str,
    pub predicted: f64,
}

/// Forecast selector state: which commodity's table is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForecastPanel {
    selected: Commodity,
}

impl ForecastPanel {
    pub fn new(selected: Commodity) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> Commodity {
        self.selected
    }

    pub fn select(&mut self, commodity: Commodity) {
        log_debug!(LogComponent::Domain("Forecast"), "selected {}", commodity);
        self.selected = commodity;
    }

    /// Select by selector key; unknown keys keep the current choice.
    pub fn select_key(&mut self, key: &str) -> bool {
        match key.parse::<Commodity>() {
            Ok(commodity) => {
                self.select(commodity);
                true
            }
            Err(_) => false,
        }
    }

    pub fn series(&self) -> &'static [ForecastPoint] {
        forecast_for(self.selected)
    }

    pub fn targets(&self) -> Vec<PriceTarget> {
        let series = self.series();
        PREDICTION_HORIZONS
            .iter()
            .filter_map(|&(horizon, idx)| {
                series.get(idx).map(|p| PriceTarget { horizon, predicted: p.predicted })
            })
            .collect()
    }

    pub fn accuracy_note(&self) -> String {
        format!(
            "These predictions have a {}% historical accuracy rate for {}",
            HISTORICAL_ACCURACY_PCT, self.selected
        )
    }

    pub fn options() -> impl Iterator<Item = Commodity> {
        Commodity::iter()
    }
}

/// Shortest form, no forced trailing zeros (`2018.5`, `2053.2`).
pub fn format_target(value: f64) -> String {
    format!("{}", value)
}
