use crate::domain::ai_trading::ForecastPoint;
use crate::domain::market_data::{Commodity, HistoricalPoint};

/// Stroke style of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: u8,
    pub dash: Option<&'static str>,
    pub dots: bool,
}

impl LineStyle {
    pub const fn solid(color: &'static str) -> Self {
        Self { color, width: 2, dash: None, dots: true }
    }

    pub const fn dashed(color: &'static str, dash: &'static str) -> Self {
        Self { color, width: 2, dash: Some(dash), dots: true }
    }

    pub const fn band(color: &'static str) -> Self {
        Self { color, width: 1, dash: Some("3 3"), dots: false }
    }
}

/// Domain entity - one named line
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub style: LineStyle,
    pub values: Vec<Option<f64>>,
}

impl ChartSeries {
    pub fn new(name: &'static str, style: LineStyle, values: Vec<Option<f64>>) -> Self {
        Self { name, style, values }
    }
}

/// Domain entity - series sharing one x axis
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChart {
    pub labels: Vec<&'static str>,
    pub series: Vec<ChartSeries>,
}

impl LineChart {
    pub fn new(labels: Vec<&'static str>) -> Self {
        Self { labels, series: Vec::new() }
    }

    pub fn with_series(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }

    pub fn point_count(&self) -> usize {
        self.labels.len()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(|s| s.values.iter().flatten().copied())
    }

    /// Dashboard history: one line per tracked commodity.
    pub fn from_history(points: &[HistoricalPoint]) -> Self {
        let labels = points.iter().map(|p| p.label).collect();
        let line = |name: &'static str, color: &'static str, commodity: Commodity| {
            ChartSeries::new(
                name,
                LineStyle::solid(color),
                points.iter().map(|p| Some(p.value_for(commodity))).collect(),
            )
        };
        Self::new(labels)
            .with_series(line("Gold", "#F59E0B", Commodity::Gold))
            .with_series(line("Oil", "#374151", Commodity::Oil))
            .with_series(line("Silver", "#94A3B8", Commodity::Silver))
            .with_series(line("Copper", "#B45309", Commodity::Copper))
    }

    /// AI forecast: actual, predicted and the min/max band.
    pub fn from_forecast(points: &[ForecastPoint]) -> Self {
        let labels = points.iter().map(|p| p.date).collect();
        let pick = |f: fn(&ForecastPoint) -> Option<f64>| -> Vec<Option<f64>> {
            points.iter().map(f).collect()
        };
        Self::new(labels)
            .with_series(ChartSeries::new("Actual", LineStyle::solid("#1a365d"), pick(|p| p.actual)))
            .with_series(ChartSeries::new(
                "Predicted",
                LineStyle::dashed("#c99a28", "5 5"),
                pick(|p| Some(p.predicted)),
            ))
            .with_series(ChartSeries::new("Min Range", LineStyle::band("#94a3b8"), pick(|p| Some(p.min))))
            .with_series(ChartSeries::new("Max Range", LineStyle::band("#64748b"), pick(|p| Some(p.max))))
    }
}
