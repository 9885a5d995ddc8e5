use super::entities::{ChartSeries, LineChart};
use super::value_objects::{PlotArea, ValueRange};

/// Padding added above and below the data on the value axis
pub const VALUE_PADDING: f64 = 0.1;
pub const Y_TICKS: usize = 5;

/// Screen-space geometry of one series
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedSeries {
    /// Unbroken runs of points; a missing value ends a run.
    pub segments: Vec<Vec<(f64, f64)>>,
}

impl ProjectedSeries {
    /// `M x y L x y ...` for every segment
    pub fn path_data(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            for (i, (x, y)) in segment.iter().enumerate() {
                if !out.is_empty() {
                    out.push(' ');
                }
                let cmd = if i == 0 { 'M' } else { 'L' };
                out.push_str(&format!("{}{:.1} {:.1}", cmd, x, y));
            }
        }
        out
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.segments.iter().flatten().copied()
    }
}

/// Y-axis tick: screen y and label
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

/// Everything the SVG renderer needs, already in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub area: PlotArea,
    pub range: ValueRange,
    pub series: Vec<ProjectedSeries>,
    pub y_ticks: Vec<AxisTick>,
    pub x_labels: Vec<(f64, &'static str)>,
}

/// Domain service: turns a chart into pixel geometry.
pub struct ChartProjectionService;

impl ChartProjectionService {
    /// `None` when the chart has no values at all.
    pub fn layout(chart: &LineChart, area: PlotArea) -> Option<ChartLayout> {
        let range = ValueRange::fit(chart.values(), VALUE_PADDING)?;
        let count = chart.point_count();
        let series = chart.series.iter().map(|s| Self::project(s, count, &range, &area)).collect();
        let y_ticks = range
            .ticks(Y_TICKS)
            .into_iter()
            .map(|v| AxisTick { y: area.y_at(v, &range), label: format_tick(v) })
            .collect();
        let x_labels =
            chart.labels.iter().enumerate().map(|(i, l)| (area.x_at(i, count), *l)).collect();
        Some(ChartLayout { area, range, series, y_ticks, x_labels })
    }

    pub fn project(
        series: &ChartSeries,
        count: usize,
        range: &ValueRange,
        area: &PlotArea,
    ) -> ProjectedSeries {
        let mut segments = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for (i, value) in series.values.iter().enumerate().take(count) {
            match value {
                Some(v) => current.push((area.x_at(i, count), area.y_at(*v, range))),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        ProjectedSeries { segments }
    }
}

/// Fewer decimals for larger magnitudes
pub fn format_tick(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1000.0 {
        format!("{:.0}", value)
    } else if abs >= 10.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}
